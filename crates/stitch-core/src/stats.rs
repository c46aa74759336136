//! # Stats Aggregator
//!
//! Read-only summary of the order list for the dashboard.
//!
//! ```text
//! orders ──► totals ──► size / packaging counts ──► 5 most recent
//! ```
//!
//! Breakdowns always carry every size and packaging key, zero-filled, so
//! the frontend never has to guard for missing entries.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Order, Packaging, Size};
use crate::RECENT_ORDERS_LIMIT;

/// Order count per size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SizeBreakdown {
    #[serde(rename = "M")]
    pub m: u64,
    #[serde(rename = "L")]
    pub l: u64,
    #[serde(rename = "XL")]
    pub xl: u64,
    #[serde(rename = "2XL")]
    pub xxl: u64,
}

impl SizeBreakdown {
    fn record(&mut self, size: Size) {
        match size {
            Size::M => self.m += 1,
            Size::L => self.l += 1,
            Size::XL => self.xl += 1,
            Size::XXL => self.xxl += 1,
        }
    }
}

/// Order count per packaging option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PackagingBreakdown {
    pub basic: u64,
    pub branded: u64,
    #[serde(rename = "box")]
    pub gift_box: u64,
}

impl PackagingBreakdown {
    fn record(&mut self, packaging: Packaging) {
        match packaging {
            Packaging::Basic => self.basic += 1,
            Packaging::Branded => self.branded += 1,
            Packaging::GiftBox => self.gift_box += 1,
        }
    }
}

/// Aggregate view over all orders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_orders: u64,
    #[ts(type = "number")]
    pub total_revenue: Money,
    pub size_breakdown: SizeBreakdown,
    pub packaging_breakdown: PackagingBreakdown,
    pub embroidery_count: u64,
    /// Newest first, at most [`RECENT_ORDERS_LIMIT`].
    pub recent_orders: Vec<Order>,
}

/// Computes stats over `orders` (insertion order, oldest first).
pub fn compute(orders: &[Order]) -> Stats {
    let mut size_breakdown = SizeBreakdown::default();
    let mut packaging_breakdown = PackagingBreakdown::default();
    let mut embroidery_count = 0;

    for order in orders {
        size_breakdown.record(order.size);
        packaging_breakdown.record(order.packaging);
        if order.embroidery {
            embroidery_count += 1;
        }
    }

    // Reverse first so the stable sort breaks timestamp ties newest-inserted first.
    let mut recent: Vec<&Order> = orders.iter().rev().collect();
    recent.sort_by(|a, b| b.recency_key().cmp(&a.recency_key()));

    Stats {
        total_orders: orders.len() as u64,
        total_revenue: orders.iter().map(|o| o.price).sum(),
        size_breakdown,
        packaging_breakdown,
        embroidery_count,
        recent_orders: recent
            .into_iter()
            .take(RECENT_ORDERS_LIMIT)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn order(n: i64, size: Size, packaging: Packaging, embroidery: bool, cents: i64) -> Order {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(n);
        Order {
            id: format!("order-{n}"),
            customer: format!("Customer {n}"),
            size,
            packaging,
            embroidery,
            price: Money::from_cents(cents),
            date: created.date_naive(),
            created_at: Some(created),
        }
    }

    #[test]
    fn test_empty() {
        let stats = compute(&[]);
        assert_eq!(stats.total_orders, 0);
        assert!(stats.total_revenue.is_zero());
        assert_eq!(stats.size_breakdown, SizeBreakdown::default());
        assert!(stats.recent_orders.is_empty());

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["sizeBreakdown"]["2XL"], 0);
        assert_eq!(json["packagingBreakdown"]["box"], 0);
    }

    #[test]
    fn test_totals_and_breakdowns() {
        let orders = vec![
            order(0, Size::M, Packaging::Basic, false, 4800),
            order(1, Size::L, Packaging::GiftBox, true, 7200),
            order(2, Size::L, Packaging::Branded, false, 5000),
        ];
        let stats = compute(&orders);

        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_revenue.cents(), 17000);
        assert_eq!(stats.size_breakdown.l, 2);
        assert_eq!(stats.size_breakdown.xxl, 0);
        assert_eq!(stats.packaging_breakdown.gift_box, 1);
        assert_eq!(stats.embroidery_count, 1);
    }

    #[test]
    fn test_revenue_saturates_on_huge_prices() {
        let orders = vec![
            order(0, Size::M, Packaging::Basic, false, i64::MAX),
            order(1, Size::M, Packaging::Basic, false, i64::MAX),
        ];
        let stats = compute(&orders);
        assert_eq!(stats.total_revenue.cents(), i64::MAX);
    }

    #[test]
    fn test_recent_orders_newest_first_capped() {
        let orders: Vec<_> = (0..7)
            .map(|n| order(n, Size::M, Packaging::Basic, false, 4800))
            .collect();
        let stats = compute(&orders);

        let ids: Vec<_> = stats.recent_orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["order-6", "order-5", "order-4", "order-3", "order-2"]);
    }

    #[test]
    fn test_ties_and_missing_timestamps() {
        let mut legacy = order(0, Size::XL, Packaging::Basic, false, 4800);
        legacy.created_at = None;
        legacy.date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        let a = order(3, Size::M, Packaging::Basic, false, 4800);
        let mut b = a.clone();
        b.id = "order-3b".to_string();

        let stats = compute(&[legacy, a, b]);
        let ids: Vec<_> = stats.recent_orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["order-3b", "order-3", "order-0"]);
    }
}
