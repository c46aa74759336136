//! # Domain Types
//!
//! Core domain types used throughout Stitch.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Document (persisted root)                         │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  orders: [Order]│   │ config:         │   │ settings:       │       │
//! │  │  ─────────────  │   │  PricingConfig  │   │  SettingsBag    │       │
//! │  │  id (UUID)      │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  customer       │   │  basePrice      │   │  free-form      │       │
//! │  │  size           │   │  packaging{3}   │   │  JSON object    │       │
//! │  │  packaging      │   │  embroidery     │   │                 │       │
//! │  │  price          │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Names
//! All structs serialize camelCase (`basePrice`, `createdAt`) to match the
//! JSON document and the order form.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Size
// =============================================================================

/// Garment size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Size {
    M,
    L,
    XL,
    #[serde(rename = "2XL")]
    XXL,
}

impl Size {
    /// Every size, in display order.
    pub const ALL: [Size; 4] = [Size::M, Size::L, Size::XL, Size::XXL];

    /// Returns the wire name (`"2XL"` for [`Size::XXL`]).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "2XL",
        }
    }

    fn allowed() -> Vec<String> {
        Self::ALL.iter().map(|s| s.as_str().to_string()).collect()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ValidationError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "size".to_string(),
                allowed: Size::allowed(),
            })
    }
}

// =============================================================================
// Packaging
// =============================================================================

/// Packaging option, each with its own surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Packaging {
    Basic,
    Branded,
    #[serde(rename = "box")]
    GiftBox,
}

impl Packaging {
    /// Every packaging option, in display order.
    pub const ALL: [Packaging; 3] = [Packaging::Basic, Packaging::Branded, Packaging::GiftBox];

    /// Returns the wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Packaging::Basic => "basic",
            Packaging::Branded => "branded",
            Packaging::GiftBox => "box",
        }
    }

    pub(crate) fn allowed() -> Vec<String> {
        Self::ALL.iter().map(|p| p.as_str().to_string()).collect()
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Packaging {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Packaging::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "packaging".to_string(),
                allowed: Packaging::allowed(),
            })
    }
}

// =============================================================================
// Order
// =============================================================================

/// A recorded apparel order.
///
/// Immutable once created; the only lifecycle transition is deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Customer name, trimmed.
    pub customer: String,

    pub size: Size,

    pub packaging: Packaging,

    #[serde(default)]
    pub embroidery: bool,

    /// Price frozen at creation time.
    #[ts(type = "number")]
    pub price: Money,

    /// Calendar date of creation (server local clock).
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Creation instant. Absent on orders recorded before it was tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Builds an order from validated input.
    ///
    /// Identity and clock values are passed in so this stays pure; the
    /// ledger supplies a fresh UUID and the current time.
    pub fn from_draft(
        id: String,
        draft: OrderDraft,
        price: Money,
        date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Order {
            id,
            customer: draft.customer,
            size: draft.size,
            packaging: draft.packaging,
            embroidery: draft.embroidery,
            price,
            date,
            created_at: Some(created_at),
        }
    }

    /// Instant used to order by recency.
    ///
    /// Falls back to midnight UTC of `date` when `created_at` is missing.
    pub fn recency_key(&self) -> DateTime<Utc> {
        self.created_at
            .unwrap_or_else(|| self.date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

/// Validated order input, ready to be priced.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer: String,
    pub size: Size,
    pub packaging: Packaging,
    pub embroidery: bool,
}

// =============================================================================
// Pricing Config
// =============================================================================

pub const DEFAULT_BASE_PRICE: f64 = 45.0;
pub const DEFAULT_BASIC_SURCHARGE: f64 = 3.0;
pub const DEFAULT_BRANDED_SURCHARGE: f64 = 5.0;
pub const DEFAULT_BOX_SURCHARGE: f64 = 7.0;
pub const DEFAULT_EMBROIDERY_SURCHARGE: f64 = 20.0;

/// Surcharge per packaging option.
///
/// Every key is always present: a persisted document missing one falls
/// back to the default for that key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackagingSurcharges {
    #[serde(default = "default_basic")]
    pub basic: f64,

    #[serde(default = "default_branded")]
    pub branded: f64,

    #[serde(rename = "box", default = "default_box")]
    pub gift_box: f64,
}

fn default_basic() -> f64 {
    DEFAULT_BASIC_SURCHARGE
}

fn default_branded() -> f64 {
    DEFAULT_BRANDED_SURCHARGE
}

fn default_box() -> f64 {
    DEFAULT_BOX_SURCHARGE
}

fn default_base_price() -> f64 {
    DEFAULT_BASE_PRICE
}

fn default_embroidery() -> f64 {
    DEFAULT_EMBROIDERY_SURCHARGE
}

impl PackagingSurcharges {
    /// Surcharge for a packaging option.
    pub fn get(&self, packaging: Packaging) -> f64 {
        match packaging {
            Packaging::Basic => self.basic,
            Packaging::Branded => self.branded,
            Packaging::GiftBox => self.gift_box,
        }
    }

    pub(crate) fn set(&mut self, packaging: Packaging, value: f64) {
        match packaging {
            Packaging::Basic => self.basic = value,
            Packaging::Branded => self.branded = value,
            Packaging::GiftBox => self.gift_box = value,
        }
    }
}

impl Default for PackagingSurcharges {
    fn default() -> Self {
        PackagingSurcharges {
            basic: DEFAULT_BASIC_SURCHARGE,
            branded: DEFAULT_BRANDED_SURCHARGE,
            gift_box: DEFAULT_BOX_SURCHARGE,
        }
    }
}

/// The mutable pricing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    #[serde(default = "default_base_price")]
    pub base_price: f64,

    #[serde(default)]
    pub packaging: PackagingSurcharges,

    #[serde(default = "default_embroidery")]
    pub embroidery: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            base_price: DEFAULT_BASE_PRICE,
            packaging: PackagingSurcharges::default(),
            embroidery: DEFAULT_EMBROIDERY_SURCHARGE,
        }
    }
}

// =============================================================================
// Settings & Document
// =============================================================================

/// Free-form settings, shallow-merged on update.
pub type SettingsBag = serde_json::Map<String, serde_json::Value>;

/// The full persisted state.
///
/// Fields missing from a stored object are filled from defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub config: PricingConfig,

    #[serde(default)]
    pub settings: SettingsBag,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_size_parsing() {
        assert_eq!("M".parse::<Size>().unwrap(), Size::M);
        assert_eq!("2XL".parse::<Size>().unwrap(), Size::XXL);
        assert!("XXL".parse::<Size>().is_err());
        assert!("m".parse::<Size>().is_err());
    }

    #[test]
    fn test_packaging_parsing() {
        assert_eq!("box".parse::<Packaging>().unwrap(), Packaging::GiftBox);
        assert!("gift".parse::<Packaging>().is_err());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(Size::XXL).unwrap(), json!("2XL"));
        assert_eq!(serde_json::to_value(Packaging::GiftBox).unwrap(), json!("box"));
        assert_eq!(serde_json::to_value(Packaging::Branded).unwrap(), json!("branded"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PricingConfig =
            serde_json::from_value(json!({ "basePrice": 50, "packaging": { "basic": 1 } })).unwrap();
        assert_eq!(config.base_price, 50.0);
        assert_eq!(config.packaging.basic, 1.0);
        assert_eq!(config.packaging.branded, DEFAULT_BRANDED_SURCHARGE);
        assert_eq!(config.packaging.gift_box, DEFAULT_BOX_SURCHARGE);
        assert_eq!(config.embroidery, DEFAULT_EMBROIDERY_SURCHARGE);
    }

    #[test]
    fn test_empty_object_is_default_document() {
        let doc: Document = serde_json::from_value(json!({})).unwrap();
        assert_eq!(doc, Document::default());
    }

    #[test]
    fn test_order_without_timestamp_uses_date() {
        let order: Order = serde_json::from_value(json!({
            "id": "legacy-1",
            "customer": "Ana",
            "size": "L",
            "packaging": "basic",
            "embroidery": false,
            "price": 48,
            "date": "2024-03-01"
        }))
        .unwrap();

        assert!(order.created_at.is_none());
        assert_eq!(order.recency_key().to_rfc3339(), "2024-03-01T00:00:00+00:00");

        let back = serde_json::to_value(&order).unwrap();
        assert!(back.get("createdAt").is_none());
    }
}
