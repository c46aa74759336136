//! # Order Ledger
//!
//! Create, list, look up, and delete orders.
//!
//! ## Create Flow
//! ```text
//! JSON body ──► parse_new_order ──► (lock) load ──► price with current config
//!                    │                               │
//!                    └─ InvalidOrder (no I/O)        ▼
//!                                   append ──► save ──► (unlock) ──► Order
//! ```
//!
//! Validation runs before the lock is taken, so a rejected order never
//! touches the file.

use chrono::{Local, Utc};
use serde_json::Value;
use stitch_core::validation::{parse_new_order, validate_order_id};
use stitch_core::{pricing, CoreError, Order, OrderDraft};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::store::Store;

/// Repository for orders.
///
/// ## Usage
/// ```rust,ignore
/// let order = store.orders().create(&json!({
///     "customer": "Ana", "size": "M", "packaging": "basic"
/// })).await?;
///
/// let deleted = store.orders().delete(&order.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OrderLedger {
    store: Store,
}

impl OrderLedger {
    pub fn new(store: Store) -> Self {
        OrderLedger { store }
    }

    /// All orders, oldest first.
    pub async fn list(&self) -> StoreResult<Vec<Order>> {
        Ok(self.store.load().await?.orders)
    }

    /// Finds an order by ID.
    pub async fn get(&self, id: &str) -> StoreResult<Order> {
        let id = validate_order_id(id).map_err(CoreError::InvalidOrder)?;
        let doc = self.store.load().await?;

        doc.orders
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()).into())
    }

    /// Validates a JSON body and records the order.
    pub async fn create(&self, body: &Value) -> StoreResult<Order> {
        let draft = parse_new_order(body).map_err(CoreError::InvalidOrder)?;
        self.create_draft(draft).await
    }

    /// Records an already-validated order.
    ///
    /// The price is computed from the config read in the same locked
    /// cycle as the append, so a concurrent config update can't slip in
    /// between pricing and saving.
    pub async fn create_draft(&self, draft: OrderDraft) -> StoreResult<Order> {
        let order = self
            .store
            .mutate(|doc| {
                let price = pricing::price(&doc.config, draft.size, draft.packaging, draft.embroidery);
                let now = Utc::now();
                let order = Order::from_draft(
                    Uuid::new_v4().to_string(),
                    draft,
                    price,
                    now.with_timezone(&Local).date_naive(),
                    now,
                );
                doc.orders.push(order.clone());
                Ok(order)
            })
            .await?;

        info!(
            order_id = %order.id,
            size = %order.size,
            packaging = %order.packaging,
            price = %order.price,
            "Order created"
        );
        Ok(order)
    }

    /// Removes an order and returns it.
    pub async fn delete(&self, id: &str) -> StoreResult<Order> {
        let id = validate_order_id(id).map_err(CoreError::InvalidOrder)?;

        let order = self
            .store
            .mutate(|doc| {
                let index = doc
                    .orders
                    .iter()
                    .position(|o| o.id == id)
                    .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))?;
                Ok(doc.orders.remove(index))
            })
            .await?;

        info!(order_id = %order.id, "Order deleted");
        debug!(customer = %order.customer, price = %order.price, "Deleted order details");
        Ok(order)
    }
}

// =============================================================================
// Tests
// =============================================================================
