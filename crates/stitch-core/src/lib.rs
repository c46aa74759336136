//! # stitch-core: Pure Business Logic for Stitch
//!
//! Order model, pricing, validation, and statistics for the custom-apparel
//! order backend. Everything here is a pure function over owned data; the
//! JSON file lives in `stitch-store`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stitch Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │    /api/orders  /api/config  /api/settings  /api/stats          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               stitch-store (JSON document)                      │   │
//! │  │        load → mutate → save under one writer lock               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stitch-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   stats   │  │ validation│  │   │
//! │  │   │   Order   │  │   price   │  │  compute  │  │   + patch │  │   │
//! │  │   │  Config   │  │   quote   │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Order, Size, Packaging, PricingConfig, Document
//! - [`money`] - Integer-cent Money type
//! - [`pricing`] - Price calculation and itemized quotes
//! - [`stats`] - Dashboard aggregates
//! - [`validation`] - JSON body → typed input
//! - [`patch`] - Config and settings merging
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use stitch_core::{pricing, validation, PricingConfig};
//!
//! let draft = validation::parse_new_order(&json!({
//!     "customer": "Ana",
//!     "size": "L",
//!     "packaging": "box",
//!     "embroidery": true
//! }))
//! .unwrap();
//!
//! let config = PricingConfig::default();
//! let price = pricing::price(&config, draft.size, draft.packaging, draft.embroidery);
//! assert_eq!(price.to_string(), "72.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod patch;
pub mod pricing;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use patch::ConfigPatch;
pub use pricing::Quote;
pub use stats::Stats;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of orders returned in `Stats::recent_orders`.
pub const RECENT_ORDERS_LIMIT: usize = 5;
