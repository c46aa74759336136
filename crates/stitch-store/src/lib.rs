//! # stitch-store: Document Store for Stitch
//!
//! Persists orders, the pricing config, and settings in a single JSON file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stitch Data Flow                                 │
//! │                                                                         │
//! │  HTTP handler (POST /api/orders)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stitch-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐                    │   │
//! │  │   │    Store      │    │   Repositories   │                    │   │
//! │  │   │  (store.rs)   │◄───│  OrderLedger     │                    │   │
//! │  │   │  writer lock  │    │  ConfigManager   │                    │   │
//! │  │   │  atomic save  │    │  Settings        │                    │   │
//! │  │   └───────────────┘    └──────────────────┘                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   data.json  { orders: [...], config: {...}, settings: {...} }  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stitch_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::new("data/orders.json")).await?;
//! let orders = store.orders().list().await?;
//! let config = store.pricing().get().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig};

pub use repository::order::OrderLedger;
pub use repository::pricing::ConfigManager;
pub use repository::settings::SettingsRepository;

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::{Path, PathBuf};

    /// Unique scratch directory, removed on drop.
    pub struct TempDir(PathBuf);

    impl TempDir {
        pub fn new() -> Self {
            let path = std::env::temp_dir().join(format!("stitch-store-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&path).unwrap();
            TempDir(path)
        }

        pub fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }
}
