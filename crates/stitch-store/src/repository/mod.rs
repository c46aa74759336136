//! # Repository Module
//!
//! Each repository owns one field of the document and reaches it through
//! the shared [`Store`](crate::Store) handle.
//!
//! ```text
//! store.orders()    ──► OrderLedger          document.orders
//! store.pricing()   ──► ConfigManager        document.config
//! store.settings()  ──► SettingsRepository   document.settings
//! store.stats()     ──► Stats (read-only projection of document.orders)
//! ```
//!
//! Every write goes through [`Store::mutate`](crate::Store::mutate); the
//! repositories only validate input and describe the change.

pub mod order;
pub mod pricing;
pub mod settings;
