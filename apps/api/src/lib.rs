//! # Stitch API
//!
//! JSON REST server for the order form and dashboard.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        API Server                                       │
//! │                                                                         │
//! │  Browser ──► axum Router ──► handlers ──► stitch-store ──► data.json   │
//! │                  │                                                      │
//! │                  ├── TraceLayer (request spans)                         │
//! │                  ├── CorsLayer (any origin)                             │
//! │                  └── ServeDir fallback (optional static assets)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use handlers::AppState;
pub use routes::create_router;
