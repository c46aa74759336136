//! # Error Types
//!
//! Domain-specific error types for stitch-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stitch-core errors (this file)                                        │
//! │  ├── CoreError        - Order / config / settings failures             │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  stitch-store errors (separate crate)                                  │
//! │  └── StoreError       - File I/O and serialization failures            │
//! │                                                                         │
//! │  API errors (apps/api)                                                 │
//! │  └── ApiError         - What HTTP clients see                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is a client-side failure: the request can never succeed
/// as submitted, so callers must not retry it.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order input failed validation.
    ///
    /// ## When This Occurs
    /// - Customer name missing or blank
    /// - Size outside M / L / XL / 2XL
    /// - Packaging outside basic / branded / box
    #[error("Invalid order: {0}")]
    InvalidOrder(#[source] ValidationError),

    /// Pricing config patch failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(#[source] ValidationError),

    /// Price preview input failed validation.
    #[error("Invalid quote: {0}")]
    InvalidQuote(#[source] ValidationError),

    /// Settings patch was not a JSON object.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// No order with the given ID exists.
    #[error("Order not found: {0}")]
    OrderNotFound(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a request body doesn't meet requirements.
/// They are raised at the boundary, before anything enters the typed model.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {}", allowed.join(", "))]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Value must be a number greater than or equal to zero.
    #[error("{field} must be a non-negative number")]
    MustBeNonNegative { field: String },

    /// Value exceeds the accepted maximum.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: f64 },

    /// Value has the wrong JSON type.
    #[error("{field} must be {expected}")]
    InvalidType { field: String, expected: String },

    /// Key is not part of the accepted shape.
    #[error("{field} has unknown key '{key}'")]
    UnknownKey { field: String, key: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer".to_string(),
        };
        assert_eq!(err.to_string(), "customer is required");

        let err = ValidationError::NotAllowed {
            field: "size".to_string(),
            allowed: vec!["M".to_string(), "L".to_string()],
        };
        assert_eq!(err.to_string(), "size must be one of: M, L");

        let err = ValidationError::MustBeNonNegative {
            field: "basePrice".to_string(),
        };
        assert_eq!(err.to_string(), "basePrice must be a non-negative number");

        let err = ValidationError::TooLarge {
            field: "embroidery".to_string(),
            max: 1_000_000_000.0,
        };
        assert_eq!(err.to_string(), "embroidery must be at most 1000000000");
    }

    #[test]
    fn test_core_error_messages() {
        let err = CoreError::InvalidOrder(ValidationError::Required {
            field: "customer".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid order: customer is required");

        let err = CoreError::InvalidQuote(ValidationError::Required {
            field: "size".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid quote: size is required");

        let err = CoreError::OrderNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Order not found: abc");
    }
}
