//! # Validation Module
//!
//! Boundary validation for untyped JSON input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Order form (browser)                                         │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: HTTP handler                                                 │
//! │  └── Body must be well-formed JSON (serde_json::Value)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Value → OrderDraft / ConfigPatch / SettingsBag                    │
//! │  └── Nothing untyped gets past this point                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: stitch-store (typed model only)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bodies arrive as [`serde_json::Value`] rather than typed structs because
//! the accepted shapes are looser than serde's: `embroidery` follows JSON
//! truthiness, and unknown top-level config keys are ignored while unknown
//! packaging keys are rejected.
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use stitch_core::validation::parse_new_order;
//! use stitch_core::types::Size;
//!
//! let draft = parse_new_order(&json!({
//!     "customer": "  Ana  ",
//!     "size": "2XL",
//!     "packaging": "box",
//!     "embroidery": 1
//! }))
//! .unwrap();
//!
//! assert_eq!(draft.customer, "Ana");
//! assert_eq!(draft.size, Size::XXL);
//! assert!(draft.embroidery);
//! ```

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::patch::ConfigPatch;
use crate::types::{OrderDraft, Packaging, SettingsBag, Size};

/// Upper bound for any single config amount. Three of them summed in
/// cents stay far below `i64::MAX`.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Item selection for a price preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteRequest {
    pub size: Size,
    pub packaging: Packaging,
    pub embroidery: bool,
}

// =============================================================================
// Orders
// =============================================================================

/// Validates an order-creation body.
///
/// ## Rules
/// - `customer`: required string, non-blank after trimming
/// - `size`: one of `M`, `L`, `XL`, `2XL` (case-sensitive)
/// - `packaging`: one of `basic`, `branded`, `box`
/// - `embroidery`: optional, coerced by JSON truthiness
pub fn parse_new_order(body: &Value) -> ValidationResult<OrderDraft> {
    let body = as_object(body, "order")?;

    let customer = match body.get("customer") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.trim()),
        Some(_) => {
            return Err(ValidationError::InvalidType {
                field: "customer".to_string(),
                expected: "a string".to_string(),
            })
        }
    };
    let customer = match customer {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => {
            return Err(ValidationError::Required {
                field: "customer".to_string(),
            })
        }
    };

    let QuoteRequest {
        size,
        packaging,
        embroidery,
    } = parse_item(body)?;

    Ok(OrderDraft {
        customer,
        size,
        packaging,
        embroidery,
    })
}

/// Validates a price-preview body (`size`, `packaging`, `embroidery?`).
pub fn parse_quote_request(body: &Value) -> ValidationResult<QuoteRequest> {
    parse_item(as_object(body, "quote")?)
}

/// Validates an order ID taken from a path segment.
///
/// IDs are opaque and compared exactly; only a blank ID is rejected.
pub fn validate_order_id(id: &str) -> ValidationResult<&str> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }
    Ok(id)
}

fn parse_item(body: &Map<String, Value>) -> ValidationResult<QuoteRequest> {
    let size = enum_field::<Size>(body, "size")?;
    let packaging = enum_field::<Packaging>(body, "packaging")?;
    let embroidery = body.get("embroidery").map(is_truthy).unwrap_or(false);

    Ok(QuoteRequest {
        size,
        packaging,
        embroidery,
    })
}

fn enum_field<T>(body: &Map<String, Value>, field: &str) -> ValidationResult<T>
where
    T: std::str::FromStr<Err = ValidationError>,
{
    match body.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Required {
            field: field.to_string(),
        }),
        Some(Value::String(s)) => s.parse(),
        // Non-strings can never match; let FromStr produce the allowed list.
        Some(_) => "".parse(),
    }
}

/// JSON truthiness: `null`, `false`, `0`, and `""` are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// =============================================================================
// Pricing Config
// =============================================================================

/// Validates a partial pricing config.
///
/// ## Rules
/// - Body must be an object; unknown top-level keys are ignored
/// - `basePrice`, `embroidery`: if present, a number in `0..=MAX_AMOUNT`
///   (`null` fails)
/// - `packaging`: if present, an object whose keys are packaging options
///   and whose values are numbers in the same range
pub fn parse_config_patch(body: &Value) -> ValidationResult<ConfigPatch> {
    let body = as_object(body, "config")?;
    let mut patch = ConfigPatch::default();

    if let Some(value) = body.get("basePrice") {
        patch.base_price = Some(non_negative(value, "basePrice")?);
    }

    if let Some(value) = body.get("embroidery") {
        patch.embroidery = Some(non_negative(value, "embroidery")?);
    }

    if let Some(value) = body.get("packaging") {
        let surcharges = as_object(value, "packaging")?;
        for (key, value) in surcharges {
            let packaging: Packaging = key.parse().map_err(|_| ValidationError::UnknownKey {
                field: "packaging".to_string(),
                key: key.clone(),
            })?;
            let surcharge = non_negative(value, &format!("packaging.{key}"))?;
            patch.packaging.push((packaging, surcharge));
        }
    }

    Ok(patch)
}

fn non_negative(value: &Value, field: &str) -> ValidationResult<f64> {
    match value.as_f64() {
        Some(n) if n.is_finite() && n >= 0.0 => {
            if n > MAX_AMOUNT {
                return Err(ValidationError::TooLarge {
                    field: field.to_string(),
                    max: MAX_AMOUNT,
                });
            }
            Ok(n)
        }
        _ => Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        }),
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Validates a settings patch. Any JSON object is accepted.
pub fn parse_settings_patch(body: &Value) -> ValidationResult<SettingsBag> {
    as_object(body, "settings").cloned()
}

fn as_object<'a>(value: &'a Value, field: &str) -> ValidationResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| ValidationError::InvalidType {
        field: field.to_string(),
        expected: "a JSON object".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(customer: Value, size: &str, packaging: &str) -> Value {
        json!({ "customer": customer, "size": size, "packaging": packaging })
    }

    #[test]
    fn test_valid_order() {
        let draft = parse_new_order(&order(json!("Ana"), "M", "basic")).unwrap();
        assert_eq!(draft.customer, "Ana");
        assert_eq!(draft.size, Size::M);
        assert_eq!(draft.packaging, Packaging::Basic);
        assert!(!draft.embroidery);
    }

    #[test]
    fn test_customer_rules() {
        for customer in [json!(""), json!("   "), Value::Null] {
            assert_eq!(
                parse_new_order(&order(customer, "M", "basic")),
                Err(ValidationError::Required {
                    field: "customer".to_string()
                })
            );
        }

        let err = parse_new_order(&order(json!(42), "M", "basic")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { .. }));

        let err = parse_new_order(&json!({ "size": "M", "packaging": "basic" })).unwrap_err();
        assert_eq!(err.to_string(), "customer is required");
    }

    #[test]
    fn test_rejects_unknown_size_and_packaging() {
        let err = parse_new_order(&order(json!("Ana"), "XXL", "basic")).unwrap_err();
        assert_eq!(err.to_string(), "size must be one of: M, L, XL, 2XL");

        let err = parse_new_order(&order(json!("Ana"), "M", "gift")).unwrap_err();
        assert_eq!(err.to_string(), "packaging must be one of: basic, branded, box");

        let err = parse_new_order(&json!({ "customer": "Ana", "size": 3, "packaging": "box" }))
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
    }

    #[test]
    fn test_non_object_body() {
        let err = parse_new_order(&json!(["Ana"])).unwrap_err();
        assert_eq!(err.to_string(), "order must be a JSON object");
    }

    #[test]
    fn test_embroidery_truthiness() {
        let cases = [
            (json!(true), true),
            (json!(1), true),
            (json!("yes"), true),
            (json!({}), true),
            (json!(false), false),
            (json!(0), false),
            (json!(""), false),
            (Value::Null, false),
        ];
        for (value, expected) in cases {
            let body = json!({
                "customer": "Ana", "size": "L", "packaging": "box", "embroidery": value
            });
            assert_eq!(parse_new_order(&body).unwrap().embroidery, expected);
        }
    }

    #[test]
    fn test_quote_request() {
        let req = parse_quote_request(&json!({ "size": "XL", "packaging": "branded" })).unwrap();
        assert_eq!(req.size, Size::XL);
        assert!(!req.embroidery);
        assert!(parse_quote_request(&json!({ "size": "XL" })).is_err());
    }

    #[test]
    fn test_order_id() {
        assert_eq!(validate_order_id("abc").unwrap(), "abc");
        assert_eq!(validate_order_id(" abc ").unwrap(), " abc ");
        assert!(validate_order_id("  ").is_err());
        assert!(validate_order_id("").is_err());
    }

    #[test]
    fn test_config_patch() {
        let patch = parse_config_patch(&json!({
            "basePrice": 50,
            "packaging": { "basic": 10 },
            "currency": "PEN"
        }))
        .unwrap();

        assert_eq!(patch.base_price, Some(50.0));
        assert_eq!(patch.packaging, vec![(Packaging::Basic, 10.0)]);
        assert_eq!(patch.embroidery, None);
    }

    #[test]
    fn test_config_patch_rejections() {
        let cases = [
            json!("nope"),
            json!({ "basePrice": -1 }),
            json!({ "basePrice": null }),
            json!({ "basePrice": "45" }),
            json!({ "embroidery": -0.5 }),
            json!({ "packaging": [] }),
            json!({ "packaging": { "gift": 4 } }),
            json!({ "packaging": { "box": "7" } }),
        ];
        for body in cases {
            assert!(parse_config_patch(&body).is_err(), "accepted {body}");
        }

        let err = parse_config_patch(&json!({ "packaging": { "gift": 4 } })).unwrap_err();
        assert_eq!(err.to_string(), "packaging has unknown key 'gift'");
    }

    #[test]
    fn test_config_patch_upper_bound() {
        let patch = parse_config_patch(&json!({ "basePrice": MAX_AMOUNT })).unwrap();
        assert_eq!(patch.base_price, Some(MAX_AMOUNT));

        assert_eq!(
            parse_config_patch(&json!({ "basePrice": 1e20 })),
            Err(ValidationError::TooLarge {
                field: "basePrice".to_string(),
                max: MAX_AMOUNT,
            })
        );

        let err = parse_config_patch(&json!({ "packaging": { "box": 1e10 } })).unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { ref field, .. } if field == "packaging.box"));
    }

    #[test]
    fn test_settings_patch() {
        let bag = parse_settings_patch(&json!({ "theme": "dark" })).unwrap();
        assert_eq!(bag["theme"], json!("dark"));
        assert!(parse_settings_patch(&json!([1, 2])).is_err());
        assert!(parse_settings_patch(&json!("dark")).is_err());
    }
}
