//! # Pricing Engine
//!
//! ```text
//! price = basePrice + packaging[option] + (embroidery ? embroiderySurcharge : 0)
//! ```
//!
//! The three components are summed as decimals and rounded once, to the
//! cent, half away from zero. Size is accepted but does not change the
//! price.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Packaging, PricingConfig, Size};

/// Computes the price of one item.
///
/// ## Example
/// ```rust
/// use stitch_core::pricing::price;
/// use stitch_core::types::{Packaging, PricingConfig, Size};
///
/// let config = PricingConfig::default();
/// assert_eq!(price(&config, Size::M, Packaging::Basic, false).to_string(), "48.00");
/// assert_eq!(price(&config, Size::L, Packaging::GiftBox, true).to_string(), "72.00");
/// ```
pub fn price(config: &PricingConfig, _size: Size, packaging: Packaging, embroidery: bool) -> Money {
    Money::from_decimal(raw_total(config, packaging, embroidery))
}

fn raw_total(config: &PricingConfig, packaging: Packaging, embroidery: bool) -> f64 {
    let embroidery_surcharge = if embroidery { config.embroidery } else { 0.0 };
    config.base_price + config.packaging.get(packaging) + embroidery_surcharge
}

/// Itemized price preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub size: Size,
    pub packaging: Packaging,
    pub embroidery: bool,
    #[ts(type = "number")]
    pub base_price: Money,
    #[ts(type = "number")]
    pub packaging_surcharge: Money,
    #[ts(type = "number")]
    pub embroidery_surcharge: Money,
    /// Always equal to [`price`] for the same inputs.
    #[ts(type = "number")]
    pub total: Money,
}

/// Builds the itemized breakdown for an item.
///
/// Line items are rounded individually for display; `total` is rounded
/// from the unrounded sum, so it matches what an order would be charged.
pub fn quote(config: &PricingConfig, size: Size, packaging: Packaging, embroidery: bool) -> Quote {
    Quote {
        size,
        packaging,
        embroidery,
        base_price: Money::from_decimal(config.base_price),
        packaging_surcharge: Money::from_decimal(config.packaging.get(packaging)),
        embroidery_surcharge: if embroidery {
            Money::from_decimal(config.embroidery)
        } else {
            Money::zero()
        },
        total: price(config, size, packaging, embroidery),
    }
}
