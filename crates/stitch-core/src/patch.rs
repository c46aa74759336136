//! # Partial Updates
//!
//! Typed patches for the two mutable singletons: the pricing config and
//! the settings bag. Patches are produced by [`crate::validation`] and
//! applied here, so by the time a patch exists it is known to be valid.
//!
//! ## Merge Rules
//! ```text
//! PricingConfig                         SettingsBag
//! ─────────────                         ───────────
//! basePrice   replaced if present       every patch key overwrites,
//! embroidery  replaced if present       other keys untouched (shallow)
//! packaging   merged key by key
//! ```

use crate::types::{Packaging, PricingConfig, SettingsBag};

/// A validated partial pricing config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigPatch {
    pub base_price: Option<f64>,
    /// Surcharge overrides, in the order they appeared in the request.
    pub packaging: Vec<(Packaging, f64)>,
    pub embroidery: Option<f64>,
}

impl ConfigPatch {
    /// True when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.base_price.is_none() && self.packaging.is_empty() && self.embroidery.is_none()
    }
}

impl PricingConfig {
    /// Applies a validated patch in place.
    pub fn apply(&mut self, patch: &ConfigPatch) {
        if let Some(base_price) = patch.base_price {
            self.base_price = base_price;
        }
        for &(packaging, surcharge) in &patch.packaging {
            self.packaging.set(packaging, surcharge);
        }
        if let Some(embroidery) = patch.embroidery {
            self.embroidery = embroidery;
        }
    }
}

/// Shallow-merges `patch` into `settings`.
pub fn merge_settings(settings: &mut SettingsBag, patch: SettingsBag) {
    for (key, value) in patch {
        settings.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PackagingSurcharges;
    use serde_json::json;

    #[test]
    fn test_packaging_merges_key_by_key() {
        let mut config = PricingConfig::default();
        config.apply(&ConfigPatch {
            packaging: vec![(Packaging::Basic, 10.0)],
            ..Default::default()
        });

        assert_eq!(config.packaging.basic, 10.0);
        assert_eq!(config.packaging.branded, 5.0);
        assert_eq!(config.packaging.gift_box, 7.0);
        assert_eq!(config.base_price, 45.0);
    }

    #[test]
    fn test_scalars_replaced() {
        let mut config = PricingConfig::default();
        config.apply(&ConfigPatch {
            base_price: Some(50.0),
            embroidery: Some(0.0),
            ..Default::default()
        });

        assert_eq!(config.base_price, 50.0);
        assert_eq!(config.embroidery, 0.0);
        assert_eq!(config.packaging, PackagingSurcharges::default());
    }

    #[test]
    fn test_empty_patch() {
        assert!(ConfigPatch::default().is_empty());
        let mut config = PricingConfig::default();
        config.apply(&ConfigPatch::default());
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn test_settings_shallow_merge() {
        let mut settings = SettingsBag::new();
        settings.insert("theme".into(), json!("dark"));
        settings.insert("shop".into(), json!({ "name": "A", "city": "Lima" }));

        let mut patch = SettingsBag::new();
        patch.insert("shop".into(), json!({ "name": "B" }));
        merge_settings(&mut settings, patch);

        assert_eq!(settings["theme"], json!("dark"));
        // nested objects are replaced, not merged
        assert_eq!(settings["shop"], json!({ "name": "B" }));
    }
}
