//! # Config Manager
//!
//! Reads and merges the pricing config, and produces price previews from it.

use serde_json::Value;
use stitch_core::validation::{parse_config_patch, parse_quote_request};
use stitch_core::{pricing, CoreError, PricingConfig, Quote};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::store::Store;

/// Repository for the pricing config singleton.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    store: Store,
}

impl ConfigManager {
    pub fn new(store: Store) -> Self {
        ConfigManager { store }
    }

    /// Current config, with every packaging key present.
    pub async fn get(&self) -> StoreResult<PricingConfig> {
        Ok(self.store.load().await?.config)
    }

    /// Validates a partial config and merges it into the stored one.
    ///
    /// ## Merge
    /// - `basePrice`, `embroidery`: replaced when present
    /// - `packaging`: merged key by key
    /// - any other key: ignored
    ///
    /// Returns the full config after the merge. A patch with nothing to
    /// apply is answered from the stored config without a write.
    pub async fn update(&self, body: &Value) -> StoreResult<PricingConfig> {
        let patch = parse_config_patch(body).map_err(CoreError::InvalidConfig)?;
        if patch.is_empty() {
            debug!("Empty config patch, nothing to write");
            return self.get().await;
        }

        let config = self
            .store
            .mutate(|doc| {
                doc.config.apply(&patch);
                Ok(doc.config)
            })
            .await?;

        info!(
            base_price = config.base_price,
            basic = config.packaging.basic,
            branded = config.packaging.branded,
            gift_box = config.packaging.gift_box,
            embroidery = config.embroidery,
            "Pricing config updated"
        );
        Ok(config)
    }

    /// Itemized price for `{size, packaging, embroidery?}` under the stored
    /// config. Nothing is written.
    pub async fn quote(&self, body: &Value) -> StoreResult<Quote> {
        let request = parse_quote_request(body).map_err(CoreError::InvalidQuote)?;
        let config = self.get().await?;

        Ok(pricing::quote(
            &config,
            request.size,
            request.packaging,
            request.embroidery,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::StoreConfig;
    use crate::test_support::TempDir;
    use serde_json::json;
    use stitch_core::ValidationError;

    async fn open(dir: &TempDir) -> Store {
        Store::open(StoreConfig::new(dir.path().join("data.json")))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_packaging_merge_persists() {
        let dir = TempDir::new();
        let store = open(&dir).await;

        let config = store
            .pricing()
            .update(&json!({ "packaging": { "basic": 10 } }))
            .await
            .unwrap();
        assert_eq!(config.packaging.basic, 10.0);
        assert_eq!(config.packaging.branded, 5.0);
        assert_eq!(config.packaging.gift_box, 7.0);
        assert_eq!(config.base_price, 45.0);

        let reopened = open(&dir).await;
        assert_eq!(reopened.pricing().get().await.unwrap(), config);
    }

    #[tokio::test]
    async fn test_invalid_update_is_rejected() {
        let dir = TempDir::new();
        let store = open(&dir).await;

        for body in [
            json!({ "basePrice": -5 }),
            json!({ "embroidery": null }),
            json!({ "packaging": { "crate": 2 } }),
            json!("45"),
        ] {
            let err = store.pricing().update(&body).await.unwrap_err();
            assert!(matches!(err, StoreError::Domain(CoreError::InvalidConfig(_))));
        }

        assert_eq!(store.pricing().get().await.unwrap(), PricingConfig::default());
    }

    #[tokio::test]
    async fn test_oversized_amount_keeps_config() {
        let dir = TempDir::new();
        let store = open(&dir).await;
        store
            .pricing()
            .update(&json!({ "basePrice": 50 }))
            .await
            .unwrap();
        let before = std::fs::read(dir.path().join("data.json")).unwrap();

        let err = store
            .pricing()
            .update(&json!({ "basePrice": 1e20, "embroidery": 1 }))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Domain(CoreError::InvalidConfig(ValidationError::TooLarge { .. }))
        ));

        assert_eq!(std::fs::read(dir.path().join("data.json")).unwrap(), before);
        let config = store.pricing().get().await.unwrap();
        assert_eq!(config.base_price, 50.0);
        assert_eq!(config.embroidery, 20.0);
    }

    #[tokio::test]
    async fn test_empty_patch_returns_stored_config() {
        let dir = TempDir::new();
        let store = open(&dir).await;
        let before = std::fs::read(dir.path().join("data.json")).unwrap();

        let config = store
            .pricing()
            .update(&json!({ "currency": "PEN" }))
            .await
            .unwrap();

        assert_eq!(config, PricingConfig::default());
        assert_eq!(std::fs::read(dir.path().join("data.json")).unwrap(), before);
    }

    #[tokio::test]
    async fn test_quote_reads_stored_config() {
        let dir = TempDir::new();
        let store = open(&dir).await;
        store
            .pricing()
            .update(&json!({ "embroidery": 12.5 }))
            .await
            .unwrap();

        let quote = store
            .pricing()
            .quote(&json!({ "size": "2XL", "packaging": "branded", "embroidery": "yes" }))
            .await
            .unwrap();
        assert_eq!(quote.embroidery_surcharge.cents(), 1250);
        assert_eq!(quote.total.cents(), 6250);

        let err = store
            .pricing()
            .quote(&json!({ "size": "S", "packaging": "basic" }))
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert!(matches!(err, StoreError::Domain(CoreError::InvalidQuote(_))));
        assert!(err.to_string().starts_with("Invalid quote: "));
    }
}
