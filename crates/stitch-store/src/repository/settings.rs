//! # Settings Repository
//!
//! Free-form key/value settings for the frontend. The only rule is that an
//! update must be a JSON object; its keys overwrite, everything else stays.

use serde_json::Value;
use stitch_core::patch::merge_settings;
use stitch_core::validation::parse_settings_patch;
use stitch_core::{CoreError, SettingsBag};
use tracing::info;

use crate::error::StoreResult;
use crate::store::Store;

#[derive(Debug, Clone)]
pub struct SettingsRepository {
    store: Store,
}

impl SettingsRepository {
    pub fn new(store: Store) -> Self {
        SettingsRepository { store }
    }

    pub async fn get(&self) -> StoreResult<SettingsBag> {
        Ok(self.store.load().await?.settings)
    }

    /// Shallow-merges `body` into the stored settings and returns the result.
    pub async fn update(&self, body: &Value) -> StoreResult<SettingsBag> {
        let patch = parse_settings_patch(body)
            .map_err(|e| CoreError::InvalidSettings(e.to_string()))?;
        let keys: Vec<String> = patch.keys().cloned().collect();

        let settings = self
            .store
            .mutate(|doc| {
                merge_settings(&mut doc.settings, patch);
                Ok(doc.settings.clone())
            })
            .await?;

        info!(keys = ?keys, "Settings updated");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::StoreConfig;
    use crate::test_support::TempDir;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_merges_and_persists() {
        let dir = TempDir::new();
        let path = dir.path().join("data.json");
        let store = Store::open(StoreConfig::new(&path)).await.unwrap();

        store
            .settings()
            .update(&json!({ "theme": "dark", "currency": "PEN" }))
            .await
            .unwrap();
        let settings = store
            .settings()
            .update(&json!({ "theme": "light" }))
            .await
            .unwrap();

        assert_eq!(settings["theme"], "light");
        assert_eq!(settings["currency"], "PEN");

        let reopened = Store::open(StoreConfig::new(&path)).await.unwrap();
        assert_eq!(reopened.settings().get().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_non_object_rejected() {
        let dir = TempDir::new();
        let store = Store::open(StoreConfig::new(dir.path().join("data.json")))
            .await
            .unwrap();

        for body in [json!(["a"]), json!("dark"), json!(null)] {
            let err = store.settings().update(&body).await.unwrap_err();
            assert!(matches!(err, StoreError::Domain(CoreError::InvalidSettings(_))));
        }
        assert!(store.settings().get().await.unwrap().is_empty());
    }
}
