//! Missing or unreadable entries fall back to the defaults.

use tracing::{debug, info, warn};
use crate::catalog::{Category, Platform};
use crate::error::DashboardError;
use crate::storage::KeyValueStore;
use crate::theme::Theme;

pub const CATEGORIES_KEY: &str = "categories";
pub const THEME_KEY: &str = "theme";
pub const PLATFORMS_KEY: &str = "platforms";

async fn load_json<S, T>(store: &S, key: &str) -> Option<T>
    where
        S: KeyValueStore,
        T: serde::de::DeserializeOwned,
{
    let stored = match store.get(key).await {
        Ok(Some(stored)) => stored,
        Ok(None) => {
            info!("No stored {} found, using defaults", key);
            return None;
        }
        Err(err) => {
            warn!("Failed to read stored {}: {}", key, err);
            return None;
        }
    };

    match serde_json::from_str(&stored) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Stored {} could not be parsed, using defaults: {}", key, err);
            None
        }
    }
}

pub async fn load_categories<S: KeyValueStore>(store: &S, defaults: Vec<Category>) -> Vec<Category> {
    load_json(store, CATEGORIES_KEY).await.unwrap_or(defaults)
}

pub async fn save_categories<S: KeyValueStore>(store: &mut S, categories: &[Category]) -> Result<(), DashboardError> {
    let serialized = serde_json::to_string(categories)?;
    store.set(CATEGORIES_KEY, &serialized).await?;
    debug!("Persisted {} categories", categories.len());

    Ok(())
}

pub async fn load_platforms<S: KeyValueStore>(store: &S, defaults: Vec<Platform>) -> Vec<Platform> {
    load_json(store, PLATFORMS_KEY).await.unwrap_or(defaults)
}

pub async fn save_platforms<S: KeyValueStore>(store: &mut S, platforms: &[Platform]) -> Result<(), DashboardError> {
    let serialized = serde_json::to_string(platforms)?;
    store.set(PLATFORMS_KEY, &serialized).await?;
    debug!("Persisted {} platforms", platforms.len());

    Ok(())
}

pub async fn load_theme<S: KeyValueStore>(store: &S) -> Theme {
    match store.get(THEME_KEY).await {
        Ok(Some(token)) => Theme::from_stored(token.trim()),
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!("Failed to read stored theme: {}", err);
            Theme::default()
        }
    }
}

pub async fn save_theme<S: KeyValueStore>(store: &mut S, theme: Theme) -> Result<(), DashboardError> {
    store.set(THEME_KEY, theme.token()).await
}
