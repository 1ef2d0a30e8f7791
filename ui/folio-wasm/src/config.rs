//! Site configuration loading.

use crate::api;
use folio_core::SiteConfig;

const CONFIG_URL: &str = "site-config.json";

/// Fetch `site-config.json` next to the page. Missing or malformed files
/// leave every setting at its default.
pub async fn load() -> SiteConfig {
    match api::fetch_text(CONFIG_URL).await {
        Ok(raw) => SiteConfig::from_json_or_default(&raw),
        Err(err) => {
            gloo_console::debug!(format!("{} unavailable ({}), using defaults", CONFIG_URL, err));
            SiteConfig::default()
        }
    }
}
