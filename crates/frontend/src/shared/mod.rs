pub mod components;
pub mod icons;
pub mod list_utils;
pub mod page_frame;

use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// Configuration provided by `App`
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
