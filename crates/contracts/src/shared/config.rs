use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub shop: ShopConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShopConfig {
    pub name: String,
    pub tagline: String,
    pub currency_symbol: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// How long a toast stays on screen before it is dismissed
    pub toast_timeout_ms: u32,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[shop]
name = "AutoTech"
tagline = "Sistema de Gestão para Oficinas"
currency_symbol = "R$"

[ui]
toast_timeout_ms = 4000
"#;

fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    toml::from_str(contents).context("invalid app configuration")
}

/// Load configuration from an optional override.
///
/// A missing or malformed override falls back to the embedded default.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    if let Some(contents) = override_toml {
        match parse_config(contents) {
            Ok(config) => return Ok(config),
            Err(e) => log::warn!("{:#}; using embedded default", e),
        }
    }
    parse_config(DEFAULT_CONFIG)
}

impl Default for AppConfig {
    fn default() -> Self {
        // Only reached if DEFAULT_CONFIG stops parsing
        load_config(None).unwrap_or_else(|_| AppConfig {
            shop: ShopConfig {
                name: "AutoTech".into(),
                tagline: String::new(),
                currency_symbol: "R$".into(),
            },
            ui: UiConfig {
                toast_timeout_ms: 4000,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.shop.name, "AutoTech");
        assert_eq!(config.shop.currency_symbol, "R$");
        assert_eq!(config.ui.toast_timeout_ms, 4000);
    }

    #[test]
    fn test_override_config() {
        let config = load_config(Some(
            r#"
[shop]
name = "Oficina Central"
tagline = "Desde 1998"
currency_symbol = "R$"

[ui]
toast_timeout_ms = 1500
"#,
        ))
        .unwrap();
        assert_eq!(config.shop.name, "Oficina Central");
        assert_eq!(config.ui.toast_timeout_ms, 1500);
    }

    #[test]
    fn test_malformed_override_falls_back() {
        let config = load_config(Some("[shop]\nname = 42")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
