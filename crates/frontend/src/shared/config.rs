use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub backend: BackendConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BackendConfig {
    /// Prefix of every backend request, e.g. "backend"
    pub base_path: String,
    /// Short name of the transaction service used in tab-bar-data URLs
    pub transaction_service: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub product_name: String,
    pub tab_bar_debounce_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[backend]
base_path = "backend"
transaction_service = "transaction"

[ui]
product_name = "Monitor"
tab_bar_debounce_ms = 100
"#;

/// Id of the optional `<script type="application/toml">` element carrying an override
pub const CONFIG_ELEMENT_ID: &str = "console-config";

pub fn parse_config(contents: &str) -> anyhow::Result<ConsoleConfig> {
    let config: ConsoleConfig = toml::from_str(contents)?;
    if config.backend.base_path.trim().is_empty() {
        anyhow::bail!("backend.base_path must not be empty");
    }
    Ok(config)
}

pub fn default_config() -> ConsoleConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|_| ConsoleConfig {
        backend: BackendConfig {
            base_path: "backend".to_string(),
            transaction_service: "transaction".to_string(),
        },
        ui: UiConfig {
            product_name: "Monitor".to_string(),
            tab_bar_debounce_ms: 100,
        },
    })
}

/// Load configuration for the console
///
/// Search order:
/// 1. `<script id="console-config" type="application/toml">` in the host page
/// 2. Falls back to embedded default config
pub fn load_config() -> ConsoleConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    if let Some(contents) = inline {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loaded console config from #{}", CONFIG_ELEMENT_ID);
                return config;
            }
            Err(e) => log::warn!("Invalid console config in #{}: {}", CONFIG_ELEMENT_ID, e),
        }
    }

    log::info!("Using default embedded configuration");
    default_config()
}
