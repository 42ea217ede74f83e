//! Client configuration.
//!
//! Every setting has a default matching the server templates, so a page
//! works without any configuration. A page may override settings with an
//! inline `<script type="application/json" id="arena-config">` block.

use serde::{Deserialize, Serialize};

use crate::constants::{self, dom, lookup};

/// Log level setting for the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Endpoint that records a choice
    pub choice_endpoint: String,

    /// Rows per ranking table page
    pub page_length: usize,

    /// Alert text for a failed submission
    pub failure_message: String,

    /// Label lookup service settings
    pub lookup: LookupConfig,

    /// DOM hooks
    pub selectors: DomSelectors,

    /// Log verbosity level
    pub log_level: LogLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            choice_endpoint: constants::CHOICE_ENDPOINT.to_string(),
            page_length: constants::DEFAULT_PAGE_LENGTH,
            failure_message: constants::SUBMIT_FAILURE_MESSAGE.to_string(),
            lookup: LookupConfig::default(),
            selectors: DomSelectors::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// Label lookup service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base URL of the entity API
    pub api_url: String,
    /// Language whose label is displayed
    pub language: String,
    /// Output encoding token
    pub format: String,
    /// Cross-origin capability flag
    pub origin: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: lookup::API_URL.to_string(),
            language: lookup::DEFAULT_LANGUAGE.to_string(),
            format: lookup::DEFAULT_FORMAT.to_string(),
            origin: lookup::DEFAULT_ORIGIN.to_string(),
        }
    }
}

/// Selectors and ids of the elements the client drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomSelectors {
    pub ranking_table: String,
    pub label_items: String,
    pub id_attribute: String,
    pub popup_id: String,
    /// Selector of the image inside the popup
    pub popup_image: String,
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self {
            ranking_table: dom::RANKING_TABLE.to_string(),
            label_items: dom::LABEL_ITEMS.to_string(),
            id_attribute: dom::ID_ATTRIBUTE.to_string(),
            popup_id: dom::POPUP_ID.to_string(),
            popup_image: dom::POPUP_IMAGE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        if config.page_length == 0 {
            return Err(ConfigError::Invalid(
                "page_length must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    /// Parse an optional inline config block, falling back to defaults.
    pub fn from_inline(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|json| !json.is_empty()) else {
            log::debug!("No inline configuration, using defaults");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(config) => {
                log::info!("Loaded inline configuration");
                config
            }
            Err(e) => {
                log::warn!("Ignoring inline configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Read the inline config block from the current document (WASM only).
    ///
    /// The block id is fixed, since selectors are only known once it is read.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_document() -> Self {
        let json = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document.get_element_by_id(constants::dom::CONFIG_SCRIPT_ID)
            })
            .and_then(|element| element.text_content());

        Self::from_inline(json.as_deref())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
