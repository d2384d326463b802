//! # Storefront Configuration
//!
//! Where the catalog comes from and how prices are displayed.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPEE_CATALOG_URL=https://fakestoreapi.com/products               │
//! │     SHOPEE_CURRENCY_RATE=8 or SHOPEE_CURRENCY_RATE_BPS=80000           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shopee/storefront.toml (Linux)                           │
//! │     ~/Library/Application Support/com.shopee.storefront/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     fake-store endpoint, no timeout, ₹ at ×1                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [catalog]
//! endpoint = "https://fakestoreapi.com/products"
//! # timeout_secs = 10
//!
//! [display]
//! currency_code = "INR"
//! currency_symbol = "₹"
//! rate_bps = 10000
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use shopee_core::{DisplayCurrency, ExchangeRate};

use crate::error::{CatalogError, CatalogResult};

/// Default product catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

// =============================================================================
// Catalog Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// GET endpoint returning a JSON product array.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout. Absent means the request may wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Source-to-display multiplier in basis points (10000 = ×1).
    #[serde(default = "default_rate_bps")]
    pub rate_bps: u32,
}

fn default_currency_code() -> String {
    "INR".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_rate_bps() -> u32 {
    ExchangeRate::identity().bps()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_code: default_currency_code(),
            currency_symbol: default_currency_symbol(),
            rate_bps: default_rate_bps(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl CatalogConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist; a missing platform default file
    /// just means defaults.
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();
        let explicit = config_path.is_some();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else if explicit {
                return Err(CatalogError::ConfigLoadFailed(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> CatalogResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        let url = self.endpoint_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(format!(
                "Catalog endpoint must use http or https, got: {}",
                self.catalog.endpoint
            )));
        }

        if self.display.rate_bps == 0 {
            return Err(CatalogError::InvalidConfig(
                "rate_bps must be greater than 0".into(),
            ));
        }

        if self.catalog.timeout_secs == Some(0) {
            return Err(CatalogError::InvalidConfig(
                "timeout_secs must be greater than 0 when set".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `SHOPEE_*` overrides from any key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SHOPEE_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog endpoint from environment");
            self.catalog.endpoint = url;
        }

        if let Some(timeout) = lookup("SHOPEE_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.catalog.timeout_secs = Some(secs),
                Err(_) => warn!(timeout = %timeout, "Ignoring invalid SHOPEE_TIMEOUT_SECS"),
            }
        }

        if let Some(code) = lookup("SHOPEE_CURRENCY_CODE") {
            self.display.currency_code = code;
        }

        if let Some(symbol) = lookup("SHOPEE_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        // A plain multiplier; SHOPEE_CURRENCY_RATE_BPS wins when both are set.
        if let Some(rate) = lookup("SHOPEE_CURRENCY_RATE") {
            match rate.parse::<ExchangeRate>() {
                Ok(parsed) => self.display.rate_bps = parsed.bps(),
                Err(e) => warn!(error = %e, "Ignoring invalid SHOPEE_CURRENCY_RATE"),
            }
        }

        if let Some(rate) = lookup("SHOPEE_CURRENCY_RATE_BPS") {
            match rate.parse::<u32>() {
                Ok(bps) => self.display.rate_bps = bps,
                Err(_) => warn!(rate = %rate, "Ignoring invalid SHOPEE_CURRENCY_RATE_BPS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopee", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn endpoint_url(&self) -> CatalogResult<Url> {
        Ok(Url::parse(&self.catalog.endpoint)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.catalog.timeout_secs.map(Duration::from_secs)
    }

    pub fn display_currency(&self) -> DisplayCurrency {
        DisplayCurrency::new(
            self.display.currency_code.clone(),
            self.display.currency_symbol.clone(),
            ExchangeRate::from_bps(self.display.rate_bps),
        )
    }
}
