//! # Configuration State
//!
//! Read-only settings the intents need after startup.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use shopee_catalog::CatalogConfig;
use shopee_core::{DisplayCurrency, Money};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Catalog endpoint, reported for diagnostics.
    pub catalog_endpoint: String,

    /// Currency every rendered price goes through.
    pub display_currency: DisplayCurrency,
}

impl From<&CatalogConfig> for ConfigState {
    fn from(config: &CatalogConfig) -> Self {
        ConfigState {
            catalog_endpoint: config.catalog.endpoint.clone(),
            display_currency: config.display_currency(),
        }
    }
}

impl ConfigState {
    /// Formats a stored price, e.g. `₹109.95`.
    pub fn format_price(&self, price: f64) -> String {
        self.display_currency.format(price)
    }

    /// Formats a source-currency total.
    pub fn format_amount(&self, amount: Money) -> String {
        self.display_currency.format_money(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_catalog_config() {
        let mut config = CatalogConfig::default();
        config.display.currency_symbol = "$".to_string();
        config.display.rate_bps = 20_000;

        let state = ConfigState::from(&config);
        assert_eq!(state.catalog_endpoint, shopee_catalog::DEFAULT_CATALOG_URL);
        assert_eq!(state.format_price(1.25), "$2.50");
        assert_eq!(state.format_amount(Money::from_minor(100)), "$2.00");
    }
}
