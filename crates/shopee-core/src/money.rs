//! # Money Module
//!
//! Provides the `Money` type for totals and the single display-currency
//! conversion used by every view.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Catalog prices arrive as JSON numbers (f64):                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: round each unit price to minor units once,              │
//! │  then do all totals in i64.                                            │
//! │    109.95 → 10995 minor units, × 3 = 32985 → "329.85"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Conversion Point
//! The stored `price` of a product, cart line or wishlist entry is always in
//! the source currency. Showing it in another currency goes through
//! [`DisplayCurrency::convert`] and nowhere else.
//!
//! ```rust
//! use shopee_core::money::{DisplayCurrency, ExchangeRate, Money};
//!
//! let inr = DisplayCurrency::new("INR", "₹", ExchangeRate::from_bps(80_000)); // ×8
//! assert_eq!(inr.convert(12.5).minor(), 10_000);
//! assert_eq!(inr.format(12.5), "₹100.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

/// Basis points in a ×1 exchange rate.
const IDENTITY_BPS: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor units (hundredths) of some currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Converts a catalog price to minor units, rounding half away from zero.
    ///
    /// Prices come straight from the catalog payload and are not validated;
    /// a non-finite value maps to zero instead of panicking.
    ///
    /// ```rust
    /// use shopee_core::money::Money;
    ///
    /// assert_eq!(Money::from_price(109.95).minor(), 10995);
    /// assert_eq!(Money::from_price(19.999).minor(), 2000);
    /// ```
    pub fn from_price(price: f64) -> Self {
        if !price.is_finite() {
            return Money::zero();
        }
        Money((price * 100.0).round() as i64)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies a unit price by a line quantity, saturating at the `i64`
    /// bounds.
    ///
    /// ```rust
    /// use shopee_core::money::Money;
    ///
    /// let unit = Money::from_minor(299);
    /// assert_eq!(unit.multiply_quantity(3).minor(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, quantity: u32) -> Self {
        Money(self.0.saturating_mul(quantity as i64))
    }

    /// Applies an exchange rate with standard rounding.
    ///
    /// Computed in i128 and clamped back into the `i64` range.
    pub fn convert(&self, rate: ExchangeRate) -> Money {
        let product = self.0 as i128 * rate.bps() as i128;
        let half = IDENTITY_BPS as i128 / 2;
        let rounded = if product >= 0 {
            (product + half) / IDENTITY_BPS as i128
        } else {
            (product - half) / IDENTITY_BPS as i128
        };
        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering without a currency symbol.
///
/// Use [`DisplayCurrency::format_money`] for anything shown to a shopper.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// Multiplier from the source currency to the display currency, in basis
/// points.
///
/// 10000 bps = ×1, 80000 bps = ×8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExchangeRate(u32);

impl ExchangeRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        ExchangeRate(bps)
    }

    /// The ×1 rate: prices are shown in the source currency.
    #[inline]
    pub const fn identity() -> Self {
        ExchangeRate(IDENTITY_BPS)
    }

    /// Creates a rate from a plain multiplier such as `8` or `0.92`.
    pub fn from_multiplier(multiplier: f64) -> Result<Self, CoreError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(CoreError::InvalidExchangeRate(format!(
                "multiplier must be a positive number, got {}",
                multiplier
            )));
        }

        let bps = (multiplier * IDENTITY_BPS as f64).round();
        if bps < 1.0 || bps > u32::MAX as f64 {
            return Err(CoreError::InvalidExchangeRate(format!(
                "multiplier {} is out of range",
                multiplier
            )));
        }

        Ok(ExchangeRate(bps as u32))
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a multiplier (for display only).
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.0 as f64 / IDENTITY_BPS as f64
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        ExchangeRate::identity()
    }
}

/// Parses a multiplier, e.g. `"8"` or `"1.25"`.
impl FromStr for ExchangeRate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let multiplier = s
            .trim()
            .parse::<f64>()
            .map_err(|e| CoreError::InvalidExchangeRate(format!("'{}': {}", s, e)))?;
        ExchangeRate::from_multiplier(multiplier)
    }
}

// =============================================================================
// Display Currency
// =============================================================================

/// The currency prices are rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCurrency {
    /// ISO 4217 code.
    pub code: String,

    /// Symbol prefixed to rendered amounts.
    pub symbol: String,

    /// Source-to-display multiplier.
    pub rate: ExchangeRate,
}

impl DisplayCurrency {
    pub fn new(code: impl Into<String>, symbol: impl Into<String>, rate: ExchangeRate) -> Self {
        DisplayCurrency {
            code: code.into(),
            symbol: symbol.into(),
            rate,
        }
    }

    /// Converts a stored price to the display currency.
    pub fn convert(&self, price: f64) -> Money {
        self.convert_money(Money::from_price(price))
    }

    /// Converts an already-summed amount to the display currency.
    pub fn convert_money(&self, amount: Money) -> Money {
        amount.convert(self.rate)
    }

    /// Renders a stored price, e.g. `₹109.95`.
    pub fn format(&self, price: f64) -> String {
        self.render(self.convert(price))
    }

    /// Renders a source-currency amount such as a cart total.
    pub fn format_money(&self, amount: Money) -> String {
        self.render(self.convert_money(amount))
    }

    fn render(&self, converted: Money) -> String {
        if converted.minor() < 0 {
            format!("-{}{}", self.symbol, Money::from_minor(converted.minor().saturating_neg()))
        } else {
            format!("{}{}", self.symbol, converted)
        }
    }
}

impl Default for DisplayCurrency {
    /// Indian rupee symbol at ×1: prices shown as stored.
    fn default() -> Self {
        DisplayCurrency::new("INR", "₹", ExchangeRate::identity())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_price_rounds_to_minor_units() {
        assert_eq!(Money::from_price(109.95).minor(), 10995);
        assert_eq!(Money::from_price(22.3).minor(), 2230);
        assert_eq!(Money::from_price(0.0).minor(), 0);
        assert_eq!(Money::from_price(f64::NAN).minor(), 0);
        assert_eq!(Money::from_price(f64::INFINITY).minor(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1099).to_string(), "10.99");
        assert_eq!(Money::from_minor(500).to_string(), "5.00");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_sum_avoids_float_drift() {
        let total: Money = [0.1, 0.2].iter().map(|p| Money::from_price(*p)).sum();
        assert_eq!(total.minor(), 30);
    }

    #[test]
    fn test_exchange_rate_conversion() {
        let price = Money::from_minor(1250);
        assert_eq!(price.convert(ExchangeRate::identity()).minor(), 1250);
        assert_eq!(price.convert(ExchangeRate::from_bps(80_000)).minor(), 10_000);

        // 0.33 × 1.5 = 0.495 → 0.50
        let odd = Money::from_minor(33);
        assert_eq!(odd.convert(ExchangeRate::from_bps(15_000)).minor(), 50);
    }

    #[test]
    fn test_exchange_rate_parsing() {
        assert_eq!("8".parse::<ExchangeRate>().unwrap().bps(), 80_000);
        assert_eq!("1.25".parse::<ExchangeRate>().unwrap().bps(), 12_500);
        assert!("0".parse::<ExchangeRate>().is_err());
        assert!("-2".parse::<ExchangeRate>().is_err());
        assert!("abc".parse::<ExchangeRate>().is_err());
    }

    #[test]
    fn test_display_currency_format() {
        let currency = DisplayCurrency::default();
        assert_eq!(currency.format(109.95), "₹109.95");

        let eightfold = DisplayCurrency::new("INR", "₹", ExchangeRate::from_bps(80_000));
        assert_eq!(eightfold.format(109.95), "₹879.60");
        assert_eq!(eightfold.format_money(Money::from_minor(-100)), "-₹8.00");
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let unit = Money::from_price(5e16);
        assert_eq!(unit.multiply_quantity(2).minor(), i64::MAX);
        assert_eq!((unit + unit + unit).minor(), i64::MAX);

        let mut total = Money::from_minor(i64::MAX - 1);
        total += Money::from_minor(5);
        assert_eq!(total, Money::from_minor(i64::MAX));

        let sum: Money = [Money::from_minor(i64::MIN), Money::from_minor(-1)].into_iter().sum();
        assert_eq!(sum.minor(), i64::MIN);

        let eightfold = ExchangeRate::from_bps(80_000);
        assert_eq!(Money::from_minor(i64::MAX).convert(eightfold).minor(), i64::MAX);
        assert!(DisplayCurrency::default()
            .format_money(Money::from_minor(i64::MIN))
            .starts_with("-₹"));
    }
}
