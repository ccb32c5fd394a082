//! Money type for representing prices.
//!
//! Uses centavo-based integer representation to avoid floating-point
//! precision issues. The app embeds a single locale, so all amounts are
//! Brazilian reais; there is no currency dimension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A monetary value in Brazilian reais, stored as integer centavos.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in centavos.
    pub centavos: i64,
}

impl Money {
    /// Create a new Money value from centavos.
    pub fn new(centavos: i64) -> Self {
        Self { centavos }
    }

    /// Create a Money value from a decimal amount in reais.
    ///
    /// ```
    /// use vitrine_commerce::money::Money;
    /// let price = Money::from_reais(89.90);
    /// assert_eq!(price.centavos, 8990);
    /// ```
    pub fn from_reais(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// A zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.centavos == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.centavos > 0
    }

    /// Convert to a decimal value in reais.
    pub fn to_reais(&self) -> f64 {
        self.centavos as f64 / 100.0
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.centavos.checked_add(other.centavos).map(Money::new)
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.centavos.checked_mul(factor).map(Money::new)
    }

    /// Add another Money value, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(self.centavos.saturating_add(other.centavos))
    }

    /// Multiply by a scalar, saturating at the numeric bounds.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.centavos.saturating_mul(factor))
    }

    /// Format as the localized pt-BR currency form (e.g., `R$ 1.234,56`).
    ///
    /// Used everywhere amounts are displayed, and in the cart receipt.
    pub fn display(&self) -> String {
        let abs = self.centavos.unsigned_abs();
        let reais = abs / 100;
        let cents = abs % 100;

        let digits = reais.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        let sign = if self.centavos < 0 { "-" } else { "" };
        format!("{sign}R$ {grouped},{cents:02}")
    }

    /// Format as a locale-agnostic fixed-point amount (e.g., `1234.56`).
    ///
    /// Only the single-product order message uses this form.
    pub fn display_fixed(&self) -> String {
        let abs = self.centavos.unsigned_abs();
        let sign = if self.centavos < 0 { "-" } else { "" };
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(&other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.centavos.saturating_sub(other.centavos))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.saturating_multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_reais() {
        assert_eq!(Money::from_reais(89.90).centavos, 8990);
        assert_eq!(Money::from_reais(12.5).centavos, 1250);
        assert_eq!(Money::from_reais(0.0).centavos, 0);
    }

    #[test]
    fn test_money_display_localized() {
        assert_eq!(Money::new(8990).display(), "R$ 89,90");
        assert_eq!(Money::new(123_456).display(), "R$ 1.234,56");
        assert_eq!(Money::new(100_000_000).display(), "R$ 1.000.000,00");
        assert_eq!(Money::new(5).display(), "R$ 0,05");
        assert_eq!(Money::new(-2500).display(), "-R$ 25,00");
    }

    #[test]
    fn test_money_display_fixed() {
        assert_eq!(Money::new(1250).display_fixed(), "12.50");
        assert_eq!(Money::new(123_456).display_fixed(), "1234.56");
        assert_eq!(Money::new(0).display_fixed(), "0.00");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(500);
        assert_eq!((a + b).centavos, 1500);
        assert_eq!((a - b).centavos, 500);
        assert_eq!((a * 3).centavos, 3000);
    }

    #[test]
    fn test_money_checked_overflow() {
        let max = Money::new(i64::MAX);
        assert!(max.try_add(&Money::new(1)).is_none());
        assert!(max.try_multiply(2).is_none());
        assert_eq!(max.saturating_add(&Money::new(1)).centavos, i64::MAX);
    }
}
