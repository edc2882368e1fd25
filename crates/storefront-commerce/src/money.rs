//! Money type for representing prices.
//!
//! Uses a cents-based integer representation to avoid floating-point
//! drift when prices are summed across a cart. The backend speaks plain
//! decimal numbers (`"price": 1199.99`), so the serde impls convert at the
//! boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::CommerceError;

/// A monetary amount in US dollars, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.cents(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::from_cents((amount * 100.0).round() as i64)
    }

    /// Zero dollars.
    pub const fn zero() -> Self {
        Self::from_cents(0)
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!("{}${}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(&self, quantity: i64) -> Money {
        Money::from_cents(self.cents.saturating_mul(quantity))
    }

    /// Calculate a percentage of this amount, rounded to the nearest cent.
    pub fn percentage(&self, percent: f64) -> Money {
        Money::from_cents((self.cents as f64 * percent / 100.0).round() as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl FromStr for Money {
    type Err = CommerceError;

    /// Parse a user-entered price such as `"100"`, `"199.99"` or `"$25"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('$');
        let amount: f64 = trimmed
            .parse()
            .map_err(|_| CommerceError::InvalidPrice(s.to_string()))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(CommerceError::InvalidPrice(s.to_string()));
        }
        Ok(Money::from_decimal(amount))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(1199.99).cents(), 119999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).cents(), 30);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(4999).display(), "$49.99");
        assert_eq!(Money::from_cents(5).display(), "$0.05");
        assert_eq!(Money::from_cents(-250).display(), "-$2.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let price = Money::from_cents(1000);
        assert_eq!((price * 3).cents(), 3000);
        assert_eq!((price + Money::from_cents(1)).cents(), 1001);

        let total: Money = vec![price, price, Money::from_cents(5)].into_iter().sum();
        assert_eq!(total.cents(), 2005);
    }

    #[test]
    fn test_money_percentage() {
        let subtotal = Money::from_cents(119999);
        // 8% of $1199.99 = $95.9992, rounds to $96.00
        assert_eq!(subtotal.percentage(8.0).cents(), 9600);
    }

    #[test]
    fn test_money_parse() {
        assert_eq!("100".parse::<Money>(), Ok(Money::from_cents(10000)));
        assert_eq!("$24.99".parse::<Money>(), Ok(Money::from_cents(2499)));
        assert!("-5".parse::<Money>().is_err());
        assert!("cheap".parse::<Money>().is_err());
    }

    #[test]
    fn test_money_wire_format() {
        let json = serde_json::to_string(&Money::from_cents(14999)).unwrap();
        assert_eq!(json, "149.99");

        let parsed: Money = serde_json::from_str("89.99").unwrap();
        assert_eq!(parsed.cents(), 8999);

        let whole: Money = serde_json::from_str("100").unwrap();
        assert_eq!(whole.cents(), 10000);
    }
}
