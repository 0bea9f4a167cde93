//! Monetary value object.

use core::any::Any;

use serde::{Deserialize, Serialize};

use bookwire_core::{DomainError, DomainResult, Field, HashCache, StructuralValue};

/// Currency codes reachable through the named factories.
const SUPPORTED_CURRENCIES: [&str; 2] = ["DKK", "USD"];

/// An amount of money in a single currency.
///
/// Amounts are in minor units (cents, øre). There is no public generic
/// constructor: values come from the named currency factories or from the
/// validating [`Money::parse`], and the currency code is normalized to
/// uppercase, so `"usd"` and `"USD"` denote the same currency.
///
/// serde round-trips through a validating representation, so a payload cannot
/// smuggle in an unnormalized or unknown currency code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    amount_minor: i64,
    currency: String,
    hash: HashCache,
}

impl Money {
    fn new(amount_minor: i64, currency: &str) -> Self {
        Self {
            amount_minor,
            currency: currency.to_ascii_uppercase(),
            hash: HashCache::new(),
        }
    }

    /// US dollars, amount in cents.
    pub fn usd(amount_minor: i64) -> Self {
        Self::new(amount_minor, "USD")
    }

    /// Danish kroner, amount in øre.
    pub fn dkk(amount_minor: i64) -> Self {
        Self::new(amount_minor, "DKK")
    }

    /// Validating constructor for payload reconstruction.
    ///
    /// Normalizes the currency code and rejects codes outside
    /// the supported set.
    pub fn parse(amount_minor: i64, currency: &str) -> DomainResult<Self> {
        let code = currency.to_ascii_uppercase();
        if !SUPPORTED_CURRENCIES.contains(&code.as_str()) {
            return Err(DomainError::unknown_currency(currency));
        }
        Ok(Self {
            amount_minor,
            currency: code,
            hash: HashCache::new(),
        })
    }

    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl StructuralValue for Money {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn structural_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::Int(self.amount_minor),
            Field::Text(self.currency.as_str()),
        ]
    }

    fn hash_cache(&self) -> &HashCache {
        &self.hash
    }
}

bookwire_core::value_object!(Money);

#[derive(Serialize, Deserialize)]
struct MoneyRepr {
    amount_minor: i64,
    currency: String,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = DomainError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Money::parse(repr.amount_minor, &repr.currency)
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self {
            amount_minor: money.amount_minor,
            currency: money.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookwire_core::structural_hash;

    #[test]
    fn currency_is_normalized_to_uppercase() {
        let lower = Money::parse(100_00, "usd").unwrap();
        let upper = Money::usd(100_00);

        assert_eq!(lower.currency(), "USD");
        assert_eq!(lower, upper);
        assert_eq!(structural_hash(&lower), structural_hash(&upper));
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let err = Money::parse(100, "XYZ").unwrap_err();
        assert!(matches!(err, DomainError::UnknownCurrency(_)));
    }

    #[test]
    fn equality_is_by_amount_and_currency() {
        assert_eq!(Money::usd(50), Money::usd(50));
        assert_ne!(Money::usd(50), Money::usd(51));
        assert_ne!(Money::usd(50), Money::dkk(50));
    }
}
