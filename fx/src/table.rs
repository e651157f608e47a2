//! Ordered, immutable table of exchange rates.

use fxlookup_common::{Currency, CurrencyPair, ExchangeRate};

/// Exchange rates in construction order.
///
/// Duplicate pairs are allowed; lookups return the earliest entry. An entry
/// for `A/B` says nothing about `B/A`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: Vec<ExchangeRate>,
}

impl RateTable {
    /// Build a table, keeping the given order.
    pub fn new(rates: Vec<ExchangeRate>) -> Self {
        Self { rates }
    }

    /// First entry whose base and target both match exactly.
    pub fn find(&self, base: &Currency, target: &Currency) -> Option<&ExchangeRate> {
        self.rates
            .iter()
            .find(|rate| rate.pair().matches(base, target))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExchangeRate> {
        self.rates.iter()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Distinct pairs in the order they first appear.
    pub fn pairs(&self) -> Vec<CurrencyPair> {
        let mut pairs: Vec<CurrencyPair> = Vec::with_capacity(self.rates.len());
        for rate in &self.rates {
            if !pairs.contains(rate.pair()) {
                pairs.push(rate.pair().clone());
            }
        }
        pairs
    }
}

impl FromIterator<ExchangeRate> for RateTable {
    fn from_iter<I: IntoIterator<Item = ExchangeRate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RateTable {
    type Item = &'a ExchangeRate;
    type IntoIter = std::slice::Iter<'a, ExchangeRate>;

    fn into_iter(self) -> Self::IntoIter {
        self.rates.iter()
    }
}
