use sha2::{Digest, Sha256};

use crate::{
    series::builder::{BalancePoint, FlatPolicy, build_balance_series_with},
    transaction::{Transaction, TransactionKind},
};

/// A SHA-256 digest of the contents of an income and expense collection.
type ContentKey = [u8; 32];

struct CacheEntry {
    key: ContentKey,
    points: Vec<BalancePoint>,
}

/// Remembers the most recently built balance series and only rebuilds it when
/// the incomes or expenses change.
///
/// Inputs are compared by content, not by identity: two collections with the
/// same transactions in the same order always share a cache entry, even if
/// they were loaded separately.
pub struct BalanceSeriesCache {
    flat_policy: FlatPolicy,
    entry: Option<CacheEntry>,
}

impl BalanceSeriesCache {
    /// Create an empty cache that builds series with `flat_policy`.
    pub fn new(flat_policy: FlatPolicy) -> Self {
        Self {
            flat_policy,
            entry: None,
        }
    }

    /// Get the balance series for `incomes` and `expenses`, building it only
    /// if the cached series was built from different inputs.
    pub fn get_or_build(
        &mut self,
        incomes: &[Transaction],
        expenses: &[Transaction],
    ) -> &[BalancePoint] {
        let key = content_key(incomes, expenses);

        if self.entry.as_ref().is_some_and(|entry| entry.key == key) {
            tracing::debug!("Balance series cache hit");
        } else {
            tracing::debug!(
                "Balance series cache miss, building series for {} incomes and {} expenses",
                incomes.len(),
                expenses.len()
            );
            self.entry = None;
        }

        let flat_policy = self.flat_policy;
        &self
            .entry
            .get_or_insert_with(|| CacheEntry {
                key,
                points: build_balance_series_with(incomes, expenses, flat_policy),
            })
            .points
    }

    /// Drop the cached series so the next call to
    /// [BalanceSeriesCache::get_or_build] rebuilds it.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

impl Default for BalanceSeriesCache {
    fn default() -> Self {
        Self::new(FlatPolicy::default())
    }
}

fn content_key(incomes: &[Transaction], expenses: &[Transaction]) -> ContentKey {
    let mut hasher = Sha256::new();

    hash_collection(&mut hasher, TransactionKind::Income, incomes);
    hash_collection(&mut hasher, TransactionKind::Expense, expenses);

    hasher.finalize().into()
}

fn hash_collection(hasher: &mut Sha256, kind: TransactionKind, transactions: &[Transaction]) {
    let kind_tag: u8 = match kind {
        TransactionKind::Income => 0,
        TransactionKind::Expense => 1,
    };

    hasher.update([kind_tag]);
    hasher.update((transactions.len() as u64).to_le_bytes());

    for transaction in transactions {
        hasher.update(transaction.date.to_julian_day().to_le_bytes());
        hasher.update(transaction.amount.to_bits().to_le_bytes());
        // Length prefix keeps "ab" + "c" distinct from "a" + "bc".
        hasher.update((transaction.category.len() as u64).to_le_bytes());
        hasher.update(transaction.category.as_bytes());
    }
}
