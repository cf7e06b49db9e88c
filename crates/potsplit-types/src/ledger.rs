//! Debt model: who owes how much to whom.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single payment owed to one creditor, in cents. The debtor is the key
/// under which the debt is filed in the [`DebtLedger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    /// Name of the person to whom money is owed.
    pub creditor: String,
    /// Amount owed, in cents. Always positive.
    pub amount: i64,
}

impl Debt {
    /// Create a debt entry.
    #[must_use]
    pub fn new(creditor: impl Into<String>, amount: i64) -> Self {
        Self {
            creditor: creditor.into(),
            amount,
        }
    }
}

/// All debts of a settlement, grouped by debtor name.
///
/// Only debtors appear as keys — a participant who broke even or came out
/// ahead has no entry. Each debtor's list keeps the order in which the
/// settlement engine generated the debts, so output is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebtLedger(BTreeMap<String, Vec<Debt>>);

impl DebtLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// File a debt under the given debtor, appending to their list.
    pub fn record(&mut self, debtor: impl Into<String>, debt: Debt) {
        self.0.entry(debtor.into()).or_default().push(debt);
    }

    /// The debts owed by one debtor, in generation order.
    #[must_use]
    pub fn debts_of(&self, debtor: &str) -> Option<&[Debt]> {
        self.0.get(debtor).map(Vec::as_slice)
    }

    /// Iterate over `(debtor, debts)` pairs, sorted by debtor name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Debt])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Whether no debts were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of individual payments across all debtors.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Sum of everything one debtor owes, in cents.
    #[must_use]
    pub fn total_owed_by(&self, debtor: &str) -> i64 {
        self.0
            .get(debtor)
            .map_or(0, |debts| debts.iter().map(|d| d.amount).sum())
    }

    /// Sum of everything owed to one creditor across all debtors, in cents.
    #[must_use]
    pub fn total_owed_to(&self, creditor: &str) -> i64 {
        self.0
            .values()
            .flatten()
            .filter(|d| d.creditor == creditor)
            .map(|d| d.amount)
            .sum()
    }
}
