//! Filter used to narrow a transaction listing.

use super::transaction::Transaction;

/// A conjunction of optional constraints.
///
/// Each field that is `Some` contributes one clause; `None` fields contribute
/// nothing at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub category: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

/// A single constraint of a [`TransactionFilter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    CategoryEquals(String),
    AmountAtLeast(f64),
    AmountAtMost(f64),
}

impl TransactionFilter {
    /// The clauses this filter is made of, in a stable order.
    pub fn clauses(&self) -> Vec<Clause> {
        let mut clauses = Vec::new();

        if let Some(ref category) = self.category {
            clauses.push(Clause::CategoryEquals(category.clone()));
        }
        if let Some(min) = self.min_amount {
            clauses.push(Clause::AmountAtLeast(min));
        }
        if let Some(max) = self.max_amount {
            clauses.push(Clause::AmountAtMost(max));
        }

        clauses
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.clauses().iter().all(|clause| clause.matches(transaction))
    }
}

impl Clause {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            Clause::CategoryEquals(category) => transaction.category == *category,
            Clause::AmountAtLeast(min) => transaction.amount >= *min,
            Clause::AmountAtMost(max) => transaction.amount <= *max,
        }
    }
}
