use time::Date;

use crate::transaction::{Transaction, TransactionKind};

/// How the running balance moved relative to the previous point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The balance increased, or this is the first point.
    Up,
    /// The balance decreased. Under [FlatPolicy::CollapseToDown] this also
    /// covers a balance that did not change.
    Down,
    /// The balance did not change, only produced by [FlatPolicy::Distinguish].
    Flat,
}

/// How to classify a point whose balance equals the previous point's balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlatPolicy {
    /// An unchanged balance is classified as [Direction::Down], i.e. anything
    /// that is not an increase counts as a decrease.
    #[default]
    CollapseToDown,
    /// An unchanged balance is classified as [Direction::Flat].
    Distinguish,
}

impl FlatPolicy {
    fn classify(self, previous_balance: f64, balance: f64) -> Direction {
        if balance > previous_balance {
            Direction::Up
        } else if balance == previous_balance && self == FlatPolicy::Distinguish {
            Direction::Flat
        } else {
            Direction::Down
        }
    }
}

/// The running balance immediately after a transaction, along with the
/// details of the transaction that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct BalancePoint {
    /// The date of the transaction.
    pub date: Date,
    /// The sum of all signed transaction amounts up to and including this one.
    pub balance: f64,
    /// How the balance moved compared to the previous point.
    pub direction: Direction,
    /// Whether the transaction was an income or an expense.
    pub kind: TransactionKind,
    /// The category of the transaction.
    pub category: String,
    /// The unsigned amount of the transaction.
    pub amount: f64,
}

/// Builds the running balance series for `incomes` and `expenses` using the
/// default [FlatPolicy].
///
/// See [build_balance_series_with] for the details.
pub fn build_balance_series(
    incomes: &[Transaction],
    expenses: &[Transaction],
) -> Vec<BalancePoint> {
    build_balance_series_with(incomes, expenses, FlatPolicy::default())
}

/// Builds the running balance series for `incomes` and `expenses`.
///
/// Every transaction in `incomes` is treated as an income and every
/// transaction in `expenses` as an expense, regardless of its
/// [Transaction::kind]. The two collections are concatenated (incomes first)
/// and sorted by date with a stable sort, so transactions on the same date
/// keep their input order.
///
/// The first point always has the direction [Direction::Up]. Each later
/// point is [Direction::Up] if its balance is greater than the previous
/// balance, otherwise it is classified according to `flat_policy`.
///
/// Amounts are not validated.
pub fn build_balance_series_with(
    incomes: &[Transaction],
    expenses: &[Transaction],
    flat_policy: FlatPolicy,
) -> Vec<BalancePoint> {
    let mut transactions: Vec<(&Transaction, TransactionKind)> = incomes
        .iter()
        .map(|transaction| (transaction, TransactionKind::Income))
        .chain(
            expenses
                .iter()
                .map(|transaction| (transaction, TransactionKind::Expense)),
        )
        .collect();

    transactions.sort_by_key(|(transaction, _)| transaction.date);

    let mut points: Vec<BalancePoint> = Vec::with_capacity(transactions.len());
    let mut balance = 0.0;

    for (transaction, kind) in transactions {
        balance += kind.signed_amount(transaction.amount);

        let direction = match points.last() {
            Some(previous) => flat_policy.classify(previous.balance, balance),
            None => Direction::Up,
        };

        points.push(BalancePoint {
            date: transaction.date,
            balance,
            direction,
            kind,
            category: transaction.category.clone(),
            amount: transaction.amount,
        });
    }

    points
}
