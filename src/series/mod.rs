//! Running balance series derived from incomes and expenses.
//!
//! [build_balance_series] merges both collections into chronological order
//! and accumulates a running balance, tagging each point with whether the
//! balance went up or down. [BalanceSeriesCache] avoids rebuilding the series
//! when the inputs have not changed.

mod builder;
mod cache;

pub use builder::{
    BalancePoint, Direction, FlatPolicy, build_balance_series, build_balance_series_with,
};
pub use cache::BalanceSeriesCache;
