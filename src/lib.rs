//! Balance trend is a small library for charting how a personal budget's
//! running balance moves over time.
//!
//! Incomes and expenses are merged into a single chronological series of
//! [BalancePoint]s, which can then be rendered as an interactive ECharts line
//! chart with [balance_chart] or as a standalone HTML page with [chart_page].

#![warn(missing_docs)]

mod chart;
mod format;
mod series;
mod transaction;

pub use chart::{
    ChartSettings, DEFAULT_ECHARTS_SRC, PointStyle, TooltipContent, balance_chart, chart_page,
};
pub use format::{CurrencyFormat, DEFAULT_CURRENCY_SYMBOL, format_date_label};
pub use series::{
    BalancePoint, BalanceSeriesCache, Direction, FlatPolicy, build_balance_series,
    build_balance_series_with,
};
pub use transaction::{
    Transaction, TransactionKind, TransactionRecord, load_transactions, parse_csv_records,
    parse_json_records,
};

/// The errors that may occur while loading transactions or writing charts.
///
/// Building a balance series never fails, so every variant relates to the
/// input and output boundaries.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction record had a date that could not be parsed.
    ///
    /// Callers should pass in the offending date string and the reason it
    /// was rejected.
    #[error("could not parse transaction date \"{date}\": {reason}")]
    InvalidDate {
        /// The date string as it appeared in the record.
        date: String,
        /// Why the date was rejected.
        reason: String,
    },

    /// The JSON document could not be parsed as a list of transaction records.
    #[error("could not parse the JSON document: {0}")]
    InvalidJson(String),

    /// The CSV document could not be parsed as a list of transaction records.
    #[error("could not parse the CSV file: {0}")]
    InvalidCsv(String),

    /// The input file extension does not match a supported format.
    #[error("unsupported file format \"{0}\", expected a .json or .csv file")]
    UnsupportedFormat(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}
