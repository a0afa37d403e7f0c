//! Income and expense records and the functions that read them from JSON or
//! CSV documents.

use std::{fmt::Display, fs, path::Path};

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Whether a transaction earned or spent money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Money earned, adds to the balance.
    Income,
    /// Money spent, subtracts from the balance.
    Expense,
}

impl TransactionKind {
    /// The amount with the sign this kind of transaction contributes to a
    /// running balance.
    pub fn signed_amount(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

/// An income or expense, i.e. an event where money was either earned or spent.
///
/// The amount is always positive, the direction of the money comes from
/// [Transaction::kind].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money earned or spent.
    pub amount: f64,
    /// What the money was earned from or spent on, e.g. "Salary" or "Food".
    pub category: String,
    /// Whether the money was earned or spent.
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction where `amount` was earned.
    pub fn income(date: Date, amount: f64, category: &str) -> Self {
        Self {
            date,
            amount,
            category: category.to_owned(),
            kind: TransactionKind::Income,
        }
    }

    /// Create a transaction where `amount` was spent.
    pub fn expense(date: Date, amount: f64, category: &str) -> Self {
        Self {
            date,
            amount,
            category: category.to_owned(),
            kind: TransactionKind::Expense,
        }
    }

    /// The amount this transaction adds to a running balance.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed_amount(self.amount)
    }
}

/// A transaction as it is stored by the application: a date string, an
/// amount and a category.
///
/// Whether the record is an income or an expense depends on which
/// collection it came from, see [TransactionRecord::into_transaction].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    /// The date as `YYYY-MM-DD` or an ISO 8601 timestamp.
    pub date: String,
    /// The amount of money earned or spent.
    pub amount: f64,
    /// What the money was earned from or spent on.
    pub category: String,
}

impl TransactionRecord {
    /// Convert the record into a [Transaction] of the given kind.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] if the date string is not a valid date.
    pub fn into_transaction(self, kind: TransactionKind) -> Result<Transaction, Error> {
        let date = parse_date(&self.date)?;

        Ok(Transaction {
            date,
            amount: self.amount,
            category: self.category,
            kind,
        })
    }
}

/// Parses a record date, accepting either a plain `YYYY-MM-DD` date or a
/// timestamp such as `2024-01-01T00:00:00.000Z`, of which only the date part
/// is kept.
fn parse_date(text: &str) -> Result<Date, Error> {
    let trimmed = text.trim();
    let date_part = trimmed
        .split_once(['T', ' '])
        .map_or(trimmed, |(date, _)| date);

    Date::parse(date_part, DATE_FORMAT).map_err(|error| Error::InvalidDate {
        date: text.to_owned(),
        reason: error.to_string(),
    })
}

/// Parses a JSON array of transaction records and tags each with `kind`.
///
/// # Errors
/// Returns [Error::InvalidJson] if `text` is not an array of records, or
/// [Error::InvalidDate] if any record has an invalid date.
pub fn parse_json_records(text: &str, kind: TransactionKind) -> Result<Vec<Transaction>, Error> {
    let records: Vec<TransactionRecord> =
        serde_json::from_str(text).map_err(|error| Error::InvalidJson(error.to_string()))?;

    records
        .into_iter()
        .map(|record| record.into_transaction(kind))
        .collect()
}

/// Parses CSV data with the header `date,amount,category` and tags each row
/// with `kind`.
///
/// # Errors
/// Returns [Error::InvalidCsv] if a row does not match the header, or
/// [Error::InvalidDate] if any row has an invalid date.
pub fn parse_csv_records(text: &str, kind: TransactionKind) -> Result<Vec<Transaction>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader
        .deserialize::<TransactionRecord>()
        .map(|row| {
            row.map_err(|error| Error::InvalidCsv(error.to_string()))?
                .into_transaction(kind)
        })
        .collect()
}

/// Reads the transactions in the file at `path`, choosing the parser from
/// the file extension (`.json` or `.csv`).
///
/// # Errors
/// Returns [Error::UnsupportedFormat] for any other extension,
/// [Error::Io] if the file cannot be read, or the parser's error otherwise.
pub fn load_transactions(path: &Path, kind: TransactionKind) -> Result<Vec<Transaction>, Error> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str, TransactionKind) -> Result<Vec<Transaction>, Error> =
        match extension.as_str() {
            "json" => parse_json_records,
            "csv" => parse_csv_records,
            _ => return Err(Error::UnsupportedFormat(path.display().to_string())),
        };

    let text = fs::read_to_string(path)
        .inspect_err(|error| tracing::error!("could not read {}: {error}", path.display()))?;
    let transactions = parse(&text, kind)?;

    tracing::debug!(
        "Loaded {} {kind} records from {}",
        transactions.len(),
        path.display()
    );

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use time::macros::date;

    use super::{
        Transaction, TransactionKind, TransactionRecord, load_transactions, parse_csv_records,
        parse_date, parse_json_records,
    };
    use crate::Error;

    #[test]
    fn signed_amount_is_negative_for_expenses() {
        let income = Transaction::income(date!(2024 - 01 - 01), 100.0, "Salary");
        let expense = Transaction::expense(date!(2024 - 01 - 02), 40.0, "Food");

        assert_eq!(income.signed_amount(), 100.0);
        assert_eq!(expense.signed_amount(), -40.0);
    }

    #[test]
    fn parses_plain_date() {
        assert_eq!(parse_date("2024-03-15"), Ok(date!(2024 - 03 - 15)));
    }

    #[test]
    fn parses_date_part_of_timestamp() {
        assert_eq!(
            parse_date("2024-03-15T09:30:00.000Z"),
            Ok(date!(2024 - 03 - 15))
        );
        assert_eq!(parse_date("2024-03-15 09:30:00"), Ok(date!(2024 - 03 - 15)));
    }

    #[test]
    fn rejects_invalid_date() {
        let result = parse_date("15/03/2024");

        assert!(
            matches!(result, Err(Error::InvalidDate { ref date, .. }) if date == "15/03/2024"),
            "Got {result:?}"
        );
    }

    #[test]
    fn rejects_impossible_date() {
        assert!(matches!(
            parse_date("2024-02-30"),
            Err(Error::InvalidDate { .. })
        ));
    }

    #[test]
    fn record_converts_into_tagged_transaction() {
        let record = TransactionRecord {
            date: "2024-01-02".to_owned(),
            amount: 40.0,
            category: "Food".to_owned(),
        };

        let transaction = record.into_transaction(TransactionKind::Expense);

        assert_eq!(
            transaction,
            Ok(Transaction::expense(date!(2024 - 01 - 02), 40.0, "Food"))
        );
    }

    #[test]
    fn parses_json_records() {
        let text = r#"[
            {"date": "2024-01-01", "amount": 100, "category": "Salary"},
            {"date": "2024-01-15T00:00:00.000Z", "amount": 25.5, "category": "Freelance"}
        ]"#;

        let transactions = parse_json_records(text, TransactionKind::Income).unwrap();

        assert_eq!(
            transactions,
            vec![
                Transaction::income(date!(2024 - 01 - 01), 100.0, "Salary"),
                Transaction::income(date!(2024 - 01 - 15), 25.5, "Freelance"),
            ]
        );
    }

    #[test]
    fn parses_empty_json_array() {
        let transactions = parse_json_records("[]", TransactionKind::Income).unwrap();

        assert!(transactions.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let result = parse_json_records(r#"{"date": "2024-01-01"}"#, TransactionKind::Income);

        assert!(matches!(result, Err(Error::InvalidJson(_))), "Got {result:?}");
    }

    #[test]
    fn json_record_with_invalid_date_fails() {
        let text = r#"[{"date": "yesterday", "amount": 10, "category": "Food"}]"#;

        let result = parse_json_records(text, TransactionKind::Expense);

        assert!(matches!(result, Err(Error::InvalidDate { .. })), "Got {result:?}");
    }

    #[test]
    fn parses_csv_records() {
        let text = "date,amount,category\n2024-01-02, 40.00, Food\n2024-01-03,12.5,Transport\n";

        let transactions = parse_csv_records(text, TransactionKind::Expense).unwrap();

        assert_eq!(
            transactions,
            vec![
                Transaction::expense(date!(2024 - 01 - 02), 40.0, "Food"),
                Transaction::expense(date!(2024 - 01 - 03), 12.5, "Transport"),
            ]
        );
    }

    #[test]
    fn rejects_csv_with_non_numeric_amount() {
        let text = "date,amount,category\n2024-01-02,forty,Food\n";

        let result = parse_csv_records(text, TransactionKind::Expense);

        assert!(matches!(result, Err(Error::InvalidCsv(_))), "Got {result:?}");
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let result = load_transactions(Path::new("incomes.txt"), TransactionKind::Income);

        assert_eq!(
            result,
            Err(Error::UnsupportedFormat("incomes.txt".to_owned()))
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "balance-trend-missing-{}.json",
            std::process::id()
        ));

        let result = load_transactions(&path, TransactionKind::Income);

        assert!(matches!(result, Err(Error::Io(_))), "Got {result:?}");
    }

    #[test]
    fn load_reads_json_file() {
        let path = std::env::temp_dir().join(format!(
            "balance-trend-load-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"[{"date": "2024-05-01", "amount": 10, "category": "Gift"}]"#,
        )
        .unwrap();

        let transactions = load_transactions(&path, TransactionKind::Income).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            transactions,
            vec![Transaction::income(date!(2024 - 05 - 01), 10.0, "Gift")]
        );
    }
}
