use serde_json::{Value, json};

use crate::{
    format::{CurrencyFormat, format_date_label},
    series::BalancePoint,
};

/// The text shown when hovering over a point on the balance chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    /// The first line, e.g. "Date: 02/01/2024".
    pub title: String,
    /// The balance, the transaction amount and the category, one per line.
    pub lines: Vec<String>,
}

impl TooltipContent {
    /// Create the tooltip for `point`, writing money with `currency`.
    pub fn for_point(point: &BalancePoint, currency: &CurrencyFormat) -> Self {
        Self {
            title: format!("Date: {}", format_date_label(point.date)),
            lines: vec![
                format!("Balance: {}", currency.format(point.balance)),
                format!("{}: {}", point.kind, currency.format(point.amount)),
                format!("Category: {}", point.category),
            ],
        }
    }

    pub(super) fn to_json(&self) -> Value {
        json!({
            "title": self.title,
            "lines": self.lines,
        })
    }
}
