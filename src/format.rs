//! Formatting of dates and currency amounts for chart labels and tooltips.

use time::Date;

/// The currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Formats a date as a chart axis label, e.g. "02/01/2024" for 2 January 2024.
pub fn format_date_label(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Formats amounts of money with a currency symbol and two decimal places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
}

impl CurrencyFormat {
    /// Create a currency format that prefixes amounts with `symbol`.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_owned(),
        }
    }

    /// The currency symbol placed in front of formatted amounts.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Formats `amount` with two decimal places, e.g. "₹1234.50".
    ///
    /// Negative amounts keep their sign after the symbol, e.g. "₹-60.00".
    /// Amounts that round to zero are never shown with a sign.
    pub fn format(&self, amount: f64) -> String {
        let rounded = (amount * 100.0).round() / 100.0;
        // Rounding small negative amounts gives -0.0, which would print as "-0.00".
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };

        format!("{}{:.2}", self.symbol, rounded)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{CurrencyFormat, format_date_label};

    #[test]
    fn date_label_is_day_month_year() {
        assert_eq!(format_date_label(date!(2024 - 01 - 02)), "02/01/2024");
        assert_eq!(format_date_label(date!(2023 - 12 - 31)), "31/12/2023");
    }

    #[test]
    fn formats_positive_amount_with_two_decimals() {
        let currency = CurrencyFormat::default();

        assert_eq!(currency.format(100.0), "₹100.00");
        assert_eq!(currency.format(12.3), "₹12.30");
        assert_eq!(currency.format(0.005), "₹0.01");
    }

    #[test]
    fn formats_negative_amount_with_sign_after_symbol() {
        let currency = CurrencyFormat::default();

        assert_eq!(currency.format(-60.0), "₹-60.00");
        assert_eq!(currency.format(-0.5), "₹-0.50");
    }

    #[test]
    fn formats_zero_without_sign() {
        let currency = CurrencyFormat::new("$");

        assert_eq!(currency.format(0.0), "$0.00");
        assert_eq!(currency.format(-0.001), "$0.00");
    }

    #[test]
    fn uses_configured_symbol() {
        let currency = CurrencyFormat::new("NZ$");

        assert_eq!(currency.symbol(), "NZ$");
        assert_eq!(currency.format(5.0), "NZ$5.00");
    }
}
