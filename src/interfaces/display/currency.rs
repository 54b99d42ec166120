use crate::domain::options::DisplayOptions;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("unsupported currency code: {0}")]
    UnsupportedCurrency(String),
}

/// Currencies with a display prefix, following en-US conventions.
const SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CHF", "CHF "),
    ("CNY", "CN¥"),
    ("DKK", "DKK "),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NOK", "NOK "),
    ("NZD", "NZ$"),
    ("PHP", "₱"),
    ("PLN", "PLN "),
    ("SEK", "SEK "),
    ("SGD", "SGD "),
    ("TWD", "NT$"),
    ("USD", "$"),
    ("VND", "₫"),
    ("ZAR", "ZAR "),
];

fn symbol_for(code: &str) -> Option<&'static str> {
    SYMBOLS
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| SYMBOLS[i].1)
}

/// Rounds half away from zero to `decimals` places, padding with zeros.
pub fn round_for_display(value: Decimal, decimals: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // Drop the sign of negative zero.
        rounded = Decimal::ZERO;
    }
    rounded.rescale(decimals);
    rounded
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats monetary amounts for the configured currency and precision.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    currency: String,
    decimals: u32,
}

impl CurrencyFormatter {
    pub fn new(options: &DisplayOptions) -> Self {
        Self {
            currency: options.currency().to_string(),
            decimals: options.decimals(),
        }
    }

    /// Locale-style rendering, e.g. `-$1,234.50`.
    pub fn try_format(&self, amount: Decimal) -> Result<String, FormatError> {
        let symbol = symbol_for(&self.currency)
            .ok_or_else(|| FormatError::UnsupportedCurrency(self.currency.clone()))?;

        let rounded = round_for_display(amount, self.decimals);
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let text = rounded.abs().to_string();
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text.as_str(), None),
        };

        let mut out = format!("{}{}{}", sign, symbol, group_thousands(integer));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        Ok(out)
    }

    /// Plain fixed-precision rendering with no symbol or grouping.
    pub fn format_fixed(&self, amount: Decimal) -> String {
        round_for_display(amount, self.decimals).to_string()
    }

    /// Formats `amount`, falling back to [`format_fixed`](Self::format_fixed)
    /// when the currency cannot be rendered.
    pub fn format(&self, amount: Decimal) -> String {
        self.try_format(amount).unwrap_or_else(|e| {
            debug!(error = %e, "falling back to fixed-precision rendering");
            self.format_fixed(amount)
        })
    }
}

/// Whole-percent rendering, e.g. `55%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", round_for_display(value, 0))
}
