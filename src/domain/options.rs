use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_DECIMALS: u32 = 0;
/// Largest display precision accepted from configuration.
pub const MAX_DECIMALS: u32 = 20;

/// How results are rendered: the currency code and the display precision.
///
/// Construction never fails. Anything malformed falls back to the default for
/// that option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayOptions {
    currency: String,
    decimals: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl DisplayOptions {
    pub fn new(currency: &str, decimals: i64) -> Self {
        Self::default().with_currency(currency).with_decimals(decimals)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Entered amounts are normalized to whole units when no fractional
    /// digits are displayed.
    pub fn whole_units(&self) -> bool {
        self.decimals == 0
    }

    /// Replaces the currency if `code` is a well-formed ISO 4217 code.
    pub fn with_currency(mut self, code: &str) -> Self {
        match normalize_currency(code) {
            Some(code) => self.currency = code,
            None => debug!(code, "ignoring malformed currency code"),
        }
        self
    }

    /// Replaces the precision if `decimals` is within `0..=MAX_DECIMALS`.
    pub fn with_decimals(mut self, decimals: i64) -> Self {
        match u32::try_from(decimals) {
            Ok(decimals) if decimals <= MAX_DECIMALS => self.decimals = decimals,
            _ => debug!(decimals, "ignoring out of range decimals"),
        }
        self
    }

    /// Applies an embedding configuration object such as
    /// `{"currency":"EUR","decimals":2}` on top of `self`.
    ///
    /// Unknown keys are ignored, malformed values keep the current setting and
    /// malformed JSON leaves `self` unchanged.
    pub fn merge_json(self, json: &str) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => self.merge_value(&value),
            Err(e) => {
                debug!(error = %e, "ignoring malformed options JSON");
                self
            }
        }
    }

    pub fn merge_value(mut self, value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            debug!("ignoring options that are not an object");
            return self;
        };
        if let Some(currency) = object.get("currency") {
            match currency.as_str() {
                Some(code) => self = self.with_currency(code),
                None => debug!("ignoring non-string currency"),
            }
        }
        if let Some(decimals) = object.get("decimals") {
            match decimals.as_i64() {
                Some(decimals) => self = self.with_decimals(decimals),
                None => debug!("ignoring non-integer decimals"),
            }
        }
        self
    }

    pub fn from_json(json: &str) -> Self {
        Self::default().merge_json(json)
    }
}

fn normalize_currency(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}
