use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Display value used whenever the provider supplied no usable salary.
pub const SALARY_NOT_SPECIFIED: &str = "salary not specified";

/// Currency assumed when the provider omits one.
pub const DEFAULT_CURRENCY: &str = "RUR";

/// Phrases that mark a salary as absent, compared case-insensitively.
/// The provider and older stores use the Russian wording.
const NOT_SPECIFIED_PHRASES: [&str; 2] = ["not specified", "не указана"];

/// An amount, allowing whitespace between thousands groups: `100 000`.
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\s\d{3})*").expect("amount pattern is valid"));

/// The last run of letters, followed only by non-letters. Applied to the
/// text after the last amount.
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{L}+)\P{L}*$").expect("currency pattern is valid"));

/// Salary bounds recovered from a display string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SalaryBounds {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

/// Returns true if the text carries one of the "not specified" phrases.
pub fn is_not_specified(text: &str) -> bool {
    let lower = text.to_lowercase();
    NOT_SPECIFIED_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase))
}

/// Normalize raw provider salary data into the canonical display string.
///
/// Accepts nothing at all, a ready-made display string, or an object with
/// optional `from`, `to` and `currency` fields. Anything unusable collapses
/// to [`SALARY_NOT_SPECIFIED`].
pub fn normalize(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(text)) => normalize_text(text),
        Some(Value::Object(obj)) => {
            let from = obj.get("from").and_then(amount);
            let to = obj.get("to").and_then(amount);
            let currency = obj
                .get("currency")
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_CURRENCY);
            format_bounds(from, to, currency)
        }
        _ => SALARY_NOT_SPECIFIED.to_string(),
    }
}

/// Canonicalize salary text that is already in display form.
pub fn normalize_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || is_not_specified(trimmed) {
        SALARY_NOT_SPECIFIED.to_string()
    } else {
        trimmed.to_string()
    }
}

fn format_bounds(from: Option<u64>, to: Option<u64>, currency: &str) -> String {
    match (from, to) {
        (Some(from), Some(to)) => format!("{from}-{to} {currency}"),
        (Some(amount), None) | (None, Some(amount)) => format!("{amount} {currency}"),
        (None, None) => SALARY_NOT_SPECIFIED.to_string(),
    }
}

/// Provider amounts are integers, but fractional or string-typed values
/// occasionally slip through.
fn amount(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => digits_only(s).parse().ok(),
        _ => None,
    }
}

fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric salary used for ranking and range filters.
///
/// Total over all inputs: anything that does not yield a leading integer
/// maps to 0.
pub fn extract_value(display: &str) -> u64 {
    if is_not_specified(display) {
        return 0;
    }

    let kept: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    let first = kept.split('-').next().unwrap_or_default();
    first.parse().unwrap_or(0)
}

/// Recover numeric bounds and currency from a display string.
///
/// The first amount is `from`, the second (after a hyphen or a word such
/// as "до") is `to`, and the currency is the last run of letters after the
/// final amount. A display with a single amount reports it as `from`.
/// Returns all `None` for the sentinel or for text without any number.
pub fn parse_display_to_bounds(display: &str) -> SalaryBounds {
    if is_not_specified(display) {
        return SalaryBounds::default();
    }

    let amounts: Vec<_> = AMOUNT_RE.find_iter(display).collect();
    let Some(last) = amounts.last() else {
        return SalaryBounds::default();
    };
    let number = |m: &regex::Match<'_>| digits_only(m.as_str()).parse::<u64>().ok();
    let from = number(&amounts[0]);
    let to = amounts.get(1).and_then(number);

    let currency = CURRENCY_RE
        .captures(&display[last.end()..])
        .and_then(|caps| caps.get(1))
        .map_or(DEFAULT_CURRENCY, |m| m.as_str());

    SalaryBounds {
        from,
        to,
        currency: Some(currency.to_string()),
    }
}

#[cfg(test)]
#[path = "salary_tests.rs"]
mod tests;
