//! Value → SQL literal encoding.
//!
//! | Value | SQL mode | JSON-path mode |
//! |---|---|---|
//! | `None` / [`SqlValue::Null`] | `NULL` | `null` |
//! | integers, `Decimal` | `42` | `42` |
//! | floats | `1.5`, `'NaN'` | `1.5`, `"NaN"` |
//! | `bool` | `TRUE` | `true` |
//! | text (trimmed, empty → null) | `E'it\'s'` | `"it's"` |
//! | bytes | `E'\\x7177'` | `"\\x7177"` |
//! | `Duration` ≤ 24h | `'01:02:03'` | `"01:02:03"` |
//! | timestamps | `'2022-05-31 16:15:42.000234 +0000'` | same, double-quoted |
//! | `Uuid` | `'67e55044-10b1-426f-9247-bb680e5fe0c8'` | double-quoted |
//! | JSON | `E'{"a":1}'` | `{"a":1}` |

mod value;

#[cfg(test)]
mod tests;

pub use value::{Displayed, Json, RawJson, SqlValue, ToSqlValue};

use crate::error::{BindError, BindResult};
use crate::options::BindOptions;
use std::fmt;
use std::time::Duration;

/// `YYYY-MM-DD HH:MM:SS.ffffff +ZZZZ`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f %z";

/// Longest duration accepted by the `HH:MM:SS` form.
pub const MAX_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// A rendered literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    text: String,
    is_text: bool,
}

impl Literal {
    fn plain(text: String) -> Self {
        Self {
            text,
            is_text: false,
        }
    }

    fn quoted(text: String) -> Self {
        Self {
            text,
            is_text: true,
        }
    }

    /// The literal as it appears in SQL.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the value was text-like (string, bytes, time, UUID, JSON).
    pub fn is_text(&self) -> bool {
        self.is_text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render a value as an inline SQL literal with default options.
pub fn to_sql(value: &(impl ToSqlValue + ?Sized)) -> BindResult<String> {
    encode_value(value, BindOptions::default()).map(Literal::into_string)
}

/// Render a value for a JSON-path context.
pub fn to_json_path(value: &(impl ToSqlValue + ?Sized)) -> BindResult<String> {
    encode_value(value, BindOptions::new().json_path()).map(Literal::into_string)
}

/// Convert and render a value.
pub fn encode_value(
    value: &(impl ToSqlValue + ?Sized),
    options: BindOptions,
) -> BindResult<Literal> {
    encode(&value.to_sql_value()?, options)
}

/// Render a [`SqlValue`].
///
/// Fails only for a duration over 24 hours or a text value that cannot be
/// written as a JSON string.
pub fn encode(value: &SqlValue, options: BindOptions) -> BindResult<Literal> {
    let literal = match value {
        SqlValue::Null => null(options),
        SqlValue::Int(v) => Literal::plain(v.to_string()),
        SqlValue::UInt(v) => Literal::plain(v.to_string()),
        SqlValue::Numeric(v) => Literal::plain(v.clone()),
        SqlValue::Float(v) => float(*v, options),
        SqlValue::Bool(v) => Literal::plain(keyword(if *v { "TRUE" } else { "FALSE" }, options)),
        SqlValue::Text(v) => text(v.trim(), options)?,
        SqlValue::Bytes(v) => bytes(v, options),
        SqlValue::Interval(v) => quote_plain(&interval(*v)?, options),
        SqlValue::Timestamp(v) => quote_plain(&v.format(TIMESTAMP_FORMAT).to_string(), options),
        SqlValue::Date(v) => quote_plain(&v.format("%Y-%m-%d").to_string(), options),
        SqlValue::Uuid(v) => quote_plain(&v.hyphenated().to_string(), options),
        // Already a JSON value: never wrapped into a JSON string.
        SqlValue::Json(v) if options.is_json() => {
            if v.trim().is_empty() {
                null(options)
            } else {
                Literal::quoted(v.clone())
            }
        }
        SqlValue::Json(v) => text(v, options)?,
    };
    Ok(literal)
}

fn keyword(word: &str, options: BindOptions) -> String {
    if options.is_json() {
        word.to_ascii_lowercase()
    } else {
        word.to_string()
    }
}

fn null(options: BindOptions) -> Literal {
    Literal::plain(keyword("NULL", options))
}

fn float(v: f64, options: BindOptions) -> Literal {
    if v.is_finite() {
        return Literal::plain(v.to_string());
    }
    let name = if v.is_nan() {
        "NaN"
    } else if v > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    };
    quote_plain(name, options)
}

/// Quote text with the escaping the target context needs. Empty text is null.
fn text(s: &str, options: BindOptions) -> BindResult<Literal> {
    if s.is_empty() {
        return Ok(null(options));
    }
    let quoted = if options.is_json() {
        serde_json::to_string(s)?
    } else if options.extended_strings {
        format!("E'{}'", escape_extended(s))
    } else {
        format!("'{}'", s.replace('\'', "''"))
    };
    Ok(Literal::quoted(quoted))
}

/// Backslashes first, then quotes.
fn escape_extended(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Quote text that never contains quotes or backslashes.
fn quote_plain(s: &str, options: BindOptions) -> Literal {
    if options.is_json() {
        Literal::quoted(format!("\"{s}\""))
    } else {
        Literal::quoted(format!("'{s}'"))
    }
}

fn bytes(v: &[u8], options: BindOptions) -> Literal {
    let hex = hex::encode(v);
    let text = if options.is_json() {
        format!("\"\\\\x{hex}\"")
    } else if options.extended_strings {
        format!("E'\\\\x{hex}'")
    } else {
        format!("'\\x{hex}'")
    };
    Literal::quoted(text)
}

fn interval(d: Duration) -> BindResult<String> {
    if d > MAX_INTERVAL {
        return Err(BindError::UnsupportedDurationRange(d));
    }
    let total = d.as_secs();
    let (h, m, s) = (total / 3600, total / 60 % 60, total % 60);
    Ok(format!("{h:02}:{m:02}:{s:02}"))
}
