//! Record formatting.
//!
//! Turns one record into a hash literal such as
//! `{string: "string", integer: 42, boolean: false}`. The output is compared
//! byte for byte by consumers, so every value kind has exactly one rendering.

use std::collections::HashSet;
use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DATETIME_FORMAT, DATE_FORMAT, NIL_LITERAL, TIME_REFERENCE_DATE};
use crate::error_handling::DumpError;
use crate::record::{Record, Value};

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";
const DECIMAL_PATTERN: &str = r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$";

/// Compiles a static regex pattern, panicking with context if it is invalid.
/// Only used for compile-time constant patterns.
pub(crate) fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IDENTIFIER_PATTERN, "IDENTIFIER_RE"));
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(DECIMAL_PATTERN, "DECIMAL_RE"));

/// Formats `record` as a hash literal, leaving out every attribute in `exclude`.
///
/// Attributes keep their natural order. Names in `exclude` that the record
/// does not have are ignored.
///
/// # Errors
///
/// Returns `DumpError::Format` for a value that has no literal form (a NaN
/// float, a decimal that is not a number).
pub fn format_record(record: &Record, exclude: &HashSet<String>) -> Result<String, DumpError> {
    let mut pairs = Vec::with_capacity(record.len());
    for (name, value) in record.iter().filter(|(name, _)| !exclude.contains(*name)) {
        pairs.push(format!("{}: {}", format_key(name), format_value(name, value)?));
    }
    Ok(format!("{{{}}}", pairs.join(", ")))
}

/// Plain identifiers become symbol keys (`name:`); anything else is quoted (`"first name":`).
fn format_key(name: &str) -> String {
    if IDENTIFIER_RE.is_match(name) {
        name.to_string()
    } else {
        quote_str(name)
    }
}

/// Renders a single value. `attribute` is only used in error messages.
pub fn format_value(attribute: &str, value: &Value) -> Result<String, DumpError> {
    let rendered = match value {
        Value::String(s) => quote_str(s),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => {
            if !f.is_finite() {
                return Err(DumpError::format(
                    attribute,
                    value.type_name(),
                    format!("{f} has no literal form"),
                ));
            }
            float_literal(*f)
        }
        Value::Decimal(d) => {
            if !DECIMAL_RE.is_match(d) {
                return Err(DumpError::format(
                    attribute,
                    value.type_name(),
                    format!("{d:?} is not a decimal number"),
                ));
            }
            quote_str(d)
        }
        Value::DateTime(dt) => quote_str(&dt.format(DATETIME_FORMAT).to_string()),
        Value::Time(t) => {
            let (year, month, day) = TIME_REFERENCE_DATE;
            quote_str(&format!(
                "{year:04}-{month:02}-{day:02} {}",
                t.format("%H:%M:%S")
            ))
        }
        Value::Date(d) => quote_str(&d.format(DATE_FORMAT).to_string()),
        Value::Binary(bytes) => quote_bytes(bytes),
        Value::Boolean(b) => b.to_string(),
        Value::Null => NIL_LITERAL.to_string(),
    };
    Ok(rendered)
}

/// Renders a finite float so the mantissa always has a fractional part:
/// `42.0`, `3.14`, `1.0e+16`, `1.5e-05`.
fn float_literal(f: f64) -> String {
    // Debug switches to exponent form below 1e-4 and from 1e16 on.
    let repr = format!("{f:?}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.to_string()
    } else {
        format!("{mantissa}.0")
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Double-quotes `s`, escaping what would otherwise end or change the literal.
fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        push_escaped(&mut out, c, next);
    }
    out.push('"');
    out
}

/// Like `quote_str`, with bytes outside ASCII written as `\xNN`.
fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for (i, &b) in bytes.iter().enumerate() {
        if b.is_ascii() {
            let next = bytes.get(i + 1).map(|&n| char::from(n));
            push_escaped(&mut out, char::from(b), next);
        } else {
            let _ = write!(out, "\\x{b:02X}");
        }
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, c: char, next: Option<char>) {
    match c {
        '"' => out.push_str("\\\""),
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        // "#{", "#$" and "#@" would interpolate inside a double-quoted literal.
        '#' if matches!(next, Some('{' | '$' | '@')) => out.push_str("\\#"),
        c if c.is_control() => {
            let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
        }
        c => out.push(c),
    }
}
