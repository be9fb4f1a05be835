//! Flight record entity and field values

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Flight duration field
pub const AIR_TIME: &str = "AIR_TIME";
/// Flight distance field
pub const DISTANCE: &str = "DISTANCE";
/// Flight date field
pub const FL_DATE: &str = "FL_DATE";

/// A single schema-less flight record.
///
/// Keeps every key from the input so unknown fields survive parsing.
/// A JSON value that is not an object becomes a record with no fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct FlightRecord {
    fields: Map<String, Value>,
}

impl FlightRecord {
    /// Create a record from an object map
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Look up a field by name
    pub fn field(&self, key: &str) -> FieldValue<'_> {
        match self.fields.get(key) {
            Some(value) => FieldValue::Present(value),
            None => FieldValue::Missing,
        }
    }

    /// `AIR_TIME` field
    pub fn air_time(&self) -> FieldValue<'_> {
        self.field(AIR_TIME)
    }

    /// `DISTANCE` field
    pub fn distance(&self) -> FieldValue<'_> {
        self.field(DISTANCE)
    }

    /// `FL_DATE` field
    pub fn flight_date(&self) -> FieldValue<'_> {
        self.field(FL_DATE)
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Value> for FlightRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self::new(fields),
            _ => Self::default(),
        }
    }
}

/// Result of a field lookup: either a JSON value (possibly `null`) or nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Missing,
    Present(&'a Value),
}

impl FieldValue<'_> {
    /// Loose truthiness: missing, `null`, `false`, `0` and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Missing => false,
            FieldValue::Present(value) => match value {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                Value::String(s) => !s.is_empty(),
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }

    /// Numeric view of the value, coercing numeric strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Missing => None,
            FieldValue::Present(value) => match value {
                Value::Null => Some(0.0),
                Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
                Value::Number(n) => n.as_f64(),
                Value::String(s) => parse_numeric_string(s),
                Value::Array(_) | Value::Object(_) => None,
            },
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing => f.write_str("undefined"),
            FieldValue::Present(Value::String(s)) => f.write_str(s),
            FieldValue::Present(Value::Number(n)) => {
                if n.is_i64() || n.is_u64() {
                    write!(f, "{}", n)
                } else {
                    match n.as_f64() {
                        Some(v) => write_float(f, v),
                        None => write!(f, "{}", n),
                    }
                }
            }
            // null, booleans, arrays and objects print as compact JSON
            FieldValue::Present(value) => write!(f, "{}", value),
        }
    }
}

/// Loose string-to-number coercion.
///
/// Blank text is `0`, `Infinity` is spelled out, and `0x`/`0o`/`0b` prefixes
/// select a radix. Rust-only spellings like `inf` or `nan` are rejected.
fn parse_numeric_string(s: &str) -> Option<f64> {
    let s = s.trim();
    match s {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u128::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }

    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    s.parse().ok()
}

/// Integral floats print without a fractional part (`50.0` -> `50`).
/// Magnitudes from 1e21 up or below 1e-6 use exponent form (`1e+21`, `1e-7`).
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v == 0.0 {
        f.write_str("0")
    } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
        let repr = format!("{:e}", v);
        match repr.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exp)
            }
            _ => f.write_str(&repr),
        }
    } else if v.fract() == 0.0 {
        write!(f, "{:.0}", v)
    } else {
        write!(f, "{}", v)
    }
}
