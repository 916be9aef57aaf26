//! Value type definitions for QueryMate datasets.
//!
//! This module defines the `Value` enum, the raw scalar held by a dataset
//! cell: `string | number | boolean | null`.

use crate::pattern_match::is_date_prefix;
use crate::types::DataType;
use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A raw value stored in a dataset cell.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Null, also used for keys missing from a record.
    #[default]
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integral number
    Int64(i64),
    /// Floating point number
    Float64(f64),
    /// UTF-8 string
    String(String),
}

impl Value {
    /// Returns true if this value is Null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for Null and for the empty string.
    ///
    /// Schema inference skips such values when sampling a column.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the boolean value if this is a Boolean, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the i64 value if this is an Int64, None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as f64 if this is any number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Returns the string form of a non-null value.
    ///
    /// This is the text predicates compare against.
    pub fn string_form(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Returns the column type this value suggests, or None for an empty value.
    ///
    /// Numbers with no fractional part are integers regardless of how they
    /// are stored.
    pub fn inferred_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(DataType::Boolean),
            Value::Int64(_) => Some(DataType::Integer),
            Value::Float64(f) => {
                if is_whole(*f) {
                    Some(DataType::Integer)
                } else {
                    Some(DataType::Decimal)
                }
            }
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => {
                if is_date_prefix(s) {
                    Some(DataType::Date)
                } else {
                    Some(DataType::String)
                }
            }
        }
    }

    /// Returns a type ordering value for comparing different kinds.
    fn type_order(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Boolean(_) => 1,
            Value::Int64(_) | Value::Float64(_) => 2,
            Value::String(_) => 3,
        }
    }
}

/// Returns true for finite floats without a fractional part.
#[inline]
fn is_whole(f: f64) -> bool {
    f.is_finite() && libm::trunc(f) == f
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    // NaN sorts after every other number
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl fmt::Display for Value {
    /// Null renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int64(i) => write!(f, "{}", i),
            Value::Float64(v) if v.is_nan() => f.write_str("NaN"),
            Value::Float64(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Float64(v) => write_float(f, *v),
            Value::String(s) => f.write_str(s),
        }
    }
}

/// Writes a finite float in shortest round-trip form, switching to exponent
/// notation outside `[1e-6, 1e21)` the way JavaScript number strings do.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v == 0.0 {
        return f.write_str("0");
    }
    if (1e-6..1e21).contains(&v.abs()) {
        return write!(f, "{}", v);
    }
    let text = alloc::format!("{:e}", v);
    match text.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, power)
        }
        _ => f.write_str(&text),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Float64(a), Value::Float64(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Float64(a), Value::Float64(b)) => cmp_f64(*a, *b),
            // Cross-kind numeric comparisons
            (Value::Int64(a), Value::Float64(b)) => cmp_f64(*a as f64, *b),
            (Value::Float64(a), Value::Int64(b)) => cmp_f64(*a, *b as f64),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            _ => self.type_order().cmp(&other.type_order()),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Int64(i) => i.hash(state),
            Value::Float64(f) => f.to_bits().hash(state),
            Value::String(s) => s.hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int64(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_null() {
        let v = Value::Null;
        assert!(v.is_null());
        assert!(v.is_empty());
        assert_eq!(v.string_form(), None);
        assert_eq!(v.inferred_type(), None);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Boolean(true).as_bool(), Some(true));
        assert_eq!(Value::Int64(100).as_i64(), Some(100));
        assert_eq!(Value::Int64(2).as_f64(), Some(2.0));
        assert_eq!(Value::Float64(3.5).as_f64(), Some(3.5));
        assert_eq!(Value::String("hello".into()).as_str(), Some("hello"));
        assert_eq!(Value::String("hello".into()).as_i64(), None);
    }

    #[test]
    fn test_string_form() {
        assert_eq!(Value::Boolean(false).string_form().as_deref(), Some("false"));
        assert_eq!(Value::Int64(-7).string_form().as_deref(), Some("-7"));
        assert_eq!(Value::Float64(2.5).string_form().as_deref(), Some("2.5"));
        assert_eq!(Value::Float64(3.0).string_form().as_deref(), Some("3"));
        assert_eq!(Value::from("UK").string_form().as_deref(), Some("UK"));
        assert_eq!(Value::String(String::new()).string_form().as_deref(), Some(""));
    }

    #[test]
    fn test_float_exponent_form() {
        let text = |v: f64| Value::Float64(v).to_string();
        assert_eq!(text(1e21), "1e+21");
        assert_eq!(text(-2.5e22), "-2.5e+22");
        assert_eq!(text(1e20), "100000000000000000000");
        assert_eq!(text(1e-7), "1e-7");
        assert_eq!(text(1.5e-7), "1.5e-7");
        assert_eq!(text(0.000001), "0.000001");
        assert_eq!(text(-0.0), "0");
        assert_eq!(text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_inferred_type() {
        assert_eq!(Value::Int64(1).inferred_type(), Some(DataType::Integer));
        assert_eq!(Value::Float64(4.0).inferred_type(), Some(DataType::Integer));
        assert_eq!(Value::Float64(4.25).inferred_type(), Some(DataType::Decimal));
        assert_eq!(Value::Float64(f64::INFINITY).inferred_type(), Some(DataType::Decimal));
        assert_eq!(Value::Boolean(true).inferred_type(), Some(DataType::Boolean));
        assert_eq!(Value::from("2014-03-07").inferred_type(), Some(DataType::Date));
        assert_eq!(Value::from("2014/3/7 10:00").inferred_type(), Some(DataType::Date));
        assert_eq!(Value::from("Berlin").inferred_type(), Some(DataType::String));
        assert_eq!(Value::from("").inferred_type(), None);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Int64(42), Value::Int64(42));
        assert_ne!(Value::Int64(42), Value::Float64(42.0));
        assert_eq!(Value::Float64(f64::NAN), Value::Float64(f64::NAN));
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn test_value_ordering() {
        assert!(Value::Int64(1) < Value::Int64(2));
        assert!(Value::Int64(1) < Value::Float64(1.5));
        assert!(Value::Float64(2.5) > Value::Int64(2));
        assert!(Value::from("a") < Value::from("b"));
        assert!(Value::Null < Value::Boolean(false));
        assert!(Value::Boolean(true) < Value::Int64(0));
        assert!(Value::Int64(1_000) < Value::from("0"));
        assert!(Value::Float64(f64::NAN) > Value::Float64(1e300));
    }

    #[test]
    fn test_value_from_impls() {
        let v: Value = 42i32.into();
        assert_eq!(v.as_i64(), Some(42));

        let v: Value = "hello".into();
        assert_eq!(v.as_str(), Some("hello"));

        let v: Value = Some(100i64).into();
        assert_eq!(v.as_i64(), Some(100));

        let v: Value = None::<i64>.into();
        assert!(v.is_null());
    }
}
