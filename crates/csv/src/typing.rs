//! Dynamic typing of CSV cells.
//!
//! A cell becomes `Null` when empty, a boolean for `true`/`TRUE`/`True` (and
//! the `false` forms), a number when the whole cell is a decimal literal
//! (surrounding whitespace allowed), and a string otherwise. Integers stay
//! `Int64` only within ±2^53, the range a JS number holds exactly.

use alloc::string::String;
use querymate_core::Value;

const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Converts raw cell text to a typed value.
pub fn dynamic_value(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    match text {
        "true" | "TRUE" | "True" => return Value::Boolean(true),
        "false" | "FALSE" | "False" => return Value::Boolean(false),
        _ => {}
    }

    let trimmed = text.trim();
    match classify_number(trimmed) {
        Some(NumberShape::Integer) => match trimmed.parse::<i64>() {
            Ok(n) if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) => Value::Int64(n),
            _ => Value::String(String::from(text)),
        },
        Some(NumberShape::Float) => match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::Float64(f),
            _ => Value::String(String::from(text)),
        },
        None => Value::String(String::from(text)),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum NumberShape {
    Integer,
    Float,
}

/// Matches `-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?`.
fn classify_number(text: &str) -> Option<NumberShape> {
    let bytes = text.as_bytes();
    let mut pos = 0;
    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;
    let mut shape = NumberShape::Integer;

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        shape = NumberShape::Float;
        let frac_digits = count_digits(&bytes[pos..]);
        if int_digits == 0 && frac_digits == 0 {
            return None;
        }
        pos += frac_digits;
    } else if int_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return None;
        }
        pos += exp_digits;
        shape = NumberShape::Float;
    }

    (pos == bytes.len()).then_some(shape)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
