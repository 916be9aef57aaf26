//! CSV writer.

use crate::error::{CsvError, CsvResult};
use alloc::string::{String, ToString};
use querymate_core::{Dataset, Value};

/// CSV writer configuration.
#[derive(Clone, Debug)]
pub struct CsvWriter {
    delimiter: char,
    newline: String,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self {
            delimiter: ',',
            newline: String::from("\r\n"),
        }
    }
}

impl CsvWriter {
    /// Creates a writer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the record separator.
    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    /// Writes the projected columns of `dataset`, header first.
    ///
    /// Nulls become empty fields. There is no trailing record separator.
    pub fn write(&self, dataset: &Dataset) -> CsvResult<String> {
        if dataset.is_empty() {
            return Err(CsvError::NoData);
        }

        let mut out = String::new();
        for (i, column) in dataset.columns().iter().enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }
            self.push_field(&mut out, column.name());
        }

        for row in dataset.rows() {
            out.push_str(&self.newline);
            for (i, value) in dataset.projected(row).enumerate() {
                if i > 0 {
                    out.push(self.delimiter);
                }
                match value {
                    Value::Null => {}
                    Value::String(s) => self.push_field(&mut out, s),
                    other => self.push_field(&mut out, &other.to_string()),
                }
            }
        }
        Ok(out)
    }

    fn push_field(&self, out: &mut String, text: &str) {
        let needs_quotes = text
            .chars()
            .any(|c| c == self.delimiter || matches!(c, '"' | '\r' | '\n'));
        if needs_quotes {
            out.push('"');
            out.push_str(&text.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(text);
        }
    }
}
