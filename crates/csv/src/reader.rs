//! CSV reader.
//!
//! Splits text into records following RFC 4180 (quoted fields may hold the
//! delimiter, doubled quotes and line breaks), then maps each record onto the
//! header fields. Ragged records are repaired rather than rejected: short
//! ones are padded with `Null`, long ones are cut, and each repair is
//! reported as a [`ParseWarning`].

use crate::error::{CsvError, CsvResult};
use crate::typing::dynamic_value;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashSet;
use querymate_core::schema::SchemaInference;
use querymate_core::{Dataset, Record, Value};

/// A non-fatal problem found while reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseWarning {
    /// A record had fewer cells than there are fields; the rest are `Null`.
    TooFewFields {
        row: usize,
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A record had more cells than there are fields; the extras were dropped.
    TooManyFields {
        row: usize,
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A header name was already taken and has been renamed.
    DuplicateHeader { name: String, renamed: String },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::TooFewFields {
                row,
                line,
                expected,
                found,
            } => write!(
                f,
                "Row {} (line {}): too few fields, expected {} but parsed {}",
                row, line, expected, found
            ),
            ParseWarning::TooManyFields {
                row,
                line,
                expected,
                found,
            } => write!(
                f,
                "Row {} (line {}): too many fields, expected {} but parsed {}",
                row, line, expected, found
            ),
            ParseWarning::DuplicateHeader { name, renamed } => {
                write!(f, "Duplicate header \"{}\" renamed to \"{}\"", name, renamed)
            }
        }
    }
}

/// The result of reading CSV text.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    /// Field names in column order.
    pub fields: Vec<String>,
    /// One record per data row, keyed by field.
    pub records: Vec<Record>,
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutput {
    /// Builds a dataset, inferring column types with the default strategy.
    pub fn into_dataset(self) -> CsvResult<Dataset> {
        self.into_dataset_with(&SchemaInference::new())
    }

    /// Builds a dataset with the given inference settings.
    pub fn into_dataset_with(self, inference: &SchemaInference) -> CsvResult<Dataset> {
        Ok(inference.infer(&self.records, Some(self.fields.as_slice()))?)
    }
}

/// One physical record before it is mapped onto fields.
struct RawRecord {
    line: usize,
    cells: Vec<String>,
    /// A lone unquoted empty cell, i.e. an empty line.
    blank: bool,
}

/// CSV reader configuration.
#[derive(Clone, Debug)]
pub struct CsvReader {
    delimiter: char,
    dynamic_typing: bool,
    skip_empty_lines: bool,
    header: bool,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            delimiter: ',',
            dynamic_typing: true,
            skip_empty_lines: true,
            header: true,
        }
    }
}

impl CsvReader {
    /// Creates a reader with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter. Must not be `"`, `\r` or `\n`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables or disables typing of cells. When off every cell is a string.
    pub fn dynamic_typing(mut self, enabled: bool) -> Self {
        self.dynamic_typing = enabled;
        self
    }

    /// Enables or disables skipping of empty lines.
    pub fn skip_empty_lines(mut self, enabled: bool) -> Self {
        self.skip_empty_lines = enabled;
        self
    }

    /// Sets whether the first record holds the field names. Without a
    /// header, fields are named `column_1`, `column_2`, ...
    pub fn header(mut self, enabled: bool) -> Self {
        self.header = enabled;
        self
    }

    /// Reads `text`.
    pub fn read(&self, text: &str) -> CsvResult<ParseOutput> {
        if matches!(self.delimiter, '"' | '\r' | '\n') {
            return Err(CsvError::InvalidDelimiter {
                delimiter: self.delimiter,
            });
        }
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut raw = self
            .split_records(text)?
            .into_iter()
            .filter(|r| !(self.skip_empty_lines && r.blank));

        let mut output = ParseOutput::default();
        let data: Vec<RawRecord> = if self.header {
            match raw.next() {
                Some(first) => {
                    output.fields = unique_headers(first.cells, &mut output.warnings);
                    raw.collect()
                }
                None => return Ok(output),
            }
        } else {
            let data: Vec<RawRecord> = raw.collect();
            let width = data.iter().map(|r| r.cells.len()).max().unwrap_or(0);
            output.fields = (1..=width).map(|n| format!("column_{}", n)).collect();
            data
        };

        let expected = output.fields.len();
        for (row, record) in data.into_iter().enumerate() {
            let found = record.cells.len();
            if found < expected {
                output.warnings.push(ParseWarning::TooFewFields {
                    row,
                    line: record.line,
                    expected,
                    found,
                });
            } else if found > expected {
                output.warnings.push(ParseWarning::TooManyFields {
                    row,
                    line: record.line,
                    expected,
                    found,
                });
            }

            let mut cells = record.cells.into_iter();
            let values: Record = output
                .fields
                .iter()
                .map(|field| {
                    let value = match cells.next() {
                        Some(cell) => self.convert(cell),
                        None => Value::Null,
                    };
                    (field.clone(), value)
                })
                .collect();
            output.records.push(values);
        }

        Ok(output)
    }

    fn convert(&self, cell: String) -> Value {
        if self.dynamic_typing {
            dynamic_value(&cell)
        } else {
            Value::String(cell)
        }
    }

    fn split_records(&self, text: &str) -> CsvResult<Vec<RawRecord>> {
        let mut records = Vec::new();
        let mut cells: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut field_quoted = false;
        let mut in_quotes = false;
        let mut line = 1;
        let mut record_line = 1;

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if in_quotes {
                match c {
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        field.push('"');
                    }
                    '"' => in_quotes = false,
                    _ => {
                        if c == '\n' || (c == '\r' && chars.peek() != Some(&'\n')) {
                            line += 1;
                        }
                        field.push(c);
                    }
                }
                continue;
            }

            match c {
                '"' if field.is_empty() && !field_quoted => {
                    in_quotes = true;
                    field_quoted = true;
                }
                '\r' | '\n' => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    let blank = cells.is_empty() && field.is_empty() && !field_quoted;
                    cells.push(core::mem::take(&mut field));
                    records.push(RawRecord {
                        line: record_line,
                        cells: core::mem::take(&mut cells),
                        blank,
                    });
                    field_quoted = false;
                    line += 1;
                    record_line = line;
                }
                c if c == self.delimiter => {
                    cells.push(core::mem::take(&mut field));
                    field_quoted = false;
                }
                // a quote inside an unquoted field is literal
                _ => field.push(c),
            }
        }

        if in_quotes {
            return Err(CsvError::UnterminatedQuote { line: record_line });
        }
        if !cells.is_empty() || !field.is_empty() || field_quoted {
            cells.push(field);
            records.push(RawRecord {
                line: record_line,
                cells,
                blank: false,
            });
        }
        Ok(records)
    }
}

/// Makes header names unique by suffixing `_1`, `_2`, ... to repeats.
fn unique_headers(names: Vec<String>, warnings: &mut Vec<ParseWarning>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(names.len());
    let mut fields = Vec::with_capacity(names.len());
    for name in names {
        if taken.insert(name.clone()) {
            fields.push(name);
            continue;
        }
        let mut n = 1;
        let renamed = loop {
            let candidate = format!("{}_{}", name, n);
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        taken.insert(renamed.clone());
        warnings.push(ParseWarning::DuplicateHeader {
            name,
            renamed: renamed.clone(),
        });
        fields.push(renamed);
    }
    fields
}
