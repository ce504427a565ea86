// 📂 Dataset Loader - CSV → in-memory table
// Reads the before/after pair; column typing is deferred to the rules

use crate::config::ValidatorConfig;
use crate::error::{DatasetRole, ValidationError};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Cell texts read as missing (the usual CSV/dataframe NA markers)
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ============================================================================
// VALUE
// ============================================================================

/// One untyped cell
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Value {
    Missing,
    Text(String),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// String form used by the text rules (missing → "")
    pub fn as_str(&self) -> &str {
        match self {
            Value::Missing => "",
            Value::Text(s) => s,
        }
    }

    /// Text content, None when missing
    pub fn text(&self) -> Option<&str> {
        match self {
            Value::Missing => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl From<String> for Value {
    fn from(raw: String) -> Self {
        if MISSING_MARKERS.contains(&raw.as_str()) {
            Value::Missing
        } else {
            Value::Text(raw)
        }
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Value::from(raw.to_string())
    }
}

static MISSING: Value = Value::Missing;

// ============================================================================
// DATASET
// ============================================================================

pub type Row = HashMap<String, Value>;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset from an in-memory header and rows
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { headers, rows }
    }

    /// Parse CSV (header row required) from any reader.
    ///
    /// Rows shorter than the header are padded with missing cells; rows
    /// longer than the header are rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header_record = rdr.headers().context("Failed to read CSV header")?.clone();
        let headers = header_record.iter().map(|h| h.to_string()).collect();

        let mut rows = Vec::new();
        for (index, result) in rdr.records().enumerate() {
            // +2: 1-indexed plus the header line
            let line = index + 2;
            let mut record = result.with_context(|| format!("Failed to parse CSV line {}", line))?;

            if record.len() > header_record.len() {
                bail!(
                    "line {}: found record with {} fields, but the header has {} fields",
                    line,
                    record.len(),
                    header_record.len()
                );
            }

            while record.len() < header_record.len() {
                record.push_field("");
            }

            let row: Row = record
                .deserialize(Some(&header_record))
                .with_context(|| format!("Failed to read CSV line {}", line))?;
            rows.push(row);
        }

        Ok(Dataset { headers, rows })
    }

    /// Open and parse a CSV file; any failure is reported as malformed `role` data
    pub fn from_path(path: &Path, role: DatasetRole) -> Result<Self, ValidationError> {
        let malformed = |reason: String| ValidationError::MalformedInput {
            role,
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path).map_err(|e| malformed(e.to_string()))?;
        let dataset = Dataset::from_reader(file).map_err(|e| malformed(format!("{:#}", e)))?;

        tracing::info!(
            role = role.name(),
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.headers.len(),
            "loaded dataset"
        );

        Ok(dataset)
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every row's value for `name`; rows without it yield `Value::Missing`
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.rows
            .iter()
            .map(move |row| row.get(name).unwrap_or(&MISSING))
    }
}

// ============================================================================
// LOADER
// ============================================================================

/// Load `(input, output)`, checking that both files exist before parsing either
pub fn load_pair(config: &ValidatorConfig) -> Result<(Dataset, Dataset), ValidationError> {
    if !config.input_path.exists() {
        return Err(ValidationError::MissingInput(config.input_path.clone()));
    }

    if !config.output_path.exists() {
        return Err(ValidationError::MissingOutput(config.output_path.clone()));
    }

    let input = Dataset::from_path(&config.input_path, DatasetRole::Input)?;
    let output = Dataset::from_path(&config.output_path, DatasetRole::Output)?;

    Ok((input, output))
}

// ============================================================================
// TESTS
// ============================================================================
