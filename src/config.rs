// ⚙️ Validator Configuration
// One immutable value built at process start, passed into the loader and the rule engine

use std::path::PathBuf;

/// Columns every cleaned output must carry
pub const EXPECTED_COLUMNS: [&str; 6] = ["id", "name", "email", "signup_date", "amount", "notes"];

pub const DEFAULT_INPUT_PATH: &str = "fixtures/messy-input.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "data-validation/output/downloaded-output.csv";

// ============================================================================
// ROW DELTA POLICY
// ============================================================================

/// Accepted shrinkage between input and output row counts.
///
/// The output may never grow. It may lose at most `max_removed` rows, which
/// for the reference fixture means the single duplicated row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowDeltaPolicy {
    pub max_removed: usize,
}

impl RowDeltaPolicy {
    pub fn new(max_removed: usize) -> Self {
        RowDeltaPolicy { max_removed }
    }

    /// Smallest acceptable output row count for a given input size
    pub fn min_rows(&self, in_rows: usize) -> usize {
        in_rows.saturating_sub(self.max_removed)
    }

    /// Check if `out_rows` is inside `[in_rows - max_removed, in_rows]`
    pub fn accepts(&self, in_rows: usize, out_rows: usize) -> bool {
        out_rows <= in_rows && out_rows >= self.min_rows(in_rows)
    }
}

impl Default for RowDeltaPolicy {
    fn default() -> Self {
        RowDeltaPolicy { max_removed: 1 }
    }
}

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Minimum ratios for the statistical rules (a ratio equal to the threshold passes)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Fraction of emails already in lowercase
    pub email_lowercase: f64,

    /// Fraction of signup dates that parse as calendar dates
    pub date_parse: f64,

    /// Fraction of amounts that coerce to numbers
    pub amount_numeric: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            email_lowercase: 0.80,
            date_parse: 0.60,
            amount_numeric: 0.60,
        }
    }
}

// ============================================================================
// VALIDATOR CONFIG
// ============================================================================

#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Original "messy" dataset
    pub input_path: PathBuf,

    /// Dataset produced by the transformation run
    pub output_path: PathBuf,

    pub expected_columns: Vec<String>,
    pub row_delta: RowDeltaPolicy,
    pub thresholds: Thresholds,
}

impl ValidatorConfig {
    /// Same rules and thresholds, different file locations
    pub fn with_paths(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        ValidatorConfig {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            expected_columns: EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            row_delta: RowDeltaPolicy::default(),
            thresholds: Thresholds::default(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
