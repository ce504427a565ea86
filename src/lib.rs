// Cleaning Validator - Core Library
// Judges one before/after CSV pair produced by an external cleaning pipeline

pub mod config;
pub mod error;
pub mod coerce;
pub mod dataset;
pub mod rules;
pub mod report;

// Re-export commonly used types
pub use config::{RowDeltaPolicy, Thresholds, ValidatorConfig, EXPECTED_COLUMNS};
pub use error::{DatasetRole, ValidationError};
pub use dataset::{load_pair, Dataset, Row, Value};
pub use rules::{
    Rule, RuleEngine,
    SchemaCompleteness, RowCountBound, NameWhitespace,
    EmailLowercase, DateParseRate, AmountNumericRate,
};
pub use report::{report, RunMetrics, Verdict};

/// Load both datasets and run the standard rules.
///
/// Loader failures (missing or malformed files) become a failing verdict like
/// any rule failure.
pub fn validate(config: &ValidatorConfig) -> Verdict {
    let (input, output) = match load_pair(config) {
        Ok(pair) => pair,
        Err(err) => return Verdict::Fail(err),
    };

    RuleEngine::standard(config).evaluate(&input, &output)
}

// ============================================================================
// TESTS
// ============================================================================
