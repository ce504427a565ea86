// 📏 Rule Engine - ordered before/after checks
// Six rules run in fixed order; the first failure stops the run

use crate::coerce::{has_outer_whitespace, is_lowercase, parse_amount, parse_date};
use crate::config::{RowDeltaPolicy, ValidatorConfig};
use crate::dataset::Dataset;
use crate::error::ValidationError;
use crate::report::{RunMetrics, Verdict};
use std::collections::BTreeSet;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// One independent check against the `(input, output)` pair.
///
/// A rule either passes silently (optionally recording a metric) or returns
/// the error that becomes the run's verdict.
pub trait Rule {
    fn name(&self) -> &'static str;

    fn check(
        &self,
        input: &Dataset,
        output: &Dataset,
        metrics: &mut RunMetrics,
    ) -> Result<(), ValidationError>;
}

/// `present / total`, refusing to divide by an empty output
fn ratio(present: usize, total: usize, metric: &'static str) -> Result<f64, ValidationError> {
    if total == 0 {
        return Err(ValidationError::EmptyOutput { metric });
    }
    Ok(present as f64 / total as f64)
}

// ============================================================================
// RULE 1: SCHEMA COMPLETENESS
// ============================================================================

pub struct SchemaCompleteness {
    expected: Vec<String>,
}

impl SchemaCompleteness {
    pub fn new(expected: Vec<String>) -> Self {
        SchemaCompleteness { expected }
    }
}

impl Rule for SchemaCompleteness {
    fn name(&self) -> &'static str {
        "schema_completeness"
    }

    fn check(
        &self,
        _input: &Dataset,
        output: &Dataset,
        _metrics: &mut RunMetrics,
    ) -> Result<(), ValidationError> {
        let missing: BTreeSet<&String> = self
            .expected
            .iter()
            .filter(|col| !output.has_column(col))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingColumns(missing.into_iter().cloned().collect()))
        }
    }
}

// ============================================================================
// RULE 2: ROW-COUNT BOUND
// ============================================================================

pub struct RowCountBound {
    policy: RowDeltaPolicy,
}

impl RowCountBound {
    pub fn new(policy: RowDeltaPolicy) -> Self {
        RowCountBound { policy }
    }
}

impl Rule for RowCountBound {
    fn name(&self) -> &'static str {
        "row_count_bound"
    }

    fn check(
        &self,
        input: &Dataset,
        output: &Dataset,
        _metrics: &mut RunMetrics,
    ) -> Result<(), ValidationError> {
        let in_rows = input.len();
        let out_rows = output.len();

        // Output must never fabricate rows
        if out_rows > in_rows {
            return Err(ValidationError::RowCountExceeded { in_rows, out_rows });
        }

        if !self.policy.accepts(in_rows, out_rows) {
            return Err(ValidationError::UnexpectedRowCount {
                in_rows,
                out_rows,
                min_rows: self.policy.min_rows(in_rows),
            });
        }

        Ok(())
    }
}

// ============================================================================
// RULE 3: NAME WHITESPACE (zero tolerance)
// ============================================================================

pub struct NameWhitespace;

impl Rule for NameWhitespace {
    fn name(&self) -> &'static str {
        "name_whitespace"
    }

    fn check(
        &self,
        _input: &Dataset,
        output: &Dataset,
        _metrics: &mut RunMetrics,
    ) -> Result<(), ValidationError> {
        if output.column("name").any(|v| has_outer_whitespace(v.as_str())) {
            return Err(ValidationError::UntrimmedNames);
        }
        Ok(())
    }
}

// ============================================================================
// RULE 4: EMAIL CASE RATIO
// ============================================================================

pub struct EmailLowercase {
    threshold: f64,
}

impl EmailLowercase {
    pub fn new(threshold: f64) -> Self {
        EmailLowercase { threshold }
    }
}

impl Rule for EmailLowercase {
    fn name(&self) -> &'static str {
        "email_lowercase"
    }

    fn check(
        &self,
        _input: &Dataset,
        output: &Dataset,
        metrics: &mut RunMetrics,
    ) -> Result<(), ValidationError> {
        let lowercase = output.column("email").filter(|v| is_lowercase(v.as_str())).count();
        let lower_ratio = ratio(lowercase, output.len(), "email lowercase ratio")?;
        metrics.lower_ratio = lower_ratio;

        if lower_ratio < self.threshold {
            return Err(ValidationError::EmailCase { ratio: lower_ratio });
        }
        Ok(())
    }
}

// ============================================================================
// RULE 5: DATE PARSE RATE
// ============================================================================

pub struct DateParseRate {
    threshold: f64,
}

impl DateParseRate {
    pub fn new(threshold: f64) -> Self {
        DateParseRate { threshold }
    }
}

impl Rule for DateParseRate {
    fn name(&self) -> &'static str {
        "date_parse_rate"
    }

    fn check(
        &self,
        _input: &Dataset,
        output: &Dataset,
        metrics: &mut RunMetrics,
    ) -> Result<(), ValidationError> {
        let parsed = output
            .column("signup_date")
            .filter_map(|v| v.text().and_then(parse_date))
            .count();
        let parse_rate = ratio(parsed, output.len(), "date parse rate")?;
        metrics.parse_rate = parse_rate;

        if parse_rate < self.threshold {
            return Err(ValidationError::DateParseRate {
                rate: parse_rate,
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

// ============================================================================
// RULE 6: AMOUNT NUMERIC RATE
// ============================================================================

pub struct AmountNumericRate {
    threshold: f64,
}

impl AmountNumericRate {
    pub fn new(threshold: f64) -> Self {
        AmountNumericRate { threshold }
    }
}

impl Rule for AmountNumericRate {
    fn name(&self) -> &'static str {
        "amount_numeric_rate"
    }

    fn check(
        &self,
        _input: &Dataset,
        output: &Dataset,
        metrics: &mut RunMetrics,
    ) -> Result<(), ValidationError> {
        let numeric = output
            .column("amount")
            .filter_map(|v| v.text().and_then(parse_amount))
            .count();
        let amt_rate = ratio(numeric, output.len(), "amount numeric rate")?;
        metrics.amt_rate = amt_rate;

        if amt_rate < self.threshold {
            return Err(ValidationError::AmountNumericRate {
                rate: amt_rate,
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

// ============================================================================
// RULE ENGINE
// ============================================================================

pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create an engine from rules, kept in the given order
    pub fn from_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        RuleEngine { rules }
    }

    /// The six cleaning checks, schema first: a schema mismatch makes the
    /// statistical checks meaningless
    pub fn standard(config: &ValidatorConfig) -> Self {
        let thresholds = config.thresholds;

        RuleEngine::from_rules(vec![
            Box::new(SchemaCompleteness::new(config.expected_columns.clone())),
            Box::new(RowCountBound::new(config.row_delta)),
            Box::new(NameWhitespace),
            Box::new(EmailLowercase::new(thresholds.email_lowercase)),
            Box::new(DateParseRate::new(thresholds.date_parse)),
            Box::new(AmountNumericRate::new(thresholds.amount_numeric)),
        ])
    }

    /// Rule names in execution order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule in order, stopping at the first failure
    pub fn evaluate(&self, input: &Dataset, output: &Dataset) -> Verdict {
        let mut metrics = RunMetrics {
            in_rows: input.len(),
            out_rows: output.len(),
            ..RunMetrics::default()
        };

        for rule in &self.rules {
            if let Err(err) = rule.check(input, output, &mut metrics) {
                tracing::debug!(rule = rule.name(), reason = %err, "rule failed");
                return Verdict::Fail(err);
            }
            tracing::debug!(rule = rule.name(), "rule passed");
        }

        Verdict::Pass(metrics)
    }
}

// ============================================================================
// TESTS
// ============================================================================
