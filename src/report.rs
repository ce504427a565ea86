// 📋 Verdict & Reporter
// One verdict per run: Pass with metrics, or Fail with the first failing rule's reason

use crate::error::ValidationError;
use std::io::{self, Write};

pub const FAILURE_MARKER: &str = "VALIDATION FAILED:";
pub const SUCCESS_MARKER: &str = "VALIDATION PASSED ✅";

// ============================================================================
// RUN METRICS
// ============================================================================

/// Numbers computed while the rules run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunMetrics {
    pub in_rows: usize,
    pub out_rows: usize,
    pub lower_ratio: f64,
    pub parse_rate: f64,
    pub amt_rate: f64,
}

impl RunMetrics {
    pub fn summary(&self) -> String {
        format!(
            "Input rows: {}, Output rows: {}, Date parse rate: {:.2}, Amount numeric rate: {:.2}",
            self.in_rows, self.out_rows, self.parse_rate, self.amt_rate
        )
    }
}

// ============================================================================
// VERDICT
// ============================================================================

#[derive(Debug)]
pub enum Verdict {
    Pass(RunMetrics),
    Fail(ValidationError),
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass(_))
    }

    /// Process exit status for this verdict
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Pass(_) => 0,
            Verdict::Fail(_) => 1,
        }
    }
}

impl From<ValidationError> for Verdict {
    fn from(err: ValidationError) -> Self {
        Verdict::Fail(err)
    }
}

// ============================================================================
// REPORTER
// ============================================================================

/// Write the verdict to the given streams and return the exit status
pub fn report<O: Write, E: Write>(
    verdict: &Verdict,
    stdout: &mut O,
    stderr: &mut E,
) -> io::Result<i32> {
    match verdict {
        Verdict::Pass(metrics) => {
            writeln!(stdout, "{}", SUCCESS_MARKER)?;
            writeln!(stdout, "{}", metrics.summary())?;
        }
        Verdict::Fail(err) => {
            writeln!(stderr, "{} {}", FAILURE_MARKER, err)?;
        }
    }

    Ok(verdict.exit_code())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn run_report(verdict: &Verdict) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = report(verdict, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_pass_report() {
        let metrics = RunMetrics {
            in_rows: 6,
            out_rows: 5,
            lower_ratio: 1.0,
            parse_rate: 0.8,
            amt_rate: 1.0,
        };

        let (code, out, err) = run_report(&Verdict::Pass(metrics));

        assert_eq!(code, 0);
        assert_eq!(
            out,
            "VALIDATION PASSED ✅\n\
             Input rows: 6, Output rows: 5, Date parse rate: 0.80, Amount numeric rate: 1.00\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_fail_report() {
        let verdict = Verdict::from(ValidationError::UntrimmedNames);
        let (code, out, err) = run_report(&verdict);

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(
            err,
            "VALIDATION FAILED: \
             Found name values with leading/trailing whitespace (trim expected).\n"
        );
    }

    #[test]
    fn test_verdict_helpers() {
        assert!(Verdict::Pass(RunMetrics::default()).passed());
        assert!(!Verdict::Fail(ValidationError::UntrimmedNames).passed());
    }
}
