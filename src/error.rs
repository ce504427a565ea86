// ❌ Validation Errors
// Every way a run can fail; the Display text is the reason printed by the reporter

use std::fmt;
use std::path::PathBuf;

/// Which side of the before/after pair a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetRole {
    Input,
    Output,
}

impl DatasetRole {
    pub fn name(&self) -> &str {
        match self {
            DatasetRole::Input => "input",
            DatasetRole::Output => "output",
        }
    }
}

impl fmt::Display for DatasetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing input file: {}", .0.display())]
    MissingInput(PathBuf),

    #[error(
        "Missing output file: {}\n\
         Run the transformation pipeline first to download the transformed dataset.",
        .0.display()
    )]
    MissingOutput(PathBuf),

    #[error("Malformed {role} file {}: {reason}", .path.display())]
    MalformedInput {
        role: DatasetRole,
        path: PathBuf,
        reason: String,
    },

    #[error("Output missing expected columns: {}", python_list(.0))]
    MissingColumns(Vec<String>),

    #[error("Output row count ({out_rows}) should not exceed input ({in_rows}).")]
    RowCountExceeded { in_rows: usize, out_rows: usize },

    #[error(
        "Unexpected output rows: got {out_rows}, expected {}.",
        expected_range(.min_rows, .in_rows)
    )]
    UnexpectedRowCount {
        in_rows: usize,
        out_rows: usize,
        min_rows: usize,
    },

    #[error("Found name values with leading/trailing whitespace (trim expected).")]
    UntrimmedNames,

    #[error("Expected most emails lowercased; lowercase ratio={ratio:.2}")]
    EmailCase { ratio: f64 },

    #[error("Date parse rate too low ({rate:.2}). Expected >= {threshold:.2} after cleaning.")]
    DateParseRate { rate: f64, threshold: f64 },

    #[error("Amount numeric rate too low ({rate:.2}). Expected >= {threshold:.2}.")]
    AmountNumericRate { rate: f64, threshold: f64 },

    #[error("Output has no rows; cannot compute {metric}.")]
    EmptyOutput { metric: &'static str },
}

/// Render names as `['a', 'b']`
fn python_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}

fn expected_range(min_rows: &usize, in_rows: &usize) -> String {
    match in_rows - min_rows {
        0 => in_rows.to_string(),
        1 => format!("{} or {}", in_rows, min_rows),
        _ => format!("between {} and {}", min_rows, in_rows),
    }
}

// ============================================================================
// TESTS
// ============================================================================
