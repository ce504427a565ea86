use anyhow::Result;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cleaning_validator::{report, validate, ValidatorConfig};

fn main() -> Result<()> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for them
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ValidatorConfig::default();
    tracing::debug!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "starting validation"
    );

    let verdict = validate(&config);
    let code = report(&verdict, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    std::process::exit(code);
}
