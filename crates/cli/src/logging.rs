//! Structured logging setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes the global `tracing` subscriber.
///
/// `--verbose` enables debug output for the algoviz crates, `--log-level`
/// overrides it, and `RUST_LOG` or `ALGOVIZ_LOG` override both. Logs go to
/// stderr so they never interleave with step output on stdout.
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> anyhow::Result<()> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => directive(level),
        (true, None) => "algoviz=debug".to_owned(),
        (false, None) => "algoviz=warn".to_owned(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ALGOVIZ_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Scopes a bare level to the algoviz crates; full directives pass through.
fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_owned()
    } else {
        format!("algoviz={level}")
    }
}
