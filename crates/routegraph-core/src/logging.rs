use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", line = line_no);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Default filter directive for the given CLI flags
pub fn default_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("routegraph={level},routegraph_core={level}"),
        (true, None) => "routegraph=debug,routegraph_core=debug".to_string(),
        (false, None) => "routegraph=warn,routegraph_core=warn".to_string(),
    }
}

/// Initialize structured logging based on CLI arguments.
///
/// `RUST_LOG` wins over `ROUTEGRAPH_LOG`, which wins over the flags.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ROUTEGRAPH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive(false, None),
            "routegraph=warn,routegraph_core=warn"
        );
        assert_eq!(
            default_directive(true, None),
            "routegraph=debug,routegraph_core=debug"
        );
        assert_eq!(
            default_directive(true, Some("trace")),
            "routegraph=trace,routegraph_core=trace"
        );
        assert_eq!(default_directive(false, Some("info,foo=debug")), "info,foo=debug");
    }
}
