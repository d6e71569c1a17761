//! Tracing setup for the binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "fpl_entry=debug"
    } else {
        "fpl_entry=warn"
    }
}

/// Build the log filter: `RUST_LOG` wins, otherwise the default directive for `verbose`.
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install a stderr subscriber. Stdout is reserved for command output.
///
/// Calling this twice is harmless; the second installation is ignored.
pub fn setup_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(build_filter(verbose)),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "fpl_entry=warn");
        assert_eq!(default_directive(true), "fpl_entry=debug");
    }

    #[test]
    fn test_setup_logging_twice() {
        setup_logging(true);
        setup_logging(false);
    }
}
