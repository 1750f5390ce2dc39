use tracing_subscriber::EnvFilter;

use crate::cli::ColorMode;

/// Environment variable holding a tracing filter, e.g. `OMNAI_LOG=omnai=debug`.
pub(crate) const LOG_ENV: &str = "OMNAI_LOG";

fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. The filter in `OMNAI_LOG` takes precedence
/// over the verbosity requested on the command line. Events are written to
/// stderr so listings on stdout stay parseable.
pub(crate) fn setup_tracing(verbosity: u8, color: ColorMode) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(matches!(color, ColorMode::On))
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(verbosity_directive(0), "warn");
        assert_eq!(verbosity_directive(1), "info");
        assert_eq!(verbosity_directive(2), "debug");
        assert_eq!(verbosity_directive(3), "trace");
        assert_eq!(verbosity_directive(9), "trace");
    }
}
