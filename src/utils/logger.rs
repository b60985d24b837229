use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_DIRECTIVE: &str = "student_average=warn";
const VERBOSE_DIRECTIVE: &str = "student_average=debug,info";

/// `RUST_LOG` wins over the `--verbose` default when it parses.
pub fn cli_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        QUIET_DIRECTIVE
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Stdout is reserved for prompts and the report, so everything logged here
/// lands on stderr without timestamps or targets.
pub fn init_cli_logger(verbose: bool) {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(console)
        .init();
}
