use cwkit_core::CWKIT_LOG_VAR;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

const DEFAULT_FILTER: &str = "info";

/// Build the log filter.
///
/// `CWKIT_LOG` wins over `RUST_LOG`; without either, `info` is used.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(CWKIT_LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the tracing system
///
/// Diagnostics go to stderr so that demo output on stdout stays clean. ANSI
/// colors are only used when stderr is a terminal.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_names(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Check if stderr is attached to a terminal
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span covering one demo
pub fn demo_span(name: &str) -> Span {
    span!(Level::INFO, "demo", demo = %name)
}
