use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted before the level passed to [`init_tracing`]
pub const LOG_ENV_VAR: &str = "RUTA_LOG";

/// Counters collected while an algorithm drains its priority queue.
///
/// Single-threaded and call-scoped, so plain integers suffice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraversalStats {
    /// Entries pushed onto the priority queue
    pub pushes: usize,
    /// Entries popped from the priority queue
    pub pops: usize,
    /// Popped entries discarded as stale (lazy deletion)
    pub stale: usize,
    /// Vertices reached, including the start
    pub reached: usize,
}

impl TraversalStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_push(&mut self) {
        self.pushes += 1;
    }

    pub fn record_pop(&mut self) {
        self.pops += 1;
    }

    pub fn record_stale(&mut self) {
        self.stale += 1;
    }

    pub fn record_reached(&mut self) {
        self.reached += 1;
    }
}

/// Log traversal statistics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let mut stats = TraversalStats::new();
/// // ... drain the queue ...
/// log_traversal_stats!(&stats, "dijkstra");
/// ```
#[macro_export]
macro_rules! log_traversal_stats {
    ($stats:expr, $name:expr) => {
        tracing::debug!(
            algorithm = $name,
            pushes = $stats.pushes,
            pops = $stats.pops,
            stale = $stats.stale,
            reached = $stats.reached,
            "traversal_stats"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "mst");
/// // Or with additional fields:
/// trace_time!(start, "mst", edges = tree.len());
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

/// Initialize structured logging for a host program.
///
/// `log_level` takes a bare level (`debug`) or a full directive
/// (`ruta::graph=trace`); without one, `verbose` picks `ruta=debug` over
/// `ruta=warn`. `RUTA_LOG`, then `RUST_LOG`, override the result. Returns an
/// error if a global subscriber is already installed.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = build_filter(&resolve_directive(verbose, log_level));
    let spans = span_events(verbose, log_json);
    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(spans),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(spans),
            )
            .try_init()?;
    }

    Ok(())
}

fn resolve_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (log_level, verbose) {
        (Some(level), _) => filter_directive(level),
        (None, true) => "ruta=debug".to_string(),
        (None, false) => "ruta=warn".to_string(),
    }
}

fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("ruta={}", level)
    }
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Closing an instrumented `dijkstra`/`mst` span reports its busy time next
/// to the `traversal_stats` event; quiet runs skip it
fn span_events(verbose: bool, log_json: bool) -> FmtSpan {
    if verbose || log_json {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}
