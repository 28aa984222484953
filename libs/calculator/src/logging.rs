//! Console logging setup
//!
//! Operation traces go through `tracing`; this module installs a subscriber
//! that prints them to stderr as `timestamp [LEVEL] message`.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::{CalcError, Result};

/// Level tag and the ANSI color it is painted with
fn level_style(level: Level) -> (&'static str, &'static str) {
    match level {
        Level::TRACE => ("[TRACE]", "\x1b[35m"),
        Level::DEBUG => ("[DEBUG]", "\x1b[34m"),
        Level::INFO => ("[INFO]", "\x1b[32m"),
        Level::WARN => ("[WARN]", "\x1b[33m"),
        Level::ERROR => ("[ERROR]", "\x1b[31m"),
    }
}

/// Renders one event per line as `<utc time> [LEVEL] <message and fields>`,
/// e.g. `2025-12-02T00:50:44.809000Z [INFO] 3 + 2 = 5`.
///
/// The tag is colored only when the writer accepts ANSI escapes.
pub struct BracketedLevelFormat;

impl<S, N> FormatEvent<S, N> for BracketedLevelFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let (tag, color) = level_style(*event.metadata().level());
        let stamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ");

        if writer.has_ansi_escapes() {
            write!(writer, "{stamp} {color}{tag}\x1b[0m ")?;
        } else {
            write!(writer, "{stamp} {tag} ")?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: Level,
    /// Colorize the level tag
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// `RUST_LOG` wins over the configured level
    fn env_filter(&self) -> EnvFilter {
        match std::env::var("RUST_LOG") {
            Ok(env_str) if !env_str.is_empty() => EnvFilter::new(env_str),
            _ => EnvFilter::new(self.level.as_str().to_lowercase()),
        }
    }
}

/// Install the global stderr subscriber.
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init_with_config(config: LogConfig) -> Result<()> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .event_format(BracketedLevelFormat);

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(console_layer)
        .try_init()
        .map_err(|e| CalcError::config(format!("Failed to initialize logging: {}", e)))
}

/// Install the global subscriber at `level` ("info", "debug", ...)
pub fn init(level: &str) -> Result<()> {
    let level = level
        .parse::<Level>()
        .map_err(|e| CalcError::config(format!("Invalid log level '{}': {}", level, e)))?;
    init_with_config(LogConfig {
        level,
        ..Default::default()
    })
}
