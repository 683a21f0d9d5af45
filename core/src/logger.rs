//----------------------------------------------------------------------------------------- std lib
use std::io::Write;
use std::time::Instant;
//--------------------------------------------------------------------------------- other libraries
use env_logger::fmt::style::{AnsiColor, Style};
use log::info;
use once_cell::sync::Lazy;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt as _};

use crate::format_duration;

// This will get initialized below.
/// Returns the init [`Instant`]
pub static INIT_INSTANT: Lazy<Instant> = Lazy::new(Instant::now);

/// The filter used when `RUST_LOG` isn't set: silence everything but mbset and its sub-crates.
fn default_filter(filter: log::LevelFilter) -> String {
    format!("off,mbset={filter}")
}

const fn level_letter(level: log::Level) -> (&'static str, AnsiColor) {
    match level {
        log::Level::Error => ("E", AnsiColor::Red),
        log::Level::Warn => ("W", AnsiColor::Yellow),
        log::Level::Info => ("I", AnsiColor::White),
        log::Level::Debug => ("D", AnsiColor::Blue),
        log::Level::Trace => ("T", AnsiColor::Magenta),
    }
}

//---------------------------------------------------------------------------------------------------- Logger init function
#[allow(clippy::module_name_repetitions)]
/// Initializes the logger.
///
/// This enables console logging on all the internals of `mbset`.
///
/// Functionality is provided by [`log`].
///
/// The levels are:
/// - ERROR
/// - WARN
/// - INFO
/// - DEBUG
/// - TRACE
///
/// If `RUST_LOG` is set, it takes precedence over `filter`.
///
/// # Errors
///
/// Returns an error if a global logger has already been installed.
pub fn init_logger(filter: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    // Initialize timer.
    let now = Lazy::force(&INIT_INSTANT);

    let env = std::env::var("RUST_LOG").ok().filter(|e| !e.is_empty());

    let mut builder = env_logger::Builder::new();
    match &env {
        Some(env) => builder.parse_filters(env),
        None => builder.parse_filters(&default_filter(filter)),
    };

    builder
        .format(move |buf, record| {
            let (level, color) = level_letter(record.level());
            let level_style = Style::new().bold().fg_color(Some(color.into()));
            let dimmed = Style::new().dimmed();
            writeln!(
                buf,
                // Longest PATH in the repo: `core/src/operations.rs` - `22` characters
                // Longest file in the repo: `core/src/operations.rs` - `3` digits
                //
                //      Longest PATH ---|        |--- Longest file
                //                      |        |
                //                      v        v
                "| {level_style}{level}{level_style:#} | {dimmed}{}{dimmed:#} | {dimmed}{: >22} @ {: <3}{dimmed:#} | {}",
                format_duration(&now.elapsed()),
                record.file_static().unwrap_or("???"),
                record.line().unwrap_or(0),
                record.args(),
            )
        })
        .write_style(env_logger::WriteStyle::Auto)
        .try_init()?;

    match env {
        Some(env) => info!("Log Level (RUST_LOG) ... {env}"),
        None => info!("Log Level (Flag) ... {filter}"),
    }

    Ok(())
}

/// Builds the subscriber for the `tracing` spans mbset opens (e.g. around area lookups).
///
/// Spans are reported on stderr when they close, with their timings, and are filtered the same
/// way as [`init_logger`]'s records. Install it with [`tracing::subscriber::set_global_default`].
#[must_use]
pub fn init_tracing(filter: log::LevelFilter) -> impl tracing::Subscriber + Send + Sync {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| default_filter(filter));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE),
        )
        .with(tracing_subscriber::EnvFilter::builder().parse_lossy(filter))
}
