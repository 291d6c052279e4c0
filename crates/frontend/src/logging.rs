//! Browser console logging

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Install a console subscriber at `level` (`info` when unset or unknown)
pub fn init(level: Option<&str>) {
    let level = level
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::INFO);

    // No clock on wasm32-unknown-unknown, so timestamps are left out
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(level);

    tracing_subscriber::registry().with(fmt_layer).init();
}
