//! Browser Console Logging
//!
//! `tracing-subscriber`'s fmt layer writing through `tracing-web` into the
//! browser console. Timestamps are off: the wasm target has no system clock.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Install the global subscriber; later calls are ignored
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let result = tracing_subscriber::registry().with(level).with(fmt_layer).try_init();
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
