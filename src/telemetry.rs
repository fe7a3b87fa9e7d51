//! Tracing initialization
//!
//! - `DEUTSCH_DAILY_LOG` sets the filter (e.g. "debug" or
//!   "info,deutsch_daily=debug"); defaults to "info".
//! - `DEUTSCH_DAILY_LOG_FORMAT=json` switches to JSON lines.
//!
//! Logs go to stderr because stdout carries the MCP protocol.

use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_ENV: &str = "DEUTSCH_DAILY_LOG";
pub const LOG_FORMAT_ENV: &str = "DEUTSCH_DAILY_LOG_FORMAT";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    match std::env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => {
            builder.json().init();
        }
        _ => {
            builder.init();
        }
    }
}
