//! Logger module
//!
//! Server lifecycle, access, and error logging. Falls back to
//! stdout/stderr until [`init`] is called.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

use crate::config::Config;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write an access log line in the configured format
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    let line = entry.format(format);
    match writer::get() {
        Some(w) => w.write_access(&line),
        None => println!("{line}"),
    }
}

/// Write to error log
pub fn log_error(message: &str) {
    let line = format!("[ERROR] {message}");
    match writer::get() {
        Some(w) => w.write_error(&line),
        None => eprintln!("{line}"),
    }
}

/// Write a warning to the error log
pub fn log_warning(message: &str) {
    let line = format!("[WARN] {message}");
    match writer::get() {
        Some(w) => w.write_error(&line),
        None => eprintln!("{line}"),
    }
}

/// Log server startup banner
pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("Storefront running on: http://{addr}");
    println!("  - templates: {}", config.site.templates_dir);
    println!("  - static assets: {}", config.site.public_dir);
    if let Some(workers) = config.server.workers {
        println!("  - worker threads: {workers}");
    }
}
