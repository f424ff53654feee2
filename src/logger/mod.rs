//! Logger module
//!
//! Provides logging utilities for the coating line server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Device report summaries
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::coating::DeviceReport;
use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Coating line server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info("  - GET     /target  (target thickness)");
    write_info("  - GET     /lines   (production lines)");
    write_info("  - POST    /data    (device report)");
    write_info("  - OPTIONS *        (CORS preflight)");
    write_info(&format!("Max body size: {} bytes", config.http.max_body_size));
    write_info(&format!("Keep-alive: {}", config.performance.keep_alive));
    if config.performance.connection_timeout > 0 {
        write_info(&format!(
            "Connection timeout: {}s",
            config.performance.connection_timeout
        ));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

/// Log a received stop signal through the configured info target
pub fn log_signal(name: &str) {
    write_info(&format_signal(name));
}

fn format_signal(name: &str) -> String {
    format!("\n[SIGNAL] {name} received, finishing current connection and shutting down")
}

pub fn log_shutdown() {
    write_info("[Shutdown] Server stopped accepting connections");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

/// Log the fields of a device report as received
pub fn log_device_report(report: &DeviceReport) {
    write_info(&format_device_report(report));
}

fn format_device_report(report: &DeviceReport) -> String {
    let show = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v:?}"));
    format!(
        "Received data from Flex device:\n  Target Thickness: {}\n  Current Thickness: {}\n  Current Line: {}",
        show(report.target_thickness),
        show(report.current_thickness),
        report.selected_line.as_deref().unwrap_or("-"),
    )
}
