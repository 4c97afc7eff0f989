//! Prefixed terminal output for hook runs
//!
//! Every line carries the plugin log prefix so hook output is attributable
//! inside the build host's interleaved logs.

use console::Style;

pub const LOG_PREFIX: &str = "[tokhook]";

/// Print an informational line to stdout
pub fn info(message: impl AsRef<str>) {
    println!(
        "{} {}",
        Style::new().dim().apply_to(LOG_PREFIX),
        message.as_ref()
    );
}

/// Print a warning line to stderr
pub fn warn(message: impl AsRef<str>) {
    eprintln!(
        "{} {} {}",
        Style::new().dim().apply_to(LOG_PREFIX),
        Style::new().bold().yellow().apply_to("WARN:"),
        message.as_ref()
    );
}

/// Print a success line to stdout
pub fn success(message: impl AsRef<str>) {
    println!(
        "{} {}",
        Style::new().dim().apply_to(LOG_PREFIX),
        Style::new().green().apply_to(message.as_ref())
    );
}
