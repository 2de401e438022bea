//! Failure reporting for CLI commands.

use seqkit::{Error, RenderConfig, render_error_to};

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, Error>;

/// Render `error` to stderr and exit with code 1.
///
/// Parse errors point into the literal argument that failed, shown as
/// `<input>`. Every other error prints its code and help lines.
pub fn render_and_exit(error: Error, no_color: bool) -> ! {
    tracing::debug!(code = error.code(), "command failed");
    let config = RenderConfig {
        color: !no_color,
        filename: Some("<input>"),
        ..Default::default()
    };
    render_error_to(&error, &mut std::io::stderr(), &config).ok();
    std::process::exit(1);
}
