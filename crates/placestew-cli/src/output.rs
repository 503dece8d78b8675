//! JSON rendering and delivery of parse results.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;

/// Serialize `value` as compact single-line JSON, or indented when `pretty`.
pub(crate) fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("failed to serialize output")
}

/// Print `rendered` to stdout, or write it to `path` and say where it went.
///
/// # Errors
///
/// Returns an error if the output file cannot be written.
pub(crate) fn emit(rendered: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write output to {}", path.display()))?;
            println!("Output written to: {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
