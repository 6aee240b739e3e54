//! Plain-text output of converted grids.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tt_core::frame::TextGrid;

/// Write `grid` to `path`, or to stdout when `path` is `-`.
///
/// # Errors
/// Returns an error if the destination cannot be written.
pub fn save_text(grid: &TextGrid, path: &Path) -> Result<()> {
    let text = grid.to_string();
    if path.as_os_str() == "-" {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{text}").context("Impossible d'écrire sur stdout")?;
        return Ok(());
    }
    std::fs::write(path, text.as_bytes())
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::info!(
        "wrote {}x{} characters to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}
