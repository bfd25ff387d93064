//! Graph image rendering via Graphviz.
//!
//! A `.dot` output path short-circuits to writing the DOT source itself.
//! Any other path pipes the source through the `dot` executable with the
//! output format taken from the path's extension (`png` when absent).

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors raised while producing a graph image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the output file or driving the child process failed.
    #[error("i/o error while rendering graph: {0}")]
    Io(#[from] std::io::Error),

    /// The `dot` executable was not found on the PATH.
    #[error("graphviz `dot` executable not found; install graphviz or use a .dot output path")]
    GraphvizMissing,

    /// Graphviz ran but reported failure.
    #[error("graphviz failed: {0}")]
    Graphviz(String),
}

/// Writes the rendered graph to `path`.
///
/// The extension decides everything: `.dot` writes the source verbatim,
/// anything else becomes the `-T` format handed to Graphviz.
pub fn write_graph(dot_source: &str, path: &Path) -> Result<(), RenderError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("png")
        .to_lowercase();

    if extension == "dot" {
        fs::write(path, dot_source)?;
        return Ok(());
    }

    render_with_graphviz(dot_source, path, &extension)
}

fn render_with_graphviz(
    dot_source: &str,
    path: &Path,
    format: &str,
) -> Result<(), RenderError> {
    let mut child = Command::new("dot")
        .arg(format!("-T{}", format))
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RenderError::GraphvizMissing
            } else {
                RenderError::Io(e)
            }
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(dot_source.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(RenderError::Graphviz(stderr));
    }

    Ok(())
}
