//! Presentation of tables and outlines.
//!
//! Text reports (plain or JSON) render straight from the [`ModuleTable`];
//! graph output goes through DOT source and, unless a `.dot` path was asked
//! for, on to Graphviz for rasterization.

pub mod dot;
pub mod image;
pub mod json;
pub mod text;

pub use dot::{colour_names, to_dot};
pub use image::{write_graph, RenderError};
pub use json::write_json;
pub use text::{write_flat, write_inverted};

/// Text report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain aligned text, one module per line.
    Text,
    /// Machine-readable JSON document.
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown report format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
