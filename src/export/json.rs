//! JSON report rendering.
//!
//! Serializes the full module table, the undefined-name list, and any
//! duplicate-definition warnings into one machine-readable document.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::graph::{ModuleTable, Role};
use crate::parser::DuplicateDefinition;

/// Serializable module entry for JSON output.
#[derive(Serialize)]
struct JsonModule {
    name: String,
    role: Role,
    dependencies: Vec<String>,
}

/// Serializable duplicate-definition warning for JSON output.
#[derive(Serialize)]
struct JsonDuplicate {
    module: String,
    first: Vec<String>,
    second: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    modules: usize,
    roots: usize,
    undefined: usize,
    duplicates: usize,
}

/// Root JSON report structure.
#[derive(Serialize)]
struct JsonReport {
    root: String,
    summary: JsonSummary,
    modules: Vec<JsonModule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    undefined: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    duplicates: Vec<JsonDuplicate>,
}

/// Writes the full table as a pretty-printed JSON report naming the
/// scanned root.
pub fn write_json<W: Write>(
    root: &Path,
    table: &ModuleTable,
    warnings: &[DuplicateDefinition],
    writer: &mut W,
) -> io::Result<()> {
    let modules: Vec<JsonModule> = table
        .iter()
        .map(|(name, deps)| JsonModule {
            name: name.to_string(),
            role: table.role_of(name),
            dependencies: deps.to_vec(),
        })
        .collect();

    let undefined: Vec<String> = table
        .undefined_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    let duplicates: Vec<JsonDuplicate> = warnings
        .iter()
        .map(|w| JsonDuplicate {
            module: w.module.clone(),
            first: w.first.clone(),
            second: w.second.clone(),
            file: w.file.as_ref().map(|p| p.display().to_string()),
        })
        .collect();

    let report = JsonReport {
        root: root.display().to_string(),
        summary: JsonSummary {
            modules: table.len(),
            roots: table.roots().len(),
            undefined: undefined.len(),
            duplicates: duplicates.len(),
        },
        modules,
        undefined,
        duplicates,
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    writeln!(writer, "{}", json)
}
