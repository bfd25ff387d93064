//! Extraction of AMD-style module declarations from source text.
//!
//! A declaration is a call of the form
//! `define('Name', ['DepA', 'DepB'], function (...)`, where the dependency
//! array is optional. Extraction is a single fixed pattern applied to raw
//! text; nothing here parses JavaScript proper, so malformed code is simply
//! not matched.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::map::Entry;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Per-file mapping from module name to its declared dependencies,
/// preserving declaration order.
pub type FileModules = IndexMap<String, Vec<String>>;

static DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\bdefine\s*\(\s*['"]([^'"]+)['"]\s*,(?:\s*\[\s*([^\]]*)\s*\]\s*,)?\s*function\s*\("#,
    )
    .unwrap()
});

static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//[^\n]*").unwrap());

/// Warning emitted when the same module name is declared more than once.
///
/// The two candidate dependency sets are kept verbatim so the conflict can
/// be reported exactly as it was seen; the table itself resolves the clash
/// by set-union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateDefinition {
    /// The module name declared twice.
    pub module: String,
    /// Dependencies already recorded for the module.
    pub first: Vec<String>,
    /// Dependencies carried by the colliding declaration.
    pub second: Vec<String>,
    /// File the colliding declaration was found in, when known.
    pub file: Option<PathBuf>,
}

impl fmt::Display for DuplicateDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate definition of module `{}`: may depend on [{}] or [{}]",
            self.module,
            self.first.join(", "),
            self.second.join(", ")
        )?;
        if let Some(ref file) = self.file {
            write!(f, " ({})", file.display())?;
        }
        Ok(())
    }
}

/// Result of extracting declarations from one file's text.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Modules declared in the file, in declaration order.
    pub modules: FileModules,
    /// Intra-file duplicate-definition warnings.
    pub warnings: Vec<DuplicateDefinition>,
}

/// Extracts all module declarations from a file on disk.
pub fn parse_file(path: &Path) -> io::Result<Extraction> {
    let text = fs::read_to_string(path)?;
    Ok(parse_source(&text))
}

/// Extracts all module declarations from raw source text.
///
/// Returns an empty mapping when nothing matches. A module declared twice
/// within the same text has its dependency lists unioned and a warning
/// recorded; extraction itself never fails.
///
/// # Example
///
/// ```rust
/// use modscope::parser::parse_source;
///
/// let extraction = parse_source("define('Player', ['Audio'], function (Audio) {});");
/// assert_eq!(extraction.modules["Player"], vec!["Audio".to_string()]);
/// ```
pub fn parse_source(text: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for capture in DECLARATION_PATTERN.captures_iter(text) {
        let name = capture[1].to_string();
        let deps = capture
            .get(2)
            .map(|list| split_dependencies(list.as_str()))
            .unwrap_or_default();

        match extraction.modules.entry(name) {
            Entry::Occupied(mut entry) => {
                extraction.warnings.push(DuplicateDefinition {
                    module: entry.key().clone(),
                    first: entry.get().clone(),
                    second: deps.clone(),
                    file: None,
                });
                let merged = union_dependencies(entry.get(), &deps);
                *entry.get_mut() = merged;
            }
            Entry::Vacant(entry) => {
                entry.insert(deps);
            }
        }
    }

    extraction
}

/// Unions two dependency lists, keeping first-occurrence order and dropping
/// duplicates. This is the merge policy for every duplicate definition,
/// intra-file and cross-file alike: commutative and idempotent as sets.
pub fn union_dependencies(first: &[String], second: &[String]) -> Vec<String> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    for name in first.iter().chain(second) {
        if !merged.contains(name) {
            merged.push(name.clone());
        }
    }
    merged
}

/// Splits the raw text of a dependency array into bare module names.
///
/// Trailing `//` comments are stripped first so commented-out entries never
/// become dependencies. Duplicates within one declaration are kept as
/// written; only merging removes them.
fn split_dependencies(raw: &str) -> Vec<String> {
    let stripped = LINE_COMMENT.replace_all(raw, "");
    stripped
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(unquote)
        .collect()
}

fn unquote(token: &str) -> String {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return token[1..token.len() - 1].to_string();
        }
    }
    token.to_string()
}
