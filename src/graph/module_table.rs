//! The module table: the reconciled mapping from module name to declared
//! dependencies, and the role queries derived from it.
//!
//! The table is built once per run by folding per-file extraction results
//! and is never mutated afterwards; traversal and presentation only read it.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::parser::{union_dependencies, DuplicateDefinition, Extraction};

/// Classification of a name relative to the table.
///
/// Roles are derived on demand, never stored: the table is fixed for the
/// run, so recomputation is both cheap and always current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Defined with an empty dependency list.
    Root,
    /// Defined with at least one dependency.
    Normal,
    /// Referenced as a dependency but never defined.
    Undefined,
}

impl Role {
    /// Returns a short label for the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Root => "root",
            Role::Normal => "normal",
            Role::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The global mapping from module name to dependency list.
///
/// Keys are unique (merging enforces this) and iterate in insertion order,
/// which is file-visitation order. A dependency name need not be a key; such
/// names are *undefined* references.
///
/// # Example
///
/// ```rust
/// use modscope::graph::{ModuleTable, Role};
///
/// let table = ModuleTable::from_pairs([
///     ("Root", vec![]),
///     ("Mid", vec!["Root"]),
///     ("Top", vec!["Mid", "Ghost"]),
/// ]);
///
/// assert_eq!(table.roots(), vec!["Root"]);
/// assert!(table.is_undefined("Ghost"));
/// assert_eq!(table.role_of("Mid"), Role::Normal);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleTable {
    entries: IndexMap<String, Vec<String>>,
}

impl ModuleTable {
    /// Builds a table directly from `(name, dependencies)` pairs.
    ///
    /// Collisions are resolved with the same union policy the builder uses,
    /// but without recording warnings; intended for tests and benches.
    pub fn from_pairs<I, N, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<D>)>,
        N: Into<String>,
        D: Into<String>,
    {
        let mut entries: IndexMap<String, Vec<String>> = IndexMap::new();
        for (name, deps) in pairs {
            let deps: Vec<String> = deps.into_iter().map(Into::into).collect();
            match entries.entry(name.into()) {
                indexmap::map::Entry::Occupied(mut entry) => {
                    let merged = union_dependencies(entry.get(), &deps);
                    *entry.get_mut() = merged;
                }
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(deps);
                }
            }
        }
        Self { entries }
    }

    /// Returns the dependency list declared for `name`, if defined.
    pub fn dependencies(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Returns true if `name` is defined in the table.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns true iff `name` is not a key of the table, regardless of
    /// whether it appears as a dependency.
    pub fn is_undefined(&self, name: &str) -> bool {
        !self.entries.contains_key(name)
    }

    /// Returns all module names with an empty dependency list, in table
    /// order.
    pub fn roots(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Classifies `name` relative to the table.
    pub fn role_of(&self, name: &str) -> Role {
        match self.entries.get(name) {
            None => Role::Undefined,
            Some(deps) if deps.is_empty() => Role::Root,
            Some(_) => Role::Normal,
        }
    }

    /// Returns every name referenced as a dependency but never defined, in
    /// first-reference order, without duplicates.
    pub fn undefined_names(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for deps in self.entries.values() {
            for dep in deps {
                if self.is_undefined(dep) && !seen.contains(&dep.as_str()) {
                    seen.push(dep.as_str());
                }
            }
        }
        seen
    }

    /// Iterates over `(name, dependencies)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    /// Returns the number of defined modules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no modules are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Folds per-file extraction results into one [`ModuleTable`].
///
/// Files are added left-to-right in visitation order. On a key collision
/// across files the two dependency lists are unioned and a warning naming
/// the module and both candidate sets is recorded; the fold never fails.
/// Fold order affects only warning order, never the final table contents.
#[derive(Debug, Default)]
pub struct TableBuilder {
    entries: IndexMap<String, Vec<String>>,
    warnings: Vec<DuplicateDefinition>,
}

impl TableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one file's extraction into the table under construction.
    ///
    /// Intra-file warnings carried by the extraction are stamped with the
    /// file path and kept alongside the cross-file warnings generated here.
    pub fn add_file(&mut self, path: &Path, extraction: Extraction) {
        for mut warning in extraction.warnings {
            warning.file = Some(path.to_path_buf());
            self.warnings.push(warning);
        }

        for (name, deps) in extraction.modules {
            match self.entries.entry(name) {
                indexmap::map::Entry::Occupied(mut entry) => {
                    self.warnings.push(DuplicateDefinition {
                        module: entry.key().clone(),
                        first: entry.get().clone(),
                        second: deps.clone(),
                        file: Some(path.to_path_buf()),
                    });
                    let merged = union_dependencies(entry.get(), &deps);
                    *entry.get_mut() = merged;
                }
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(deps);
                }
            }
        }
    }

    /// Finishes the fold, yielding the immutable table and every warning
    /// collected along the way.
    pub fn finish(self) -> (ModuleTable, Vec<DuplicateDefinition>) {
        (
            ModuleTable {
                entries: self.entries,
            },
            self.warnings,
        )
    }
}
