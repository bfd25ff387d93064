//! Query-mode traversal over the module table.
//!
//! Every run resolves to exactly one [`QueryMode`], and [`traverse`] is the
//! single entry point that turns a table plus a mode into a
//! [`GraphOutline`]. The table is read-only throughout; traversal never
//! mutates it.

use std::collections::HashSet;

use crate::config::Config;
use crate::graph::{GraphOutline, ModuleTable, Role};

/// The shape of the question a run asks of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// Every module and every dependency edge, one pass over the table.
    Flat,
    /// The reachable subgraph descending from one named module.
    Rooted(String),
    /// The direct dependents of one named module, one hop only.
    Inverted(String),
}

impl QueryMode {
    /// Derives the mode from a resolved configuration.
    ///
    /// Naming a module selects a rooted descent; adding the invert flag
    /// turns that into a dependent lookup. No module means the full map.
    pub fn from_config(config: &Config) -> Self {
        match &config.module {
            Some(module) if config.invert => QueryMode::Inverted(module.clone()),
            Some(module) => QueryMode::Rooted(module.clone()),
            None => QueryMode::Flat,
        }
    }
}

/// Runs the query against the table, producing the outline to render.
///
/// Excluded names are dropped wherever traversal would emit them; only a
/// rooted query's own start module bypasses the filter. The table itself
/// is untouched by exclusion; it only filters what traversal emits.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use modscope::graph::{ModuleTable, Role};
/// use modscope::traverse::{traverse, QueryMode};
///
/// let table = ModuleTable::from_pairs([
///     ("Mid", vec!["Root"]),
///     ("Root", vec![]),
///     ("Top", vec!["Mid", "Ghost"]),
/// ]);
///
/// let outline = traverse(&table, &QueryMode::Rooted("Top".to_string()), &HashSet::new());
/// assert_eq!(outline.node_count(), 4);
/// assert_eq!(outline.role_of("Ghost"), Some(Role::Undefined));
/// ```
pub fn traverse(table: &ModuleTable, mode: &QueryMode, exclude: &HashSet<String>) -> GraphOutline {
    match mode {
        QueryMode::Flat => flat(table, exclude),
        QueryMode::Rooted(root) => rooted(table, root, exclude),
        QueryMode::Inverted(target) => inverted(table, target),
    }
}

/// One pass over the table: every non-excluded entry becomes a node with
/// edges to each of its non-excluded dependencies.
///
/// Dependency names are classified by their own entry when they have one;
/// a name with no entry or an empty entry draws as a root, so undefined
/// names are indistinguishable from roots in this mode.
fn flat(table: &ModuleTable, exclude: &HashSet<String>) -> GraphOutline {
    let mut outline = GraphOutline::new();

    for (name, deps) in table.iter() {
        if exclude.contains(name) {
            continue;
        }

        let role = if deps.is_empty() {
            Role::Root
        } else {
            Role::Normal
        };
        outline.add_node(name, role);

        for dep in deps {
            if exclude.contains(dep.as_str()) {
                continue;
            }
            let dep_role = match table.dependencies(dep) {
                Some(dep_deps) if !dep_deps.is_empty() => Role::Normal,
                _ => Role::Root,
            };
            outline.add_node(dep, dep_role);
            outline.add_edge(name, dep);
        }
    }

    outline
}

/// Iterative depth-first descent from `root`.
///
/// The work list holds `(name, parent)` pairs. A name is classified and
/// expanded only on its first visit; later visits still draw the incoming
/// edge, so shared dependencies and cycles keep every arrow without
/// re-expanding anything. Pushing dependencies in reverse keeps emission in
/// declaration order. Exclusion filters arrivals from a parent, never the
/// start module itself.
fn rooted(table: &ModuleTable, root: &str, exclude: &HashSet<String>) -> GraphOutline {
    let mut outline = GraphOutline::new();
    let mut stack: Vec<(String, Option<String>)> = vec![(root.to_string(), None)];

    while let Some((name, parent)) = stack.pop() {
        if parent.is_some() && exclude.contains(&name) {
            continue;
        }

        let first_visit = !outline.contains(&name);
        if first_visit {
            outline.add_node(&name, table.role_of(&name));
        }
        if let Some(ref parent) = parent {
            outline.add_edge(parent, &name);
        }
        if !first_visit {
            continue;
        }

        if let Some(deps) = table.dependencies(&name) {
            for dep in deps.iter().rev() {
                stack.push((dep.clone(), Some(name.clone())));
            }
        }
    }

    outline
}

/// One-hop reverse lookup: every module whose dependency list names
/// `target`, in table order, each with an edge pointing at the target.
///
/// Exclusion does not apply in this mode. A target nobody depends on
/// yields an empty outline.
fn inverted(table: &ModuleTable, target: &str) -> GraphOutline {
    let mut outline = GraphOutline::new();

    for (name, deps) in table.iter() {
        if deps.iter().any(|dep| dep == target) {
            outline.add_node(name, table.role_of(name));
            outline.add_node(target, table.role_of(target));
            outline.add_edge(name, target);
        }
    }

    outline
}
