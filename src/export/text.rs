//! Plain-text report rendering.
//!
//! The flat report prints one module per line, name left-padded to the
//! widest emitted name, followed by its dependency list in brackets. The
//! inverted report prints one dependent name per line.

use std::io::{self, Write};

use crate::graph::ModuleTable;

/// Writes the flat dependency report.
///
/// With no filter, every table entry is printed in table order. With a
/// filter, exactly one line is printed for the named module; a name the
/// table does not define prints with an empty dependency list.
///
/// # Example
///
/// ```rust
/// use modscope::export::write_flat;
/// use modscope::graph::ModuleTable;
///
/// let table = ModuleTable::from_pairs([
///     ("Player", vec!["Audio"]),
///     ("Audio", vec![]),
/// ]);
///
/// let mut out = Vec::new();
/// write_flat(&table, None, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Player [Audio]\nAudio  []\n"
/// );
/// ```
pub fn write_flat<W: Write>(
    table: &ModuleTable,
    module_filter: Option<&str>,
    writer: &mut W,
) -> io::Result<()> {
    let empty: &[String] = &[];
    let lines: Vec<(&str, &[String])> = match module_filter {
        Some(name) => vec![(name, table.dependencies(name).unwrap_or(empty))],
        None => table.iter().collect(),
    };

    let width = lines.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, deps) in lines {
        writeln!(writer, "{:<width$} [{}]", name, deps.join(", "))?;
    }

    Ok(())
}

/// Writes the inverted report: every module depending on `target`, one per
/// line, in table order. A target nobody depends on writes nothing.
pub fn write_inverted<W: Write>(
    table: &ModuleTable,
    target: &str,
    writer: &mut W,
) -> io::Result<()> {
    for (name, deps) in table.iter() {
        if deps.iter().any(|dep| dep == target) {
            writeln!(writer, "{}", name)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_flat(table: &ModuleTable, filter: Option<&str>) -> String {
        let mut out = Vec::new();
        write_flat(table, filter, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn render_inverted(table: &ModuleTable, target: &str) -> String {
        let mut out = Vec::new();
        write_inverted(table, target, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_flat_pads_to_widest_name() {
        let table = ModuleTable::from_pairs([
            ("Player", vec!["Audio", "Playlist"]),
            ("Au", vec![]),
        ]);
        assert_eq!(
            render_flat(&table, None),
            "Player [Audio, Playlist]\nAu     []\n"
        );
    }

    #[test]
    fn test_flat_empty_table_writes_nothing() {
        let table = ModuleTable::default();
        assert_eq!(render_flat(&table, None), "");
    }

    #[test]
    fn test_flat_filter_prints_single_line() {
        let table = ModuleTable::from_pairs([
            ("Player", vec!["Audio"]),
            ("Audio", vec![]),
        ]);
        assert_eq!(render_flat(&table, Some("Player")), "Player [Audio]\n");
    }

    #[test]
    fn test_flat_filter_unknown_module_prints_empty_list() {
        let table = ModuleTable::from_pairs([("Player", vec!["Audio"])]);
        assert_eq!(render_flat(&table, Some("Ghost")), "Ghost []\n");
    }

    #[test]
    fn test_inverted_lists_dependents_in_table_order() {
        let table = ModuleTable::from_pairs([
            ("A", vec!["X"]),
            ("B", vec!["Y"]),
            ("C", vec!["X", "Y"]),
        ]);
        assert_eq!(render_inverted(&table, "X"), "A\nC\n");
    }

    #[test]
    fn test_inverted_without_dependents_writes_nothing() {
        let table = ModuleTable::from_pairs([("A", vec!["X"])]);
        assert_eq!(render_inverted(&table, "A"), "");
    }
}
