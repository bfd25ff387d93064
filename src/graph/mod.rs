//! Module table and graph outline for modscope.
//!
//! This module provides the [`ModuleTable`] built from extracted
//! declarations and the [`GraphOutline`] accumulated by traversal.
//!
//! # Example
//!
//! ```rust
//! use modscope::graph::{ModuleTable, Role};
//!
//! let table = ModuleTable::from_pairs(vec![
//!     ("Player".to_string(), vec!["Audio".to_string()]),
//!     ("Audio".to_string(), vec![]),
//! ]);
//!
//! assert_eq!(table.role_of("Audio"), Role::Root);
//! assert_eq!(table.role_of("Player"), Role::Normal);
//! ```

mod module_table;
mod outline;

pub use module_table::{ModuleTable, Role, TableBuilder};
pub use outline::{GraphOutline, OutlineNode};
