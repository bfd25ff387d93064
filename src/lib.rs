//! modscope - Module dependency mapper for AMD-style JavaScript codebases
//!
//! This crate scans a source tree for module registration calls, folds the
//! declarations into a single module table, and answers flat, rooted, and
//! inverted dependency queries as text reports or Graphviz images.

pub mod config;
pub mod export;
pub mod graph;
pub mod parser;
pub mod scan;
pub mod traverse;
