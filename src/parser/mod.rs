//! Declaration extraction for modscope.
//!
//! The only declaration form recognized is the AMD-style registration call
//! (`define('Name', [...], function (`); see [`declarations`] for the exact
//! pattern and merge behavior.

pub mod declarations;

pub use declarations::{
    parse_file, parse_source, union_dependencies, DuplicateDefinition, Extraction, FileModules,
};
