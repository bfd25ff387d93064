//! Run configuration for modscope.
//!
//! All options are resolved once from the command line into an immutable
//! [`Config`] value that is passed by reference to the components that need
//! it. Nothing in the crate reads configuration from global state.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::export::ReportFormat;

/// Dependencies excluded by default when mapping the whole system.
///
/// These are the AMD loader pseudo-modules that nearly every module lists
/// and that only add noise to a full map. They are excluded only when the
/// user asked for the full map and gave no explicit exclusion list.
pub const DEFAULT_EXCLUDES: &[&str] = &["require", "exports", "module"];

/// Fill colours applied to graph nodes by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourScheme {
    /// Colour for root modules (no dependencies of their own).
    pub root: String,
    /// Colour for ordinary modules.
    pub node: String,
    /// Colour for names referenced as dependencies but never defined.
    pub undefined: String,
}

impl Default for ColourScheme {
    fn default() -> Self {
        Self {
            root: "forestgreen".to_string(),
            node: "white".to_string(),
            undefined: "orangered".to_string(),
        }
    }
}

/// Immutable configuration for one run.
///
/// # Example
///
/// ```rust
/// use modscope::config::Config;
///
/// let config = Config::new(Some("Player".to_string()), false, None);
/// assert!(config.exclude.is_empty()); // a module was named, so no default excludes
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Module to trace from; `None` maps the whole system.
    pub module: Option<String>,
    /// Trace dependents of `module` instead of its dependencies.
    pub invert: bool,
    /// Module names never expanded or drawn in graph modes.
    pub exclude: HashSet<String>,
    /// Output image path; presence selects graph mode over text mode.
    pub output_image: Option<PathBuf>,
    /// Text report format.
    pub format: ReportFormat,
    /// Node fill colours by role.
    pub colours: ColourScheme,
}

impl Config {
    /// Builds a configuration with the default exclusion policy applied.
    ///
    /// When no module is named and no explicit exclusion list is given, the
    /// built-in [`DEFAULT_EXCLUDES`] set is used; in every other case the
    /// exclusion set is exactly what the caller supplied.
    pub fn new(
        module: Option<String>,
        invert: bool,
        exclude_modules: Option<Vec<String>>,
    ) -> Self {
        let exclude = match exclude_modules {
            Some(names) => names.into_iter().collect(),
            None if module.is_none() => {
                DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
            }
            None => HashSet::new(),
        };

        Self {
            module,
            invert,
            exclude,
            output_image: None,
            format: ReportFormat::Text,
            colours: ColourScheme::default(),
        }
    }

    /// Sets the output image path, switching the run into graph mode.
    pub fn with_output_image(mut self, path: Option<PathBuf>) -> Self {
        self.output_image = path;
        self
    }

    /// Sets the text report format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the node fill colours.
    pub fn with_colours(mut self, colours: ColourScheme) -> Self {
        self.colours = colours;
        self
    }

    /// Returns true if this run renders a graph image instead of text.
    pub fn image_mode(&self) -> bool {
        self.output_image.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_for_full_map() {
        let config = Config::new(None, false, None);
        assert!(config.exclude.contains("require"));
        assert!(config.exclude.contains("exports"));
        assert!(config.exclude.contains("module"));
    }

    #[test]
    fn test_no_default_excludes_when_module_given() {
        let config = Config::new(Some("Player".to_string()), false, None);
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_explicit_excludes_override_defaults() {
        let config = Config::new(None, false, Some(vec!["Log".to_string()]));
        assert!(config.exclude.contains("Log"));
        assert!(!config.exclude.contains("require"));
    }

    #[test]
    fn test_explicit_empty_excludes() {
        let config = Config::new(None, false, Some(Vec::new()));
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_image_mode() {
        let config = Config::new(None, false, None);
        assert!(!config.image_mode());

        let config = config.with_output_image(Some(PathBuf::from("deps.png")));
        assert!(config.image_mode());
    }

    #[test]
    fn test_default_colours() {
        let colours = ColourScheme::default();
        assert_eq!(colours.root, "forestgreen");
        assert_eq!(colours.node, "white");
        assert_eq!(colours.undefined, "orangered");
    }
}
