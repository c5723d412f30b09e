//! Generation configuration.
//! The command line is parsed into [`crate::cli::Args`] and then turned into
//! this explicit struct, which is all the library needs to produce output.

use std::path::PathBuf;

use crate::constants::{DEFAULT_INDEX, DEFAULT_TEMPLATE};

/// Settings for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose files are embedded
    pub root: PathBuf,
    /// Prefix stripped from on-disk paths; the root itself for top-level runs
    pub base_dir: PathBuf,
    /// Server path also registered under `/`
    pub index_path: String,
    /// Template file to render
    pub template_path: PathBuf,
    /// Output file; `None` writes to stdout
    pub output: Option<PathBuf>,
    /// Exclusion globs, relative to the root
    pub exclude: Vec<String>,
    /// Whether symbolic links are followed during the walk
    pub follow_links: bool,
    /// Whether every template marker must appear exactly once
    pub strict_markers: bool,
    /// Recorded verbatim in the generated file
    pub generation_command: String,
}

impl Config {
    /// Creates a configuration for `root` with every other setting at its default.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        Self {
            base_dir: root.clone(),
            root,
            index_path: DEFAULT_INDEX.to_string(),
            template_path: PathBuf::from(DEFAULT_TEMPLATE),
            output: None,
            exclude: Vec::new(),
            follow_links: true,
            strict_markers: true,
            generation_command: String::new(),
        }
    }
}
