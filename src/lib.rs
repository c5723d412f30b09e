//! codefs embeds a directory tree into generated source code.
//! Every file is read, hex-encoded and injected into a template as a map
//! from server path to content, ready to be compiled in and served at runtime.

/// Command-line interface module for the codefs application
pub mod cli;

/// Directory walk producing the files to embed
pub mod collector;

/// Explicit settings for a generation run
pub mod config;

/// Marker tokens and defaults
pub mod constants;

/// Error types and handling for the codefs application
pub mod error;

/// Template reading, collection and rendering in sequence
pub mod generator;

/// Exclusion globs for the tree walk
pub mod ignore;

/// Logger configuration
pub mod logger;

/// Destination handling for the generated source
pub mod output;

/// Marker substitution and data block construction
pub mod renderer;
