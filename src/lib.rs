//! trellis is a template tree scaffolding engine.
//! It mirrors a template file or directory hierarchy into an output tree,
//! evaluating template directives embedded in entry names and file
//! contents against a structured spec record.

/// Command-line interface module for the trellis application
pub mod cli;

/// Common constants: reserved filename suffix, spec keys, running version
pub mod constants;

/// Interactive spec editing in the user's $EDITOR
pub mod editor;

/// Error types and handling for the trellis application
pub mod error;

/// Helper functions exposed to the template language
pub mod helpers;

/// Core tree-templating engine
/// Walks the template tree and mirrors it into the output tree
pub mod processor;

/// Template rendering trait and its MiniJinja implementation
pub mod renderer;

/// Spec ingestion: reading and decoding the data record
pub mod spec;

/// Minimum-version gate comparing the spec's declared requirement
/// against the running tool version
pub mod version;
