//! Error handling for the trellis application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for trellis operations.
///
/// Every failure during a run maps onto one of these variants. Errors
/// raised while walking the template tree carry the path of the entry
/// being processed at the point of failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Input template '{template}' does not exist!")]
    TemplateDoesNotExistError { template: String },

    #[error("Spec file '{spec_file}' does not exist!")]
    SpecFileDoesNotExistError { spec_file: String },

    #[error("Spec file '{spec_file}' cannot be a directory!")]
    SpecFileIsDirectoryError { spec_file: String },

    #[error("Output directory '{output_dir}' does not exist!")]
    OutputDirDoesNotExistError { output_dir: String },

    #[error("Output directory '{output_dir}' cannot be a file!")]
    OutputDirIsFileError { output_dir: String },

    #[error("Could not read spec file: {source}.")]
    SpecReadError { source: io::Error },

    #[error("Could not parse spec file: {0}.")]
    SpecParseError(String),

    /// Wraps any failure raised while walking a template entry with the
    /// path being processed
    #[error("Error while processing '{path}': {source}")]
    ProcessError { path: String, source: Box<Error> },

    #[error("Error while processing '{path}': cannot resolve entry name")]
    InvalidEntryNameError { path: String },

    #[error("Error while reading '{path}': {source}")]
    ReadError { path: String, source: io::Error },

    #[error("Error while rendering template for '{path}': {source}")]
    RenderError { path: String, source: Box<Error> },

    #[error("Error while writing file bytes for '{path}': {source}")]
    WriteError { path: String, source: io::Error },

    #[error("Error while copying file bytes for '{path}': {source}")]
    CopyError { path: String, source: io::Error },

    #[error("Error while checking file permissions for '{path}': {source}")]
    PermissionReadError { path: String, source: io::Error },

    #[error("Error while writing file permissions for '{path}': {source}")]
    PermissionWriteError { path: String, source: io::Error },

    #[error("Could not parse version part '{part}' in '{version}'")]
    VersionPartError { part: String, version: String },

    #[error("You are running an unofficial build of trellis: cannot check the template's minimum version")]
    UnofficialBuildError,

    #[error("Template spec requires minimum version {required} but you are running {running}!")]
    MinimumVersionError { required: String, running: String },

    #[error("You specified --edit but no $EDITOR is set")]
    EditorNotSetError,

    #[error("Editor command failed: {0}")]
    EditorError(String),

    #[error("No save detected, you must save the file when using --edit")]
    EditorNoSaveError,
}

/// Convenience type alias for Results with trellis's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
