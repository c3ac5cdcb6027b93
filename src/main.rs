//! trellis's main application entry point and orchestration logic.
//! Handles command-line argument parsing, spec loading and editing, the
//! version gate, and kicks off the tree walk.

use std::fs;
use std::io;

use trellis::{
    cli::{get_args, Args},
    constants::RUNNING_VERSION,
    editor::edit_spec,
    error::{default_error_handler, Error, Result},
    processor::Processor,
    renderer::MiniJinjaRenderer,
    spec::{parse_spec, read_spec_raw},
    version::check_minimum_version,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Validates the three positional inputs before any work happens.
fn check_paths(args: &Args) -> Result<()> {
    match fs::metadata(&args.template) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::TemplateDoesNotExistError {
                template: args.template.display().to_string(),
            });
        }
        Err(e) => return Err(Error::IoError(e)),
        Ok(_) => {}
    }

    if args.spec_file != "-" {
        match fs::metadata(&args.spec_file) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::SpecFileDoesNotExistError {
                    spec_file: args.spec_file.clone(),
                });
            }
            Err(e) => return Err(Error::IoError(e)),
            Ok(metadata) if metadata.is_dir() => {
                return Err(Error::SpecFileIsDirectoryError {
                    spec_file: args.spec_file.clone(),
                });
            }
            Ok(_) => {}
        }
    }

    match fs::metadata(&args.output_dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::OutputDirDoesNotExistError {
            output_dir: args.output_dir.display().to_string(),
        }),
        Err(e) => Err(Error::IoError(e)),
        Ok(metadata) if !metadata.is_dir() => Err(Error::OutputDirIsFileError {
            output_dir: args.output_dir.display().to_string(),
        }),
        Ok(_) => Ok(()),
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the template, spec and output paths
/// 2. Reads the raw spec, optionally passing it through $EDITOR
/// 3. Decodes the spec and runs the minimum-version gate
/// 4. Walks the template tree into the output directory
fn run(args: Args) -> Result<()> {
    check_paths(&args)?;

    let mut spec_contents = read_spec_raw(&args.spec_file)?;
    if args.edit {
        let editor = std::env::var("EDITOR").unwrap_or_default();
        if editor.is_empty() {
            return Err(Error::EditorNotSetError);
        }
        spec_contents = edit_spec(&editor, &spec_contents)?;
    }

    let spec = parse_spec(&spec_contents)?;
    check_minimum_version(&spec, RUNNING_VERSION)?;

    let engine = MiniJinjaRenderer::new();
    let processor = Processor::new(&engine, &spec);
    processor.process(&args.template, &args.output_dir)
}
