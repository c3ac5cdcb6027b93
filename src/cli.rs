//! Command-line interface implementation for trellis.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::RUNNING_VERSION;

/// Command-line arguments structure for trellis.
#[derive(Parser, Debug)]
#[command(
    version = RUNNING_VERSION,
    about = "trellis: template tree scaffolding tool",
    long_about = None
)]
pub struct Args {
    /// Path to the template file or directory
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Path to the spec file, or '-' to read it from stdin
    #[arg(value_name = "SPEC")]
    pub spec_file: String,

    /// Directory the generated tree will be created in
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Open the spec in $EDITOR before rendering
    #[arg(short, long)]
    pub edit: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
