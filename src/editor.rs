//! Interactive spec editing for trellis.
//! Writes the raw spec to a scratch file, opens it in the configured
//! editor and reads it back once the editor exits.

use log::debug;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::SystemTime;

use crate::error::{Error, Result};

/// Stats the scratch file created moments ago. Losing it mid-edit is a
/// broken execution environment, not bad input, and aborts the process.
fn scratch_mtime(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .expect("scratch spec file disappeared during editing")
}

/// Opens `contents` in `editor` and returns the edited text.
///
/// The editor runs with inherited stdio. An unchanged modification time
/// after the editor exits means no save was made; the run must not
/// silently proceed with the unedited spec.
pub fn edit_spec(editor: &str, contents: &str) -> Result<String> {
    let scratch = tempfile::Builder::new()
        .prefix("trellis")
        .suffix(".yaml")
        .tempfile()
        .map_err(Error::IoError)?;
    fs::write(scratch.path(), contents).map_err(Error::IoError)?;
    let before = scratch_mtime(scratch.path());

    debug!("Editing spec with '{}'", editor);
    let status = Command::new(editor)
        .arg(scratch.path())
        .status()
        .map_err(|e| Error::EditorError(e.to_string()))?;
    if !status.success() {
        return Err(Error::EditorError(format!("exited with {}", status)));
    }

    if scratch_mtime(scratch.path()) == before {
        return Err(Error::EditorNoSaveError);
    }

    fs::read_to_string(scratch.path()).map_err(Error::IoError)
}
