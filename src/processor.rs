//! Core tree-templating engine for trellis.
//! Walks the template tree depth-first and mirrors it into the output
//! tree: entry names are rendered through the template engine, file
//! contents are either rendered or copied byte-for-byte depending on the
//! reserved name suffix, and source permission bits are carried over to
//! every written file.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

use crate::constants::TEMPLATED_SUFFIX;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

/// How a file entry's content reaches the output tree. The mode is a
/// property of the resolved name alone; content is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// Evaluate the file's text as a template and write the result
    Render,
    /// Copy the file's bytes verbatim
    Copy,
}

/// Returns true when a string contains template directives and needs
/// rendering before use.
pub fn contains_template_markers(value: &str) -> bool {
    ["{{", "{%", "{#"].iter().any(|marker| value.contains(marker))
}

/// Splits a resolved file name into the true output name and the content
/// mode derived from the reserved suffix. Exactly one occurrence of the
/// suffix is stripped.
pub fn split_content_mode(name: &str) -> (&str, ContentMode) {
    match name.strip_suffix(TEMPLATED_SUFFIX) {
        Some(stripped) => (stripped, ContentMode::Render),
        None => (name, ContentMode::Copy),
    }
}

/// Recursive tree walker binding a template engine to a spec for the
/// duration of one run. The spec is read-only through the whole walk.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    spec: &'a serde_json::Value,
}

impl<'a> Processor<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, spec: &'a serde_json::Value) -> Self {
        Self { engine, spec }
    }

    /// Mirrors the entry at `template_path` into `output_dir`, recursing
    /// into directories. The first error anywhere in the walk aborts it;
    /// entries already written stay on disk.
    pub fn process(&self, template_path: &Path, output_dir: &Path) -> Result<()> {
        let metadata = fs::metadata(template_path)
            .map_err(|e| process_error(template_path, Error::IoError(e)))?;
        if metadata.is_dir() {
            self.process_dir(template_path, output_dir)
        } else {
            self.process_file(template_path, output_dir)
        }
    }

    /// Renders an entry's raw name against the spec. `None` means the
    /// name evaluated to nothing and the entry must be skipped; a
    /// whitespace-only result is indistinguishable from an intentionally
    /// absent one.
    fn resolve_entry_name(&self, template_path: &Path) -> Result<Option<String>> {
        let raw_name = template_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidEntryNameError {
                path: template_path.display().to_string(),
            })?;

        let rendered = if contains_template_markers(raw_name) {
            self.engine
                .render(raw_name, self.spec)
                .map_err(|e| process_error(template_path, e))?
        } else {
            raw_name.to_string()
        };

        let trimmed = rendered.trim();
        if trimmed.is_empty() {
            println!(
                "Skipping '{}' since the name evaluated to ''",
                template_path.display()
            );
            return Ok(None);
        }
        Ok(Some(trimmed.to_string()))
    }

    /// Creates the directory's counterpart in the output tree and walks
    /// its children in the order the filesystem yields them.
    fn process_dir(&self, template_path: &Path, output_dir: &Path) -> Result<()> {
        let final_name = match self.resolve_entry_name(template_path)? {
            Some(name) => name,
            None => return Ok(()),
        };

        let new_output_dir = output_dir.join(&final_name);
        println!(
            "Processing '{}/' -> '{}/'",
            template_path.display(),
            new_output_dir.display()
        );
        if let Err(e) = fs::create_dir(&new_output_dir) {
            if e.kind() != io::ErrorKind::AlreadyExists {
                return Err(process_error(template_path, Error::IoError(e)));
            }
        }

        let entries = fs::read_dir(template_path).map_err(|e| Error::ReadError {
            path: template_path.display().to_string(),
            source: e,
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::ReadError {
                path: template_path.display().to_string(),
                source: e,
            })?;
            self.process(&entry.path(), &new_output_dir)?;
        }
        Ok(())
    }

    /// Transfers one file into the output tree, rendering or copying its
    /// content per [`ContentMode`], then applies the source entry's
    /// permission bits to the destination.
    fn process_file(&self, template_path: &Path, output_dir: &Path) -> Result<()> {
        let resolved = match self.resolve_entry_name(template_path)? {
            Some(name) => name,
            None => return Ok(()),
        };

        let (final_name, mode) = split_content_mode(&resolved);
        if final_name.is_empty() {
            println!(
                "Skipping '{}' since the name evaluated to ''",
                template_path.display()
            );
            return Ok(());
        }

        let target_path = output_dir.join(final_name);
        println!(
            "Processing '{}' -> '{}'",
            template_path.display(),
            target_path.display()
        );

        match mode {
            ContentMode::Render => {
                let input = fs::read_to_string(template_path).map_err(|e| Error::ReadError {
                    path: template_path.display().to_string(),
                    source: e,
                })?;
                let output = self.engine.render(&input, self.spec).map_err(|e| {
                    Error::RenderError {
                        path: template_path.display().to_string(),
                        source: Box::new(e),
                    }
                })?;
                fs::write(&target_path, output).map_err(|e| Error::WriteError {
                    path: template_path.display().to_string(),
                    source: e,
                })?;
            }
            ContentMode::Copy => {
                fs::copy(template_path, &target_path).map_err(|e| Error::CopyError {
                    path: template_path.display().to_string(),
                    source: e,
                })?;
            }
        }

        let metadata = fs::metadata(template_path).map_err(|e| Error::PermissionReadError {
            path: template_path.display().to_string(),
            source: e,
        })?;
        fs::set_permissions(&target_path, metadata.permissions()).map_err(|e| {
            Error::PermissionWriteError {
                path: template_path.display().to_string(),
                source: e,
            }
        })?;

        debug!("Transferred '{}' ({:?})", template_path.display(), mode);
        Ok(())
    }
}

fn process_error(template_path: &Path, source: Error) -> Error {
    Error::ProcessError {
        path: template_path.display().to_string(),
        source: Box::new(source),
    }
}
