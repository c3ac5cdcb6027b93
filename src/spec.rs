//! Spec ingestion for trellis.
//! Reads the data record from a file or standard input and decodes it
//! from JSON or YAML into the render context shared by every template
//! evaluation in a run.

use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::io::Read;

use crate::error::{Error, Result};

/// Reads the raw spec text from `spec_file`, or from standard input when
/// the path is `-`.
pub fn read_spec_raw(spec_file: &str) -> Result<String> {
    if spec_file == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| Error::SpecReadError { source: e })?;
        return Ok(buffer);
    }
    fs::read_to_string(spec_file).map_err(|e| Error::SpecReadError { source: e })
}

/// Decodes spec text into the render context. JSON is tried first, then
/// YAML. Top-level keys must be strings; anything else is a parse error.
pub fn parse_spec(content: &str) -> Result<serde_json::Value> {
    let raw: IndexMap<String, serde_json::Value> = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::SpecParseError(e.to_string()))?,
    };

    debug!("Loaded spec with {} top-level keys", raw.len());
    Ok(serde_json::Value::Object(raw.into_iter().collect()))
}
