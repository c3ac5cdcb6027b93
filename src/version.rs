//! Minimum-version gate for trellis.
//! A spec may declare the oldest tool version it supports under the
//! reserved `_trellis_min_version_` key; the gate runs once before the
//! tree walk starts.

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::constants::MIN_VERSION_KEY;
use crate::error::{Error, Result};

static RELEASE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"v(\d+\.\d+\.\d+)").expect("release version pattern is valid")
});

/// Collapses a dotted version string into a single comparable integer.
/// Each of the first three components occupies a fixed 3-digit decimal
/// slot, most significant first, clamped to [0, 999]. Missing components
/// count as 0 and components past the third are ignored, so lexical
/// component order matches numeric magnitude order even across
/// component-count mismatches.
pub fn build_version_int(version: &str) -> Result<u64> {
    let parts: Vec<&str> = version.split('.').collect();
    let mut value: u64 = 0;
    for index in 0..3 {
        let component = match parts.get(index) {
            Some(part) => {
                let parsed: i64 = part.parse().map_err(|_| Error::VersionPartError {
                    part: part.to_string(),
                    version: version.to_string(),
                })?;
                parsed.clamp(0, 999) as u64
            }
            None => 0,
        };
        value = value * 1000 + component;
    }
    Ok(value)
}

/// Extracts the `<major>.<minor>.<patch>` part of the running version
/// string. Builds without a `vX.Y.Z` tag fail closed: a declared
/// constraint cannot be checked against them.
pub fn extract_release_version(running_version: &str) -> Result<String> {
    RELEASE_VERSION_RE
        .captures(running_version)
        .map(|captures| captures[1].to_string())
        .ok_or(Error::UnofficialBuildError)
}

/// Checks the spec's minimum-version declaration, if any, against the
/// running tool version. An absent key succeeds trivially; a non-string
/// value under the key is treated as no constraint.
pub fn check_minimum_version(spec: &serde_json::Value, running_version: &str) -> Result<()> {
    let Some(declared) = spec.get(MIN_VERSION_KEY) else {
        return Ok(());
    };
    let Some(declared) = declared.as_str() else {
        debug!("Ignoring non-string value under '{}'", MIN_VERSION_KEY);
        return Ok(());
    };

    let current = extract_release_version(running_version)?;
    let required = build_version_int(declared)?;
    let running = build_version_int(&current)?;
    if running < required {
        return Err(Error::MinimumVersionError {
            required: declared.to_string(),
            running: running_version.to_string(),
        });
    }
    Ok(())
}
