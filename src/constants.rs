//! Common constants used throughout the trellis application.

/// Filename suffix that switches a file from byte-copy to render mode.
pub const TEMPLATED_SUFFIX: &str = ".templated";

/// Reserved spec key declaring the minimum tool version a template requires.
pub const MIN_VERSION_KEY: &str = "_trellis_min_version_";

/// Version string baked into the binary at build time. Release builds carry
/// the `v<major>.<minor>.<patch>` form the version gate expects; custom
/// builds can override it through the `TRELLIS_BUILD_VERSION` env.
pub const RUNNING_VERSION: &str = match option_env!("TRELLIS_BUILD_VERSION") {
    Some(version) => version,
    None => concat!("v", env!("CARGO_PKG_VERSION")),
};
