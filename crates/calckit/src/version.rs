//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line with the library versions the binary was built against.
#[must_use]
pub fn full_version() -> String {
    format!(
        "calckit {} (core {})",
        version(),
        calckit_core::VERSION
    )
}
