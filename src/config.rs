// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for index fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

// =============================================================================
// Package index constants
// =============================================================================

/// Default package index base URL
pub const DEFAULT_INDEX_URL: &str = "https://pypi.python.org";

/// Release version literal that marks a source-control install
pub const DEV_VERSION: &str = "dev";

/// Requires-python constraints for packages whose "dev" releases are built
/// from source control. The index metadata for those pseudo-releases is
/// unreliable, so the constraint is pinned here instead.
pub const SOURCE_INSTALL_REQUIRES_PYTHON: &[(&str, &str)] = &[
    ("tensorflow", ">=3.9"),
    ("scikit-learn", ">=3.9"),
    ("statsmodels", ">=3.9"),
];

/// Look up the pinned requires-python constraint for a source-install package.
pub fn source_install_constraint(table: &[(&str, &str)], package: &str) -> Option<String> {
    table
        .iter()
        .find(|(name, _)| *name == package)
        .map(|(_, spec)| (*spec).to_string())
}
