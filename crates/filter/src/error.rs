// ABOUTME: Error types for filter construction and settings parsing.
// ABOUTME: Provides FilterError for pattern compilation and SettingsError for form fields.

use thiserror::Error;

/// Errors raised while compiling the match machinery for a resolved
/// configuration. The rewrite pass itself never fails.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The configured hostname produced an uncompilable match pattern.
    #[error("host match pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The containment scanner could not be built for the hostname.
    #[error("host containment scanner: {0}")]
    Scanner(#[from] aho_corasick::BuildError),
}

/// Errors raised while converting raw settings form fields into an override.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A dimension field held something other than a whole number.
    #[error("{field} must be a whole number of pixels, got {value:?}")]
    InvalidDimension { field: &'static str, value: String },
}
