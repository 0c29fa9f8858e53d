//! errors.rs - Custom error types for the cover-ignore-core library.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `cover-ignore-core`
/// library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoverIgnoreError {
    /// An ignore rule failed to compile as a regular expression.
    ///
    /// Carries the offending pattern string and the underlying compiler
    /// diagnostic. Compilation aborts at the first failing rule, so no
    /// partial matcher set exists when this is returned.
    #[error("unable to parse regular expression '{0}': {1}")]
    RuleCompilation(String, regex::Error),
}
