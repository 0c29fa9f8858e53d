// cover-ignore-core/src/lib.rs
//! # cover-ignore Core Library
//!
//! `cover-ignore-core` provides the fundamental, platform-independent logic
//! for filtering code-coverage profiles. It defines the data structure of
//! the ignore specification, compiles its regular-expression rules into
//! matchers, and applies them line by line to a coverage profile, retaining
//! every line no rule matches.
//!
//! The library is designed to be pure and stateless: one pass compiles the
//! rules, one pass scans the profile. The coverage-profile format is never
//! interpreted semantically: filtering is purely line-textual, and the
//! output is always an ordered subsequence of the input lines.
//!
//! ## Modules
//!
//! * `spec`: Defines `IgnoreSpec`, the YAML ignore-specification document.
//! * `compiler`: Compiles pattern strings into `CompiledRules`.
//! * `filter`: Applies compiled rules to coverage-profile text.
//! * `errors`: The structured error type for rule-compilation failures.
//!
//! ## Usage Example
//!
//! ```rust
//! use cover_ignore_core::{filter_profile, IgnoreSpec};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let spec = IgnoreSpec {
//!         module: "github.com/example/project".to_string(),
//!         ignore_rules: vec!["_test\\.go:".to_string(), "^mode:".to_string()],
//!     };
//!
//!     let profile = b"mode: set\npkg/foo.go:10.2,12.3 2 1\npkg/foo_test.go:5.1,6.1 1 0";
//!     let retained = filter_profile(&spec, profile)?;
//!
//!     assert_eq!(retained, vec!["pkg/foo.go:10.2,12.3 2 1"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Rule compilation is the only fallible step inside the core and surfaces
//! as [`CoverIgnoreError::RuleCompilation`], carrying the offending pattern
//! for diagnostics. Spec loading uses `anyhow::Error` with path context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod errors;
pub mod filter;
pub mod spec;

/// Re-exports the ignore-specification document model.
pub use spec::IgnoreSpec;

/// Re-exports the custom error type for clear error reporting.
pub use errors::CoverIgnoreError;

/// Re-exports rule compilation and its output types.
pub use compiler::{compile_rules, CompiledRule, CompiledRules};

/// Re-exports the filtering entry points.
pub use filter::{filter_lines, filter_profile};
