//! compiler.rs - Compiles ignore rules into ready-to-match regexes.
//!
//! This module converts the ordered pattern strings of an ignore spec into
//! `CompiledRules`, validating each pattern along the way. Compilation
//! aborts at the first invalid pattern; a partial matcher set is never
//! returned.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use regex::Regex;

use crate::errors::CoverIgnoreError;

/// A single compiled ignore rule.
///
/// Holds the compiled regular expression together with the original pattern
/// string for diagnostics.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The pattern string the regex was compiled from.
    pub pattern: String,
}

/// The full ordered set of compiled ignore rules for one filter run.
#[derive(Debug, Default)]
pub struct CompiledRules {
    /// Compiled rules, in the same order as the input patterns.
    pub rules: Vec<CompiledRule>,
}

/// Compiles an ordered list of pattern strings into `CompiledRules`.
///
/// Patterns are compiled in input order. The first pattern that fails to
/// compile aborts the whole operation with
/// [`CoverIgnoreError::RuleCompilation`]; remaining patterns are not
/// attempted.
pub fn compile_rules(patterns: &[String]) -> Result<CompiledRules, CoverIgnoreError> {
    debug!("Starting compilation of {} ignore rules.", patterns.len());

    let mut rules = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let regex = Regex::new(pattern)
            .map_err(|e| CoverIgnoreError::RuleCompilation(pattern.clone(), e))?;
        debug!("Rule '{}' compiled successfully.", pattern);
        rules.push(CompiledRule {
            regex,
            pattern: pattern.clone(),
        });
    }

    debug!("Finished compiling rules. Total compiled: {}.", rules.len());
    Ok(CompiledRules { rules })
}
