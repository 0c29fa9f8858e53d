//! filter.rs - Drops coverage-profile lines that match ignore rules.
//!
//! The profile is treated as opaque newline-delimited text; no part of the
//! coverage record format is interpreted. Output is always an ordered
//! subsequence of the input lines.
//!
//! License: MIT OR Apache-2.0

use log::debug;

use crate::compiler::{compile_rules, CompiledRules};
use crate::errors::CoverIgnoreError;
use crate::spec::IgnoreSpec;

/// Filters raw coverage-profile bytes against a set of compiled rules,
/// returning the retained lines in original order.
///
/// The input is split on `'\n'` exactly: a trailing newline produces one
/// final empty line that is matched and filtered like any other, and
/// carriage returns stay attached to their line. A line is dropped as soon
/// as any rule matches it (unanchored search); rules after the first match
/// are not tested. With no rules this is the identity filter.
///
/// Non-UTF-8 input is decoded lossily rather than rejected.
pub fn filter_lines(rules: &CompiledRules, data: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(data);

    let mut retained = Vec::new();
    let mut dropped = 0usize;
    for line in text.split('\n') {
        if rules.rules.iter().any(|rule| rule.regex.is_match(line)) {
            dropped += 1;
        } else {
            retained.push(line.to_string());
        }
    }

    debug!(
        "Filtered coverage profile: {} lines retained, {} dropped.",
        retained.len(),
        dropped
    );
    retained
}

/// One-shot entry point: compiles the spec's ignore rules and filters the
/// coverage profile in a single call.
///
/// This is the primary interface for non-interactive use. A rule that fails
/// to compile aborts the whole operation; no lines are filtered or returned.
pub fn filter_profile(spec: &IgnoreSpec, data: &[u8]) -> Result<Vec<String>, CoverIgnoreError> {
    let rules = compile_rules(&spec.ignore_rules)?;
    Ok(filter_lines(&rules, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn rules(patterns: &[&str]) -> CompiledRules {
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        compile_rules(&patterns).unwrap()
    }

    #[test]
    fn test_empty_rule_set_is_identity() {
        let out = filter_lines(&rules(&[]), b"mode: set\npkg/foo.go:10.2,12.3 2 1");
        assert_eq!(out, vec!["mode: set", "pkg/foo.go:10.2,12.3 2 1"]);
    }

    #[test]
    fn test_trailing_newline_yields_final_empty_line() {
        let out = filter_lines(&rules(&[]), b"a\nb\n");
        assert_eq!(out, vec!["a", "b", ""]);
    }

    #[test]
    fn test_filters_matching_lines_preserving_order() {
        let input = b"mode: set\n\
            pkg/foo.go:10.2,12.3 2 1\n\
            pkg/foo_test.go:5.1,6.1 1 0\n\
            pkg/bar.go:1.1,2.1 1 1";
        let out = filter_lines(&rules(&["_test\\.go:", "^mode:"]), input);
        assert_eq!(out, vec!["pkg/foo.go:10.2,12.3 2 1", "pkg/bar.go:1.1,2.1 1 1"]);
    }

    #[test]
    fn test_line_matched_by_several_rules_is_dropped_once() {
        let out = filter_lines(&rules(&["foo", "o", "^pkg"]), b"pkg/foo.go:1.1,2.1 1 1\nkept");
        assert_eq!(out, vec!["kept"]);
    }

    #[test]
    fn test_rule_order_does_not_change_retained_set() {
        let input = b"mode: set\npkg/foo.go:1.1,2.1 1 1\npkg/foo_test.go:5.1,6.1 1 0\n";
        let forward = filter_lines(&rules(&["_test\\.go:", "^mode:"]), input);
        let reversed = filter_lines(&rules(&["^mode:", "_test\\.go:"]), input);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_matching_is_unanchored_substring_search() {
        let out = filter_lines(&rules(&["foo"]), b"prefix foo suffix\nbar");
        assert_eq!(out, vec!["bar"]);
    }

    #[test]
    fn test_carriage_returns_are_not_stripped() {
        let out = filter_lines(&rules(&[]), b"a\r\nb");
        assert_eq!(out, vec!["a\r", "b"]);
    }

    #[test]
    fn test_empty_lines_are_subject_to_matching() {
        let out = filter_lines(&rules(&["^$"]), b"a\n\nb\n");
        assert_eq!(out, vec!["a", "b"]);
    }

    #[test]
    fn test_non_utf8_input_is_decoded_lossily() {
        let out = filter_lines(&rules(&[]), b"ok\n\xff\xfe");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], "ok");
        assert_eq!(out[1], "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_filter_profile_compiles_and_filters() {
        let spec = IgnoreSpec {
            module: "example".to_string(),
            ignore_rules: vec!["^mode:".to_string()],
        };
        let out = filter_profile(&spec, b"mode: set\npkg/foo.go:1.1,2.1 1 1").unwrap();
        assert_eq!(out, vec!["pkg/foo.go:1.1,2.1 1 1"]);
    }

    #[test]
    fn test_filter_profile_propagates_compile_failure() {
        let spec = IgnoreSpec {
            module: "example".to_string(),
            ignore_rules: vec!["(".to_string()],
        };
        let err = filter_profile(&spec, b"mode: set").unwrap_err();
        match err {
            CoverIgnoreError::RuleCompilation(pattern, _) => assert_eq!(pattern, "("),
        }
    }
}
