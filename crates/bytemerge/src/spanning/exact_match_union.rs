//! Exact Match Union Patterns

use crate::spanning::regex_wrapper::RegexWrapperPattern;

/// Create a union pattern of exact matches.
///
/// This will always be a [`RegexWrapperPattern::Basic`] variant.
/// The `regex` crate resolves alternations leftmost-first, so when two
/// alternatives match at the same position, the earlier one in `alts` wins.
///
/// ## Arguments
/// * `alts` - A slice of string-like alternatives to union.
pub fn exact_match_union_regex_pattern<S: AsRef<str>>(alts: &[S]) -> RegexWrapperPattern {
    let parts = alts
        .iter()
        .map(|s| regex::escape(s.as_ref()))
        .collect::<Vec<_>>();
    RegexWrapperPattern::Basic(format!("({})", parts.join("|")))
}
