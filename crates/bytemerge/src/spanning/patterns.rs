//! # Well-Known Segmentation Patterns

use crate::spanning::ConstRegexWrapperPattern;

/// Concatenate regex alternatives with a `|` separator.
///
/// ```rust
/// use bytemerge::join_patterns;
///
/// assert_eq!(join_patterns!("a", "b", "c"), "a|b|c");
/// assert_eq!(join_patterns!("only"), "only");
/// ```
#[macro_export]
macro_rules! join_patterns {
    ($first:literal $(, $rest:literal)* $(,)?) => {
        concat!($first $(, "|", $rest)*)
    };
}

/// The "`r50k_base`" (GPT-2) word pattern.
pub const R50K_BASE_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(join_patterns!(
    r"'(?:[sdmt]|ll|ve|re)",
    r" ?\p{L}++",
    r" ?\p{N}++",
    r" ?[^\s\p{L}\p{N}]++",
    r"\s++$",
    r"\s+(?!\S)",
    r"\s",
));

/// The "`p50k_base`" word pattern; identical to [`R50K_BASE_PATTERN`].
pub const P50K_BASE_PATTERN: ConstRegexWrapperPattern = R50K_BASE_PATTERN;

/// The "`cl100k_base`" word pattern.
pub const CL100K_BASE_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(join_patterns!(
    r"'(?i:[sdmt]|ll|ve|re)",
    r"[^\r\n\p{L}\p{N}]?+\p{L}++",
    r"\p{N}{1,3}+",
    r" ?[^\s\p{L}\p{N}]++[\r\n]*+",
    r"\s++$",
    r"\s*[\r\n]",
    r"\s+(?!\S)",
    r"\s",
));

/// The "`o200k_base`" word pattern.
pub const O200K_BASE_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(join_patterns!(
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"\p{N}{1,3}",
    r" ?[^\s\p{L}\p{N}]+[\r\n/]*",
    r"\s*[\r\n]+",
    r"\s+(?!\S)",
    r"\s+",
));
