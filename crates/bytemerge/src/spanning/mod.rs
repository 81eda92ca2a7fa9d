//! # Text Spanning
//!
//! This module splits text into the spans the encoders consume.
//!
//! * [`SpecialScanner`] - finds special words, validating them against
//!   caller supplied allow/deny sets ([`SpecialTokenSet`]).
//! * [`SpanScanner`] - the word segmentation capability; implemented by
//!   [`RegexWrapper`] for both `regex` and `fancy_regex` patterns.
//!
//! A number of popular in-use LLM Tokenizer Regex Patterns require extended regex
//! machinery provided by the [`fancy_regex`] crate; but naturally, this has performance
//! costs. [`RegexWrapperPattern::Adaptive`] tries the standard [`regex`] crate first,
//! and falls back on [`fancy_regex`] when the pattern requires it.

mod exact_match_union;
pub mod patterns;
mod regex_wrapper;
mod span_scanner;
mod special_scanner;
mod special_sets;

#[doc(inline)]
pub use exact_match_union::*;
#[doc(inline)]
pub use regex_wrapper::*;
#[doc(inline)]
pub use span_scanner::*;
#[doc(inline)]
pub use special_scanner::*;
#[doc(inline)]
pub use special_sets::*;
