//! # Encoders
//!
//! The per-piece machinery behind [`crate::tokenizer::Tokenizer`]:
//! * [`MergeEngine`] - the rank-ordered byte-pair merge loop;
//! * [`SpanCache`] - memoized piece results;
//! * [`group_utf8_safe`] - codepoint-safe regrouping of merge fragments.

mod merge_engine;
mod span_cache;
mod utf8_grouper;

#[doc(inline)]
pub use merge_engine::*;
#[doc(inline)]
pub use span_cache::*;
#[doc(inline)]
pub use utf8_grouper::*;
