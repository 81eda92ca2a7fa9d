//! # Vocabulary
//!
//! This module provides the vocabulary tables and related io mechanisms.
//!
//! ## Span Vocabulary
//!
//! The merge vocabulary is a ``{ Vec<u8> <-> T }`` bijection:
//! * [`SpanMapVocab`].
//!
//! Every single byte value must be present; the base alphabet is
//! extracted into a [`ByteMapVocab`] table for the merge engine.
//!
//! ## Special Vocabulary
//!
//! Reserved, whole-string matched words live in a separate ordered table:
//! * [`SpecialVocab`].
pub mod byte_vocab;
pub mod io;
pub mod size_hints;
pub mod span_vocab;
pub mod special_vocab;
pub mod vocab_types;

#[doc(inline)]
pub use byte_vocab::ByteMapVocab;
#[doc(inline)]
pub use span_vocab::SpanMapVocab;
#[doc(inline)]
pub use special_vocab::SpecialVocab;
#[doc(inline)]
pub use vocab_types::{ByteTokenArray, SpanTokenMap, TextTokenMap, TokenSpanMap, TokenTextMap};

#[cfg(test)]
pub(crate) mod testing;
