//! # `bytemerge` Byte-Pair Encoding Core
//!
//! Converts text to and from token sequences of a pretrained
//! byte-pair encoding vocabulary.
//!
//! See:
//! * [`tokenizer`] to encode, count, explore, and decode text.
//! * [`vocab`] for the span and special word vocabularies, and vocab io.
//! * [`spanning`] for word segmentation and special word scanning.
//! * [`encoders`] for the merge engine and its memoization cache.
//! * [`decoders`] to decode tokens into bytes.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bytemerge::{
//!     spanning::{AllSpecial, NO_SPECIALS},
//!     tokenizer::TokenizerOptions,
//!     vocab::{SpanMapVocab, SpecialVocab},
//! };
//!
//! // Every single byte, plus two merges.
//! let mut spans: Vec<(Vec<u8>, u32)> = (0..=255_u8).map(|b| (vec![b], b as u32 + 10)).collect();
//! spans.push((b"ab".to_vec(), 300));
//! spans.push((b"abc".to_vec(), 301));
//!
//! let vocab = SpanMapVocab::from_spans(spans).unwrap();
//! let specials = SpecialVocab::from_words([("<|end|>", 1000)]).unwrap();
//!
//! let tokenizer = TokenizerOptions::default()
//!     .build(Arc::new(vocab), Arc::new(specials), r"\w+|\s+|[^\w\s]+")
//!     .unwrap();
//!
//! let tokens = tokenizer.encode("abc ab<|end|>", &AllSpecial, NO_SPECIALS).unwrap();
//! assert_eq!(tokens, vec![301, b' ' as u32 + 10, 300, 1000]);
//! assert_eq!(tokenizer.decode_to_string(&tokens), "abc ab<|end|>");
//!
//! assert!(tokenizer.encode("<|end|>", NO_SPECIALS, NO_SPECIALS).is_err());
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod spanning;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{BMResult, BytemergeError};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
