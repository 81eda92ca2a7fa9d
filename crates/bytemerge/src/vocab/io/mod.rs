//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use bytemerge::{
//!     errors::BMResult,
//!     spanning::patterns::CL100K_BASE_PATTERN,
//!     tokenizer::{Tokenizer, TokenizerOptions},
//!     vocab::{SpecialVocab, io::load_base64_span_vocab_path},
//! };
//!
//! fn example() -> BMResult<Tokenizer<u32>> {
//!     let vocab = load_base64_span_vocab_path("cl100k_base.tiktoken")?;
//!     let specials = SpecialVocab::from_words([("<|endoftext|>", 100257)])?;
//!
//!     TokenizerOptions::default().build(Arc::new(vocab), Arc::new(specials), CL100K_BASE_PATTERN)
//! }
//! ```

mod base64_vocab;

#[doc(inline)]
pub use base64_vocab::*;
