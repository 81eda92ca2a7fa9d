//! # Combined Tokenizer
//!
//! [`Tokenizer`] ties the special word scanner, the word segmentation,
//! the memoization cache, and the merge engine together;
//! see [`TokenizerOptions::build`].

mod span_ref;
mod tokenizer_impl;
mod tokenizer_options;

#[cfg(feature = "rayon")]
mod rayon_batch;

#[doc(inline)]
pub use span_ref::*;
#[doc(inline)]
pub use tokenizer_impl::*;
#[doc(inline)]
pub use tokenizer_options::*;
