//! # Token Decoders
//!
//! Decoders reconstruct the raw bytes of a token sequence,
//! one token at a time.
//!
//! * [`TokenDecoder`] - the decoder trait.
//! * [`DictionaryDecoder`] - decodes through the span and special vocabularies.

mod dictionary_decoder;
mod token_decoder;

#[doc(inline)]
pub use dictionary_decoder::*;
#[doc(inline)]
pub use token_decoder::*;
