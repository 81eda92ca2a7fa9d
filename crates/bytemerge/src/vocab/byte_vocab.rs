//! # Byte/Token Mapping Table

use core::fmt::Debug;

use crate::{
    errors::{BMResult, BytemergeError},
    types::TokenType,
    vocab::{ByteTokenArray, SpanTokenMap},
};

/// ``0..=255`` Byte/Token Table
///
/// This will always have 256 entries, one for each byte value.
/// The token values are not required to be dense, or in the range ``0..=255``.
///
/// This is the base alphabet of a [`crate::vocab::SpanMapVocab`];
/// the merge engine seeds its fragments from it.
#[derive(Clone, PartialEq)]
pub struct ByteMapVocab<T: TokenType> {
    /// Table mapping from byte ordinal (position) to token.
    byte_tokens: ByteTokenArray<T>,
}

impl<T: TokenType> Debug for ByteMapVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteMapVocab")
            .field("max_token", &self.max_token())
            .finish()
    }
}

impl<T: TokenType> ByteMapVocab<T> {
    /// Extract the single-byte entries of a span map.
    ///
    /// ## Arguments
    /// * `span_map` - The full ``{ Vec<u8> -> T }`` vocabulary.
    ///
    /// ## Returns
    /// The byte table, or [`BytemergeError::MissingByte`] naming the
    /// first byte value which has no single-byte span.
    pub fn try_from_span_map(span_map: &SpanTokenMap<T>) -> BMResult<Self> {
        let mut byte_tokens: ByteTokenArray<T> = [T::zero(); 256];
        for (idx, slot) in byte_tokens.iter_mut().enumerate() {
            let byte = idx as u8;
            *slot = *span_map
                .get([byte].as_slice())
                .ok_or(BytemergeError::MissingByte { byte })?;
        }
        Ok(Self { byte_tokens })
    }

    /// Get the byte-ord => token mapping table.
    pub fn byte_tokens(&self) -> &ByteTokenArray<T> {
        &self.byte_tokens
    }

    /// Get the token corresponding to a given byte.
    #[inline(always)]
    pub fn get_token(
        &self,
        byte: u8,
    ) -> T {
        self.byte_tokens[byte as usize]
    }

    /// The largest byte token.
    pub fn max_token(&self) -> T {
        self.byte_tokens
            .iter()
            .copied()
            .fold(T::zero(), |a, b| a.max(b))
    }
}
