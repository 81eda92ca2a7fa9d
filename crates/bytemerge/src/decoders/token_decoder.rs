//! # Token Decoder Trait

use crate::{errors::BMResult, types::TokenType};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens, appending their bytes to `buf`.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target buffer.
    fn decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    );

    /// Decodes tokens into bytes.
    fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> Vec<u8> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        self.decode_append(tokens, &mut buf);
        buf
    }

    /// Decodes a batch of token sequences into bytes.
    fn decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> Vec<Vec<u8>> {
        batch
            .iter()
            .map(|tokens| self.decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes tokens into a string.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    fn decode_to_string(
        &self,
        tokens: &[T],
    ) -> String {
        String::from_utf8_lossy(&self.decode_to_bytes(tokens)).into_owned()
    }

    /// Decodes tokens into a string, failing on invalid UTF-8.
    ///
    /// ## Returns
    /// The decoded string, or [`crate::errors::BytemergeError::Utf8`].
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> BMResult<String> {
        Ok(String::from_utf8(self.decode_to_bytes(tokens))?)
    }

    /// Decodes a batch of token sequences into strings.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    fn decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        batch
            .iter()
            .map(|tokens| self.decode_to_string(tokens))
            .collect()
    }

    /// Decodes a batch of token sequences into strings, failing on invalid UTF-8.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> BMResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
