//! # Parallel Batch Operations

use rayon::prelude::*;

use crate::{
    errors::BMResult,
    spanning::SpecialTokenSet,
    tokenizer::Tokenizer,
    types::TokenType,
};

impl<T: TokenType> Tokenizer<T> {
    /// Encode a batch of texts in parallel.
    ///
    /// ## Returns
    /// The per-text tokens; or the first error, if any text fails validation.
    pub fn encode_batch<S, A, D>(
        &self,
        batch: &[S],
        allowed: &A,
        disallowed: &D,
    ) -> BMResult<Vec<Vec<T>>>
    where
        S: AsRef<str> + Sync,
        A: SpecialTokenSet + Sync + ?Sized,
        D: SpecialTokenSet + Sync + ?Sized,
    {
        batch
            .par_iter()
            .map(|text| self.encode(text.as_ref(), allowed, disallowed))
            .collect()
    }

    /// Count the tokens of a batch of texts in parallel.
    ///
    /// See [`Tokenizer::count_tokens`].
    pub fn count_tokens_batch<S>(
        &self,
        batch: &[S],
    ) -> BMResult<Vec<usize>>
    where
        S: AsRef<str> + Sync,
    {
        batch
            .par_iter()
            .map(|text| self.count_tokens(text.as_ref()))
            .collect()
    }

    /// Decode a batch of token sequences in parallel.
    pub fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<Vec<u8>> {
        batch.par_iter().map(|tokens| self.decode(tokens)).collect()
    }
}
