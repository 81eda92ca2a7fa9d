use std::sync::Arc;

use crate::{
    errors::BMResult,
    spanning::RegexWrapperPattern,
    tokenizer::Tokenizer,
    types::TokenType,
    vocab::{SpanMapVocab, SpecialVocab},
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Memoize merge results by piece text.
    pub cache: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self { cache: true }
    }
}

impl TokenizerOptions {
    /// Sets the configured cache value.
    pub fn set_cache(
        &mut self,
        cache: bool,
    ) {
        self.cache = cache;
    }

    /// Sets the configured cache value.
    ///
    /// The cache never changes results, only their cost.
    pub fn with_cache(
        mut self,
        cache: bool,
    ) -> Self {
        self.set_cache(cache);
        self
    }

    /// Build a [`Tokenizer`].
    ///
    /// ## Arguments
    /// * `vocab` - The span vocabulary.
    /// * `specials` - The special words; may be empty.
    /// * `pattern` - The word segmentation pattern; must be non-empty.
    ///
    /// ## Returns
    /// The new tokenizer, or a construction or regex error.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<SpanMapVocab<T>>,
        specials: Arc<SpecialVocab<T>>,
        pattern: impl Into<RegexWrapperPattern>,
    ) -> BMResult<Tokenizer<T>> {
        Tokenizer::new(*self, vocab, specials, pattern)
    }
}
