//! # Special Word Scanner

use core::ops::Range;
use std::sync::Arc;

use crate::{
    errors::{BMResult, BytemergeError},
    spanning::{RegexWrapper, SpanScanner, SpecialTokenSet},
    types::TokenType,
    vocab::SpecialVocab,
};

/// A validated special word occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialMatch<T: TokenType> {
    /// The byte range of the special word in the scanned text.
    pub range: Range<usize>,

    /// The special token.
    pub token: T,
}

/// Finds every special word occurrence in a text.
///
/// Matching alternates over the special words in registration order;
/// see [`SpecialVocab::special_pattern`].
#[derive(Debug, Clone)]
pub struct SpecialScanner<T: TokenType> {
    specials: Arc<SpecialVocab<T>>,

    /// `None` when there are no special words.
    special_re: Option<RegexWrapper>,
}

impl<T: TokenType> SpecialScanner<T> {
    /// Build a scanner for the given special words.
    pub fn new(specials: Arc<SpecialVocab<T>>) -> BMResult<Self> {
        let special_re = match specials.special_pattern() {
            Some(pattern) => Some(pattern.compile()?),
            None => None,
        };
        Ok(Self {
            specials,
            special_re,
        })
    }

    /// The special words vocabulary.
    pub fn specials(&self) -> &Arc<SpecialVocab<T>> {
        &self.specials
    }

    /// Find and classify every special word in `text`.
    ///
    /// Each occurrence is checked against `disallowed` first, then `allowed`;
    /// the whole text is classified before anything is returned.
    ///
    /// ## Returns
    /// The ordered, non-overlapping special matches; or
    /// * [`BytemergeError::DisallowedSpecialToken`] - for a word in `disallowed`;
    /// * [`BytemergeError::UndeclaredSpecialToken`] - for a word in neither set.
    pub fn scan<A, D>(
        &self,
        text: &str,
        allowed: &A,
        disallowed: &D,
    ) -> BMResult<Vec<SpecialMatch<T>>>
    where
        A: SpecialTokenSet + ?Sized,
        D: SpecialTokenSet + ?Sized,
    {
        let Some(special_re) = &self.special_re else {
            return Ok(Vec::new());
        };

        special_re
            .find_spans(text)?
            .into_iter()
            .map(|range| {
                let word = &text[range.clone()];
                if disallowed.contains_special(word) {
                    return Err(BytemergeError::DisallowedSpecialToken(word.to_string()));
                }
                if !allowed.contains_special(word) {
                    return Err(BytemergeError::UndeclaredSpecialToken(word.to_string()));
                }
                let token = self.specials.lookup_token(word).ok_or_else(|| {
                    BytemergeError::Construction(format!(
                        "special pattern matched unregistered word {word:?}"
                    ))
                })?;
                Ok(SpecialMatch { range, token })
            })
            .collect()
    }
}
