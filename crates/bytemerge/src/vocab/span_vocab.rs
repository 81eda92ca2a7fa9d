//! # Span Map ``{ Vec<u8> <-> T }`` Token Vocabulary

use crate::{
    errors::{BMResult, BytemergeError},
    types::{TokenType, token_to_u64},
    vocab::{ByteMapVocab, SpanTokenMap, TextTokenMap, TokenSpanMap},
};

/// Token vocabulary as a bijection of ``{ Vec<u8> <-> T }``.
///
/// The token value of a span is also its merge rank;
/// lower tokens are preferred merges.
///
/// Immutable after construction. Construction guarantees:
/// * every single byte value has a token (see [`ByteMapVocab`]);
/// * no two spans share a token.
///
/// A derived ``{ String -> T }`` view over the spans which are valid UTF-8
/// permits whole-piece lookups by text, without re-encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanMapVocab<T: TokenType> {
    /// The base alphabet.
    byte_vocab: ByteMapVocab<T>,

    /// Map of ``{ Vec<u8> -> T }``.
    span_map: SpanTokenMap<T>,

    /// Map of ``{ T -> Vec<u8> }``.
    token_spans: TokenSpanMap<T>,

    /// Map of ``{ String -> T }`` for spans which are valid UTF-8.
    text_map: TextTokenMap<T>,
}

impl<T: TokenType> TryFrom<SpanTokenMap<T>> for SpanMapVocab<T> {
    type Error = BytemergeError;

    fn try_from(span_map: SpanTokenMap<T>) -> BMResult<Self> {
        Self::init(span_map)
    }
}

impl<T: TokenType> SpanMapVocab<T> {
    /// Build a vocabulary from ``(span, token)`` pairs.
    ///
    /// ## Arguments
    /// * `spans` - An iterator of byte-like spans and tokens.
    ///
    /// ## Returns
    /// A `Result` containing the vocabulary, or an error if a span repeats
    /// or [`Self::init`] rejects the map.
    pub fn from_spans<I, S>(spans: I) -> BMResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<[u8]>,
    {
        let mut span_map = SpanTokenMap::default();
        for (span, token) in spans {
            let span = span.as_ref().to_vec();
            if let Some(prev) = span_map.insert(span, token)
                && prev != token
            {
                return Err(BytemergeError::Construction(format!(
                    "span assigned to both {prev} and {token}"
                )));
            }
        }
        Self::init(span_map)
    }

    /// Initialize a [`SpanMapVocab`].
    ///
    /// ## Arguments
    /// * `span_map` - The ``{ Vec<u8> -> T }`` vocabulary.
    ///
    /// ## Returns
    /// A `Result` containing the new vocabulary, or an error if the map is empty,
    /// lacks a base byte, or assigns one token to two spans.
    pub fn init(mut span_map: SpanTokenMap<T>) -> BMResult<Self> {
        if span_map.is_empty() {
            return Err(BytemergeError::Construction(
                "vocabulary is empty".to_string(),
            ));
        }

        let byte_vocab = ByteMapVocab::try_from_span_map(&span_map)?;

        let mut token_spans = TokenSpanMap::default();
        for (span, &token) in span_map.iter() {
            if token_spans.insert(token, span.clone()).is_some() {
                return Err(BytemergeError::DuplicateToken {
                    token: token_to_u64(token),
                });
            }
        }

        let text_map: TextTokenMap<T> = span_map
            .iter()
            .filter_map(|(span, &token)| {
                core::str::from_utf8(span)
                    .ok()
                    .map(|text| (text.to_string(), token))
            })
            .collect();

        span_map.shrink_to_fit();
        token_spans.shrink_to_fit();

        log::debug!(
            "span vocab: {} spans ({} utf-8 text spans)",
            span_map.len(),
            text_map.len()
        );

        Ok(Self {
            byte_vocab,
            span_map,
            token_spans,
            text_map,
        })
    }

    /// The base byte alphabet.
    pub fn byte_vocab(&self) -> &ByteMapVocab<T> {
        &self.byte_vocab
    }

    /// The ``{ Vec<u8> -> T }`` map.
    pub fn span_map(&self) -> &SpanTokenMap<T> {
        &self.span_map
    }

    /// The number of spans in the vocabulary.
    pub fn len(&self) -> usize {
        self.span_map.len()
    }

    /// Is the vocabulary empty? Never true for an initialized vocabulary.
    pub fn is_empty(&self) -> bool {
        self.span_map.is_empty()
    }

    /// Gets the highest token.
    pub fn max_token(&self) -> Option<T> {
        self.token_spans.keys().max().copied()
    }

    /// Iterate over the ``(span, token)`` entries of the vocabulary.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], T)> + '_ {
        self.span_map
            .iter()
            .map(|(span, &token)| (span.as_slice(), token))
    }

    /// Return the associated token for the span, if any.
    #[inline]
    pub fn lookup_token(
        &self,
        span: &[u8],
    ) -> Option<T> {
        if span.len() == 1 {
            Some(self.byte_vocab.get_token(span[0]))
        } else {
            self.span_map.get(span).copied()
        }
    }

    /// Return the associated token for a whole text piece, if any.
    #[inline]
    pub fn lookup_text(
        &self,
        text: &str,
    ) -> Option<T> {
        self.text_map.get(text).copied()
    }

    /// Return the span for a token, if any.
    #[inline]
    pub fn lookup_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.token_spans.get(&token).map(|span| span.as_slice())
    }
}
