//! # Byte-Pair Merge Engine
//!
//! Repeatedly merges the lowest ranked adjacent pair of fragments,
//! until no adjacent pair is present in the vocabulary.

use std::sync::Arc;

use crate::{types::TokenType, vocab::SpanMapVocab};

/// A merge fragment; the bytes run from `start` to the next fragment's `start`.
#[derive(Debug, Clone, Copy)]
struct Fragment<T: TokenType> {
    start: usize,

    /// The vocabulary token of this fragment.
    token: T,

    /// The rank of merging this fragment with its right neighbor.
    pair_rank: Option<T>,
}

/// The byte-pair merge algorithm over a [`SpanMapVocab`].
///
/// The rank of a candidate pair is the token of its concatenation;
/// the lowest rank is merged first, and ties go to the leftmost pair.
///
/// Every final fragment is a vocabulary entry: fragments start as single
/// bytes (always present), and only present concatenations are merged.
#[derive(Debug, Clone)]
pub struct MergeEngine<T: TokenType> {
    vocab: Arc<SpanMapVocab<T>>,
}

impl<T: TokenType> MergeEngine<T> {
    /// Create a new merge engine.
    pub fn new(vocab: Arc<SpanMapVocab<T>>) -> Self {
        Self { vocab }
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Arc<SpanMapVocab<T>> {
        &self.vocab
    }

    /// Encode one piece, appending its tokens to `tokens`.
    ///
    /// ## Arguments
    /// * `span` - The piece bytes.
    /// * `tokens` - The target buffer.
    pub fn encode_append(
        &self,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        if span.len() == 1 {
            tokens.push(self.vocab.byte_vocab().get_token(span[0]));
            return;
        }

        let frags = self.merge(span);
        tokens.extend(frags[..frags.len() - 1].iter().map(|f| f.token));
    }

    /// Encode one piece into a new token vector.
    pub fn encode(
        &self,
        span: &[u8],
    ) -> Vec<T> {
        let mut tokens = Vec::with_capacity(span.len());
        self.encode_append(span, &mut tokens);
        tokens
    }

    /// Count the tokens one piece encodes to.
    pub fn count(
        &self,
        span: &[u8],
    ) -> usize {
        if span.len() < 2 {
            return span.len();
        }
        self.merge(span).len() - 1
    }

    /// The final merge fragments of one piece, as byte slices.
    ///
    /// The concatenation of the fragments is `span`.
    pub fn explore<'a>(
        &self,
        span: &'a [u8],
    ) -> Vec<&'a [u8]> {
        self.merge(span)
            .windows(2)
            .map(|w| &span[w[0].start..w[1].start])
            .collect()
    }

    /// Run the merge loop.
    ///
    /// The result has a trailing sentinel fragment at `span.len()`.
    fn merge(
        &self,
        span: &[u8],
    ) -> Vec<Fragment<T>> {
        let byte_vocab = self.vocab.byte_vocab();

        let mut frags: Vec<Fragment<T>> = Vec::with_capacity(span.len() + 1);
        frags.extend(span.iter().enumerate().map(|(start, &b)| Fragment {
            start,
            token: byte_vocab.get_token(b),
            pair_rank: None,
        }));
        frags.push(Fragment {
            start: span.len(),
            token: T::zero(),
            pair_rank: None,
        });

        for i in 0..frags.len() {
            frags[i].pair_rank = self.pair_rank(span, &frags, i);
        }

        loop {
            let mut best: Option<(T, usize)> = None;
            for (i, frag) in frags.iter().enumerate() {
                if let Some(rank) = frag.pair_rank
                    && best.is_none_or(|(best_rank, _)| rank < best_rank)
                {
                    best = Some((rank, i));
                }
            }

            let Some((rank, i)) = best else {
                break;
            };

            // (a, b) -> ab; the pair rank is the merged token.
            frags[i].token = rank;
            frags.remove(i + 1);

            frags[i].pair_rank = self.pair_rank(span, &frags, i);
            if i > 0 {
                frags[i - 1].pair_rank = self.pair_rank(span, &frags, i - 1);
            }
        }

        frags
    }

    /// The rank of merging `frags[i]` and `frags[i + 1]`, if mergeable.
    fn pair_rank(
        &self,
        span: &[u8],
        frags: &[Fragment<T>],
        i: usize,
    ) -> Option<T> {
        if i + 2 < frags.len() {
            self.vocab
                .lookup_token(&span[frags[i].start..frags[i + 2].start])
        } else {
            None
        }
    }
}
