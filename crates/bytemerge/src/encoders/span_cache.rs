//! # Piece Memoization Cache

use parking_lot::RwLock;

use crate::types::{CommonHashMap, TokenType};

/// Entry counts of a [`SpanCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of memoized ``{ piece -> tokens }`` entries.
    pub token_entries: usize,

    /// Number of memoized ``{ piece -> count }`` entries.
    pub count_entries: usize,
}

/// Additive memoization of merge results, keyed by piece text.
///
/// Entries are never removed or updated; lookups take a read lock,
/// and inserts keep the first value written for a key. Two threads may
/// compute the same piece concurrently; both results are identical.
#[derive(Debug, Default)]
pub struct SpanCache<T: TokenType> {
    tokens: RwLock<CommonHashMap<String, Vec<T>>>,
    counts: RwLock<CommonHashMap<String, usize>>,
}

impl<T: TokenType> SpanCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            tokens: Default::default(),
            counts: Default::default(),
        }
    }

    /// Append the memoized tokens of `piece` to `tokens`.
    ///
    /// ## Returns
    /// `true` on a cache hit.
    pub fn extend_tokens(
        &self,
        piece: &str,
        tokens: &mut Vec<T>,
    ) -> bool {
        match self.tokens.read().get(piece) {
            Some(cached) => {
                tokens.extend_from_slice(cached);
                true
            }
            None => false,
        }
    }

    /// Memoize the tokens of `piece`, unless already present.
    pub fn insert_tokens(
        &self,
        piece: &str,
        tokens: &[T],
    ) {
        let mut writer = self.tokens.write();
        if !writer.contains_key(piece) {
            log::trace!("span cache: tokens {piece:?} -> {}", tokens.len());
            writer.insert(piece.to_string(), tokens.to_vec());
        }
    }

    /// The memoized token count of `piece`, if any.
    pub fn get_count(
        &self,
        piece: &str,
    ) -> Option<usize> {
        self.counts.read().get(piece).copied()
    }

    /// Memoize the token count of `piece`, unless already present.
    pub fn insert_count(
        &self,
        piece: &str,
        count: usize,
    ) {
        let mut writer = self.counts.write();
        if !writer.contains_key(piece) {
            log::trace!("span cache: count {piece:?} -> {count}");
            writer.insert(piece.to_string(), count);
        }
    }

    /// The current entry counts.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            token_entries: self.tokens.read().len(),
            count_entries: self.counts.read().len(),
        }
    }
}
