//! # Special Token Sets
//!
//! Callers scope each encode call with an *allowed* and a *disallowed* set of special words.

use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

/// A set of special words, queried by membership only.
pub trait SpecialTokenSet {
    /// Is `word` a member of this set?
    fn contains_special(
        &self,
        word: &str,
    ) -> bool;
}

/// The empty special set.
pub const NO_SPECIALS: &[&str] = &[];

/// A set containing every special word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllSpecial;

impl SpecialTokenSet for AllSpecial {
    fn contains_special(
        &self,
        _word: &str,
    ) -> bool {
        true
    }
}

impl<S: BuildHasher> SpecialTokenSet for HashSet<String, S> {
    fn contains_special(
        &self,
        word: &str,
    ) -> bool {
        self.contains(word)
    }
}

impl<S: BuildHasher> SpecialTokenSet for HashSet<&str, S> {
    fn contains_special(
        &self,
        word: &str,
    ) -> bool {
        self.contains(word)
    }
}

#[cfg(feature = "ahash")]
impl SpecialTokenSet for ahash::AHashSet<String> {
    fn contains_special(
        &self,
        word: &str,
    ) -> bool {
        self.contains(word)
    }
}

impl SpecialTokenSet for BTreeSet<String> {
    fn contains_special(
        &self,
        word: &str,
    ) -> bool {
        self.contains(word)
    }
}

impl SpecialTokenSet for [&str] {
    fn contains_special(
        &self,
        word: &str,
    ) -> bool {
        self.iter().any(|w| *w == word)
    }
}

impl SpecialTokenSet for [String] {
    fn contains_special(
        &self,
        word: &str,
    ) -> bool {
        self.iter().any(|w| w == word)
    }
}

impl<const N: usize> SpecialTokenSet for [&str; N] {
    fn contains_special(
        &self,
        word: &str,
    ) -> bool {
        self.as_slice().contains_special(word)
    }
}

impl SpecialTokenSet for Vec<String> {
    fn contains_special(
        &self,
        word: &str,
    ) -> bool {
        self.as_slice().contains_special(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommonHashSet;

    fn check<S: SpecialTokenSet + ?Sized>(set: &S) {
        assert!(set.contains_special("<|a|>"));
        assert!(!set.contains_special("<|b|>"));
    }

    #[test]
    fn test_set_impls() {
        check(&["<|a|>"]);
        check(["<|a|>"].as_slice());
        check(&vec!["<|a|>".to_string()]);
        check(&["<|a|>".to_string()].into_iter().collect::<HashSet<String>>());
        check(&["<|a|>"].into_iter().collect::<HashSet<&str>>());
        check(&["<|a|>".to_string()].into_iter().collect::<BTreeSet<String>>());
        check(&["<|a|>".to_string()].into_iter().collect::<CommonHashSet<String>>());

        assert!(!NO_SPECIALS.contains_special("<|a|>"));
        assert!(AllSpecial.contains_special("<|b|>"));
    }
}
