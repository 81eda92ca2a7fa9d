//! # Special Words Vocabulary

use crate::{
    errors::{BMResult, BytemergeError},
    spanning::{RegexWrapperPattern, exact_match_union_regex_pattern},
    types::{TokenType, token_to_u64},
    vocab::{TextTokenMap, TokenTextMap},
};

/// Token vocabulary for special words.
///
/// This contains no byte:token mappings, or merge spans.
///
/// Registration order is preserved: when two special words overlap as prefixes
/// at the same position, the one registered first wins the match.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SpecialVocab<T: TokenType> {
    /// The special words, in registration order.
    words: Vec<(String, T)>,

    /// Map of ``{ String -> T }``.
    word_map: TextTokenMap<T>,

    /// Map of ``{ T -> String }``.
    token_words: TokenTextMap<T>,
}

impl<T: TokenType> SpecialVocab<T> {
    /// Create a new special words vocab.
    ///
    /// ## Arguments
    /// * `special_words` - An iterator of word strings and tokens, in registration order.
    ///
    /// ## Returns
    /// A `Result` containing the new vocab, or an error if any word
    /// is rejected by [`Self::add_str_word`].
    pub fn from_words<W, S>(special_words: W) -> BMResult<Self>
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for (word, token) in special_words {
            vocab.add_str_word(word.as_ref(), token)?;
        }
        Ok(vocab)
    }

    /// Add a word to the vocab.
    ///
    /// ## Arguments
    /// * `word` - The word string to add; must be non-empty and not yet registered.
    /// * `token` - The token value to assign to the word; must be unused.
    pub fn add_str_word(
        &mut self,
        word: &str,
        token: T,
    ) -> BMResult<()> {
        if word.is_empty() {
            return Err(BytemergeError::Construction(
                "special word is empty".to_string(),
            ));
        }
        if self.word_map.contains_key(word) {
            return Err(BytemergeError::Construction(format!(
                "special word {word:?} registered twice"
            )));
        }
        if self.token_words.contains_key(&token) {
            return Err(BytemergeError::DuplicateToken {
                token: token_to_u64(token),
            });
        }

        self.words.push((word.to_string(), token));
        self.word_map.insert(word.to_string(), token);
        self.token_words.insert(token, word.to_string());
        Ok(())
    }

    /// Get the number of special words in the vocab.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The special words, in registration order.
    pub fn words(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.words.iter().map(|(word, token)| (word.as_str(), *token))
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_map.get(word).copied()
    }

    /// Get the associated word for a token, if any.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        self.token_words.get(&token).map(|w| w.as_str())
    }

    /// Get the regex pattern for special words.
    ///
    /// ## Returns
    /// `None` if no special words are present;
    /// and `Some(RegexWrapperPattern)` otherwise, alternating in registration order.
    pub fn special_pattern(&self) -> Option<RegexWrapperPattern> {
        if self.is_empty() {
            return None;
        }

        let alts = self
            .words
            .iter()
            .map(|(word, _)| word.as_str())
            .collect::<Vec<_>>();
        Some(exact_match_union_regex_pattern(&alts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_vocab() {
        type T = u32;
        let mut vocab: SpecialVocab<T> = SpecialVocab::default();
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
        assert_eq!(vocab.special_pattern(), None);

        vocab.add_str_word("<|b|>", 2).unwrap();
        vocab.add_str_word("<|a|>", 1).unwrap();
        assert_eq!(vocab.len(), 2);
        assert!(!vocab.is_empty());

        assert_eq!(vocab.words().collect::<Vec<_>>(), vec![("<|b|>", 2), ("<|a|>", 1)]);

        assert_eq!(vocab.lookup_token("<|a|>"), Some(1));
        assert_eq!(vocab.lookup_token("<|c|>"), None);
        assert_eq!(vocab.lookup_word(2), Some("<|b|>"));
        assert_eq!(vocab.lookup_word(3), None);

        assert_eq!(
            vocab.special_pattern().unwrap().as_str(),
            r"(<\|b\|>|<\|a\|>)"
        );

        let rebuild = SpecialVocab::from_words(vocab.words()).unwrap();
        assert_eq!(rebuild, vocab);
    }

    #[test]
    fn test_special_vocab_errors() {
        type T = u32;

        assert!(matches!(
            SpecialVocab::<T>::from_words([("", 1)]),
            Err(BytemergeError::Construction(_))
        ));
        assert!(matches!(
            SpecialVocab::<T>::from_words([("<|a|>", 1), ("<|a|>", 2)]),
            Err(BytemergeError::Construction(_))
        ));
        assert!(matches!(
            SpecialVocab::<T>::from_words([("<|a|>", 1), ("<|b|>", 1)]),
            Err(BytemergeError::DuplicateToken { token: 1 })
        ));
    }
}
