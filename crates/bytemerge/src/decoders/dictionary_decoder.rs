//! # Dictionary ``{ T -> Vec<u8> }`` Token Decoder

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    types::TokenType,
    vocab::{SpanMapVocab, SpecialVocab},
};

/// A token dictionary [`TokenDecoder<T>`].
///
/// Each token is looked up in the span vocabulary first,
/// then in the special vocabulary; unknown tokens decode to nothing.
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    vocab: Arc<SpanMapVocab<T>>,
    specials: Arc<SpecialVocab<T>>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Creates a new Decoder.
    ///
    /// ## Arguments
    /// * `vocab` - The span vocabulary.
    /// * `specials` - The special words.
    ///
    /// ## Returns
    /// A new `DictionaryDecoder` instance.
    pub fn new(
        vocab: Arc<SpanMapVocab<T>>,
        specials: Arc<SpecialVocab<T>>,
    ) -> Self {
        Self { vocab, specials }
    }

    /// The bytes of a single token, if known.
    #[inline]
    pub fn lookup(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.vocab
            .lookup_span(token)
            .or_else(|| self.specials.lookup_word(token).map(str::as_bytes))
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) {
        for &token in tokens {
            match self.lookup(token) {
                Some(bytes) => buf.extend_from_slice(bytes),
                None => log::trace!("decode: skipping unknown token {token}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::BytemergeError,
        vocab::testing::{build_test_specials, build_test_vocab},
    };

    fn test_decoder() -> DictionaryDecoder<u32> {
        DictionaryDecoder::new(
            Arc::new(build_test_vocab()),
            Arc::new(build_test_specials()),
        )
    }

    #[test]
    fn test_dictionary_decoder() {
        type T = u32;
        let decoder = test_decoder();

        let h = b'h' as T + 10;
        let tokens: Vec<T> = vec![309, 304, 313, 1000, h];
        assert_eq!(
            decoder.decode_to_bytes(&tokens),
            b"hello, world<|endoftext|>h".to_vec()
        );
        assert_eq!(decoder.decode_to_string(&tokens), "hello, world<|endoftext|>h");

        assert!(decoder.decode_to_bytes(&[]).is_empty());
    }

    #[test]
    fn test_unknown_tokens_skipped() {
        type T = u32;
        let decoder = test_decoder();

        let tokens: Vec<T> = vec![309, 5000, 313, 2];
        assert_eq!(decoder.decode_to_string(&tokens), "helloworld");
        assert_eq!(decoder.lookup(5000), None);
    }

    #[test]
    fn test_vocab_wins_token_collision() {
        type T = u32;
        let vocab = build_test_vocab::<T>();
        let a = b'a' as T + 10;
        let specials = SpecialVocab::from_words([("<|a|>", a), ("<|fim|>", 309)]).unwrap();
        let decoder = DictionaryDecoder::new(Arc::new(vocab), Arc::new(specials));

        assert_eq!(decoder.lookup(a), Some(b"a".as_slice()));
        assert_eq!(decoder.lookup(309), Some(b"hello".as_slice()));
        assert_eq!(decoder.decode_to_string(&[a, 309]), "ahello");
    }

    #[test]
    fn test_utf8_handling() {
        type T = u32;
        let decoder = test_decoder();

        // The first byte of "é" alone.
        let partial: Vec<T> = vec![309, 0xc3 + 10];
        assert_eq!(decoder.decode_to_string(&partial), "hello\u{fffd}");
        assert!(matches!(
            decoder.try_decode_to_string(&partial),
            Err(BytemergeError::Utf8(_))
        ));

        let full: Vec<T> = vec![0xc3 + 10, 0xa9 + 10];
        assert_eq!(decoder.try_decode_to_string(&full).unwrap(), "é");
    }

    #[test]
    fn test_batch() {
        type T = u32;
        let decoder = test_decoder();

        let a: Vec<T> = vec![309];
        let b: Vec<T> = vec![1001, 313];
        let batch: Vec<&[T]> = vec![a.as_slice(), b.as_slice()];

        assert_eq!(
            decoder.decode_batch_to_strings(&batch),
            vec!["hello".to_string(), "<|fim|>world".to_string()]
        );
        assert_eq!(
            decoder.try_decode_batch_to_strings(&batch).unwrap(),
            vec!["hello".to_string(), "<|fim|>world".to_string()]
        );
        assert_eq!(
            decoder.decode_batch_to_bytes(&batch),
            vec![b"hello".to_vec(), b"<|fim|>world".to_vec()]
        );
    }
}
