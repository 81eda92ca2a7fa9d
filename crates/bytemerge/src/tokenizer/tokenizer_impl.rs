//! # Tokenizer Implementation

use std::sync::Arc;

use crate::{
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::{CacheStats, MergeEngine, SpanCache, group_utf8_safe},
    errors::{BMResult, BytemergeError},
    spanning::{RegexWrapperPattern, SpanScanner, SpecialScanner, SpecialTokenSet},
    tokenizer::{SpanRef, TokenizerOptions},
    types::TokenType,
    vocab::{SpanMapVocab, SpecialVocab, size_hints::expected_token_capacity},
};

/// A byte-pair encoding tokenizer.
///
/// Text is split around special words, then into word pieces by the
/// segmentation [`SpanScanner`]; each piece is resolved, in order, by:
/// 1. a whole-piece vocabulary lookup;
/// 2. the memoization cache, when enabled;
/// 3. a direct byte-span vocabulary lookup;
/// 4. the [`MergeEngine`], memoizing the result.
///
/// Special word occurrences contribute their token in place.
///
/// The vocabularies are immutable; the cache is the only interior state,
/// so a tokenizer can be shared between threads.
pub struct Tokenizer<T: TokenType> {
    options: TokenizerOptions,

    vocab: Arc<SpanMapVocab<T>>,
    special_scanner: SpecialScanner<T>,
    word_scanner: Arc<dyn SpanScanner>,

    engine: MergeEngine<T>,
    decoder: DictionaryDecoder<T>,
    cache: Option<SpanCache<T>>,
}

impl<T: TokenType> core::fmt::Debug for Tokenizer<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("options", &self.options)
            .field("vocab_size", &self.vocab.len())
            .field("specials", &self.special_scanner.specials().len())
            .finish()
    }
}

impl<T: TokenType> Tokenizer<T> {
    /// Build a new tokenizer from a segmentation pattern.
    ///
    /// ## Arguments
    /// * `options` - The tokenizer options.
    /// * `vocab` - The span vocabulary.
    /// * `specials` - The special words; may be empty.
    /// * `pattern` - The word segmentation pattern; must be non-empty.
    ///
    /// ## Returns
    /// The new tokenizer, or an error if the pattern is empty or does not compile.
    ///
    /// # Note
    /// Text the pattern does not match is dropped during encoding.
    /// `decode(encode(text))` returns `text` only when the pattern covers all of it;
    /// the patterns in [`crate::spanning::patterns`] do.
    pub fn new(
        options: TokenizerOptions,
        vocab: Arc<SpanMapVocab<T>>,
        specials: Arc<SpecialVocab<T>>,
        pattern: impl Into<RegexWrapperPattern>,
    ) -> BMResult<Self> {
        let pattern = pattern.into();
        if pattern.as_str().is_empty() {
            return Err(BytemergeError::Construction(
                "segmentation pattern is empty".to_string(),
            ));
        }
        let regex = pattern.compile()?;
        log::debug!(
            "tokenizer pattern: {} ({})",
            regex.as_str(),
            if regex.is_fancy() { "fancy" } else { "basic" }
        );

        Self::with_scanner(options, vocab, specials, Arc::new(regex))
    }

    /// Build a new tokenizer around an existing word scanner.
    ///
    /// # Note
    /// Bytes outside the scanner's word ranges produce no tokens,
    /// so the scanner must cover the whole text for decoding to round trip.
    pub fn with_scanner(
        options: TokenizerOptions,
        vocab: Arc<SpanMapVocab<T>>,
        specials: Arc<SpecialVocab<T>>,
        word_scanner: Arc<dyn SpanScanner>,
    ) -> BMResult<Self> {
        let special_scanner = SpecialScanner::new(specials.clone())?;

        log::debug!(
            "tokenizer: {} spans, {} special words, cache: {}",
            vocab.len(),
            specials.len(),
            options.cache
        );

        Ok(Self {
            options,
            engine: MergeEngine::new(vocab.clone()),
            decoder: DictionaryDecoder::new(vocab.clone(), specials),
            cache: options.cache.then(SpanCache::new),
            vocab,
            special_scanner,
            word_scanner,
        })
    }

    /// The options this tokenizer was built with.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// The span vocabulary.
    pub fn vocab(&self) -> &Arc<SpanMapVocab<T>> {
        &self.vocab
    }

    /// The special words.
    pub fn specials(&self) -> &Arc<SpecialVocab<T>> {
        self.special_scanner.specials()
    }

    /// The decoder.
    pub fn decoder(&self) -> &DictionaryDecoder<T> {
        &self.decoder
    }

    /// The current cache entry counts; zero when the cache is disabled.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache
            .as_ref()
            .map(SpanCache::stats)
            .unwrap_or_default()
    }

    /// Split `text` into its validated word and special spans.
    ///
    /// Every special word occurrence is classified before any span is returned.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    /// * `allowed` - Special words to recognize.
    /// * `disallowed` - Special words to reject.
    ///
    /// ## Returns
    /// The spans in text order; or an error for a disallowed or
    /// undeclared special word.
    pub fn split_spans<'a, A, D>(
        &self,
        text: &'a str,
        allowed: &A,
        disallowed: &D,
    ) -> BMResult<Vec<SpanRef<'a, T>>>
    where
        A: SpecialTokenSet + ?Sized,
        D: SpecialTokenSet + ?Sized,
    {
        let specials = self.special_scanner.scan(text, allowed, disallowed)?;

        let mut spans = Vec::new();
        let mut last = 0;
        for special in specials {
            self.for_each_word(&text[last..special.range.start], &mut |word| {
                spans.push(SpanRef::Word(word))
            })?;
            spans.push(SpanRef::Special(
                &text[special.range.clone()],
                special.token,
            ));
            last = special.range.end;
        }
        self.for_each_word(&text[last..], &mut |word| spans.push(SpanRef::Word(word)))?;

        Ok(spans)
    }

    /// Visit each non-empty word piece of a special-free run.
    fn for_each_word<'a>(
        &self,
        run: &'a str,
        f: &mut dyn FnMut(&'a str),
    ) -> BMResult<()> {
        if run.is_empty() {
            return Ok(());
        }
        self.word_scanner.for_each_span(run, &mut |range| {
            if !range.is_empty() {
                f(&run[range])
            }
        })
    }

    /// Encode `text`, recognizing the `allowed` special words.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `allowed` - Special words to encode as their special token.
    /// * `disallowed` - Special words to reject.
    ///
    /// ## Returns
    /// The tokens; or an error, before any tokens are produced,
    /// if a special word is disallowed or undeclared.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, text, allowed, disallowed))
    )]
    pub fn encode<A, D>(
        &self,
        text: &str,
        allowed: &A,
        disallowed: &D,
    ) -> BMResult<Vec<T>>
    where
        A: SpecialTokenSet + ?Sized,
        D: SpecialTokenSet + ?Sized,
    {
        let spans = self.split_spans(text, allowed, disallowed)?;

        let mut tokens = Vec::with_capacity(expected_token_capacity(text.len()));
        for span in spans {
            match span {
                SpanRef::Word(word) => self.encode_piece_append(word, &mut tokens),
                SpanRef::Special(_, token) => tokens.push(token),
            }
        }
        Ok(tokens)
    }

    /// Encode `text` with no special word recognition.
    ///
    /// Special words are encoded as ordinary text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode_ordinary(
        &self,
        text: &str,
    ) -> BMResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(expected_token_capacity(text.len()));
        self.for_each_word(text, &mut |word| {
            self.encode_piece_append(word, &mut tokens)
        })?;
        Ok(tokens)
    }

    /// Count the tokens [`Self::encode_ordinary`] produces for `text`.
    ///
    /// Uses the count cache; no token list is built.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn count_tokens(
        &self,
        text: &str,
    ) -> BMResult<usize> {
        let mut count = 0;
        self.for_each_word(text, &mut |word| count += self.count_piece(word))?;
        Ok(count)
    }

    /// Count the tokens [`Self::encode`] produces for `text`.
    ///
    /// Special words are validated exactly as by [`Self::encode`].
    pub fn count_tokens_with_special<A, D>(
        &self,
        text: &str,
        allowed: &A,
        disallowed: &D,
    ) -> BMResult<usize>
    where
        A: SpecialTokenSet + ?Sized,
        D: SpecialTokenSet + ?Sized,
    {
        Ok(self
            .split_spans(text, allowed, disallowed)?
            .into_iter()
            .map(|span| match span {
                SpanRef::Word(word) => self.count_piece(word),
                SpanRef::Special(..) => 1,
            })
            .sum())
    }

    /// The merge fragments of `text`, as byte slices.
    ///
    /// Whole-piece vocabulary matches and special words are single fragments.
    pub fn explore_bytes<'a, A, D>(
        &self,
        text: &'a str,
        allowed: &A,
        disallowed: &D,
    ) -> BMResult<Vec<&'a [u8]>>
    where
        A: SpecialTokenSet + ?Sized,
        D: SpecialTokenSet + ?Sized,
    {
        let mut frags = Vec::new();
        for span in self.split_spans(text, allowed, disallowed)? {
            match span {
                SpanRef::Word(word) if self.vocab.lookup_text(word).is_none() => {
                    frags.extend(self.engine.explore(word.as_bytes()))
                }
                span => frags.push(span.as_str().as_bytes()),
            }
        }
        Ok(frags)
    }

    /// The merge fragments of `text`, as (lossy) strings.
    ///
    /// A fragment which splits a multi-byte character renders with `U+FFFD`;
    /// see [`Self::explore_utf8_safe`].
    pub fn explore<A, D>(
        &self,
        text: &str,
        allowed: &A,
        disallowed: &D,
    ) -> BMResult<Vec<String>>
    where
        A: SpecialTokenSet + ?Sized,
        D: SpecialTokenSet + ?Sized,
    {
        Ok(self
            .explore_bytes(text, allowed, disallowed)?
            .into_iter()
            .map(|frag| String::from_utf8_lossy(frag).into_owned())
            .collect())
    }

    /// The merge fragments of `text`, regrouped at character boundaries.
    ///
    /// ## Returns
    /// ``(text, fragment count)`` groups; per piece, the counts sum to the
    /// fragments [`Self::explore`] reports.
    pub fn explore_utf8_safe<A, D>(
        &self,
        text: &str,
        allowed: &A,
        disallowed: &D,
    ) -> BMResult<Vec<(String, usize)>>
    where
        A: SpecialTokenSet + ?Sized,
        D: SpecialTokenSet + ?Sized,
    {
        let mut groups = Vec::new();
        for span in self.split_spans(text, allowed, disallowed)? {
            match span {
                SpanRef::Word(word) if self.vocab.lookup_text(word).is_none() => {
                    groups.extend(group_utf8_safe(&self.engine.explore(word.as_bytes())))
                }
                span => groups.push((span.as_str().to_string(), 1)),
            }
        }
        Ok(groups)
    }

    /// Decode tokens into bytes.
    ///
    /// Unknown tokens are skipped.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> Vec<u8> {
        self.decoder.decode_to_bytes(tokens)
    }

    /// Decode tokens into a string, replacing invalid UTF-8.
    pub fn decode_to_string(
        &self,
        tokens: &[T],
    ) -> String {
        self.decoder.decode_to_string(tokens)
    }

    /// Decode tokens into a string, failing on invalid UTF-8.
    pub fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> BMResult<String> {
        self.decoder.try_decode_to_string(tokens)
    }

    /// Resolve one word piece, appending its tokens.
    fn encode_piece_append(
        &self,
        piece: &str,
        tokens: &mut Vec<T>,
    ) {
        if let Some(token) = self.vocab.lookup_text(piece) {
            tokens.push(token);
            return;
        }

        if let Some(cache) = &self.cache
            && cache.extend_tokens(piece, tokens)
        {
            return;
        }

        let bytes = piece.as_bytes();
        if let Some(token) = self.vocab.lookup_token(bytes) {
            tokens.push(token);
            return;
        }

        let start = tokens.len();
        self.engine.encode_append(bytes, tokens);
        if let Some(cache) = &self.cache {
            cache.insert_tokens(piece, &tokens[start..]);
        }
    }

    /// Count the tokens of one word piece.
    fn count_piece(
        &self,
        piece: &str,
    ) -> usize {
        if self.vocab.lookup_text(piece).is_some() {
            return 1;
        }

        if let Some(cache) = &self.cache
            && let Some(count) = cache.get_count(piece)
        {
            return count;
        }

        let bytes = piece.as_bytes();
        if self.vocab.lookup_token(bytes).is_some() {
            return 1;
        }

        let count = self.engine.count(bytes);
        if let Some(cache) = &self.cache {
            cache.insert_count(piece, count);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        spanning::{AllSpecial, NO_SPECIALS, patterns::CL100K_BASE_PATTERN},
        vocab::testing::{build_test_specials, build_test_vocab},
    };

    fn test_tokenizer(options: TokenizerOptions) -> Tokenizer<u32> {
        options
            .build(
                Arc::new(build_test_vocab()),
                Arc::new(build_test_specials()),
                CL100K_BASE_PATTERN,
            )
            .unwrap()
    }

    fn byte(b: u8) -> u32 {
        b as u32 + 10
    }

    #[test]
    fn test_is_send_sync() {
        fn check<S: Send + Sync>() {}
        check::<Tokenizer<u32>>();
    }

    #[test]
    fn test_construction() {
        let vocab: Arc<SpanMapVocab<u32>> = Arc::new(build_test_vocab());
        let specials: Arc<SpecialVocab<u32>> = Arc::new(SpecialVocab::default());

        assert!(matches!(
            Tokenizer::new(Default::default(), vocab.clone(), specials.clone(), ""),
            Err(BytemergeError::Construction(_))
        ));
        assert!(matches!(
            Tokenizer::new(Default::default(), vocab.clone(), specials.clone(), "(unclosed"),
            Err(BytemergeError::Regex(_))
        ));

        let tok = Tokenizer::new(Default::default(), vocab, specials, r"\w+").unwrap();
        assert!(tok.specials().is_empty());
        assert!(tok.options().cache);
    }

    #[test]
    fn test_encode() {
        for cache in [true, false] {
            let tok = test_tokenizer(TokenizerOptions::default().with_cache(cache));

            // "hello" is whole-piece; " world" merges to (" ", world).
            let tokens = tok.encode("hello world", NO_SPECIALS, NO_SPECIALS).unwrap();
            assert_eq!(tokens, vec![309, byte(b' '), 313]);
            assert_eq!(tok.decode(&tokens), b"hello world".to_vec());

            // Twice, to exercise the cache.
            let tokens = tok.encode("hells hells", NO_SPECIALS, NO_SPECIALS).unwrap();
            assert_eq!(
                tokens,
                vec![308, byte(b's'), byte(b' '), 308, byte(b's')]
            );

            assert!(tok.encode("", NO_SPECIALS, NO_SPECIALS).unwrap().is_empty());
            assert_eq!(tok.count_tokens("").unwrap(), 0);
        }
    }

    #[test]
    fn test_specials() {
        let tok = test_tokenizer(TokenizerOptions::default());

        let text = "<|endoftext|>hello";
        assert_eq!(
            tok.encode(text, &["<|endoftext|>"], NO_SPECIALS).unwrap(),
            vec![1000, 309]
        );
        assert!(matches!(
            tok.encode(text, NO_SPECIALS, &["<|endoftext|>"]),
            Err(BytemergeError::DisallowedSpecialToken(ref w)) if w == "<|endoftext|>"
        ));
        assert!(matches!(
            tok.encode(text, NO_SPECIALS, NO_SPECIALS),
            Err(BytemergeError::UndeclaredSpecialToken(ref w)) if w == "<|endoftext|>"
        ));

        // Validation covers the whole text; nothing is cached on failure.
        assert!(tok.encode("hells<|fim|>", &["<|endoftext|>"], NO_SPECIALS).is_err());
        assert_eq!(tok.cache_stats(), CacheStats::default());

        let tokens = tok.encode("hello<|fim|> world<|endoftext|>", &AllSpecial, NO_SPECIALS).unwrap();
        assert_eq!(tokens, vec![309, 1001, byte(b' '), 313, 1000]);
        assert_eq!(tok.decode_to_string(&tokens), "hello<|fim|> world<|endoftext|>");
    }

    #[test]
    fn test_split_spans() {
        let tok = test_tokenizer(TokenizerOptions::default());

        let spans = tok.split_spans("a <|fim|>b", &AllSpecial, NO_SPECIALS).unwrap();
        assert_eq!(
            spans,
            vec![
                SpanRef::Word("a"),
                SpanRef::Word(" "),
                SpanRef::Special("<|fim|>", 1001),
                SpanRef::Word("b"),
            ]
        );
        assert_eq!(spans.iter().filter(|span| span.is_special()).count(), 1);
        assert_eq!(
            spans.iter().map(SpanRef::as_str).collect::<String>(),
            "a <|fim|>b"
        );
    }

    #[test]
    fn test_encode_ordinary() {
        let tok = test_tokenizer(TokenizerOptions::default());

        let text = "hello<|fim|>";
        let tokens = tok.encode_ordinary(text).unwrap();
        assert!(!tokens.contains(&1001));
        assert_eq!(tok.decode_to_string(&tokens), text);

        assert_eq!(tok.count_tokens(text).unwrap(), tokens.len());
    }

    #[test]
    fn test_counts() {
        let tok = test_tokenizer(TokenizerOptions::default());

        for text in ["hello world", "hells, all the world. ", "it's 12345 for all!"] {
            let tokens = tok.encode(text, NO_SPECIALS, NO_SPECIALS).unwrap();
            assert_eq!(tok.count_tokens(text).unwrap(), tokens.len());
            // Again, from the count cache.
            assert_eq!(tok.count_tokens(text).unwrap(), tokens.len());
            assert_eq!(
                tok.count_tokens_with_special(text, NO_SPECIALS, NO_SPECIALS)
                    .unwrap(),
                tokens.len()
            );
        }

        let text = "<|endoftext|>hello world";
        assert_eq!(
            tok.count_tokens_with_special(text, &AllSpecial, NO_SPECIALS)
                .unwrap(),
            4
        );
        assert!(
            tok.count_tokens_with_special(text, NO_SPECIALS, NO_SPECIALS)
                .is_err()
        );
    }

    #[test]
    fn test_cache_stats() {
        let tok = test_tokenizer(TokenizerOptions::default());
        assert_eq!(tok.cache_stats(), CacheStats::default());

        // Whole-piece matches are not cached.
        tok.encode("hello", NO_SPECIALS, NO_SPECIALS).unwrap();
        assert_eq!(tok.cache_stats().token_entries, 0);

        tok.encode("hells hells", NO_SPECIALS, NO_SPECIALS).unwrap();
        let stats = tok.cache_stats();
        // "hells" and " hells".
        assert_eq!(stats.token_entries, 2);
        assert_eq!(stats.count_entries, 0);

        tok.count_tokens("hells").unwrap();
        assert_eq!(tok.cache_stats().count_entries, 1);

        let uncached = test_tokenizer(TokenizerOptions::default().with_cache(false));
        uncached.encode("hells hells", NO_SPECIALS, NO_SPECIALS).unwrap();
        assert_eq!(uncached.cache_stats(), CacheStats::default());
    }

    #[test]
    fn test_explore() {
        let tok = test_tokenizer(TokenizerOptions::default());

        assert_eq!(
            tok.explore("hello hells<|fim|>", &AllSpecial, NO_SPECIALS).unwrap(),
            vec!["hello", " ", "hell", "s", "<|fim|>"]
        );

        assert_eq!(
            tok.explore_utf8_safe("hello<|fim|>", &AllSpecial, NO_SPECIALS)
                .unwrap(),
            vec![("hello".to_string(), 1), ("<|fim|>".to_string(), 1)]
        );

        // "é" has no merges; its two bytes group into one character.
        let text = "hé";
        let frags = tok.explore_bytes(text, NO_SPECIALS, NO_SPECIALS).unwrap();
        assert_eq!(frags.len(), 3);
        assert_eq!(frags.concat(), text.as_bytes());

        let groups = tok.explore_utf8_safe(text, NO_SPECIALS, NO_SPECIALS).unwrap();
        assert_eq!(groups, vec![("h".to_string(), 1), ("é".to_string(), 2)]);
    }

    #[test]
    fn test_decode() {
        let tok = test_tokenizer(TokenizerOptions::default());

        assert_eq!(tok.decode(&[309, 99_999, 1000]), b"hello<|endoftext|>".to_vec());
        assert_eq!(tok.try_decode_to_string(&[313]).unwrap(), "world");
        assert!(tok.try_decode_to_string(&[byte(0xc3)]).is_err());
        assert_eq!(tok.decode_to_string(&[byte(0xc3)]), "\u{fffd}");
    }
}
