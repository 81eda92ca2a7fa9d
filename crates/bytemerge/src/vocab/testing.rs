//! # Vocab Testing Tools

use crate::{
    types::TokenType,
    vocab::{SpanMapVocab, SpanTokenMap, SpecialVocab},
};

/// Build a byte-only span map, with each byte `b` mapped to `b + shift`.
pub fn build_test_span_map<T: TokenType>(shift: usize) -> SpanTokenMap<T> {
    (0..256_usize)
        .map(|b| (vec![b as u8], T::from_usize(b + shift).unwrap()))
        .collect()
}

/// The multi-byte spans of the test vocabulary.
pub const TEST_SPANS: &[(&str, usize)] = &[
    ("at", 300),
    ("ate", 301),
    ("th", 302),
    ("the", 303),
    (", ", 304),
    ("on", 305),
    ("he", 306),
    ("ll", 307),
    ("hell", 308),
    ("hello", 309),
    ("wo", 310),
    ("ld", 311),
    ("rld", 312),
    ("world", 313),
    ("fo", 314),
    ("for", 315),
    ("all", 316),
    (". ", 317),
];

/// Create a test [`SpanMapVocab`].
///
/// Bytes are shifted by 10; the multi-byte spans are [`TEST_SPANS`].
pub fn build_test_vocab<T: TokenType>() -> SpanMapVocab<T> {
    let mut span_map = build_test_span_map::<T>(10);
    span_map.extend(
        TEST_SPANS
            .iter()
            .map(|&(k, v)| (k.as_bytes().to_vec(), T::from_usize(v).unwrap())),
    );
    SpanMapVocab::init(span_map).unwrap()
}

/// Create a test [`SpecialVocab`] with tokens above [`build_test_vocab`].
pub fn build_test_specials<T: TokenType>() -> SpecialVocab<T> {
    SpecialVocab::from_words([
        ("<|endoftext|>", T::from_usize(1000).unwrap()),
        ("<|fim|>", T::from_usize(1001).unwrap()),
    ])
    .unwrap()
}
