#![allow(missing_docs)]

use std::sync::{Arc, LazyLock};

use bytemerge::{
    Tokenizer,
    TokenizerOptions,
    spanning::{NO_SPECIALS, patterns::CL100K_BASE_PATTERN},
    vocab::{SpanMapVocab, SpecialVocab},
};
use divan::{Bencher, black_box, counter::BytesCount};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static PARAGRAPH: &str = "The tokenizer splits the text into pieces, and then merges \
    the bytes of each piece in rank order. It's not the heat, it's the humidity; \
    there were 12345 other things on the agenda, but nobody remembered them. \
    Naïve café owners in Zürich rarely mention the weather.\n";

const MERGES: &[&str] = &[
    "th", "he", "in", "er", "an", "re", "on", " t", "en", "at", "the", " the", "es", "or", "ed",
    "is", " a", "it", "ar", "ng", "ing", " o", "nd", " w", "ou", " s", "ea", "te", " b", "st",
    " th", "le", "to", "ti", "al", "of", " of", "and", " and", "ha", "ra", "ce", "co", "ion",
    "tion", "er ", "ve", "me", "ne", "ma",
];

static VOCAB: LazyLock<Arc<SpanMapVocab<u32>>> = LazyLock::new(|| {
    let spans = (0..=255_u8).map(|b| (vec![b], b as u32)).chain(
        MERGES
            .iter()
            .enumerate()
            .map(|(i, m)| (m.as_bytes().to_vec(), 256 + i as u32)),
    );
    Arc::new(SpanMapVocab::from_spans(spans).unwrap())
});

fn text() -> String {
    PARAGRAPH.repeat(50)
}

fn tokenizer(cache: bool) -> Tokenizer<u32> {
    TokenizerOptions::default()
        .with_cache(cache)
        .build(
            VOCAB.clone(),
            Arc::new(SpecialVocab::default()),
            CL100K_BASE_PATTERN,
        )
        .unwrap()
}

#[divan::bench(args = [true, false])]
fn encode(
    bencher: Bencher,
    cache: bool,
) {
    let text = text();
    let tok = tokenizer(cache);

    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| tok.encode(black_box(&text), NO_SPECIALS, NO_SPECIALS).unwrap());
}

#[divan::bench(args = [true, false])]
fn count_tokens(
    bencher: Bencher,
    cache: bool,
) {
    let text = text();
    let tok = tokenizer(cache);

    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| tok.count_tokens(black_box(&text)).unwrap());
}

#[divan::bench]
fn decode(bencher: Bencher) {
    let text = text();
    let tok = tokenizer(true);
    let tokens = tok.encode(&text, NO_SPECIALS, NO_SPECIALS).unwrap();

    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| tok.decode(black_box(&tokens)));
}

#[cfg(feature = "rayon")]
#[divan::bench]
fn encode_batch(bencher: Bencher) {
    let batch: Vec<String> = (0..64).map(|_| PARAGRAPH.repeat(4)).collect();
    let tok = tokenizer(true);

    bencher.bench(|| {
        tok.encode_batch(black_box(&batch), NO_SPECIALS, NO_SPECIALS)
            .unwrap()
    });
}
