use std::{path::PathBuf, sync::Arc};

use bytemerge::{
    Tokenizer,
    TokenizerOptions,
    spanning::{RegexWrapperPattern, patterns::CL100K_BASE_PATTERN},
    vocab::{SpecialVocab, io::load_base64_span_vocab_path},
};

/// Parse a `WORD=ID` special word argument.
///
/// The id follows the last `=`; so words may contain `=`.
pub fn parse_special_word(arg: &str) -> Result<(String, u32), String> {
    let (word, id) = arg
        .rsplit_once('=')
        .ok_or_else(|| format!("expected WORD=ID, got {arg:?}"))?;
    if word.is_empty() {
        return Err(format!("empty special word in {arg:?}"));
    }
    let id = id
        .parse::<u32>()
        .map_err(|e| format!("bad special id in {arg:?}: {e}"))?;
    Ok((word.to_string(), id))
}

/// Tokenizer construction arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// The tiktoken-format vocabulary file (`BASE64 ID` lines).
    #[clap(long)]
    pub vocab: PathBuf,

    /// The word segmentation regex; defaults to the `cl100k_base` pattern.
    #[clap(long)]
    pub pattern: Option<String>,

    /// Register a special word (repeatable; registration order is kept).
    #[clap(long = "special", value_name = "WORD=ID", value_parser = parse_special_word)]
    pub specials: Vec<(String, u32)>,

    /// Disable the piece memoization cache.
    #[clap(long)]
    pub no_cache: bool,
}

impl TokenizerArgs {
    /// Load the vocabulary and build the tokenizer.
    pub fn build(&self) -> Result<Tokenizer<u32>, Box<dyn std::error::Error>> {
        let vocab = load_base64_span_vocab_path::<u32, _>(&self.vocab)?;
        let specials = SpecialVocab::from_words(self.specials.iter().map(|(w, t)| (w.as_str(), *t)))?;

        let pattern: RegexWrapperPattern = match &self.pattern {
            Some(pattern) => pattern.as_str().into(),
            None => CL100K_BASE_PATTERN.into(),
        };

        log::info!(
            "loaded {}: {} spans, {} special words",
            self.vocab.display(),
            vocab.len(),
            specials.len()
        );

        Ok(TokenizerOptions::default()
            .with_cache(!self.no_cache)
            .build(Arc::new(vocab), Arc::new(specials), pattern)?)
    }
}
