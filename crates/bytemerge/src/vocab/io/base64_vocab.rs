//! # Tiktoken Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{BMResult, BytemergeError},
    types::{TokenType, token_to_u64},
    vocab::{SpanMapVocab, SpanTokenMap},
};

/// Load a [`SpanMapVocab`] from a base64 vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 SPAN} {TOKEN}
/// ```
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_base64_span_vocab_path<T, P>(path: P) -> BMResult<SpanMapVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    SpanMapVocab::init(load_base64_span_map_path(path)?)
}

/// Load a [`SpanTokenMap`] from a base64 vocab file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_base64_span_map_path<T, P>(path: P) -> BMResult<SpanTokenMap<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::debug!("loading base64 vocab: {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    read_base64_span_map(reader)
}

/// Read a [`SpanTokenMap`] from a base64 vocab line reader.
///
/// Blank lines are skipped.
///
/// ## Arguments
/// * `reader` - the line reader.
///
/// ## Returns
/// The span map; or a [`BytemergeError::Parse`] naming the failing line.
pub fn read_base64_span_map<T, R>(reader: R) -> BMResult<SpanTokenMap<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut span_map = SpanTokenMap::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let parse_err = |msg: String| BytemergeError::Parse(format!("line {lineno}: {msg}"));

        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let Some((span, id)) = line.split_once(' ') else {
            return Err(parse_err(format!("expected `BASE64 TOKEN`, got {line:?}")));
        };

        let span = BASE64_STANDARD
            .decode(span)
            .map_err(|e| parse_err(e.to_string()))?;

        let id: u64 = id.trim().parse().map_err(|e: core::num::ParseIntError| parse_err(e.to_string()))?;
        let token = T::from_u64(id).ok_or(BytemergeError::TokenOutOfRange)?;

        if let Some(prev) = span_map.insert(span, token)
            && prev != token
        {
            return Err(parse_err(format!("span reassigned from {prev} to {token}")));
        }
    }

    Ok(span_map)
}

/// Save a [`SpanTokenMap`] to a base64 vocab file.
///
/// ## Arguments
/// * `span_map` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_base64_span_map_path<T: TokenType, P: AsRef<Path>>(
    span_map: &SpanTokenMap<T>,
    path: P,
) -> BMResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_base64_span_map(span_map, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`SpanTokenMap`] to a [`Write`] writer, in token order.
///
/// ## Arguments
/// * `span_map` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_base64_span_map<T, W>(
    span_map: &SpanTokenMap<T>,
    writer: &mut W,
) -> BMResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut items: Vec<(T, &Vec<u8>)> = span_map
        .iter()
        .map(|(span, &token)| (token, span))
        .collect();
    items.sort_by_key(|(t, _)| *t);

    for (token, span) in items {
        writeln!(
            writer,
            "{} {}",
            BASE64_STANDARD.encode(span),
            token_to_u64(token)
        )?;
    }

    Ok(())
}
