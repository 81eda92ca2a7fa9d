//! # Vocabulary Types

use crate::types::CommonHashMap;

/// `{ Vec<u8> -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `span_map`, or `span_token_map`.
pub type SpanTokenMap<T> = CommonHashMap<Vec<u8>, T>;

/// `{ T -> Vec<u8> }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_spans`, or `token_span_map`.
pub type TokenSpanMap<T> = CommonHashMap<T, Vec<u8>>;

/// `{ String -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `text_map`, or `word_map`.
pub type TextTokenMap<T> = CommonHashMap<String, T>;

/// `{ T -> String }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_words`.
pub type TokenTextMap<T> = CommonHashMap<T, String>;

/// `[T; 256]` array.
///
/// ## Style Hints
/// Instance names should prefer `byte_tokens`, or `byte_token_array`.
pub type ByteTokenArray<T> = [T; 256];
