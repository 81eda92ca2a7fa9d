//! # Text Span References

/// A validated span of a text, in text order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanRef<'a, T> {
    /// A word piece, to be resolved through the vocabulary.
    Word(&'a str),

    /// An allowed special word, and its token.
    Special(&'a str, T),
}

impl<'a, T> SpanRef<'a, T> {
    /// The text of the span.
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Word(text) => text,
            Self::Special(text, _) => text,
        }
    }

    /// Is this a special word?
    pub fn is_special(&self) -> bool {
        matches!(self, Self::Special(..))
    }
}
