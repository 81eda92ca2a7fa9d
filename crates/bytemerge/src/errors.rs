//! # Error Types

use std::string::FromUtf8Error;

use crate::spanning::ErrorWrapper;

/// Errors from bytemerge operations.
#[derive(Debug, thiserror::Error)]
pub enum BytemergeError {
    /// A constructor input was missing or invalid.
    #[error("invalid construction: {0}")]
    Construction(String),

    /// The vocabulary lacks an entry for a single byte value.
    ///
    /// Every byte ``0..=255`` must be encodable on its own,
    /// otherwise merging can stall on an unencodable byte.
    #[error("vocabulary has no token for byte {byte:#04x}")]
    MissingByte {
        /// The byte without a token.
        byte: u8,
    },

    /// A token id is assigned to more than one span.
    #[error("token {token} is assigned to more than one span")]
    DuplicateToken {
        /// The (widened) duplicated token.
        token: u64,
    },

    /// The segmentation pattern failed to compile, or failed while matching.
    #[error("regex error: {0}")]
    Regex(#[from] ErrorWrapper),

    /// The caller explicitly disallowed a special token found in the text.
    #[error("disallowed special token found in text: {0:?}")]
    DisallowedSpecialToken(String),

    /// A special token was found in the text which was neither allowed nor disallowed.
    #[error("undeclared special token found in text: {0:?}")]
    UndeclaredSpecialToken(String),

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// Strict decoding produced invalid UTF-8.
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (base64, integer, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

impl BytemergeError {
    /// The offending special-token text, for special-token scanning failures.
    pub fn special_text(&self) -> Option<&str> {
        match self {
            Self::DisallowedSpecialToken(text) | Self::UndeclaredSpecialToken(text) => Some(text),
            _ => None,
        }
    }
}

/// Result type for bytemerge operations.
pub type BMResult<T> = core::result::Result<T, BytemergeError>;
