//! # Common Statistics

/// Expected bytes/token ratio.
pub const EXPECTED_BYTES_PER_TOKEN: f32 = 4.0;

/// Output buffer capacity guess for encoding `text_len` bytes.
pub fn expected_token_capacity(text_len: usize) -> usize {
    (text_len as f32 / (EXPECTED_BYTES_PER_TOKEN * 0.5)) as usize
}
