//! Short-string compression: packs common byte successors and short
//! n-grams into single-byte model references, falling back to literal
//! bytes when no substitution helps. Tuned for names, paths, log
//! fragments and other strings of at most a few hundred bytes — this is
//! not a general-purpose compressor, and inputs much larger than that
//! will compress poorly if at all.
//!
//! Two framings are available for non-ASCII input, selected by which
//! free function (or [`Model`] method) you call: the original
//! shoco-compatible convention ([`compress`]/[`decompress`]) and a
//! UTF-8-run-preserving alternative ([`proposed_compress`]/
//! [`proposed_decompress`]). The two are incompatible on the wire —
//! nothing self-identifies which one produced a given buffer — so pick
//! one per call site and stick with it.
//!
//! ```
//! let packed = shortstr_codec::compress(b"the quick brown fox");
//! let restored = shortstr_codec::decompress(&packed).unwrap();
//! assert_eq!(restored, b"the quick brown fox");
//! ```

pub mod decode;
pub mod encode;
pub mod framing;
pub mod model;
pub mod models;

pub use decode::DecodeError;
pub use model::{Model, Pack};

/// One-shot compression under the original framing, using the
/// [`models::text_en`] model.
pub fn compress(input: &[u8]) -> Vec<u8> {
    encode::compress(input, models::text_en())
}

/// One-shot decompression under the original framing, using the
/// [`models::text_en`] model.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode::decompress(input, models::text_en())
}

/// One-shot compression under the proposed framing, using the
/// [`models::text_en`] model.
pub fn proposed_compress(input: &[u8]) -> Vec<u8> {
    encode::proposed_compress(input, models::text_en())
}

/// One-shot decompression under the proposed framing, using the
/// [`models::text_en`] model.
pub fn proposed_decompress(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode::proposed_decompress(input, models::text_en())
}
