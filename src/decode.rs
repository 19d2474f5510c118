//! Decompression: reverses `crate::encode`'s pack/literal/escape stream
//! back into the original bytes, or reports why it couldn't.

use crate::framing::{proposed_escape_run_length, Framing, ORIGINAL_ESCAPE};
use crate::model::{Model, Pack};

/// Why a decompression call failed. There is no recovery or retry inside
/// this crate. Per this implementation's policy, neither variant carries
/// partial output — a caller that wants the bytes decoded before a
/// `Truncated` failure should re-decode a shorter prefix of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended in the middle of a pack or an escape run.
    Truncated,
    /// A pack's payload named a successor rank the model has no byte
    /// for — the input was not produced against this model, or was
    /// corrupted.
    MalformedPack,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Truncated => write!(f, "truncated input: ended mid-token"),
            DecodeError::MalformedPack => {
                write!(f, "malformed pack: payload names an undefined successor")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decompress `input`, produced by [`crate::encode::compress`] against
/// the same `model`.
pub fn decompress(input: &[u8], model: &Model) -> Result<Vec<u8>, DecodeError> {
    run(input, model, Framing::Original)
}

/// Decompress `input`, produced by [`crate::encode::proposed_compress`]
/// against the same `model`.
pub fn proposed_decompress(input: &[u8], model: &Model) -> Result<Vec<u8>, DecodeError> {
    run(input, model, Framing::Proposed)
}

fn run(input: &[u8], model: &Model, framing: Framing) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(input.len() * 2);
    let mut i = 0;

    while i < input.len() {
        let byte = input[i];

        if framing == Framing::Proposed {
            if let Some(run_length) = proposed_escape_run_length(byte) {
                let start = i + 1;
                let end = start + run_length;
                if end > input.len() {
                    return Err(DecodeError::Truncated);
                }
                out.extend_from_slice(&input[start..end]);
                i = end;
                continue;
            }
        }

        if let Some(pack) = model.packs().iter().find(|p| byte & p.header_mask == p.word) {
            i = expand_pack(input, i, pack, model, &mut out)?;
            continue;
        }

        if framing == Framing::Original && byte == ORIGINAL_ESCAPE {
            let escaped = *input.get(i + 1).ok_or(DecodeError::Truncated)?;
            out.push(escaped);
            i += 2;
            continue;
        }

        out.push(byte);
        i += 1;
    }

    Ok(out)
}

/// Expand the pack starting at `input[i]`, appending its decoded bytes to
/// `out`. Returns the input position just past the pack on success.
fn expand_pack(
    input: &[u8],
    i: usize,
    pack: &Pack,
    model: &Model,
    out: &mut Vec<u8>,
) -> Result<usize, DecodeError> {
    let end = i + pack.bytes_unpacked as usize;
    if end > input.len() {
        return Err(DecodeError::Truncated);
    }

    let mut bits: u32 = 0;
    for &b in &input[i..end] {
        bits = (bits << 8) | b as u32;
    }
    let total_bits = 8 * pack.bytes_unpacked as u32;
    let mut cursor = total_bits - pack.header_bits();

    cursor -= pack.id_bits as u32;
    let id = ((bits >> cursor) & Pack::field_max(pack.id_bits)) as u8;
    let first = model.chr_of_id(id).ok_or(DecodeError::MalformedPack)?;
    out.push(first);
    let mut prev_id = id;

    for (slot, &width) in pack.bits_packed.iter().enumerate() {
        cursor -= width as u32;
        let raw = (bits >> cursor) & Pack::field_max(width);
        let rank = raw as u8 + pack.offsets[slot];
        let byte = model
            .indexed_byte_of(prev_id, rank)
            .ok_or(DecodeError::MalformedPack)?;
        out.push(byte);
        if slot + 1 < pack.bits_packed.len() {
            prev_id = model.id_of(byte).ok_or(DecodeError::MalformedPack)?;
        }
    }

    Ok(end)
}
