//! Compression: scans input left-to-right, greedily substituting the
//! longest pack the model can represent at each position and falling
//! back to a literal (or escape, for non-ASCII bytes) otherwise.

use crate::framing::{proposed_escape_header, utf8_run_length, Framing, ORIGINAL_ESCAPE};
use crate::model::{Model, Pack, MAX_PACK_SLOTS};

/// Compress `input` under the original (shoco-compatible) framing.
/// Always succeeds; empty input maps to empty output.
pub fn compress(input: &[u8], model: &Model) -> Vec<u8> {
    run(input, model, Framing::Original)
}

/// Compress `input` under the proposed (UTF-8-run-preserving) framing.
/// Always succeeds; empty input maps to empty output.
pub fn proposed_compress(input: &[u8], model: &Model) -> Vec<u8> {
    run(input, model, Framing::Proposed)
}

fn run(input: &[u8], model: &Model, framing: Framing) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() + input.len() / 2 + 4);
    let mut i = 0;

    while i < input.len() {
        if let Some(m) = find_applicable_pack(input, i, model) {
            let consumed = m.pack.bytes_packed as usize;
            write_pack(&mut out, &m);
            i += consumed;
            continue;
        }

        let byte = input[i];
        if byte & 0x80 != 0 {
            i += emit_escape(&mut out, &input[i..], framing);
        } else {
            out.push(byte);
            i += 1;
        }
    }

    out
}

/// A pack whose slots have all been resolved against the model at some
/// input position: the predecessor id for the first slot, and the
/// already-biased rank for every successor slot after it. Carrying these
/// out of `pack_applies` lets `write_pack` build the output frame without
/// re-deriving (and re-unwrapping) lookups the match already proved.
struct PackMatch<'m> {
    pack: &'m Pack,
    id: u8,
    biased_ranks: [u8; MAX_PACK_SLOTS],
}

/// The longest pack (by declaration order, which is longest-first) that
/// can represent `input` starting at `i`, if any, together with its
/// resolved id and rank fields.
fn find_applicable_pack<'m>(input: &[u8], i: usize, model: &'m Model) -> Option<PackMatch<'m>> {
    model.packs().iter().find_map(|pack| pack_applies(input, i, pack, model))
}

fn pack_applies<'m>(input: &[u8], i: usize, pack: &'m Pack, model: &Model) -> Option<PackMatch<'m>> {
    let k = pack.bytes_packed as usize;
    if i + k > input.len() || pack.bits_packed.len() > MAX_PACK_SLOTS {
        return None;
    }

    let mut prev_id = model.id_of(input[i])?;
    if prev_id as u32 > Pack::field_max(pack.id_bits) {
        return None;
    }
    let id = prev_id;
    let mut biased_ranks = [0u8; MAX_PACK_SLOTS];

    for (slot, &width) in pack.bits_packed.iter().enumerate() {
        let candidate = input[i + slot + 1];
        let candidate_id = model.id_of(candidate)?;
        let rank = model.has_successor(prev_id, candidate_id)?;
        let offset = pack.offsets[slot];
        if rank < offset {
            return None;
        }
        let biased = rank - offset;
        if biased as u32 > Pack::field_max(width) {
            return None;
        }
        biased_ranks[slot] = biased;
        prev_id = candidate_id;
    }

    Some(PackMatch { pack, id, biased_ranks })
}

/// Write `m.pack`'s encoding of the bytes `pack_applies` matched to `out`.
fn write_pack(out: &mut Vec<u8>, m: &PackMatch) {
    let pack = m.pack;
    let total_bits = 8 * pack.bytes_unpacked as u32;
    let mut bits: u32 = (pack.word as u32) << (total_bits - 8);
    let mut cursor = total_bits - pack.header_bits();

    cursor -= pack.id_bits as u32;
    bits |= (m.id as u32) << cursor;

    for (slot, &width) in pack.bits_packed.iter().enumerate() {
        cursor -= width as u32;
        bits |= (m.biased_ranks[slot] as u32) << cursor;
    }

    for shift in (0..pack.bytes_unpacked).rev() {
        out.push(((bits >> (shift * 8)) & 0xFF) as u8);
    }
}

/// Emit one non-ASCII literal as an escape under `framing`, returning how
/// many input bytes were consumed.
fn emit_escape(out: &mut Vec<u8>, remaining: &[u8], framing: Framing) -> usize {
    match framing {
        Framing::Original => {
            out.push(ORIGINAL_ESCAPE);
            out.push(remaining[0]);
            1
        }
        Framing::Proposed => {
            let run_length = utf8_run_length(remaining);
            out.push(proposed_escape_header(run_length));
            out.extend_from_slice(&remaining[..run_length]);
            run_length
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::text_en;

    #[test]
    fn ascii_literal_falls_through_when_no_pack_applies() {
        let model = text_en();
        // 'q' is not in text_en's alphabet, so it can only ever be a
        // literal, regardless of what follows it.
        assert_eq!(compress(b"qz", model), b"qz");
    }

    #[test]
    fn original_framing_escapes_high_bit_bytes() {
        let model = text_en();
        let out = compress(&[0xC2, 0xB5], model);
        assert_eq!(out, vec![ORIGINAL_ESCAPE, 0xC2, ORIGINAL_ESCAPE, 0xB5]);
    }

    #[test]
    fn proposed_framing_keeps_utf8_runs_intact() {
        let model = text_en();
        let out = proposed_compress(&[0xC2, 0xB5], model); // 'µ'
        assert_eq!(out, vec![proposed_escape_header(2), 0xC2, 0xB5]);
    }

    #[test]
    fn embedded_nul_is_escaped_under_original_framing() {
        let model = text_en();
        let out = compress(&[0x00], model);
        assert_eq!(out, vec![ORIGINAL_ESCAPE, 0x00]);
    }
}
