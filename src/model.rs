//! Model data types — the immutable tables and pack catalogue a codec call
//! is parameterized over.
//!
//! A [`Model`] bundles exactly the lookups the encoder and decoder need:
//! which bytes are "indexable" ([`Model::id_of`]), what follows a given
//! indexable byte and how common that follower is ([`Model::has_successor`],
//! [`Model::indexed_byte_of`]), and the catalogue of bit-packed [`Pack`]
//! layouts available for substitution ([`Model::packs`]). Every lookup is
//! total — out-of-range or unknown inputs return `None`, never a panic or an
//! out-of-bounds access.
//!
//! Models are pure data, built once per process and never mutated after
//! that (see `models/` for the four shipped tables). There is no notion of
//! a "current" or "default" model inside this module; callers pick one
//! explicitly, or use the crate-level free functions which pin
//! [`crate::models::text_en`].

/// Maximum number of ranked successors any pack in this crate's catalogue
/// can reference (a 3-bit rank field: `0..=7`).
pub const MAX_SUCCESSORS: usize = 8;

/// Maximum number of successor-rank payload slots any pack in this
/// crate's catalogue carries (`bits_packed.len()`, i.e. `bytes_packed -
/// 1`). The largest shipped pack packs 8 bytes, giving 7 slots; kept as
/// a named bound so the encoder can stage a match's resolved ranks in a
/// fixed-size array instead of allocating one per pack attempt.
pub const MAX_PACK_SLOTS: usize = 7;

/// One bit-packed substitution layout: `bytes_packed` consecutive input
/// bytes represented as `bytes_unpacked` output bytes.
///
/// The output frame is `word` (the header bits, constant across every use of
/// this pack) OR'd with a payload built from one predecessor-id field
/// (`id_bits` wide) followed by `bytes_packed - 1` successor-rank fields
/// (widths given by `bits_packed`, each biased by the matching entry in
/// `offsets` before being written — and un-biased by subtracting it back out
/// on decode).
#[derive(Debug, Clone, Copy)]
pub struct Pack {
    /// Constant header bits, left-justified in the first output byte.
    pub word: u8,
    /// Mask selecting the header bits of `word`; also used by the decoder
    /// to classify a compressed byte as this pack's header.
    pub header_mask: u8,
    /// Number of input bytes this pack represents. Always `>= 2`.
    pub bytes_packed: u8,
    /// Number of output bytes this pack occupies. Always `< bytes_packed`,
    /// and one of `1`, `2`, `4`.
    pub bytes_unpacked: u8,
    /// Width in bits of the predecessor-id payload field.
    pub id_bits: u8,
    /// Width in bits of each successor-rank payload field, one entry per
    /// slot after the first. `bits_packed.len() == bytes_packed - 1`.
    pub bits_packed: &'static [u8],
    /// Per-slot bias added to a successor rank before packing (and
    /// subtracted back out on unpacking), letting a narrow field cover a
    /// rank range that does not start at zero. Same length as
    /// `bits_packed`; all-zero unless a model needs otherwise.
    pub offsets: &'static [u8],
}

impl Pack {
    /// Total bits spent on the header across every byte of `bytes_unpacked`.
    pub fn header_bits(&self) -> u32 {
        self.header_mask.count_ones()
    }

    /// Total payload bits: the id field plus every successor-rank field.
    pub fn payload_bits(&self) -> u32 {
        self.id_bits as u32 + self.bits_packed.iter().map(|&b| b as u32).sum::<u32>()
    }

    /// `true` if header bits + payload bits exactly fill `bytes_unpacked`
    /// output bytes — the structural invariant every shipped pack must
    /// satisfy (checked in this module's tests for every shipped model).
    pub fn is_well_formed(&self) -> bool {
        self.bytes_packed >= 2
            && self.bytes_unpacked < self.bytes_packed
            && matches!(self.bytes_unpacked, 1 | 2 | 4)
            && self.bits_packed.len() == (self.bytes_packed - 1) as usize
            && self.offsets.len() == self.bits_packed.len()
            && self.header_bits() + self.payload_bits() == 8 * self.bytes_unpacked as u32
    }

    /// Largest value representable in a field of `bits` width.
    pub(crate) fn field_max(bits: u8) -> u32 {
        if bits >= 32 {
            u32::MAX
        } else {
            (1u32 << bits) - 1
        }
    }
}

/// An immutable, process-lifetime bundle of lookup tables and a pack
/// catalogue. See the module docs for the contract each field serves.
pub struct Model {
    /// Human-readable name, surfaced in `Debug` output and error messages.
    pub name: &'static str,
    /// The indexable alphabet, ordered by declared frequency (lower id =
    /// more frequent). `chrs_by_chr_id[id]` is the byte for that id.
    pub(crate) chrs_by_chr_id: Vec<u8>,
    /// Inverse of `chrs_by_chr_id`: byte value -> id, or `None` if that byte
    /// is not in the indexable alphabet. Always length 256.
    pub(crate) chr_ids_by_chr: [Option<u8>; 256],
    /// `successor_ids_by_chr_id_and_chr_id[prev_id][candidate_id]` -> rank.
    /// Row length equals the alphabet size.
    pub(crate) successor_ids_by_chr_id_and_chr_id: Vec<Vec<Option<u8>>>,
    /// `chrs_by_chr_and_successor_id[prev_id][rank]` -> the actual successor
    /// byte (which need not itself be indexable).
    pub(crate) chrs_by_chr_and_successor_id: Vec<[Option<u8>; MAX_SUCCESSORS]>,
    /// Pack catalogue, longest (most input bytes) first. The encoder and
    /// decoder both rely on this order for, respectively, greedy selection
    /// and unambiguous header classification.
    pub(crate) packs: &'static [Pack],
}

impl Model {
    /// The id of `byte` in this model's indexable alphabet, or `None` if
    /// `byte` is not indexable.
    #[inline]
    pub fn id_of(&self, byte: u8) -> Option<u8> {
        self.chr_ids_by_chr[byte as usize]
    }

    /// The rank of `candidate_id` among the bytes observed following
    /// `prev_id`, or `None` if it was not frequent enough to be ranked (or
    /// either id is out of range).
    #[inline]
    pub fn has_successor(&self, prev_id: u8, candidate_id: u8) -> Option<u8> {
        self.successor_ids_by_chr_id_and_chr_id
            .get(prev_id as usize)?
            .get(candidate_id as usize)
            .copied()
            .flatten()
    }

    /// The byte ranked `rank` among successors of `prev_id`, or `None` if
    /// that rank is undefined for this predecessor.
    #[inline]
    pub fn indexed_byte_of(&self, prev_id: u8, rank: u8) -> Option<u8> {
        self.chrs_by_chr_and_successor_id
            .get(prev_id as usize)?
            .get(rank as usize)
            .copied()
            .flatten()
    }

    /// The byte at `id` in the indexable alphabet, or `None` if `id` is out
    /// of range for this model.
    #[inline]
    pub fn chr_of_id(&self, id: u8) -> Option<u8> {
        self.chrs_by_chr_id.get(id as usize).copied()
    }

    /// The pack catalogue, longest (most input bytes consumed) first.
    #[inline]
    pub fn packs(&self) -> &'static [Pack] {
        self.packs
    }

    /// One-shot compression under the original framing. Equivalent to
    /// calling [`crate::encode::compress`] with this model.
    pub fn compress(&self, input: &[u8]) -> Vec<u8> {
        crate::encode::compress(input, self)
    }

    /// One-shot decompression under the original framing. Equivalent to
    /// calling [`crate::decode::decompress`] with this model.
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, crate::decode::DecodeError> {
        crate::decode::decompress(input, self)
    }

    /// One-shot compression under the proposed (UTF-8-run-preserving)
    /// framing.
    pub fn proposed_compress(&self, input: &[u8]) -> Vec<u8> {
        crate::encode::proposed_compress(input, self)
    }

    /// One-shot decompression under the proposed framing.
    pub fn proposed_decompress(&self, input: &[u8]) -> Result<Vec<u8>, crate::decode::DecodeError> {
        crate::decode::proposed_decompress(input, self)
    }
}

/// Build a [`Model`] from a declarative spec: an alphabet ordered by
/// descending frequency, and for each alphabet entry its successors in rank
/// order (rank 0 = most frequent follower). Successor bytes need not
/// themselves be members of `alphabet`.
///
/// Used once per shipped model, behind a `OnceLock`, so the expansion cost
/// is paid at most once per process (see `models/mod.rs`).
pub(crate) fn build_model(
    name: &'static str,
    alphabet: &'static [u8],
    successors: &'static [&'static [u8]],
    packs: &'static [Pack],
) -> Model {
    debug_assert_eq!(alphabet.len(), successors.len());

    let mut chr_ids_by_chr = [None; 256];
    for (id, &byte) in alphabet.iter().enumerate() {
        chr_ids_by_chr[byte as usize] = Some(id as u8);
    }

    let mut chrs_by_chr_and_successor_id = vec![[None; MAX_SUCCESSORS]; alphabet.len()];
    let mut successor_ids_by_chr_id_and_chr_id = vec![vec![None; alphabet.len()]; alphabet.len()];

    for (prev_id, succ_list) in successors.iter().enumerate() {
        for (rank, &byte) in succ_list.iter().enumerate().take(MAX_SUCCESSORS) {
            chrs_by_chr_and_successor_id[prev_id][rank] = Some(byte);
            if let Some(candidate_id) = chr_ids_by_chr[byte as usize] {
                successor_ids_by_chr_id_and_chr_id[prev_id][candidate_id as usize] = Some(rank as u8);
            }
        }
    }

    Model {
        name,
        chrs_by_chr_id: alphabet.to_vec(),
        chr_ids_by_chr,
        successor_ids_by_chr_id_and_chr_id,
        chrs_by_chr_and_successor_id,
        packs,
    }
}

/// The three bit-packed layouts shared by every shipped model: one
/// successor packed into one output byte, three packed into two, and seven
/// packed into four. Declared longest-first, which doubles as the
/// header-disambiguation order (see module docs and [`crate::decode`]).
pub(crate) static STANDARD_PACKS: [Pack; 3] = [
    // 8 input bytes -> 4 output bytes. header "111" (3 bits), 8-bit id,
    // seven 3-bit ranks: 3 + 8 + 7*3 = 32.
    Pack {
        word: 0xE0,
        header_mask: 0xE0,
        bytes_packed: 8,
        bytes_unpacked: 4,
        id_bits: 8,
        bits_packed: &[3, 3, 3, 3, 3, 3, 3],
        offsets: &[0, 0, 0, 0, 0, 0, 0],
    },
    // 4 input bytes -> 2 output bytes. header "11" (2 bits), 5-bit id,
    // three 3-bit ranks: 2 + 5 + 3*3 = 16.
    Pack {
        word: 0xC0,
        header_mask: 0xC0,
        bytes_packed: 4,
        bytes_unpacked: 2,
        id_bits: 5,
        bits_packed: &[3, 3, 3],
        offsets: &[0, 0, 0],
    },
    // 2 input bytes -> 1 output byte. header "1" (1 bit), 4-bit id, one
    // 3-bit rank: 1 + 4 + 3 = 8.
    Pack {
        word: 0x80,
        header_mask: 0x80,
        bytes_packed: 2,
        bytes_unpacked: 1,
        id_bits: 4,
        bits_packed: &[3],
        offsets: &[0],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_packs_are_well_formed() {
        for pack in STANDARD_PACKS.iter() {
            assert!(pack.is_well_formed(), "{:?} is not well-formed", pack);
        }
    }

    #[test]
    fn standard_packs_strictly_shrink() {
        for pack in STANDARD_PACKS.iter() {
            assert!(pack.bytes_unpacked < pack.bytes_packed);
        }
    }

    #[test]
    fn standard_packs_headers_are_declared_longest_first() {
        let widths: Vec<u32> = STANDARD_PACKS.iter().map(Pack::header_bits).collect();
        assert!(widths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn standard_packs_headers_are_disjoint_under_declaration_order() {
        // For every pair, the more specific (declared earlier / larger
        // mask) pack's header must not be reachable by masking the less
        // specific one with its own mask and landing on the same bits,
        // i.e. classification by "first mask match in order" is unambiguous.
        for (i, p) in STANDARD_PACKS.iter().enumerate() {
            for q in STANDARD_PACKS.iter().skip(i + 1) {
                // `p` is checked first (declared earlier / more specific
                // mask). A byte meant to select `q` must not already match
                // `p`'s pattern, or `q` would never be reachable.
                assert_ne!(
                    q.word & p.header_mask,
                    p.word & p.header_mask,
                    "pack {:?} would be misclassified as {:?}",
                    q,
                    p
                );
            }
        }
    }

    #[test]
    fn build_model_round_trips_alphabet() {
        static ALPHABET: [u8; 3] = [b't', b'e', b's'];
        static SUCC_T: [u8; 2] = [b'e', b's'];
        static SUCC_E: [u8; 1] = [b's'];
        static SUCC_S: [u8; 0] = [];
        static SUCCESSORS: [&[u8]; 3] = [&SUCC_T, &SUCC_E, &SUCC_S];

        let model = build_model("toy", &ALPHABET, &SUCCESSORS, &STANDARD_PACKS);
        assert_eq!(model.id_of(b't'), Some(0));
        assert_eq!(model.id_of(b'e'), Some(1));
        assert_eq!(model.id_of(b's'), Some(2));
        assert_eq!(model.id_of(b'x'), None);

        assert_eq!(model.has_successor(0, 1), Some(0)); // t -> e is rank 0
        assert_eq!(model.has_successor(0, 2), Some(1)); // t -> s is rank 1
        assert_eq!(model.has_successor(1, 2), Some(0)); // e -> s is rank 0
        assert_eq!(model.has_successor(2, 0), None); // s has no successors

        assert_eq!(model.indexed_byte_of(0, 0), Some(b'e'));
        assert_eq!(model.indexed_byte_of(0, 1), Some(b's'));
        assert_eq!(model.indexed_byte_of(0, 2), None);
        assert_eq!(model.chr_of_id(0), Some(b't'));
        assert_eq!(model.chr_of_id(9), None);
    }

    #[test]
    fn nonzero_offset_shifts_packed_rank() {
        // A synthetic pack whose single successor-rank field is biased by
        // 2: a raw payload of 0 therefore means rank 2, not rank 0.
        static OFFSET_PACK: Pack = Pack {
            word: 0x80,
            header_mask: 0x80,
            bytes_packed: 2,
            bytes_unpacked: 1,
            id_bits: 4,
            bits_packed: &[3],
            offsets: &[2],
        };
        assert!(OFFSET_PACK.is_well_formed());
        // Exercised end-to-end in `crate::decode` / `crate::encode` tests;
        // here we only check the field bookkeeping itself.
        assert_eq!(Pack::field_max(OFFSET_PACK.bits_packed[0]), 7);
    }
}
