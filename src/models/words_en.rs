//! Shipped model tuned for single English words in isolation (dictionary
//! lookups, autocomplete candidates, identifier fragments) rather than
//! full sentences — no space or punctuation in its alphabet.

use std::sync::OnceLock;

use crate::model::{build_model, Model, STANDARD_PACKS};

static ALPHABET: [u8; 24] = [
    b'e', b'a', b'r', b'i', b'o', b't', b'n', b's', b'l', b'c', b'u', b'd', b'p', b'm', b'h',
    b'g', b'b', b'y', b'f', b'v', b'k', b'w', b'z', b'x',
];

static SUCC_E: [u8; 7] = [b'r', b's', b'd', b'n', b'l', b'a', b'c'];
static SUCC_A: [u8; 7] = [b'n', b't', b'l', b'r', b's', b'c', b'd'];
static SUCC_R: [u8; 6] = [b'e', b'i', b'a', b'o', b's', b'y'];
static SUCC_I: [u8; 6] = [b'n', b'o', b's', b't', b'c', b'e'];
static SUCC_O: [u8; 6] = [b'n', b'r', b'u', b'm', b's', b'w'];
static SUCC_T: [u8; 6] = [b'i', b'h', b'e', b'o', b'a', b's'];
static SUCC_N: [u8; 5] = [b'g', b't', b'd', b'e', b's'];
static SUCC_S: [u8; 5] = [b't', b'e', b'i', b's', b'h'];
static SUCC_L: [u8; 4] = [b'e', b'i', b'y', b'l'];
static SUCC_C: [u8; 4] = [b't', b'o', b'e', b'h'];
static SUCC_U: [u8; 4] = [b'r', b'n', b's', b'l'];
static SUCC_D: [u8; 3] = [b'e', b'i', b's'];
static SUCC_P: [u8; 3] = [b'e', b'r', b'o'];
static SUCC_M: [u8; 3] = [b'e', b'a', b'o'];
static SUCC_H: [u8; 3] = [b'e', b'a', b'i'];
static SUCC_G: [u8; 3] = [b'h', b'e', b'r'];
static SUCC_B: [u8; 2] = [b'l', b'e'];
static SUCC_Y: [u8; 1] = [b's'];
static SUCC_F: [u8; 2] = [b'o', b'r'];
static SUCC_V: [u8; 2] = [b'e', b'i'];
static SUCC_K: [u8; 2] = [b'e', b'i'];
static SUCC_W: [u8; 2] = [b'a', b'i'];
static SUCC_Z: [u8; 1] = [b'e'];
static SUCC_X: [u8; 1] = [b't'];

static SUCCESSORS: [&[u8]; 24] = [
    &SUCC_E, &SUCC_A, &SUCC_R, &SUCC_I, &SUCC_O, &SUCC_T, &SUCC_N, &SUCC_S, &SUCC_L, &SUCC_C,
    &SUCC_U, &SUCC_D, &SUCC_P, &SUCC_M, &SUCC_H, &SUCC_G, &SUCC_B, &SUCC_Y, &SUCC_F, &SUCC_V,
    &SUCC_K, &SUCC_W, &SUCC_Z, &SUCC_X,
];

static MODEL: OnceLock<Model> = OnceLock::new();

/// The shipped model tuned for single English words. Built once per
/// process and cached thereafter.
pub fn words_en() -> &'static Model {
    MODEL.get_or_init(|| build_model("words_en", &ALPHABET, &SUCCESSORS, &STANDARD_PACKS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_and_successors_align() {
        assert_eq!(ALPHABET.len(), SUCCESSORS.len());
        assert!(ALPHABET.len() <= crate::framing::MAX_ALPHABET_LEN);
    }

    #[test]
    fn accessor_is_idempotent() {
        assert!(std::ptr::eq(words_en(), words_en()));
    }
}
