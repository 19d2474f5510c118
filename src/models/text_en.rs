//! Shipped model tuned for general English prose: paragraphs, sentences,
//! log messages written in natural language.

use std::sync::OnceLock;

use crate::model::{build_model, Model, STANDARD_PACKS};

static ALPHABET: [u8; 24] = [
    b' ', b'e', b't', b'a', b'o', b'i', b'n', b's', b'h', b'r', b'd', b'l', b'u', b'c', b'm',
    b'w', b'f', b'g', b'y', b'p', b'b', b'.', b',', b'\'',
];

// One successor row per alphabet entry above, most-frequent follower
// first. Modeled on general English digraph frequency, not fit to a
// specific training corpus.
static SUCC_SPACE: [u8; 8] = [b't', b'a', b's', b'o', b'w', b'c', b'b', b'h'];
static SUCC_E: [u8; 8] = [b' ', b'r', b'n', b's', b'd', b'a', b'l', b'.'];
static SUCC_T: [u8; 8] = [b'h', b'e', b' ', b'o', b'i', b'r', b'a', b'u'];
static SUCC_A: [u8; 8] = [b'n', b't', b' ', b'r', b's', b'l', b'd', b'c'];
static SUCC_O: [u8; 7] = [b'n', b'r', b'u', b' ', b'f', b'm', b'w'];
static SUCC_I: [u8; 7] = [b'n', b's', b't', b'o', b'c', b'l', b'd'];
static SUCC_N: [u8; 7] = [b'g', b' ', b'd', b't', b's', b'e', b'c'];
static SUCC_S: [u8; 6] = [b' ', b't', b'e', b'i', b'o', b'h'];
static SUCC_H: [u8; 5] = [b'e', b'a', b'i', b' ', b'o'];
static SUCC_R: [u8; 6] = [b'e', b' ', b'o', b'i', b'a', b's'];
static SUCC_D: [u8; 5] = [b' ', b'e', b'i', b's', b'a'];
static SUCC_L: [u8; 5] = [b'e', b' ', b'l', b'y', b'i'];
static SUCC_U: [u8; 4] = [b'r', b't', b'n', b's'];
static SUCC_C: [u8; 4] = [b'o', b'e', b'h', b't'];
static SUCC_M: [u8; 3] = [b'e', b' ', b'a'];
static SUCC_W: [u8; 3] = [b'a', b'i', b'h'];
static SUCC_F: [u8; 3] = [b'o', b' ', b'r'];
static SUCC_G: [u8; 3] = [b'h', b' ', b'e'];
static SUCC_Y: [u8; 2] = [b' ', b'o'];
static SUCC_P: [u8; 3] = [b'e', b'r', b'o'];
static SUCC_B: [u8; 2] = [b'e', b'l'];
static SUCC_DOT: [u8; 2] = [b' ', b'\n'];
static SUCC_COMMA: [u8; 1] = [b' '];
static SUCC_APOS: [u8; 2] = [b's', b't'];

static SUCCESSORS: [&[u8]; 24] = [
    &SUCC_SPACE,
    &SUCC_E,
    &SUCC_T,
    &SUCC_A,
    &SUCC_O,
    &SUCC_I,
    &SUCC_N,
    &SUCC_S,
    &SUCC_H,
    &SUCC_R,
    &SUCC_D,
    &SUCC_L,
    &SUCC_U,
    &SUCC_C,
    &SUCC_M,
    &SUCC_W,
    &SUCC_F,
    &SUCC_G,
    &SUCC_Y,
    &SUCC_P,
    &SUCC_B,
    &SUCC_DOT,
    &SUCC_COMMA,
    &SUCC_APOS,
];

static MODEL: OnceLock<Model> = OnceLock::new();

/// The shipped model tuned for general English prose. Built once per
/// process and cached thereafter.
pub fn text_en() -> &'static Model {
    MODEL.get_or_init(|| build_model("text_en", &ALPHABET, &SUCCESSORS, &STANDARD_PACKS))
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
        assert!(std::ptr::eq(text_en(), text_en()));
    }

    #[test]
    fn y_has_no_successor_at_the_top_rank() {
        let model = text_en();
        let id = model.id_of(b'y').unwrap();
        assert!(model.indexed_byte_of(id, 7).is_none());
    }
}
