//! Shipped model tuned for filesystem paths: separators, extensions, and
//! the mostly-lowercase-plus-digits alphabet typical of directory trees.

use std::sync::OnceLock;

use crate::model::{build_model, Model, STANDARD_PACKS};

static ALPHABET: [u8; 24] = [
    b'/', b'e', b't', b'a', b'o', b'i', b'n', b's', b'r', b'l', b'c', b'd', b'u', b'm', b'.',
    b'_', b'-', b'0', b'1', b'2', b'p', b'g', b'h', b'x',
];

static SUCC_SLASH: [u8; 7] = [b's', b'u', b'l', b'v', b'e', b'b', b'h'];
static SUCC_E: [u8; 6] = [b'r', b's', b'n', b'd', b'.', b'_'];
static SUCC_T: [u8; 6] = [b'i', b'e', b'o', b's', b'_', b'h'];
static SUCC_A: [u8; 6] = [b'r', b't', b'l', b'n', b's', b'c'];
static SUCC_O: [u8; 5] = [b'n', b'r', b'u', b'd', b'c'];
static SUCC_I: [u8; 5] = [b'o', b'n', b's', b't', b'g'];
static SUCC_N: [u8; 5] = [b'f', b'g', b't', b'd', b'_'];
static SUCC_S: [u8; 4] = [b'r', b'e', b't', b'_'];
static SUCC_R: [u8; 4] = [b'c', b'e', b'i', b'a'];
static SUCC_L: [u8; 3] = [b'i', b'e', b'o'];
static SUCC_C: [u8; 3] = [b'o', b'a', b'h'];
static SUCC_D: [u8; 3] = [b'i', b'e', b'_'];
static SUCC_U: [u8; 3] = [b'r', b'b', b'n'];
static SUCC_M: [u8; 3] = [b'a', b'e', b'p'];
static SUCC_DOT: [u8; 5] = [b't', b'r', b'j', b'p', b'm'];
static SUCC_UNDERSCORE: [u8; 3] = [b't', b's', b'c'];
static SUCC_DASH: [u8; 2] = [b'1', b'0'];
static SUCC_0: [u8; 2] = [b'.', b'0'];
static SUCC_1: [u8; 2] = [b'.', b'1'];
static SUCC_2: [u8; 2] = [b'.', b'0'];
static SUCC_P: [u8; 2] = [b'a', b'r'];
static SUCC_G: [u8; 2] = [b'o', b'e'];
static SUCC_H: [u8; 1] = [b'e'];
static SUCC_X: [u8; 1] = [b't'];

static SUCCESSORS: [&[u8]; 24] = [
    &SUCC_SLASH,
    &SUCC_E,
    &SUCC_T,
    &SUCC_A,
    &SUCC_O,
    &SUCC_I,
    &SUCC_N,
    &SUCC_S,
    &SUCC_R,
    &SUCC_L,
    &SUCC_C,
    &SUCC_D,
    &SUCC_U,
    &SUCC_M,
    &SUCC_DOT,
    &SUCC_UNDERSCORE,
    &SUCC_DASH,
    &SUCC_0,
    &SUCC_1,
    &SUCC_2,
    &SUCC_P,
    &SUCC_G,
    &SUCC_H,
    &SUCC_X,
];

static MODEL: OnceLock<Model> = OnceLock::new();

/// The shipped model tuned for filesystem paths. Built once per process
/// and cached thereafter.
pub fn file_path() -> &'static Model {
    MODEL.get_or_init(|| build_model("file_path", &ALPHABET, &SUCCESSORS, &STANDARD_PACKS))
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
        assert!(std::ptr::eq(file_path(), file_path()));
    }

    #[test]
    fn round_trips_a_typical_path() {
        let model = file_path();
        let input = b"/usr/local/bin/app-1.2.0/main.rs";
        let compressed = crate::encode::compress(input, model);
        assert_eq!(crate::decode::decompress(&compressed, model).unwrap(), input);
    }
}
