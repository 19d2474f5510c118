//! Shipped model tuned for email addresses: `local@domain.tld`, heavy on
//! lowercase letters, `.`, `_` and digits around a single `@`.

use std::sync::OnceLock;

use crate::model::{build_model, Model, STANDARD_PACKS};

static ALPHABET: [u8; 24] = [
    b'e', b'a', b'o', b'i', b'n', b't', b'l', b's', b'r', b'c', b'.', b'_', b'm', b'd', b'g',
    b'1', b'0', b'2', b'@', b'h', b'u', b'b', b'y', b'k',
];

static SUCC_E: [u8; 6] = [b'r', b'n', b'.', b'_', b's', b'l'];
static SUCC_A: [u8; 6] = [b'n', b'i', b'l', b'r', b't', b'm'];
static SUCC_O: [u8; 5] = [b'n', b'm', b'.', b'r', b'u'];
static SUCC_I: [u8; 5] = [b'n', b'c', b'l', b'o', b's'];
static SUCC_N: [u8; 5] = [b'.', b'_', b'e', b'a', b'o'];
static SUCC_T: [u8; 4] = [b'h', b'.', b'e', b'o'];
static SUCC_L: [u8; 4] = [b'e', b'i', b'.', b'_'];
static SUCC_S: [u8; 4] = [b'o', b'.', b'm', b'_'];
static SUCC_R: [u8; 4] = [b'i', b'e', b'o', b'.'];
static SUCC_C: [u8; 3] = [b'o', b'h', b'e'];
static SUCC_DOT: [u8; 5] = [b'c', b'o', b'n', b'g', b'1'];
static SUCC_UNDERSCORE: [u8; 3] = [b'd', b'm', b's'];
static SUCC_M: [u8; 3] = [b'a', b'i', b'.'];
static SUCC_D: [u8; 3] = [b'o', b'.', b'e'];
static SUCC_G: [u8; 2] = [b'm', b'o'];
static SUCC_1: [u8; 2] = [b'0', b'@'];
static SUCC_0: [u8; 2] = [b'0', b'@'];
static SUCC_2: [u8; 2] = [b'0', b'@'];
static SUCC_AT: [u8; 3] = [b'g', b'y', b'o'];
static SUCC_H: [u8; 2] = [b'o', b'a'];
static SUCC_U: [u8; 2] = [b's', b'n'];
static SUCC_B: [u8; 1] = [b'e'];
static SUCC_Y: [u8; 1] = [b'a'];
static SUCC_K: [u8; 1] = [b'e'];

static SUCCESSORS: [&[u8]; 24] = [
    &SUCC_E,
    &SUCC_A,
    &SUCC_O,
    &SUCC_I,
    &SUCC_N,
    &SUCC_T,
    &SUCC_L,
    &SUCC_S,
    &SUCC_R,
    &SUCC_C,
    &SUCC_DOT,
    &SUCC_UNDERSCORE,
    &SUCC_M,
    &SUCC_D,
    &SUCC_G,
    &SUCC_1,
    &SUCC_0,
    &SUCC_2,
    &SUCC_AT,
    &SUCC_H,
    &SUCC_U,
    &SUCC_B,
    &SUCC_Y,
    &SUCC_K,
];

static MODEL: OnceLock<Model> = OnceLock::new();

/// The shipped model tuned for email addresses. Built once per process
/// and cached thereafter.
pub fn emails() -> &'static Model {
    MODEL.get_or_init(|| build_model("emails", &ALPHABET, &SUCCESSORS, &STANDARD_PACKS))
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
        assert!(std::ptr::eq(emails(), emails()));
    }

    #[test]
    fn round_trips_a_typical_address() {
        let model = emails();
        let input = b"jane.doe@example.com";
        let compressed = crate::encode::compress(input, model);
        assert_eq!(crate::decode::decompress(&compressed, model).unwrap(), input);
    }
}
