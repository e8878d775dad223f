//! Preset directory codes.

use uuid::Uuid;

/// Characters a generated code is drawn from.
const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a generated code.
pub const CODE_LEN: usize = 6;

/// Bytes at or above this bound are discarded so every character is
/// equally likely.
const BYTE_LIMIT: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Generate a random six-character code of uppercase letters and digits.
pub fn generate_code() -> String {
    let mut code = String::with_capacity(CODE_LEN);
    while code.len() < CODE_LEN {
        let uuid = Uuid::new_v4();
        // Bytes 6 and 8 carry the version and variant bits.
        let random = uuid
            .as_bytes()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 6 && *i != 8)
            .map(|(_, b)| *b);
        push_chars(&mut code, random);
    }
    code
}

/// Append characters for `bytes` until the code is full, skipping bytes
/// that would bias the alphabet.
fn push_chars(code: &mut String, bytes: impl IntoIterator<Item = u8>) {
    for b in bytes {
        if code.len() == CODE_LEN {
            break;
        }
        if b < BYTE_LIMIT {
            code.push(ALPHABET[b as usize % ALPHABET.len()] as char);
        }
    }
}

/// Generate codes until one is not taken.
pub fn unique_code(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let code = generate_code();
        if !is_taken(&code) {
            return code;
        }
    }
}
