// crates/enigma-core/src/settings/format.rs

use crate::settings::settings::EncryptionSettings;

const MAGIC: &[u8; 4] = b"ENG1";

/// Canonical byte form of a settings value, used for fingerprinting.
/// Layout (little-endian):
/// MAGIC[4]
/// alphabet: len:u16 utf8
/// rotor_count:u16
/// rotors: repeated { wiring: len:u16 utf8, notch:u32 }
/// reflector: len:u16 utf8
/// plugboard: len:u16 utf8      (pairs single-space joined, empty = none)
/// positions: len:u16 utf8      (defaults filled in)
///
/// Settings that build the same machine encode identically: an absent
/// plugboard equals an empty one, absent positions equal all-first-symbol.
pub fn encode(s: &EncryptionSettings) -> Vec<u8> {
    let mut b = Vec::with_capacity(256);
    b.extend_from_slice(MAGIC);

    put_str(&mut b, &s.alphabet);

    let count = s.rotors.len().min(u16::MAX as usize) as u16;
    b.extend_from_slice(&count.to_le_bytes());
    for (wiring, &notch) in s.rotors.iter().zip(s.notches.iter()).take(count as usize) {
        put_str(&mut b, wiring);
        b.extend_from_slice(&(notch as u32).to_le_bytes());
    }

    put_str(&mut b, &s.reflector);
    put_str(&mut b, &s.normalized_plugboard());

    let positions: String = s.effective_positions().into_iter().collect();
    put_str(&mut b, &positions);

    b
}

fn put_str(b: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    let len = bytes.len().min(u16::MAX as usize);
    b.extend_from_slice(&(len as u16).to_le_bytes());
    b.extend_from_slice(&bytes[..len]);
}

pub fn settings_id_16(s: &EncryptionSettings) -> [u8; 16] {
    let hash = blake3::hash(&encode(s));
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

pub fn settings_id_hex(s: &EncryptionSettings) -> String {
    hex16(&settings_id_16(s))
}

fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
