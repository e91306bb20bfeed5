// crates/enigma-core/src/settings/defaults.rs

use std::fmt;
use std::str::FromStr;

use crate::alphabet::LATIN;
use crate::error::EnigmaError;
use crate::settings::settings::EncryptionSettings;

pub const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
pub const ROTOR_II: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";
pub const ROTOR_III: &str = "BDFHJLCPRTXVZNYEIWGAKMUSQO";

pub const REFLECTOR_A: &str = "EJMZALYXVBWFCRQUONTSPIKHGD";
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";
pub const REFLECTOR_C: &str = "FVPJIAOYEDRZXWGCTKUQSBNMHL";

/// Notches for rotors I, II, III in that order.
pub const DEFAULT_NOTCHES: [char; 3] = ['Q', 'E', 'V'];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotorKind {
    I,
    II,
    III,
}

impl RotorKind {
    pub const ALL: [RotorKind; 3] = [RotorKind::I, RotorKind::II, RotorKind::III];

    pub fn wiring(self) -> &'static str {
        match self {
            RotorKind::I => ROTOR_I,
            RotorKind::II => ROTOR_II,
            RotorKind::III => ROTOR_III,
        }
    }

    pub fn notch(self) -> char {
        match self {
            RotorKind::I => DEFAULT_NOTCHES[0],
            RotorKind::II => DEFAULT_NOTCHES[1],
            RotorKind::III => DEFAULT_NOTCHES[2],
        }
    }
}

impl FromStr for RotorKind {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "I" | "1" => Ok(RotorKind::I),
            "II" | "2" => Ok(RotorKind::II),
            "III" | "3" => Ok(RotorKind::III),
            other => Err(EnigmaError::Settings(format!("unknown rotor {other:?}"))),
        }
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RotorKind::I => "I",
            RotorKind::II => "II",
            RotorKind::III => "III",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReflectorKind {
    A,
    B,
    C,
}

impl ReflectorKind {
    pub fn wiring(self) -> &'static str {
        match self {
            ReflectorKind::A => REFLECTOR_A,
            ReflectorKind::B => REFLECTOR_B,
            ReflectorKind::C => REFLECTOR_C,
        }
    }
}

impl FromStr for ReflectorKind {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(ReflectorKind::A),
            "B" => Ok(ReflectorKind::B),
            "C" => Ok(ReflectorKind::C),
            other => Err(EnigmaError::Settings(format!("unknown reflector {other:?}"))),
        }
    }
}

/// Rotors listed left to right (slowest first), the way a rotor order such
/// as "I II III" is written. The rightmost rotor is the fast one.
pub fn settings_for(rotors: &[RotorKind], reflector: ReflectorKind) -> EncryptionSettings {
    EncryptionSettings {
        alphabet: LATIN.to_string(),
        rotors: rotors.iter().map(|r| r.wiring().to_string()).collect(),
        notches: rotors.iter().map(|r| r.notch()).collect(),
        reflector: reflector.wiring().to_string(),
        plugboard: None,
        positions: None,
    }
}

/// Rotors I-II-III, reflector B, Latin alphabet, empty plugboard, all rotors at `A`.
pub fn default_settings() -> EncryptionSettings {
    settings_for(&RotorKind::ALL, ReflectorKind::B)
}
