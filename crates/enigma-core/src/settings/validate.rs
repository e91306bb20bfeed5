// crates/enigma-core/src/settings/validate.rs

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};
use crate::settings::settings::EncryptionSettings;

/// Shape and membership checks that need no machine. Permutation checks on
/// each wiring happen when the wiring itself is built.
pub fn validate_settings(s: &EncryptionSettings) -> Result<()> {
    let alphabet = Alphabet::new(&s.alphabet)?;
    let n = alphabet.size();

    if s.rotors.is_empty() {
        return Err(EnigmaError::Settings("at least one rotor is required".into()));
    }
    if s.notches.len() != s.rotors.len() {
        return Err(EnigmaError::Settings(format!(
            "{} notches for {} rotors",
            s.notches.len(),
            s.rotors.len()
        )));
    }

    for (i, wiring) in s.rotors.iter().enumerate() {
        let len = wiring.chars().count();
        if len != n {
            return Err(EnigmaError::MalformedWiring(format!(
                "rotor {} has length {len}, expected {n}",
                i + 1
            )));
        }
    }
    let len = s.reflector.chars().count();
    if len != n {
        return Err(EnigmaError::MalformedWiring(format!(
            "reflector has length {len}, expected {n}"
        )));
    }

    if let Some(&notch) = s.notches.iter().find(|&&c| !alphabet.contains(c)) {
        return Err(EnigmaError::InvalidNotch(notch));
    }

    if let Some(p) = s.positions.as_deref() {
        let count = p.chars().count();
        if count != s.rotors.len() {
            return Err(EnigmaError::Settings(format!(
                "{count} starting positions for {} rotors",
                s.rotors.len()
            )));
        }
        if let Some(c) = p.chars().find(|&c| !alphabet.contains(c)) {
            return Err(EnigmaError::InvalidPosition(c));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::defaults::default_settings;

    #[test]
    fn defaults_are_valid() {
        validate_settings(&default_settings()).unwrap();
    }

    #[test]
    fn notch_count_must_match() {
        let mut s = default_settings();
        s.notches.pop();
        assert!(matches!(validate_settings(&s), Err(EnigmaError::Settings(_))));
    }

    #[test]
    fn needs_a_rotor() {
        let mut s = default_settings();
        s.rotors.clear();
        s.notches.clear();
        assert!(matches!(validate_settings(&s), Err(EnigmaError::Settings(_))));
    }

    #[test]
    fn notch_must_be_member() {
        let mut s = default_settings();
        s.notches[1] = '#';
        assert_eq!(validate_settings(&s), Err(EnigmaError::InvalidNotch('#')));
    }

    #[test]
    fn wiring_length_must_match_alphabet() {
        let mut s = default_settings();
        s.alphabet = crate::alphabet::EXTENDED.to_string();
        assert!(matches!(validate_settings(&s), Err(EnigmaError::MalformedWiring(_))));
    }

    #[test]
    fn positions_checked() {
        let mut s = default_settings();
        s.positions = Some("AB".into());
        assert!(matches!(validate_settings(&s), Err(EnigmaError::Settings(_))));
        s.positions = Some("AB?".into());
        assert_eq!(validate_settings(&s), Err(EnigmaError::InvalidPosition('?')));
        s.positions = Some("QEV".into());
        validate_settings(&s).unwrap();
    }

    #[test]
    fn bad_alphabet() {
        let mut s = default_settings();
        s.alphabet = "AAB".into();
        assert!(matches!(validate_settings(&s), Err(EnigmaError::InvalidAlphabet(_))));
    }
}
