// crates/enigma-core/src/wiring.rs

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};

/// A validated permutation of an alphabet.
///
/// Position `i` of the source string holds the symbol that index `i` maps to.
/// Both directions are resolved to indices up front so the per-symbol passes
/// never go back through symbol lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wiring {
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Wiring {
    pub fn new(alphabet: &Alphabet, map: &str) -> Result<Self> {
        let n = alphabet.size();
        let symbols: Vec<char> = map.chars().collect();
        if symbols.len() != n {
            return Err(EnigmaError::MalformedWiring(format!(
                "{map:?} has length {}, expected {n}",
                symbols.len()
            )));
        }

        let mut forward = Vec::with_capacity(n);
        let mut inverse = vec![usize::MAX; n];
        for (i, &c) in symbols.iter().enumerate() {
            let j = alphabet.index_of(c).map_err(|_| {
                EnigmaError::MalformedWiring(format!("{map:?} contains {c:?} outside the alphabet"))
            })?;
            if inverse[j] != usize::MAX {
                return Err(EnigmaError::MalformedWiring(format!(
                    "{map:?} maps to {c:?} more than once"
                )));
            }
            inverse[j] = i;
            forward.push(j);
        }

        Ok(Self { forward, inverse })
    }

    pub fn identity(size: usize) -> Self {
        let forward: Vec<usize> = (0..size).collect();
        Self {
            inverse: forward.clone(),
            forward,
        }
    }

    /// Builds a wiring from an already-checked index permutation.
    pub(crate) fn from_forward(forward: Vec<usize>) -> Self {
        let mut inverse = vec![0; forward.len()];
        for (i, &j) in forward.iter().enumerate() {
            inverse[j] = i;
        }
        Self { forward, inverse }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Index that `index` is wired to.
    #[inline]
    pub fn map(&self, index: usize) -> usize {
        self.forward[index]
    }

    /// Index wired to `index` (inverse direction).
    #[inline]
    pub fn unmap(&self, index: usize) -> usize {
        self.inverse[index]
    }

    /// True when the wiring is its own inverse and maps nothing to itself.
    pub fn is_fixed_point_free_involution(&self) -> bool {
        self.forward
            .iter()
            .enumerate()
            .all(|(i, &j)| i != j && self.forward[j] == i)
    }

    pub fn to_symbols(&self, alphabet: &Alphabet) -> Result<String> {
        self.forward.iter().map(|&j| alphabet.symbol_at(j)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::defaults::{REFLECTOR_B, ROTOR_I};

    #[test]
    fn maps_and_unmaps() {
        let a = Alphabet::latin();
        let w = Wiring::new(&a, ROTOR_I).unwrap();
        // A -> E, E <- A
        assert_eq!(w.map(0), 4);
        assert_eq!(w.unmap(4), 0);
        for i in 0..26 {
            assert_eq!(w.unmap(w.map(i)), i);
        }
    }

    #[test]
    fn rejects_wrong_length() {
        let a = Alphabet::latin();
        let err = Wiring::new(&a, "ABC").unwrap_err();
        assert!(matches!(err, EnigmaError::MalformedWiring(_)));
    }

    #[test]
    fn rejects_duplicates() {
        let a = Alphabet::latin();
        let err = Wiring::new(&a, "AACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap_err();
        assert!(matches!(err, EnigmaError::MalformedWiring(_)));
    }

    #[test]
    fn rejects_foreign_symbols() {
        let a = Alphabet::latin();
        let err = Wiring::new(&a, "ABCDEFGHIJKLMNOPQRSTUVWXY.").unwrap_err();
        assert!(matches!(err, EnigmaError::MalformedWiring(_)));
    }

    #[test]
    fn involution_check() {
        let a = Alphabet::latin();
        assert!(Wiring::new(&a, REFLECTOR_B).unwrap().is_fixed_point_free_involution());
        assert!(!Wiring::new(&a, ROTOR_I).unwrap().is_fixed_point_free_involution());
        assert!(!Wiring::identity(26).is_fixed_point_free_involution());
    }

    #[test]
    fn symbols_roundtrip() {
        let a = Alphabet::latin();
        let w = Wiring::new(&a, ROTOR_I).unwrap();
        assert_eq!(w.to_symbols(&a).unwrap(), ROTOR_I);
    }
}
