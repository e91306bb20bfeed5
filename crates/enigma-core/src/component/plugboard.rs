// crates/enigma-core/src/component/plugboard.rs

use crate::alphabet::Alphabet;
use crate::component::SignalComponent;
use crate::error::{EnigmaError, Result};
use crate::wiring::Wiring;

/// Boundary stage; identity unless cables are plugged.
#[derive(Clone, Debug)]
pub struct Plugboard {
    mapping: Wiring,
}

impl Plugboard {
    pub fn identity(alphabet: &Alphabet) -> Self {
        Self {
            mapping: Wiring::identity(alphabet.size()),
        }
    }

    pub fn new(mapping: Wiring) -> Self {
        Self { mapping }
    }

    /// Builds a swap board from space separated pairs, e.g. `"AB CD"`.
    /// A symbol may sit in at most one pair.
    pub fn from_pairs(alphabet: &Alphabet, pairs: &str) -> Result<Self> {
        let mut forward: Vec<usize> = (0..alphabet.size()).collect();
        let mut plugged = vec![false; alphabet.size()];

        for pair in pairs.split_whitespace() {
            let chars: Vec<char> = pair.chars().collect();
            if chars.len() != 2 {
                return Err(EnigmaError::InvalidPlugboard(format!(
                    "pair {pair:?} must have exactly two symbols"
                )));
            }
            let a = alphabet
                .index_of(chars[0])
                .map_err(|_| EnigmaError::InvalidPlugboard(format!("{:?} not in alphabet", chars[0])))?;
            let b = alphabet
                .index_of(chars[1])
                .map_err(|_| EnigmaError::InvalidPlugboard(format!("{:?} not in alphabet", chars[1])))?;
            if a == b {
                return Err(EnigmaError::InvalidPlugboard(format!("{pair:?} plugs a symbol to itself")));
            }
            for (i, c) in [(a, chars[0]), (b, chars[1])] {
                if plugged[i] {
                    return Err(EnigmaError::InvalidPlugboard(format!("{c:?} is plugged twice")));
                }
                plugged[i] = true;
            }
            forward.swap(a, b);
        }

        Ok(Self {
            mapping: Wiring::from_forward(forward),
        })
    }

    pub fn size(&self) -> usize {
        self.mapping.len()
    }

    pub fn wiring(&self) -> &Wiring {
        &self.mapping
    }
}

impl SignalComponent for Plugboard {
    #[inline]
    fn process_forward(&self, index: usize) -> usize {
        self.mapping.map(index)
    }

    #[inline]
    fn process_backward(&self, index: usize) -> usize {
        self.mapping.unmap(index)
    }
}
