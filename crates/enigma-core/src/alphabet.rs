// crates/enigma-core/src/alphabet.rs

use crate::error::{EnigmaError, Result};

/// The 26 uppercase Latin letters.
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Latin letters plus space and period (28 symbols).
pub const EXTENDED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ .";

/// Ordered, duplicate-free symbol set. A symbol's index is its position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(EnigmaError::InvalidAlphabet(format!(
                "need at least 2 symbols, got {}",
                symbols.len()
            )));
        }
        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                return Err(EnigmaError::InvalidAlphabet(format!("duplicate symbol {c:?}")));
            }
        }
        Ok(Self { symbols })
    }

    pub fn latin() -> Self {
        Self {
            symbols: LATIN.chars().collect(),
        }
    }

    pub fn extended() -> Self {
        Self {
            symbols: EXTENDED.chars().collect(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn index_of(&self, symbol: char) -> Result<usize> {
        self.symbols
            .iter()
            .position(|&c| c == symbol)
            .ok_or(EnigmaError::InvalidSymbol(symbol))
    }

    pub fn symbol_at(&self, index: usize) -> Result<char> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(EnigmaError::SymbolIndex {
                index,
                size: self.symbols.len(),
            })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_has_26_symbols() {
        let a = Alphabet::latin();
        assert_eq!(a.size(), 26);
        assert_eq!(a.index_of('A').unwrap(), 0);
        assert_eq!(a.index_of('Z').unwrap(), 25);
        assert_eq!(a.symbol_at(16).unwrap(), 'Q');
    }

    #[test]
    fn extended_adds_space_and_period() {
        let a = Alphabet::extended();
        assert_eq!(a.size(), 28);
        assert_eq!(a.index_of(' ').unwrap(), 26);
        assert_eq!(a.index_of('.').unwrap(), 27);
    }

    #[test]
    fn rejects_duplicates() {
        let err = Alphabet::new("ABCA").unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidAlphabet(_)));
    }

    #[test]
    fn rejects_too_short() {
        assert!(Alphabet::new("A").is_err());
        assert!(Alphabet::new("").is_err());
    }

    #[test]
    fn non_member_lookup_fails() {
        let a = Alphabet::latin();
        assert_eq!(a.index_of('a'), Err(EnigmaError::InvalidSymbol('a')));
        assert_eq!(
            a.symbol_at(26),
            Err(EnigmaError::SymbolIndex { index: 26, size: 26 })
        );
    }
}
