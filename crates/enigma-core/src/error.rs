use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnigmaError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("symbol {0:?} is not in the alphabet")]
    InvalidSymbol(char),

    #[error("symbol index {index} outside alphabet of {size}")]
    SymbolIndex { index: usize, size: usize },

    #[error("malformed wiring: {0}")]
    MalformedWiring(String),

    #[error("notch {0:?} is not in the alphabet")]
    InvalidNotch(char),

    #[error("starting position {0:?} is not in the alphabet")]
    InvalidPosition(char),

    #[error("invalid plugboard: {0}")]
    InvalidPlugboard(String),

    #[error("malformed signal chain: {0}")]
    MalformedChain(String),

    #[error("settings error: {0}")]
    Settings(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_symbol() {
        let err = EnigmaError::InvalidSymbol('7');
        assert_eq!(err.to_string(), "symbol '7' is not in the alphabet");
    }

    #[test]
    fn display_symbol_index() {
        let err = EnigmaError::SymbolIndex { index: 30, size: 26 };
        assert_eq!(err.to_string(), "symbol index 30 outside alphabet of 26");
    }

    #[test]
    fn display_malformed_wiring() {
        let err = EnigmaError::MalformedWiring("length 3, expected 26".into());
        assert_eq!(err.to_string(), "malformed wiring: length 3, expected 26");
    }
}
