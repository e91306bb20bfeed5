// crates/enigma-core/src/machine/engine.rs

use tracing::{debug, trace, warn};

use crate::alphabet::Alphabet;
use crate::component::{Component, Plugboard, Reflector, Rotor};
use crate::error::{EnigmaError, Result};
use crate::machine::chain::SignalChain;
use crate::machine::sanitize::sanitize;
use crate::settings::format::settings_id_hex;
use crate::settings::settings::EncryptionSettings;
use crate::settings::validate::validate_settings;

/// Outcome of one `encrypt_text` call. `input` is the sanitized text, which
/// is what was actually enciphered; both strings have the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionResult {
    pub input: String,
    pub output: String,
}

/// A built machine: alphabet plus signal chain.
///
/// Offsets advance with every symbol. Build a fresh engine from the same
/// settings to get back to the starting positions.
pub struct Engine {
    alphabet: Alphabet,
    chain: SignalChain,
    settings_id: Option<String>,
}

impl Engine {
    pub fn new(settings: &EncryptionSettings) -> Result<Self> {
        validate_settings(settings)?;

        let alphabet = Alphabet::new(&settings.alphabet)?;

        let plugboard = match settings.plugboard.as_deref() {
            Some(pairs) => Plugboard::from_pairs(&alphabet, pairs)?,
            None => Plugboard::identity(&alphabet),
        };

        let mut components: Vec<Component> = Vec::with_capacity(settings.rotors.len() + 2);
        components.push(plugboard.into());

        // Settings list rotors slowest first; the chain runs fastest first.
        let positions = settings.effective_positions();
        for ((map, &notch), &pos) in settings
            .rotors
            .iter()
            .zip(settings.notches.iter())
            .zip(positions.iter())
            .rev()
        {
            let rotor = Rotor::new(&alphabet, map, notch)?.at_position(&alphabet, pos)?;
            components.push(rotor.into());
        }

        let reflector = Reflector::new(&alphabet, &settings.reflector)?;
        if !reflector.is_reciprocal() {
            warn!(
                reflector = %settings.reflector,
                "reflector wiring is not a fixed-point-free involution"
            );
        }
        components.push(reflector.into());

        let chain = SignalChain::new(components)?;
        let settings_id = settings_id_hex(settings);

        debug!(
            settings_id = %settings_id,
            rotors = chain.rotor_count(),
            alphabet_size = alphabet.size(),
            "machine built"
        );

        Ok(Self {
            alphabet,
            chain,
            settings_id: Some(settings_id),
        })
    }

    /// Wraps a hand-assembled chain.
    pub fn from_chain(alphabet: Alphabet, chain: SignalChain) -> Result<Self> {
        if chain.size() != alphabet.size() {
            return Err(EnigmaError::MalformedChain(format!(
                "chain has {} contacts, alphabet has {} symbols",
                chain.size(),
                alphabet.size()
            )));
        }
        Ok(Self {
            alphabet,
            chain,
            settings_id: None,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn chain(&self) -> &SignalChain {
        &self.chain
    }

    /// Fingerprint of the settings this engine was built from.
    pub fn settings_id(&self) -> Option<&str> {
        self.settings_id.as_deref()
    }

    /// Window symbols left to right (slowest rotor first).
    pub fn positions(&self) -> String {
        let symbols = self.alphabet.symbols();
        self.chain.offsets().iter().rev().map(|&o| symbols[o]).collect()
    }

    pub fn sanitize(&self, raw: &str) -> String {
        sanitize(raw, &self.alphabet)
    }

    pub fn step(&mut self, steps: usize) {
        self.chain.step(steps);
    }

    pub fn connect(&mut self, components: Vec<Component>) -> Result<()> {
        self.chain.connect(components)?;
        // The machine no longer matches the settings it came from.
        self.settings_id = None;
        Ok(())
    }

    /// Steps, then enciphers one symbol. A non-member symbol is rejected
    /// before anything moves.
    pub fn encrypt_char(&mut self, symbol: char) -> Result<char> {
        let index = self.alphabet.index_of(symbol)?;
        let out = self.chain.encrypt_index(index);
        let out = self.alphabet.symbol_at(out)?;
        trace!(%symbol, %out, offsets = ?self.chain.offsets(), "symbol");
        Ok(out)
    }

    /// Enciphers `symbols` exactly as given, with no sanitizing. Use this to
    /// feed ciphertext back when the alphabet holds whitespace, since
    /// sanitizing would trim it.
    pub fn encrypt_symbols(&mut self, symbols: &str) -> Result<String> {
        if let Some(c) = symbols.chars().find(|&c| !self.alphabet.contains(c)) {
            return Err(EnigmaError::InvalidSymbol(c));
        }
        symbols.chars().map(|c| self.encrypt_char(c)).collect()
    }

    pub fn encrypt_text(&mut self, raw: &str) -> Result<EncryptionResult> {
        let input = self.sanitize(raw);
        let output = self.encrypt_symbols(&input)?;

        debug!(
            raw_len = raw.chars().count(),
            len = input.chars().count(),
            positions = %self.positions(),
            "text encrypted"
        );
        Ok(EncryptionResult { input, output })
    }
}

/// Builds a fresh machine from `settings` and enciphers `raw` with it.
/// Calls with identical arguments always give identical results.
pub fn encrypt(settings: &EncryptionSettings, raw: &str) -> Result<EncryptionResult> {
    Engine::new(settings)?.encrypt_text(raw)
}
