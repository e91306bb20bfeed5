// crates/enigma-core/src/settings/settings.rs

use serde::{Deserialize, Serialize};

/// Everything needed to build a machine. Supplied whole per encryption call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionSettings {
    /// Ordered symbol set.
    pub alphabet: String,

    /// Rotor wirings, left (slowest) to right (fastest).
    pub rotors: Vec<String>,

    /// One notch symbol per rotor, same order as `rotors`.
    pub notches: Vec<char>,

    pub reflector: String,

    /// Space separated plug pairs, e.g. "AB CD". None = no cables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugboard: Option<String>,

    /// Starting window symbol per rotor, same order as `rotors`.
    /// None = every rotor at the first alphabet symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<String>,
}

impl Default for EncryptionSettings {
    fn default() -> Self {
        crate::settings::defaults::default_settings()
    }
}

impl EncryptionSettings {
    /// Starting positions with the default filled in.
    pub fn effective_positions(&self) -> Vec<char> {
        match self.positions.as_deref() {
            Some(p) => p.chars().collect(),
            None => {
                let first = self.alphabet.chars().next().unwrap_or('A');
                vec![first; self.rotors.len()]
            }
        }
    }

    /// Plug pairs in single-space form, empty when no cables.
    pub fn normalized_plugboard(&self) -> String {
        self.plugboard
            .as_deref()
            .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }
}
