use anyhow::{bail, Context};
use clap::{Args, ValueEnum};
use enigma_core::alphabet::{EXTENDED, LATIN};
use enigma_core::settings::defaults::{default_settings, ReflectorKind, RotorKind};
use enigma_core::{EncryptionSettings, Engine};
use tracing::{info, warn};

use crate::io::{settings_file, text};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum AlphabetChoice {
    /// A-Z (26 symbols)
    Latin,
    /// A-Z plus space and period (28 symbols); needs 28-symbol wirings
    Extended,
}

#[derive(Args, Default)]
pub struct MachineArgs {
    /// Settings file (.toml). If omitted, starts from the built-in defaults.
    #[arg(long)]
    pub settings: Option<String>,

    /// Rotor order, left (slow) to right (fast), e.g. "I,II,III"
    #[arg(long, value_delimiter = ',')]
    pub rotors: Option<Vec<String>>,

    /// Reflector: A, B or C
    #[arg(long)]
    pub reflector: Option<String>,

    /// One notch letter per rotor, e.g. "QEV". Ignored unless its length
    /// matches the rotor count.
    #[arg(long)]
    pub notches: Option<String>,

    /// Starting window letters, left to right, e.g. "AAA"
    #[arg(long)]
    pub positions: Option<String>,

    /// Plugboard pairs, e.g. "AB CD EF"
    #[arg(long)]
    pub plugboard: Option<String>,

    /// Symbol set. Rotor and reflector wirings (from --settings) must have
    /// the same length.
    #[arg(long, value_enum)]
    pub alphabet: Option<AlphabetChoice>,
}

#[derive(Args)]
pub struct EncryptArgs {
    /// Text to encrypt. If omitted, reads --in or stdin.
    #[arg(long)]
    pub text: Option<String>,

    /// Input file
    #[arg(long)]
    pub r#in: Option<String>,

    /// Feed the text through verbatim (no trimming, case folding or
    /// filtering). Needed to decrypt ciphertext that starts or ends with a
    /// space under the extended alphabet.
    #[arg(long)]
    pub raw: bool,

    #[command(flatten)]
    pub machine: MachineArgs,
}

/// Precedence:
/// 1) explicit flags
/// 2) settings file, if given
/// 3) built-in defaults (rotors I-II-III, reflector B)
pub fn resolve_settings(m: &MachineArgs) -> anyhow::Result<EncryptionSettings> {
    let mut s = match m.settings.as_deref() {
        Some(p) => settings_file::load_settings(p)?,
        None => default_settings(),
    };

    if let Some(names) = m.rotors.as_deref() {
        let kinds = names
            .iter()
            .map(|n| n.parse::<RotorKind>())
            .collect::<Result<Vec<_>, _>>()
            .context("parse --rotors")?;
        s.rotors = kinds.iter().map(|k| k.wiring().to_string()).collect();
        s.notches = kinds.iter().map(|k| k.notch()).collect();
        if s.positions.as_deref().map(|p| p.chars().count()) != Some(kinds.len()) {
            s.positions = None;
        }
    }

    if let Some(name) = m.reflector.as_deref() {
        let kind: ReflectorKind = name.parse().context("parse --reflector")?;
        s.reflector = kind.wiring().to_string();
    }

    if let Some(n) = m.notches.as_deref() {
        let notches: Vec<char> = n.to_uppercase().chars().collect();
        if notches.len() == s.rotors.len() {
            s.notches = notches;
        } else {
            warn!(
                notches = %n,
                rotors = s.rotors.len(),
                "notch count does not match rotor count; keeping rotor notches"
            );
        }
    }

    if let Some(p) = m.positions.as_deref() {
        s.positions = Some(p.to_uppercase());
    }

    if let Some(p) = m.plugboard.as_deref() {
        s.plugboard = Some(p.to_uppercase());
    }

    if let Some(choice) = m.alphabet {
        let symbols = match choice {
            AlphabetChoice::Latin => LATIN,
            AlphabetChoice::Extended => EXTENDED,
        };
        // Swaps the symbol set only; the wirings must already fit it.
        let n = symbols.chars().count();
        let wirings = s.rotors.iter().chain(std::iter::once(&s.reflector));
        if let Some(w) = wirings.map(|w| w.chars().count()).find(|&len| len != n) {
            bail!(
                "--alphabet {choice:?} has {n} symbols but the wirings have {w}; \
                 supply matching wirings with --settings"
            );
        }
        s.alphabet = symbols.to_string();
    }

    Ok(s)
}

pub fn run(args: EncryptArgs) -> anyhow::Result<()> {
    let settings = resolve_settings(&args.machine)?;
    let message = text::read_message(args.text.as_deref(), args.r#in.as_deref())?;

    // One machine per call; nothing carries over between invocations.
    let mut engine = Engine::new(&settings).context("build machine")?;

    let (input, output) = if args.raw {
        // Line endings from files/stdin are not message symbols.
        let symbols = message.trim_end_matches(['\r', '\n']);
        let out = engine.encrypt_symbols(symbols).context("encrypt")?;
        (symbols.to_string(), out)
    } else {
        let r = engine.encrypt_text(&message).context("encrypt")?;
        (r.input, r.output)
    };

    if input.is_empty() {
        warn!("nothing to encrypt after sanitizing input");
    }

    println!("{output}");

    info!(
        input_len = input.chars().count(),
        dropped = message.chars().count().saturating_sub(input.chars().count()),
        positions = %engine.positions(),
        settings_id = engine.settings_id().unwrap_or("-"),
        "encrypt ok"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use enigma_core::settings::defaults::{REFLECTOR_C, ROTOR_I, ROTOR_II, ROTOR_III};

    #[test]
    fn defaults_without_flags() {
        let s = resolve_settings(&MachineArgs::default()).unwrap();
        assert_eq!(s, default_settings());
    }

    #[test]
    fn rotor_order_flag() {
        let m = MachineArgs {
            rotors: Some(vec!["III".into(), "i".into(), "II".into()]),
            reflector: Some("c".into()),
            ..Default::default()
        };
        let s = resolve_settings(&m).unwrap();
        assert_eq!(s.rotors, vec![ROTOR_III, ROTOR_I, ROTOR_II]);
        assert_eq!(s.notches, vec!['V', 'Q', 'E']);
        assert_eq!(s.reflector, REFLECTOR_C);
    }

    #[test]
    fn notch_flag_needs_matching_length() {
        let m = MachineArgs {
            notches: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(resolve_settings(&m).unwrap().notches, vec!['A', 'B', 'C']);

        let m = MachineArgs {
            notches: Some("AB".into()),
            ..Default::default()
        };
        assert_eq!(resolve_settings(&m).unwrap().notches, vec!['Q', 'E', 'V']);
    }

    #[test]
    fn unknown_rotor_is_an_error() {
        let m = MachineArgs {
            rotors: Some(vec!["IX".into()]),
            ..Default::default()
        };
        assert!(resolve_settings(&m).is_err());
    }

    #[test]
    fn alphabet_flag_must_fit_wirings() {
        let m = MachineArgs {
            alphabet: Some(AlphabetChoice::Extended),
            ..Default::default()
        };
        let err = resolve_settings(&m).unwrap_err();
        assert!(err.to_string().contains("28 symbols"), "{err}");

        let m = MachineArgs {
            alphabet: Some(AlphabetChoice::Latin),
            ..Default::default()
        };
        assert_eq!(resolve_settings(&m).unwrap(), default_settings());
    }

    #[test]
    fn positions_and_plugboard_upper_cased() {
        let m = MachineArgs {
            positions: Some("adu".into()),
            plugboard: Some("ab cd".into()),
            ..Default::default()
        };
        let s = resolve_settings(&m).unwrap();
        assert_eq!(s.positions.as_deref(), Some("ADU"));
        assert_eq!(s.plugboard.as_deref(), Some("AB CD"));
    }
}
