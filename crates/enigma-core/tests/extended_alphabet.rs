use enigma_core::alphabet::EXTENDED;
use enigma_core::{encrypt, EncryptionSettings, Engine};

fn extended_settings() -> EncryptionSettings {
    EncryptionSettings {
        alphabet: EXTENDED.to_string(),
        rotors: vec![
            "RD. JBAMUYONPEWLHXTVFKZIQGSC".into(),
            "WEXBURPHNAK.DTILQMJZVY SGOCF".into(),
            "CJLEXONI BTARZHPMQSGYVFUW.KD".into(),
        ],
        notches: vec!['Q', 'E', '.'],
        reflector: "DOHA.MLCPSRGF BIZKJUTXYVWQNE".into(),
        plugboard: None,
        positions: None,
    }
}

#[test]
fn space_and_period_are_members() {
    let e = Engine::new(&extended_settings()).unwrap();
    assert_eq!(e.sanitize("Hi. Bye."), "HI. BYE.");
}

#[test]
fn extended_fixture_roundtrips() {
    let s = extended_settings();
    let sent = encrypt(&s, "Hi. Bye.").unwrap();
    assert_eq!(sent.output, "JBGDWEHB");

    let back = encrypt(&s, &sent.output).unwrap();
    assert_eq!(back.output, "HI. BYE.");
}

#[test]
fn latin_wirings_rejected_for_extended_alphabet() {
    let mut s = enigma_core::settings::defaults::default_settings();
    s.alphabet = EXTENDED.to_string();
    assert!(Engine::new(&s).is_err());
}

#[test]
fn ciphertext_with_trailing_space_roundtrips_unsanitized() {
    let s = extended_settings();
    let sent = encrypt(&s, "AAV").unwrap();
    assert_eq!(sent.output, "YW ");

    // Sanitizing would trim the space, so feed the symbols back verbatim.
    let mut e = Engine::new(&s).unwrap();
    assert_eq!(e.encrypt_symbols(&sent.output).unwrap(), "AAV");
}
