use enigma_core::settings::defaults::default_settings;
use enigma_core::{encrypt, Engine};

#[test]
fn golden_hello_default_settings() {
    // Locked from a reference run: rotors I-II-III, reflector B, all at A.
    let r = encrypt(&default_settings(), "HELLO").unwrap();
    assert_eq!(r.input, "HELLO");
    assert_eq!(r.output, "ILBDA");
}

#[test]
fn golden_repeated_letter() {
    let r = encrypt(&default_settings(), "AAAAA").unwrap();
    assert_eq!(r.output, "BDZGO");
}

#[test]
fn golden_with_plugboard_and_positions() {
    let mut s = default_settings();
    s.plugboard = Some("AB CD EF".into());
    s.positions = Some("QEV".into());
    let r = encrypt(&s, "attack at dawn").unwrap();
    assert_eq!(r.input, "ATTACKATDAWN");
    assert_eq!(r.output, "UQKUKTOKGQCB");
}

#[test]
fn sanitized_input_is_what_gets_enciphered() {
    let s = default_settings();
    let r = encrypt(&s, "  he11o world!  ").unwrap();
    assert_eq!(r.input, "HEOWORLD");
    assert_eq!(r.output.len(), r.input.len());

    let mut e = Engine::new(&s).unwrap();
    assert_eq!(e.encrypt_text("HEOWORLD").unwrap().output, r.output);
}
