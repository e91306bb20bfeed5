// crates/enigma-core/src/machine/sanitize.rs
//
// Input normalization ahead of encryption:
// - trim surrounding whitespace
// - upper-case
// - drop every character that is not an alphabet member, keeping order
//
// Dropping characters can expose whitespace at either end (" A !" keeps
// "A " under the 28-symbol alphabet), so the kept text is trimmed again.
// That keeps sanitize idempotent.

use crate::alphabet::Alphabet;

pub fn sanitize(raw: &str, alphabet: &Alphabet) -> String {
    let kept: String = raw
        .trim()
        .to_uppercase()
        .chars()
        .filter(|&c| alphabet.contains(c))
        .collect();
    kept.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_digits_punctuation_and_case() {
        let a = Alphabet::latin();
        assert_eq!(sanitize("  he11o world!  ", &a), "HEOWORLD");
    }

    #[test]
    fn extended_alphabet_keeps_space_and_period() {
        let a = Alphabet::extended();
        assert_eq!(sanitize("Hi. Bye.", &a), "HI. BYE.");
    }

    #[test]
    fn extended_alphabet_still_trims() {
        let a = Alphabet::extended();
        assert_eq!(sanitize("  a b.  \n", &a), "A B.");
    }

    #[test]
    fn empty_and_foreign_only() {
        let a = Alphabet::latin();
        assert_eq!(sanitize("", &a), "");
        assert_eq!(sanitize(" 123 !? ", &a), "");
    }

    #[test]
    fn whitespace_exposed_by_dropping_is_trimmed() {
        let a = Alphabet::extended();
        assert_eq!(sanitize(" a !", &a), "A");
        assert_eq!(sanitize("# b", &a), "B");
    }

    #[test]
    fn idempotent() {
        let a = Alphabet::extended();
        let once = sanitize("  Mixed CASE, with 42 things. ", &a);
        assert_eq!(sanitize(&once, &a), once);
    }
}
