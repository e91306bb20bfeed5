// crates/enigma-cli/src/cmd/mod.rs

pub mod encrypt;
pub mod settings;
