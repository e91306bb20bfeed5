// crates/enigma-cli/src/io/mod.rs

pub mod settings_file;
pub mod text;
