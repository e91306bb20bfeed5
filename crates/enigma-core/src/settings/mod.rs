// crates/enigma-core/src/settings/mod.rs

pub mod defaults;
pub mod format;
pub mod settings;
pub mod validate;
