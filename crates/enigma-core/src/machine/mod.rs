// crates/enigma-core/src/machine/mod.rs

pub mod chain;
pub mod engine;
pub mod sanitize;
