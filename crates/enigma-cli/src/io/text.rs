// crates/enigma-cli/src/io/text.rs

use std::io::Read;

use anyhow::{Context, Result};

/// Message text from `--text`, else `--in <file>`, else stdin.
pub fn read_message(text: Option<&str>, path: Option<&str>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t.to_string());
    }
    if let Some(p) = path {
        return std::fs::read_to_string(p).with_context(|| format!("read input {p}"));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read input from stdin")?;
    Ok(buf)
}
