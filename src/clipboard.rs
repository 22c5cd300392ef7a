/// Clipboard writes via the OSC 52 terminal escape.
use std::io::{self, Write};

use anyhow::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Ask the hosting terminal to place `text` on the system clipboard. The
/// terminal applies the write on its own schedule; all we can observe is
/// whether the escape sequence reached stdout.
pub fn copy(text: &str) -> Result<()> {
    let payload = STANDARD.encode(text.as_bytes());
    let mut out = io::stdout();
    write!(out, "\x1b]52;c;{payload}\x07")?;
    out.flush()?;
    Ok(())
}
