//! Command implementations for the FPL entry CLI

pub mod entry_data;
pub mod history_data;

use std::io::Write;

use serde::Serialize;

use crate::Result;


/// Write `value` to `out` as pretty JSON followed by a newline.
pub fn emit_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
