//! `key=value` output lines.
//!
//! Values are written verbatim; [`Projection`] guarantees they are single-line.
//! Appending is not idempotent: running twice against the same file leaves two
//! blocks, and readers take the last value of each key.

use crate::Projection;
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use std::io::Write;
use tracing::info;

pub fn render_kv_lines(projection: &Projection) -> String {
    let mut out = String::new();
    for (key, value) in projection.entries() {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

pub fn write_kv_lines<W: Write>(out: &mut W, projection: &Projection) -> std::io::Result<()> {
    out.write_all(render_kv_lines(projection).as_bytes())
}

/// Append the nine lines to `path`, creating the file if needed.
pub fn append_kv_lines(path: &Utf8Path, projection: &Projection) -> anyhow::Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {} for append", path))?;
    write_kv_lines(&mut file, projection).with_context(|| format!("append to {}", path))?;
    info!(path = %path, "appended step outputs");
    Ok(())
}
