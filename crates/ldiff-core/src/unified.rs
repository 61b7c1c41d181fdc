//! Unified diff rendering.

use std::io::{self, Write};

use crate::hunk::Hunk;

/// The lines of the unified rendering of `hunks`, without terminators.
///
/// Empty when `hunks` is empty: no file headers are produced for identical
/// inputs.
pub fn unified_lines(old_label: &str, new_label: &str, hunks: &[Hunk]) -> Vec<String> {
    if hunks.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(2 + hunks.iter().map(|h| h.lines.len() + 1).sum::<usize>());
    out.push(format!("--- {old_label}"));
    out.push(format!("+++ {new_label}"));

    for hunk in hunks {
        out.push(hunk.header());
        out.extend(hunk.lines.iter().map(ToString::to_string));
    }

    out
}

/// Write `hunks` in unified format.
///
/// Emits the `---`/`+++` file headers followed by each hunk's `@@` header and
/// its lines. Writes nothing at all when `hunks` is empty.
pub fn format_unified<W: Write>(
    w: &mut W,
    old_label: &str,
    new_label: &str,
    hunks: &[Hunk],
) -> io::Result<()> {
    for line in unified_lines(old_label, new_label, hunks) {
        writeln!(w, "{line}")?;
    }
    Ok(())
}

/// Render `hunks` in unified format into a `String`.
pub fn unified_string(old_label: &str, new_label: &str, hunks: &[Hunk]) -> String {
    unified_lines(old_label, new_label, hunks)
        .into_iter()
        .fold(String::new(), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        })
}
