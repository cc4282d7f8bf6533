//! HTML fragment handling.
//!
//! The HTML source is a full page used for previewing the viewer markup; only
//! the part after the marker comment is inlined. That part is turned into a
//! chain of single-quoted JS string literals joined with `+`, one literal per
//! source line.

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Return the trimmed text following the first occurrence of `marker`.
///
/// Returns `None` when the marker is absent; callers must not fall back to
/// the whole file.
pub fn extract_fragment<'a>(source: &'a str, marker: &str) -> Option<&'a str> {
    source
        .split_once(marker)
        .map(|(_, fragment)| fragment.trim())
}

/// Escape a trimmed multi-line block into a JS concatenation expression.
///
/// Each non-blank line becomes `'<line>' +`, keeping its own leading
/// whitespace outside the quote. Lines after the first are additionally
/// prefixed with `indent` spaces so they line up with the template slot.
/// The final line keeps its trailing ` +`; see [`strip_continuation`].
pub fn escape_fragment(fragment: &str, indent: usize) -> String {
    let separator = format!("\n{}", " ".repeat(indent));
    fragment
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let body = line.trim_start();
            let lead = &line[..line.len() - body.len()];
            format!("{lead}'{}' +", escape_literal(body))
        })
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Remove the trailing continuation operator from an escaped expression.
pub fn strip_continuation(expr: &str) -> &str {
    expr.strip_suffix(" +").unwrap_or(expr)
}

/// Escape text for use inside a single-quoted JS string literal.
///
/// Only backslashes and single quotes need escaping; input is always a single
/// line, so newlines never reach this function.
pub fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}
