//! Stylesheet compaction for inlining.
//!
//! This is an ordered sequence of textual rewrites tuned to formatter-style
//! CSS (one selector or declaration per line, blocks closed on their own
//! line). It has no tokenizer: strings containing braces, semicolons or
//! colons (`content: ";"`, `url(data:...)`) will be mangled. Every
//! declaration, the last in a block included, must end with `;`, otherwise
//! the closing brace lands in a literal of its own and the rule's literal is
//! left unterminated.
//!
//! The result is one single-quoted JS literal per rule, each followed by
//! ` +`, with block comments turned into `//` line comments between them.

use std::sync::LazyLock;

use regex::Regex;

use crate::fragment::escape_literal;

/// Whitespace-only lines, including their newline.
static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\n").unwrap());

/// A `;` or `{` and any whitespace after it, newlines included.
static AFTER_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([;{])\s*").unwrap());

/// A closing brace ending its line.
static BLOCK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]*\}[ \t]*$").unwrap());

/// The end of a block comment.
static COMMENT_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]*\*/").unwrap());

/// Compact `css` into a concatenation chain of single-quoted JS literals.
pub fn minify_css(css: &str) -> String {
    let css = escape_literal(&css.replace("\r\n", "\n"));

    let css = css
        .replace(": ", ":")
        .replace("{\n", "{")
        .replace(";\n", "; ");
    let css = BLANK_LINE.replace_all(&css, "");
    let css = css.replace(",\n", ", ");
    let css = AFTER_TERMINATOR.replace_all(&css, "${1} ");
    let css = css.replace("{ ", "{");
    let css = BLOCK_CLOSE.replace_all(&css, "}' +");
    let css = css.replace("/*", "//");
    let css = COMMENT_CLOSE.replace_all(&css, "");

    css.trim_end()
        .lines()
        .map(open_literal)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Put the opening quote after a line's indentation. Comment and blank lines
/// are left as they are.
fn open_literal(line: &str) -> String {
    let body = line.trim_start();
    if body.is_empty() || body.starts_with("//") {
        return line.to_owned();
    }
    let lead = &line[..line.len() - body.len()];
    format!("{lead}'{body}")
}
