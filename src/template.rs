//! Placeholder splicing into the JS template.
//!
//! The template carries two sentinel tokens: `'!html'` where the markup
//! expression goes, and `'!css' +` where the stylesheet chain goes. Both must
//! appear exactly once. Substitution is done against the positions found in
//! the original template, so text in the injected fragments is never
//! mistaken for a placeholder.

use std::path::Path;

use crate::config::{CSS_PLACEHOLDER, HTML_PLACEHOLDER};
use crate::error::BuildError;

/// Locate the single occurrence of `placeholder` in `template`.
pub fn find_placeholder(
    template: &str,
    placeholder: &str,
    path: &Path,
) -> Result<usize, BuildError> {
    let mut hits = template.match_indices(placeholder).map(|(at, _)| at);
    match (hits.next(), hits.count()) {
        (Some(at), 0) => Ok(at),
        (first, rest) => Err(BuildError::TemplateMismatch {
            path: path.to_path_buf(),
            placeholder: placeholder.to_owned(),
            found: usize::from(first.is_some()) + rest,
        }),
    }
}

/// Replace the HTML and CSS placeholders with the prepared expressions.
///
/// `html_expr` must already have its trailing continuation stripped;
/// `css_expr` replaces the CSS token together with its ` +`.
pub fn splice(
    template: &str,
    html_expr: &str,
    css_expr: &str,
    path: &Path,
) -> Result<String, BuildError> {
    let html_at = find_placeholder(template, HTML_PLACEHOLDER, path)?;
    let css_at = find_placeholder(template, CSS_PLACEHOLDER, path)?;

    let mut slots = [
        (html_at, HTML_PLACEHOLDER.len(), html_expr),
        (css_at, CSS_PLACEHOLDER.len(), css_expr),
    ];
    slots.sort_by_key(|&(at, _, _)| at);

    let mut out = String::with_capacity(template.len() + html_expr.len() + css_expr.len());
    let mut cursor = 0;
    for (at, len, replacement) in slots {
        out.push_str(&template[cursor..at]);
        out.push_str(replacement);
        cursor = at + len;
    }
    out.push_str(&template[cursor..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "nodes.root = $(\n        '!html');\n\
                            $(document.head).append('<style type=\"text/css\">' +\n\
                            '!css' +\n'</style>');\n";

    fn path() -> &'static Path {
        Path::new("core.js")
    }

    #[test]
    fn both_placeholders_are_replaced() {
        let out = splice(TEMPLATE, "'<div></div>'", "'.a {top:0;}' +", path()).unwrap();
        assert!(!out.contains(HTML_PLACEHOLDER));
        assert!(!out.contains(CSS_PLACEHOLDER));
        assert!(out.contains("$(\n        '<div></div>');"));
        assert!(out.contains("'.a {top:0;}' +\n'</style>');"));
    }

    #[test]
    fn missing_html_placeholder_is_an_error() {
        let template = TEMPLATE.replace(HTML_PLACEHOLDER, "''");
        match splice(&template, "'x'", "'y' +", path()) {
            Err(BuildError::TemplateMismatch {
                placeholder, found, ..
            }) => {
                assert_eq!(placeholder, HTML_PLACEHOLDER);
                assert_eq!(found, 0);
            }
            other => panic!("expected TemplateMismatch, got {other:?}"),
        }
    }

    #[test]
    fn css_placeholder_without_continuation_is_missing() {
        let template = TEMPLATE.replace(CSS_PLACEHOLDER, "'!css'");
        assert!(matches!(
            splice(&template, "'x'", "'y' +", path()),
            Err(BuildError::TemplateMismatch { found: 0, .. })
        ));
    }

    #[test]
    fn duplicate_placeholder_is_an_error() {
        let template = format!("{TEMPLATE}{CSS_PLACEHOLDER}\n");
        match find_placeholder(&template, CSS_PLACEHOLDER, path()) {
            Err(BuildError::TemplateMismatch { found, .. }) => assert_eq!(found, 2),
            other => panic!("expected TemplateMismatch, got {other:?}"),
        }
    }

    #[test]
    fn injected_text_is_not_rescanned() {
        let out = splice(TEMPLATE, "'!css' +", "'.a {}' +", path()).unwrap();
        assert_eq!(out.matches(CSS_PLACEHOLDER).count(), 1);
        assert!(out.contains("$(\n        '!css' +);"));
    }

    #[test]
    fn css_before_html_is_supported() {
        let template = "'!css' +\nx('!html');";
        let out = splice(template, "'h'", "'c' +", path()).unwrap();
        assert_eq!(out, "'c' +\nx('h');");
    }
}
