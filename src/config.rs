//! Build configuration.
//!
//! Every field defaults to the fixed names the viewer's source tree uses, so
//! running the binary with no arguments in that directory performs the
//! standard build.

use std::path::PathBuf;

/// Default HTML source file.
pub const DEFAULT_HTML: &str = "view.html";
/// Default CSS source file.
pub const DEFAULT_CSS: &str = "view.css";
/// Default JS template file.
pub const DEFAULT_TEMPLATE: &str = "core.js";
/// Default output script.
pub const DEFAULT_OUTPUT: &str = "simpleviewer.js";

/// Comment separating the page scaffolding from the fragment to inline.
pub const DEFAULT_MARKER: &str = "<!-- split -->";

/// Template token replaced by the escaped HTML fragment.
pub const HTML_PLACEHOLDER: &str = "'!html'";
/// Template token (with its continuation operator) replaced by the minified CSS.
pub const CSS_PLACEHOLDER: &str = "'!css' +";

/// Indent prepended to every fragment line after the first, matching the
/// depth of the HTML slot in the template.
pub const DEFAULT_INDENT: usize = 8;

/// Resolved settings for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub html_path: PathBuf,
    pub css_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub marker: String,
    /// Number of spaces prepended to fragment continuation lines.
    pub indent: usize,
    /// Fire the desktop notification after a successful write.
    pub notify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            html_path: PathBuf::from(DEFAULT_HTML),
            css_path: PathBuf::from(DEFAULT_CSS),
            template_path: PathBuf::from(DEFAULT_TEMPLATE),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            marker: DEFAULT_MARKER.to_owned(),
            indent: DEFAULT_INDENT,
            notify: true,
        }
    }
}
