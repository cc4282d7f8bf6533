//! The build: read the three inputs, transform, splice, write, notify.
//!
//! Everything up to the write is a pure function of the input texts
//! ([`assemble`]); the output file is touched only after it succeeds.

use std::fs;
use std::path::Path;

use crate::config::BuildConfig;
use crate::css;
use crate::emit;
use crate::error::{BuildError, InputKind};
use crate::fragment;
use crate::template;

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Size of the written script in bytes.
    pub bytes: usize,
}

/// Read one input file as UTF-8 text.
fn read_input(kind: InputKind, path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::InputNotFound {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Produce the output script from the three input texts.
pub fn assemble(
    html_source: &str,
    css_source: &str,
    js_template: &str,
    config: &BuildConfig,
) -> Result<String, BuildError> {
    let markup = fragment::extract_fragment(html_source, &config.marker).ok_or_else(|| {
        BuildError::InputFormat {
            path: config.html_path.clone(),
            marker: config.marker.clone(),
        }
    })?;
    let html_expr = fragment::escape_fragment(markup, config.indent);
    tracing::debug!(lines = html_expr.lines().count(), "escaped HTML fragment");

    let css_expr = css::minify_css(css_source);
    tracing::debug!(lines = css_expr.lines().count(), "minified stylesheet");

    template::splice(
        js_template,
        fragment::strip_continuation(&html_expr),
        &css_expr,
        &config.template_path,
    )
}

/// Run the full build described by `config`.
pub fn run(config: &BuildConfig) -> Result<BuildSummary, BuildError> {
    let html_source = read_input(InputKind::Html, &config.html_path)?;
    let css_source = read_input(InputKind::Css, &config.css_path)?;
    let js_template = read_input(InputKind::Template, &config.template_path)?;

    let output = assemble(&html_source, &css_source, &js_template, config)?;

    emit::write_output(&config.output_path, &output)?;
    tracing::info!(
        path = %config.output_path.display(),
        bytes = output.len(),
        "wrote inlined script"
    );

    if config.notify {
        emit::notify_done();
    }

    Ok(BuildSummary {
        bytes: output.len(),
    })
}
