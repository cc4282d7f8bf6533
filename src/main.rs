mod config;
mod css;
mod emit;
mod error;
mod fragment;
mod pipeline;
mod template;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{BuildConfig, DEFAULT_CSS, DEFAULT_HTML, DEFAULT_OUTPUT, DEFAULT_TEMPLATE};

/// Inline an HTML fragment and a stylesheet into a JS template.
///
/// With no arguments, reads `view.html`, `view.css` and `core.js` from the
/// current directory and writes `simpleviewer.js`.
#[derive(Parser)]
#[command(name = "inliner", version)]
struct Cli {
    /// HTML source; everything after the marker is inlined
    #[arg(long, default_value = DEFAULT_HTML)]
    html: PathBuf,
    /// Stylesheet to minify and inline
    #[arg(long, default_value = DEFAULT_CSS)]
    css: PathBuf,
    /// JS template containing the '!html' and '!css' + placeholders
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,
    /// Output script, replaced atomically
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Skip the desktop notification
    #[arg(long)]
    no_notify: bool,
    /// Log each build stage
    #[arg(long, short)]
    verbose: bool,
}

impl From<Cli> for BuildConfig {
    fn from(cli: Cli) -> Self {
        Self {
            html_path: cli.html,
            css_path: cli.css,
            template_path: cli.template,
            output_path: cli.output,
            notify: !cli.no_notify,
            ..Self::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "inliner=debug"
    } else {
        "inliner=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = BuildConfig::from(cli);
    let summary = pipeline::run(&config)
        .with_context(|| format!("failed to build {}", config.output_path.display()))?;
    tracing::debug!(bytes = summary.bytes, "build complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_yields_default_config() {
        let cli = Cli::try_parse_from(["inliner"]).expect("parse");
        assert_eq!(BuildConfig::from(cli), BuildConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cli = Cli::try_parse_from([
            "inliner",
            "--html",
            "a.html",
            "-o",
            "out/b.js",
            "--no-notify",
        ])
        .expect("parse");
        let config = BuildConfig::from(cli);
        assert_eq!(config.html_path, PathBuf::from("a.html"));
        assert_eq!(config.output_path, PathBuf::from("out/b.js"));
        assert_eq!(config.indent, config::DEFAULT_INDENT);
        assert!(!config.notify);
        assert_eq!(config.css_path, PathBuf::from(DEFAULT_CSS));
    }

    #[test]
    fn layout_knobs_are_not_flags() {
        for flag in ["--marker", "--indent"] {
            assert!(
                Cli::try_parse_from(["inliner", flag, "x"]).is_err(),
                "{flag} should not be accepted"
            );
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
