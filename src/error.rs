//! Error types for the build pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the three inputs a read failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Html,
    Css,
    Template,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputKind::Html => "HTML source",
            InputKind::Css => "CSS source",
            InputKind::Template => "JS template",
        })
    }
}

/// Fatal build failures. Any of these aborts the run before the output is
/// touched.
#[derive(Debug, Error)]
pub enum BuildError {
    /// An input file is missing, unreadable, or not valid UTF-8.
    #[error("cannot read {kind} '{}'", .path.display())]
    InputNotFound {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The HTML source has no fragment marker.
    #[error("HTML source '{}' does not contain the marker {marker:?}", .path.display())]
    InputFormat { path: PathBuf, marker: String },

    /// A placeholder is missing from the template, or appears more than once.
    #[error(
        "JS template '{}' must contain placeholder {placeholder:?} exactly once (found {found})",
        .path.display()
    )]
    TemplateMismatch {
        path: PathBuf,
        placeholder: String,
        found: usize,
    },

    /// The output file could not be created or replaced.
    #[error("cannot write output '{}'", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Desktop notification failures. Logged and discarded, never propagated.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification command {0:?} not found on PATH")]
    Unavailable(String),

    #[error("failed to launch notification command {command:?}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}
