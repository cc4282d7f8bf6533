//! Output writing and the completion notification.

use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

use crate::error::{BuildError, NotifyError};

/// Desktop notifier invoked after a successful build.
pub const NOTIFY_COMMAND: &str = "notify-send";
/// Arguments passed to [`NOTIFY_COMMAND`]: a one-millisecond "Done" toast.
pub const NOTIFY_ARGS: &[&str] = &["-t", "1", "Done"];

/// Replace `path` with `contents`.
///
/// The text goes to a temporary file beside the target which is then renamed
/// over it, so readers never see a partially written script.
pub fn write_output(path: &Path, contents: &str) -> Result<(), BuildError> {
    let output_err = |source: io::Error| BuildError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(output_err)?;
    tmp.write_all(contents.as_bytes()).map_err(output_err)?;
    tmp.flush().map_err(output_err)?;
    tmp.persist(path).map_err(|e| output_err(e.error))?;
    Ok(())
}

/// Launch `program` with `args` and return without waiting for it.
///
/// The child's exit status is never collected.
pub fn spawn_notification(program: &str, args: &[&str]) -> Result<(), NotifyError> {
    let resolved =
        which::which(program).map_err(|_| NotifyError::Unavailable(program.to_owned()))?;

    let child = Command::new(resolved)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| NotifyError::Spawn {
            command: program.to_owned(),
            source,
        })?;
    tracing::debug!(pid = child.id(), "notification launched");
    drop(child);
    Ok(())
}

/// Fire the "Done" notification, logging and discarding any failure.
pub fn notify_done() {
    if let Err(e) = spawn_notification(NOTIFY_COMMAND, NOTIFY_ARGS) {
        tracing::debug!("skipping notification: {e}");
    }
}
