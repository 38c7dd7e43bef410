// src/exec/runner.rs

//! Single-shot external process execution with live output relay.
//!
//! [`execute`] launches a binary with an explicit working directory and an
//! environment overlay, streams its stdout/stderr to the invoking process's
//! own streams while capturing both, waits for the child to exit, and
//! reports everything in an [`ExecResult`]. It never escalates: every
//! failure mode is a field on the result, and the decision to halt or
//! continue belongs to the caller.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::exec::tee::TeeWriter;

/// Start or wait failure of one external process invocation.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to spawn {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to wait for {binary}: {source}")]
    Wait {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("{binary} exited with status {status}")]
    Exited { binary: String, status: ExitStatus },
}

/// Outcome of one invocation.
///
/// The three error fields are independent; there is no derived
/// success/failure flag. A copy error on one stream does not prevent the
/// wait outcome from being reported, and vice versa.
#[derive(Debug, Default)]
pub struct ExecResult {
    /// Start or wait failure, if any.
    pub error: Option<ProcessError>,
    /// I/O error while relaying the child's stdout.
    pub stdout_error: Option<io::Error>,
    /// I/O error while relaying the child's stderr.
    pub stderr_error: Option<io::Error>,
    /// Everything the child wrote to stdout.
    pub stdout: Vec<u8>,
    /// Everything the child wrote to stderr.
    pub stderr: Vec<u8>,
}

impl ExecResult {
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Run `binary` with `args` in `dir`.
///
/// The child inherits the full parent environment with `environment`
/// overlaid on top (overlay wins on duplicate names). Blocks the caller
/// until the child exits on its own; there is no timeout and no
/// cancellation.
pub async fn execute(
    dir: &Path,
    environment: &HashMap<String, String>,
    binary: &str,
    args: &[String],
) -> ExecResult {
    let mut cmd = Command::new(binary);
    cmd.args(args)
        .current_dir(dir)
        .envs(environment)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!(binary, ?args, dir = %dir.display(), "spawning external process");

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(source) => {
            // The drain tasks never ran, so the copy-error fields stay
            // unset and the captures stay empty.
            return ExecResult {
                error: Some(ProcessError::Spawn {
                    binary: binary.to_string(),
                    source,
                }),
                ..ExecResult::default()
            };
        }
    };

    let stdout_task = spawn_drain(child.stdout.take(), io::stdout());
    let stderr_task = spawn_drain(child.stderr.take(), io::stderr());

    let status = child.wait().await;

    // Join both drain tasks before assembling the result so the captured
    // bytes and copy-error fields are complete when the caller reads them.
    let (stdout, stdout_error) = join_drain(stdout_task).await;
    let (stderr, stderr_error) = join_drain(stderr_task).await;

    let error = match status {
        Ok(status) if status.success() => None,
        Ok(status) => Some(ProcessError::Exited {
            binary: binary.to_string(),
            status,
        }),
        Err(source) => Some(ProcessError::Wait {
            binary: binary.to_string(),
            source,
        }),
    };

    debug!(binary, error = ?error, "external process finished");

    ExecResult {
        error,
        stdout_error,
        stderr_error,
        stdout,
        stderr,
    }
}

/// Drain one child stream through a [`TeeWriter`] on a background task.
///
/// Returns the captured bytes plus the first relay error, if any. The tee
/// is owned by this task for its entire lifetime.
fn spawn_drain<R, W>(pipe: Option<R>, dest: W) -> JoinHandle<(Vec<u8>, Option<io::Error>)>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: Write + Send + 'static,
{
    tokio::spawn(async move {
        let Some(mut pipe) = pipe else {
            return (Vec::new(), None);
        };

        let mut tee = TeeWriter::new(dest);
        let mut chunk = [0u8; 8192];
        loop {
            match pipe.read(&mut chunk).await {
                Ok(0) => break,
                Ok(n) => {
                    if let Err(err) = tee.write_all(&chunk[..n]) {
                        return (tee.into_captured(), Some(err));
                    }
                }
                Err(err) => return (tee.into_captured(), Some(err)),
            }
        }
        let _ = tee.flush();
        (tee.into_captured(), None)
    })
}

async fn join_drain(
    handle: JoinHandle<(Vec<u8>, Option<io::Error>)>,
) -> (Vec<u8>, Option<io::Error>) {
    match handle.await {
        Ok(result) => result,
        Err(err) => (Vec::new(), Some(io::Error::other(err))),
    }
}
