// src/compose/driver.rs

//! Wrapper around the local `docker-compose` binary.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::exec::{execute, ExecResult, ProcessError};

const ENV_PROJECT_NAME: &str = "COMPOSE_PROJECT_NAME";
const ENV_COMPOSE_FILE: &str = "COMPOSE_FILE";

/// Separator between entries of the `COMPOSE_FILE` list.
const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Errors from the caller-facing compose operations.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("{binary} not found. Is it on the PATH?")]
    ExecutableNotFound { binary: String },

    #[error("{binary} exited abnormally while running [{command}]: {source}")]
    CommandFailed {
        binary: String,
        command: String,
        #[source]
        source: ProcessError,
        /// Captured child stdout, kept for diagnostics.
        stdout: String,
        /// Captured child stderr, kept for diagnostics.
        stderr: String,
    },
}

/// Compose execution using the local `docker-compose` binary
/// (`docker-compose.exe` on Windows).
///
/// Configure with [`with_command`](Self::with_command) /
/// [`with_env`](Self::with_env), then finish with exactly one terminal
/// operation: [`down`](Self::down) or [`invoke`](Self::invoke). Each
/// terminal operation re-derives arguments and environment from current
/// state.
#[derive(Debug, Clone)]
pub struct LocalCompose {
    executable: String,
    compose_file_paths: Vec<PathBuf>,
    abs_compose_file_paths: Vec<PathBuf>,
    identifier: String,
    cmd: Vec<String>,
    env: HashMap<String, String>,
}

impl LocalCompose {
    /// Create a driver for the given compose files and project identifier.
    ///
    /// Absolute forms of the file paths are computed exactly once here and
    /// never revalidated; if the files move afterwards, behavior is
    /// whatever the external binary does with a stale path. The identifier
    /// is lower-cased and used as the compose project name, with no
    /// further validation.
    pub fn new<P>(file_paths: impl IntoIterator<Item = P>, identifier: &str) -> Self
    where
        P: Into<PathBuf>,
    {
        let executable = if cfg!(windows) {
            "docker-compose.exe"
        } else {
            "docker-compose"
        };

        let compose_file_paths: Vec<PathBuf> = file_paths.into_iter().map(Into::into).collect();
        let abs_compose_file_paths = compose_file_paths
            .iter()
            .map(|path| std::path::absolute(path).unwrap_or_else(|_| path.clone()))
            .collect();

        Self {
            executable: executable.to_string(),
            compose_file_paths,
            abs_compose_file_paths,
            identifier: identifier.to_lowercase(),
            cmd: Vec::new(),
            env: HashMap::new(),
        }
    }

    /// Replace the command to run on [`invoke`](Self::invoke).
    #[must_use]
    pub fn with_command(mut self, cmd: Vec<String>) -> Self {
        self.cmd = cmd;
        self
    }

    /// Replace the environment overlay passed to the child process.
    #[must_use]
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Override the executable name looked up on the PATH.
    #[must_use]
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    /// The compose file paths as given at construction.
    pub fn compose_file_paths(&self) -> &[PathBuf] {
        &self.compose_file_paths
    }

    /// The lower-cased project name.
    pub fn project_name(&self) -> &str {
        &self.identifier
    }

    /// Run `docker-compose down` for this environment.
    pub async fn down(&self) -> Result<ExecResult, ComposeError> {
        self.run(&["down".to_string()]).await
    }

    /// Run the configured command.
    pub async fn invoke(&self) -> Result<ExecResult, ComposeError> {
        let cmd = self.cmd.clone();
        self.run(&cmd).await
    }

    /// Argument vector for one invocation of `command`: a `-f` pair per
    /// configured compose file in construction order (falling back to
    /// `docker-compose.yml` when none were configured), then the command
    /// tokens.
    pub fn arguments(&self, command: &[String]) -> Vec<String> {
        let mut args = Vec::new();
        if self.abs_compose_file_paths.is_empty() {
            args.push("-f".to_string());
            args.push("docker-compose.yml".to_string());
        } else {
            for abs in &self.abs_compose_file_paths {
                args.push("-f".to_string());
                args.push(abs.to_string_lossy().into_owned());
            }
        }
        args.extend(command.iter().cloned());
        args
    }

    /// Environment overlay for the child process: the project-name and
    /// file-list variables, with the user overlay applied on top (overlay
    /// wins on collision). Every file-list entry is followed by the host
    /// path-list separator, including the last.
    pub fn environment(&self) -> HashMap<String, String> {
        let mut file_list = String::new();
        for abs in &self.abs_compose_file_paths {
            file_list.push_str(&abs.to_string_lossy());
            file_list.push(PATH_LIST_SEPARATOR);
        }

        let mut environment = HashMap::new();
        environment.insert(ENV_PROJECT_NAME.to_string(), self.identifier.clone());
        environment.insert(ENV_COMPOSE_FILE.to_string(), file_list);

        for (key, value) in &self.env {
            environment.insert(key.clone(), value.clone());
        }
        environment
    }

    /// Working directory for the child: the directory containing the first
    /// configured compose file, or the current directory.
    pub fn working_dir(&self) -> PathBuf {
        self.abs_compose_file_paths
            .first()
            .and_then(|path| path.parent())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    async fn run(&self, command: &[String]) -> Result<ExecResult, ComposeError> {
        // Preflight: nothing is spawned (and no capture buffers exist)
        // unless the binary is discoverable.
        if find_on_path(&self.executable).is_none() {
            return Err(ComposeError::ExecutableNotFound {
                binary: self.executable.clone(),
            });
        }

        let environment = self.environment();
        let args = self.arguments(command);
        let dir = self.working_dir();

        info!(
            binary = %self.executable,
            project = %self.identifier,
            ?args,
            "running compose command"
        );

        let mut result = execute(&dir, &environment, &self.executable, &args).await;

        if let Some(source) = result.error.take() {
            return Err(ComposeError::CommandFailed {
                binary: self.executable.clone(),
                command: command.join(" "),
                source,
                stdout: result.stdout_lossy(),
                stderr: result.stderr_lossy(),
            });
        }

        Ok(result)
    }
}

/// Look up a binary in the directories of the `PATH` variable.
fn find_on_path(binary: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        let candidate = dir.join(binary);
        if candidate.is_file() {
            debug!(binary, path = %candidate.display(), "resolved executable");
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(files: &[&str], identifier: &str) -> LocalCompose {
        LocalCompose::new(files.iter().copied(), identifier)
    }

    #[test]
    fn arguments_emit_f_pair_per_file_in_order() {
        let dc = driver(&["testdata/a.yml", "testdata/b.yml"], "Proj");
        let args = dc.arguments(&["up".to_string(), "-d".to_string()]);

        let abs_a = std::path::absolute("testdata/a.yml").unwrap();
        let abs_b = std::path::absolute("testdata/b.yml").unwrap();

        assert_eq!(args[0], "-f");
        assert_eq!(args[1], abs_a.to_string_lossy());
        assert_eq!(args[2], "-f");
        assert_eq!(args[3], abs_b.to_string_lossy());
        assert_eq!(&args[4..], ["up", "-d"]);
    }

    #[test]
    fn arguments_fall_back_to_conventional_file_name() {
        let dc = driver(&[], "proj");
        let args = dc.arguments(&["down".to_string()]);

        assert_eq!(args, ["-f", "docker-compose.yml", "down"]);
    }

    #[test]
    fn environment_has_project_name_and_file_list() {
        let dc = driver(&["testdata/a.yml", "testdata/b.yml"], "Proj");
        let env = dc.environment();

        assert_eq!(env.get("COMPOSE_PROJECT_NAME").unwrap(), "proj");

        let abs_a = std::path::absolute("testdata/a.yml").unwrap();
        let abs_b = std::path::absolute("testdata/b.yml").unwrap();
        let expected = format!(
            "{}{sep}{}{sep}",
            abs_a.to_string_lossy(),
            abs_b.to_string_lossy(),
            sep = PATH_LIST_SEPARATOR,
        );
        assert_eq!(env.get("COMPOSE_FILE").unwrap(), &expected);
    }

    #[test]
    fn overlay_wins_over_computed_variables() {
        let mut overlay = HashMap::new();
        overlay.insert("COMPOSE_PROJECT_NAME".to_string(), "override".to_string());
        overlay.insert("EXTRA".to_string(), "1".to_string());

        let dc = driver(&["testdata/a.yml"], "Proj").with_env(overlay);
        let env = dc.environment();

        assert_eq!(env.get("COMPOSE_PROJECT_NAME").unwrap(), "override");
        assert_eq!(env.get("EXTRA").unwrap(), "1");
    }

    #[test]
    fn working_dir_is_first_file_parent() {
        let dc = driver(&["testdata/a.yml"], "proj");
        let abs_a = std::path::absolute("testdata/a.yml").unwrap();

        assert_eq!(dc.working_dir(), abs_a.parent().unwrap());
    }

    #[test]
    fn working_dir_defaults_to_current_dir() {
        let dc = driver(&[], "proj");
        assert_eq!(dc.working_dir(), PathBuf::from("."));
    }

    #[test]
    fn identifier_is_lowercased() {
        let dc = driver(&[], "MyProject");
        assert_eq!(dc.project_name(), "myproject");
    }

    #[test]
    fn original_relative_paths_are_kept_alongside_absolutes() {
        let dc = driver(&["testdata/a.yml"], "proj");

        assert_eq!(dc.compose_file_paths(), [PathBuf::from("testdata/a.yml")]);
        assert!(dc.arguments(&[])[1].starts_with(std::path::MAIN_SEPARATOR));
    }
}
