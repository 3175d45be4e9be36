use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutableError {
    #[error("{0}: command not found\n")]
    CommandNotFound(String),

    #[error("failed to spawn {cmd}: {source}\n")]
    SpawnFailed { cmd: String, source: io::Error },

    #[error("failed to wait for {cmd}: {source}\n")]
    WaitFailed { cmd: String, source: io::Error },
}

pub trait ExecutablePathFinder {
    fn find_executable_path(&self, env_path: &str, name: &str) -> Option<String> {
        // A name with a path separator bypasses the search, as execvp would.
        if name.contains(std::path::MAIN_SEPARATOR) {
            if PathBuf::from(name).exists() {
                return Some(name.to_string());
            }
            return None;
        }

        let env_paths = env_path.split(":");

        for env_path in env_paths {
            let full_path: PathBuf = [env_path, name].iter().collect();
            if full_path.exists() {
                return Some(
                    full_path
                        .into_os_string()
                        .into_string()
                        .expect("Failed to convert path"),
                );
            }
        }

        return None;
    }
}

pub trait ExecutableRunner {
    fn execute(&self, exec_path: &str, args: &[&str]) -> anyhow::Result<(), ExecutableError> {
        let mut child = std::process::Command::new(exec_path)
            .args(args)
            .spawn()
            .map_err(|source| ExecutableError::SpawnFailed {
                cmd: exec_path.to_string(),
                source,
            })?;

        // The wait must complete before the next prompt; the collected exit
        // status itself is discarded.
        child.wait().map_err(|source| ExecutableError::WaitFailed {
            cmd: exec_path.to_string(),
            source,
        })?;

        return Ok(());
    }
}

pub struct PathFinder {}

impl ExecutablePathFinder for PathFinder {}

impl PathFinder {
    pub fn new() -> Self {
        return Self {};
    }
}

pub struct Runner {}

impl ExecutableRunner for Runner {}

impl Runner {
    pub fn new() -> Self {
        return Self {};
    }
}
