//! External command execution
//!
//! `setup` and `jupyter` shell out to a package manager and a notebook
//! server. Both go through [`CommandRunner`] so callers can swap in a fake.

use std::fmt;
use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<S, I, A>(program: S, args: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Why an external command did not succeed
#[derive(Debug, Error)]
pub enum RunError {
    #[error("executable not found: {program}")]
    NotFound { program: String },

    #[error("`{invocation}` exited with {}", code.map_or_else(|| "a signal".to_string(), |c| format!("status {}", c)))]
    Failed {
        invocation: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to start `{invocation}`")]
    Io {
        invocation: String,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    fn from_spawn(invocation: &Invocation, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                program: invocation.program.clone(),
            }
        } else {
            Self::Io {
                invocation: invocation.to_string(),
                source,
            }
        }
    }
}

/// Capability to run external programs
pub trait CommandRunner {
    /// Run to completion with output captured; non-zero exit is an error
    fn run(&self, invocation: &Invocation) -> Result<(), RunError>;

    /// Start the program and return its pid without waiting for it
    fn spawn_detached(&self, invocation: &Invocation) -> Result<u32, RunError>;
}

/// Runs programs on the host via `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), RunError> {
        tracing::debug!(command = %invocation, "running");
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RunError::from_spawn(invocation, e))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::debug!(command = %invocation, status = ?output.status.code(), %stderr, "command failed");
        Err(RunError::Failed {
            invocation: invocation.to_string(),
            code: output.status.code(),
            stderr,
        })
    }

    fn spawn_detached(&self, invocation: &Invocation) -> Result<u32, RunError> {
        tracing::debug!(command = %invocation, "spawning detached");
        // The child handle is dropped on return; the process keeps running.
        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| RunError::from_spawn(invocation, e))?;
        let pid = child.id();
        tracing::info!(command = %invocation, pid, "spawned");
        Ok(pid)
    }
}
