//! Domain errors

use thiserror::Error;

/// Errors raised by notebook and task operations
///
/// I/O and JSON failures are carried as `anyhow` context instead; these
/// variants cover input the user can correct.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("notebook name is empty")]
    EmptyNotebookName,

    #[error("invalid notebook name '{name}': {reason}")]
    InvalidNotebookName { name: String, reason: &'static str },

    #[error("notebooks_dir '{dir}' must be a relative path inside the project")]
    NotebooksDirOutsideProject { dir: String },

    #[error("{path} is not a JSON object with a \"tasks\" array")]
    MalformedTasksFile { path: String },
}
