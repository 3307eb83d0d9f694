//! Project configuration and paths
//!
//! Every operation receives a [`BridgeConfig`] explicitly. The project root is
//! chosen by the caller (the CLI's `--project-root`), and optional overrides
//! are read from `<root>/.colab-config.json`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use url::Url;

use crate::error::BridgeError;

/// Name of the optional per-project override file
pub const CONFIG_FILE_NAME: &str = ".colab-config.json";

const COLAB_GITHUB_BASE: &str = "https://colab.research.google.com/github/";

/// GitHub repository Colab opens notebooks from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteRepo {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl Default for RemoteRepo {
    fn default() -> Self {
        Self {
            owner: "KIMJISUNG0".to_string(),
            repo: "techno-prompt-local".to_string(),
            branch: "main".to_string(),
        }
    }
}

/// Configuration shared by all commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Root of the local project
    pub project_root: PathBuf,

    /// Notebooks directory, relative to the project root
    pub notebooks_dir: PathBuf,

    /// Repository used to build "open in Colab" links
    pub remote: RemoteRepo,

    /// Package manager executable used by `setup`
    pub package_manager: String,

    /// Notebook server executable used by `jupyter`
    pub server_program: String,

    /// Command VS Code tasks invoke to reach this tool
    pub task_command: String,
}

/// On-disk overrides, every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverrides {
    notebooks_dir: Option<PathBuf>,
    remote: Option<RemoteRepo>,
    package_manager: Option<String>,
    server_program: Option<String>,
    task_command: Option<String>,
}

impl BridgeConfig {
    /// Default configuration rooted at `project_root`
    pub fn new<P: Into<PathBuf>>(project_root: P) -> Self {
        Self {
            project_root: project_root.into(),
            notebooks_dir: PathBuf::from("analysis"),
            remote: RemoteRepo::default(),
            package_manager: "pip".to_string(),
            server_program: "jupyter".to_string(),
            task_command: "colab-bridge".to_string(),
        }
    }

    /// Load configuration for `project_root`, applying `.colab-config.json` if present
    pub fn load<P: Into<PathBuf>>(project_root: P) -> Result<Self> {
        let mut config = Self::new(project_root);
        let path = config.config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        let overrides: ConfigOverrides = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "applying config overrides");

        if let Some(dir) = overrides.notebooks_dir {
            check_notebooks_dir(&dir).with_context(|| format!("Invalid: {}", path.display()))?;
            config.notebooks_dir = dir;
        }
        if let Some(remote) = overrides.remote {
            config.remote = remote;
        }
        if let Some(pm) = overrides.package_manager {
            config.package_manager = pm;
        }
        if let Some(server) = overrides.server_program {
            config.server_program = server;
        }
        if let Some(cmd) = overrides.task_command {
            config.task_command = cmd;
        }

        Ok(config)
    }

    /// Absolute-or-relative path of the notebooks directory
    pub fn notebooks_path(&self) -> PathBuf {
        self.project_root.join(&self.notebooks_dir)
    }

    /// `<root>/.vscode`
    pub fn vscode_dir(&self) -> PathBuf {
        self.project_root.join(".vscode")
    }

    /// `<root>/.vscode/tasks.json`
    pub fn tasks_file(&self) -> PathBuf {
        self.vscode_dir().join("tasks.json")
    }

    /// `<root>/.colab-config.json`
    pub fn config_file(&self) -> PathBuf {
        self.project_root.join(CONFIG_FILE_NAME)
    }

    /// Path of a notebook file relative to the project root, with `/` separators
    pub fn relative_notebook_path(&self, file_name: &str) -> String {
        let mut parts: Vec<String> = self
            .notebooks_dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .filter(|c| c != ".")
            .collect();
        parts.push(file_name.to_string());
        parts.join("/")
    }

    /// Build the Colab URL for a repository-relative path
    ///
    /// Each segment is percent-encoded; a trailing `/` is kept so directory
    /// links still point at a directory.
    pub fn colab_url(&self, relative_path: &str) -> Result<Url> {
        let mut url = Url::parse(COLAB_GITHUB_BASE).context("Invalid Colab base URL")?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("Colab base URL cannot hold a path"))?;
            segments.pop_if_empty();
            segments.extend([
                self.remote.owner.as_str(),
                self.remote.repo.as_str(),
                "blob",
                self.remote.branch.as_str(),
            ]);
            segments.extend(relative_path.trim_start_matches('/').split('/'));
        }
        Ok(url)
    }
}

/// The notebooks directory becomes part of the Colab URL, so it has to stay
/// inside the repository: relative, with no `..`.
fn check_notebooks_dir(dir: &Path) -> Result<(), BridgeError> {
    let escapes = dir.components().any(|c| {
        matches!(
            c,
            Component::Prefix(_) | Component::RootDir | Component::ParentDir
        )
    });
    if escapes || dir.as_os_str().is_empty() {
        return Err(BridgeError::NotebooksDirOutsideProject {
            dir: dir.display().to_string(),
        });
    }
    Ok(())
}
