//! Write a new notebook from a template

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use url::Url;

use super::model::Notebook;
use super::templates::TemplateRegistry;
use crate::config::BridgeConfig;
use crate::error::BridgeError;

/// Outcome of [`create_notebook`]
#[derive(Debug, Clone)]
pub struct CreatedNotebook {
    /// Where the file was written
    pub path: PathBuf,
    /// Path relative to the project root, `/`-separated
    pub relative_path: String,
    /// Template actually used
    pub template_id: &'static str,
    /// The requested template was unknown and the default was used
    pub fell_back: bool,
    /// Link that opens the notebook in Colab once it is pushed
    pub colab_url: Url,
}

/// Check that `name` can be used as a single file name component
pub fn validate_notebook_name(name: &str) -> Result<(), BridgeError> {
    let invalid = |reason| BridgeError::InvalidNotebookName {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(BridgeError::EmptyNotebookName);
    }
    if name == "." || name == ".." {
        return Err(invalid("reserved directory name"));
    }
    if name.contains(['/', '\\']) {
        return Err(invalid("contains a path separator"));
    }
    if name.contains('\0') {
        return Err(invalid("contains a NUL byte"));
    }
    Ok(())
}

/// Render `template_id` into `<notebooks_dir>/<name>.ipynb`
///
/// Unknown template identifiers use the registry's default. The notebooks
/// directory is created when missing and an existing file is overwritten.
pub fn create_notebook(
    config: &BridgeConfig,
    registry: &TemplateRegistry,
    name: &str,
    template_id: &str,
) -> Result<CreatedNotebook> {
    validate_notebook_name(name)?;

    let resolved = registry.resolve(template_id);
    let notebook = Notebook::colab(resolved.template.cells());

    let notebooks_dir = config.notebooks_path();
    fs::create_dir_all(&notebooks_dir)
        .with_context(|| format!("Failed to create directory: {}", notebooks_dir.display()))?;

    let file_name = format!("{}.ipynb", name);
    let path = notebooks_dir.join(&file_name);
    let content = notebook
        .to_json_pretty()
        .context("Failed to serialize notebook")?;
    fs::write(&path, content).with_context(|| format!("Failed to write: {}", path.display()))?;
    tracing::info!(path = %path.display(), template = resolved.template.id, "notebook written");

    let relative_path = config.relative_notebook_path(&file_name);
    let colab_url = config.colab_url(&relative_path)?;

    Ok(CreatedNotebook {
        path,
        relative_path,
        template_id: resolved.template.id,
        fell_back: resolved.fell_back,
        colab_url,
    })
}
