//! Jupyter command - Launch a local JupyterLab server in the background

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

use colab_bridge::runner::{CommandRunner, Invocation, RunError};
use colab_bridge::BridgeConfig;

/// Where JupyterLab listens by default
pub const LOCAL_URL: &str = "http://localhost:8888";

/// `jupyter lab --notebook-dir <dir> --no-browser`
pub fn server_invocation(config: &BridgeConfig, notebook_dir: &Path) -> Invocation {
    Invocation::new(
        config.server_program.as_str(),
        [
            "lab".to_string(),
            "--notebook-dir".to_string(),
            notebook_dir.display().to_string(),
            "--no-browser".to_string(),
        ],
    )
}

/// How to get the server when it is missing
pub fn install_hint(config: &BridgeConfig) -> String {
    format!(
        "{} install jupyterlab  (or run: {} setup)",
        config.package_manager, config.task_command
    )
}

/// Execute the jupyter command
///
/// Returns the server pid, or `None` when the server executable is missing.
/// The server is not waited on or monitored.
pub fn execute(config: &BridgeConfig, runner: &dyn CommandRunner) -> Result<Option<u32>> {
    println!("{}", "Launching local JupyterLab...".bold());

    let notebooks_dir = config.notebooks_path();
    fs::create_dir_all(&notebooks_dir)
        .with_context(|| format!("Failed to create directory: {}", notebooks_dir.display()))?;
    let notebooks_dir = notebooks_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", notebooks_dir.display()))?;

    let invocation = server_invocation(config, &notebooks_dir);
    match runner.spawn_detached(&invocation) {
        Ok(pid) => {
            println!("{} JupyterLab started (pid {})", "Started:".green(), pid);
            println!("Notebook directory: {}", notebooks_dir.display());
            println!("Open {} in your browser", LOCAL_URL);
            Ok(Some(pid))
        }
        Err(RunError::NotFound { program }) => {
            eprintln!("{} {} is not installed", "Not found:".red(), program);
            println!("{} {}", "Install:".yellow(), install_hint(config));
            Ok(None)
        }
        Err(e) => Err(e).context("Failed to launch JupyterLab"),
    }
}
