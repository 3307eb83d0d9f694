//! Sync and download commands - Print manual GitHub/Colab steps
//!
//! Neither command touches the filesystem or the network. Notebooks move
//! between VS Code and Colab through the project's GitHub repository.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils;
use colab_bridge::BridgeConfig;

/// Default path shown by `sync` and `download`
pub const DEFAULT_GUIDE_PATH: &str = "analysis/";

/// Config for printing guidance only
///
/// A broken `.colab-config.json` must not stop the instructions from being
/// shown, so it is reported and the defaults are used instead.
pub fn load_config_lenient(project_root: &Path) -> BridgeConfig {
    match BridgeConfig::load(project_root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}; using defaults", "Warning:".yellow(), e);
            BridgeConfig::new(project_root)
        }
    }
}

/// Steps for publishing local notebooks so Colab can open them
pub fn sync_steps(config: &BridgeConfig, path: &str) -> Result<Vec<String>> {
    let url = config.colab_url(path)?;
    let steps = vec![
        vec![
            "Commit the changes:".to_string(),
            format!("git add {}", path),
            "git commit -m \"Update Colab notebooks\"".to_string(),
        ],
        vec![
            "Push to GitHub:".to_string(),
            format!("git push origin {}", config.remote.branch),
        ],
        vec!["Open the GitHub link in Colab:".to_string(), url.to_string()],
    ];
    Ok(utils::format_steps(&steps))
}

/// Steps for bringing a notebook edited in Colab back into the project
pub fn download_steps(colab_url: Option<&str>, local_path: &str) -> Vec<String> {
    let mut first = vec!["In Colab choose File → Download → Download .ipynb".to_string()];
    if let Some(url) = colab_url {
        first.push(format!("(notebook: {})", url));
    }
    let steps = vec![
        first,
        vec![format!("Save it to {}", local_path)],
        vec![
            "Record it in git:".to_string(),
            format!("git add {}", local_path),
            "git commit -m \"Import notebook from Colab\"".to_string(),
        ],
    ];
    utils::format_steps(&steps)
}

/// Execute the sync command
pub fn execute_sync(config: &BridgeConfig, path: &str) -> Result<()> {
    println!("{} {}", "GitHub sync guide for".bold(), path.bold());
    println!();
    for line in sync_steps(config, path)? {
        println!("{}", line);
    }
    println!();
    println!(
        "{} after editing in Colab, use File → Save a copy in GitHub",
        "Tip:".yellow()
    );
    Ok(())
}

/// Execute the download command
pub fn execute_download(colab_url: Option<&str>, local_path: &str) {
    println!("{}", "Manual download from Colab".bold());
    println!();
    for line in download_steps(colab_url, local_path) {
        println!("{}", line);
    }
}
