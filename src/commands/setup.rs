//! Setup command - Install the local Jupyter/Colab environment

use anyhow::Result;
use owo_colors::OwoColorize;

use colab_bridge::runner::{CommandRunner, Invocation, RunError};
use colab_bridge::BridgeConfig;

/// Packages installed by `setup`, in order
pub const PACKAGES: &[&str] = &[
    "jupyter",
    "jupyterlab",
    "google-colab",
    "librosa",
    "matplotlib",
    "numpy",
    "pandas",
    "google-cloud-storage",
    "google-cloud-firestore",
];

/// Per-package results of a setup run
#[derive(Debug, Default)]
pub struct SetupReport {
    pub installed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

/// Install every package in [`PACKAGES`], one package manager call each
///
/// A failure is recorded and the loop moves on to the next package.
pub fn install_packages(config: &BridgeConfig, runner: &dyn CommandRunner) -> SetupReport {
    let mut report = SetupReport::default();

    for &package in PACKAGES {
        let invocation = Invocation::new(config.package_manager.as_str(), ["install", package]);
        match runner.run(&invocation) {
            Ok(()) => {
                println!("  {} {}", "✓".green(), package);
                report.installed.push(package.to_string());
            }
            Err(e) => {
                eprintln!("  {} {} ({})", "✗".red(), package, e);
                if let RunError::Failed { stderr, .. } = &e {
                    if let Some(last) = stderr.lines().last() {
                        eprintln!("    {}", last.dimmed());
                    }
                }
                report.failed.push((package.to_string(), e.to_string()));
            }
        }
    }

    report
}

/// Execute the setup command
pub fn execute(config: &BridgeConfig, runner: &dyn CommandRunner) -> Result<()> {
    println!("{}", "Setting up local Jupyter environment...".bold());
    println!(
        "Installing {} package(s) with {}:",
        PACKAGES.len(),
        config.package_manager
    );

    let report = install_packages(config, runner);

    println!();
    if report.failed.is_empty() {
        println!(
            "{} Installed {} package(s)",
            "Done:".green(),
            report.installed.len()
        );
    } else {
        println!(
            "{} Installed {} package(s), {} failed",
            "Done:".yellow(),
            report.installed.len(),
            report.failed.len().to_string().red()
        );
    }

    Ok(())
}
