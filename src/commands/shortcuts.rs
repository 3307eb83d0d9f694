//! Shortcuts command - Register Colab tasks in .vscode/tasks.json

use anyhow::Result;
use owo_colors::OwoColorize;

use colab_bridge::vscode::{self, Registration};
use colab_bridge::BridgeConfig;

/// Execute the shortcuts command
pub fn execute(config: &BridgeConfig) -> Result<Registration> {
    let tasks = vscode::generated_tasks(config);
    let inputs = vscode::generated_inputs();
    let registration = vscode::register_tasks(config, &tasks, &inputs)?;

    for label in &registration.added {
        println!("{} {}", "Added:".green(), label);
    }
    for label in &registration.skipped {
        println!("{} {}", "Exists:".dimmed(), label);
    }
    for id in &registration.added_inputs {
        println!("{} input {}", "Added:".green(), id);
    }

    println!();
    println!(
        "Updated {} ({} added, {} already present)",
        registration.path.display(),
        registration.added.len(),
        registration.skipped.len()
    );
    println!(
        "{} Ctrl+Shift+P → 'Tasks: Run Task' → pick a 'Colab:' task",
        "Usage:".yellow()
    );

    Ok(registration)
}
