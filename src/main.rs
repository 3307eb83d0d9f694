//! colab-bridge: CLI bridging a local VS Code project with Google Colab
//!
//! This tool is not affiliated with or endorsed by Google.
//! It only writes local files and prints manual GitHub/Colab steps.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use colab_bridge::notebook::TemplateRegistry;
use colab_bridge::runner::SystemRunner;
use colab_bridge::BridgeConfig;

mod commands;

#[derive(Parser)]
#[command(name = "colab-bridge")]
#[command(about = "VS Code ↔ Google Colab bridge", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root containing the notebooks directory and .vscode/
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the local Jupyter/Colab packages
    Setup,

    /// Create a Colab-compatible notebook from a template
    Create {
        /// Notebook name, without .ipynb (prompts if omitted)
        name: Option<String>,

        /// Template to use (unknown names fall back to the default)
        #[arg(long, short)]
        template: Option<String>,
    },

    /// Show how to sync notebooks to Colab through GitHub
    Sync {
        /// Path to include in the instructions
        #[arg(default_value = commands::guide::DEFAULT_GUIDE_PATH)]
        path: String,
    },

    /// Show how to bring a notebook back from Colab
    Download {
        /// Where the downloaded notebook should be saved
        #[arg(default_value = commands::guide::DEFAULT_GUIDE_PATH)]
        local_path: String,

        /// Colab URL of the notebook
        #[arg(long)]
        url: Option<String>,
    },

    /// Launch JupyterLab on the notebooks directory in the background
    Jupyter,

    /// Add Colab tasks to .vscode/tasks.json
    Shortcuts,

    /// List available notebook templates
    Templates,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = TemplateRegistry::builtin();
    let runner = SystemRunner;
    let root = cli.project_root;

    match cli.command {
        Commands::Setup => {
            let config = BridgeConfig::load(&root)?;
            commands::setup::execute(&config, &runner)?;
        }

        Commands::Create { name, template } => {
            let config = BridgeConfig::load(&root)?;
            commands::create::execute(&config, &registry, name.as_deref(), template.as_deref())?;
        }

        Commands::Sync { path } => {
            let config = commands::guide::load_config_lenient(&root);
            commands::guide::execute_sync(&config, &path)?;
        }

        Commands::Download { local_path, url } => {
            commands::guide::execute_download(url.as_deref(), &local_path);
        }

        Commands::Jupyter => {
            let config = BridgeConfig::load(&root)?;
            commands::jupyter::execute(&config, &runner)?;
        }

        Commands::Shortcuts => {
            let config = BridgeConfig::load(&root)?;
            commands::shortcuts::execute(&config)?;
        }

        Commands::Templates => {
            commands::templates::execute(&registry);
        }
    }

    Ok(())
}
