//! colab-bridge library
//!
//! Core functionality for bridging a local VS Code project with Google Colab:
//! notebook generation from templates, VS Code task registration, and a
//! narrow command runner for the external tools the CLI drives.
//!
//! Nothing here talks to Colab directly. Synchronization goes through the
//! project's GitHub repository, which Colab can open by URL.

pub mod config;
pub mod error;
pub mod notebook;
pub mod runner;
pub mod vscode;

pub use config::BridgeConfig;
pub use error::BridgeError;
