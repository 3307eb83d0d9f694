//! Colab-compatible notebook generation

pub mod create;
pub mod model;
pub mod templates;

pub use create::{create_notebook, validate_notebook_name, CreatedNotebook};
pub use model::{Cell, Notebook};
pub use templates::{Template, TemplateRegistry, DEFAULT_TEMPLATE};
