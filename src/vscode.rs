//! VS Code task registration
//!
//! Adds the bridge's tasks to `.vscode/tasks.json` without touching anything
//! already there. Existing entries are kept as raw JSON so their fields and
//! key order survive the rewrite.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BridgeConfig;
use crate::error::BridgeError;

/// Version tag for a freshly created tasks.json
pub const TASKS_VERSION: &str = "2.0.0";

/// Input id referenced by the create task's `${input:...}` variable
pub const NOTEBOOK_NAME_INPUT: &str = "notebookName";

/// The tasks.json document
///
/// Held as the file's own top-level object, so keys the bridge does not
/// know about stay where they were and nothing is added besides entries.
#[derive(Debug, Clone, PartialEq)]
pub struct TasksFile {
    doc: Map<String, Value>,
}

impl Default for TasksFile {
    fn default() -> Self {
        let mut doc = Map::new();
        doc.insert("version".to_string(), Value::from(TASKS_VERSION));
        doc.insert("tasks".to_string(), Value::Array(Vec::new()));
        Self { doc }
    }
}

impl TasksFile {
    /// Read `path`, or start an empty document when it does not exist
    pub fn read_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "tasks file missing, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", path.display()))?;
        Self::from_value(value).map_err(|_| {
            anyhow::Error::from(BridgeError::MalformedTasksFile {
                path: path.display().to_string(),
            })
        })
    }

    /// Accept an object whose `tasks` (and `inputs`, if present) are arrays
    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        let Value::Object(doc) = value else {
            return Err(value);
        };
        let tasks_ok = doc.get("tasks").is_some_and(Value::is_array);
        let inputs_ok = doc.get("inputs").map_or(true, Value::is_array);
        if tasks_ok && inputs_ok {
            Ok(Self { doc })
        } else {
            Err(Value::Object(doc))
        }
    }

    /// Write the whole document, 2-space indented, non-ASCII kept as-is
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.doc)?;
        content.push('\n');
        fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))?;
        Ok(())
    }

    pub fn version(&self) -> Option<&str> {
        self.doc.get("version").and_then(Value::as_str)
    }

    pub fn tasks(&self) -> &[Value] {
        self.array("tasks")
    }

    pub fn inputs(&self) -> &[Value] {
        self.array("inputs")
    }

    pub fn has_task(&self, label: &str) -> bool {
        self.tasks()
            .iter()
            .any(|t| t.get("label").and_then(Value::as_str) == Some(label))
    }

    pub fn has_input(&self, id: &str) -> bool {
        self.inputs()
            .iter()
            .any(|i| i.get("id").and_then(Value::as_str) == Some(id))
    }

    pub fn push_task(&mut self, task: Value) {
        self.array_mut("tasks").push(task);
    }

    /// Append an input, creating `inputs` at the end of the document if needed
    pub fn push_input(&mut self, input: Value) {
        self.array_mut("inputs").push(input);
    }

    fn array(&self, key: &str) -> &[Value] {
        self.doc
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn array_mut(&mut self, key: &str) -> &mut Vec<Value> {
        let slot = self
            .doc
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()));
        if !slot.is_array() {
            *slot = Value::Array(Vec::new());
        }
        match slot {
            Value::Array(items) => items,
            _ => unreachable!("slot was just made an array"),
        }
    }
}

/// A generated task entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub command: String,
    pub args: Vec<String>,
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation: Option<Presentation>,
}

/// How VS Code shows the task's terminal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub echo: bool,
    pub reveal: String,
    pub focus: bool,
    pub panel: String,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            echo: true,
            reveal: "always".to_string(),
            focus: false,
            panel: "shared".to_string(),
        }
    }
}

/// A `promptString` input backing an `${input:<id>}` variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptInput {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl TaskDescriptor {
    fn shell(label: &str, command: &str, args: &[&str], presentation: Option<Presentation>) -> Self {
        Self {
            label: label.to_string(),
            kind: "shell".to_string(),
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            group: "build".to_string(),
            presentation,
        }
    }
}

/// The bridge's tasks, invoking `config.task_command`
pub fn generated_tasks(config: &BridgeConfig) -> Vec<TaskDescriptor> {
    let cmd = config.task_command.as_str();
    let create_arg = format!("music_analysis_${{input:{}}}", NOTEBOOK_NAME_INPUT);
    vec![
        TaskDescriptor::shell(
            "Colab: Create Music Analysis Notebook",
            cmd,
            &["create", create_arg.as_str()],
            Some(Presentation::default()),
        ),
        TaskDescriptor::shell(
            "Colab: Launch Local Jupyter",
            cmd,
            &["jupyter"],
            Some(Presentation::default()),
        ),
        TaskDescriptor::shell("Colab: Setup Environment", cmd, &["setup"], None),
    ]
}

/// Inputs the generated tasks reference
pub fn generated_inputs() -> Vec<PromptInput> {
    vec![PromptInput {
        id: NOTEBOOK_NAME_INPUT.to_string(),
        kind: "promptString".to_string(),
        description: "Notebook name (saved as music_analysis_<name>.ipynb)".to_string(),
    }]
}

/// Outcome of [`register_tasks`]
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub path: PathBuf,
    /// Labels appended this run
    pub added: Vec<String>,
    /// Labels already present and left untouched
    pub skipped: Vec<String>,
    /// Input ids appended this run
    pub added_inputs: Vec<String>,
}

/// Merge `tasks` and `inputs` into the project's tasks.json
///
/// A task is appended only if no existing task has the same label; an input
/// only if no existing input has the same id. Existing entries are never
/// modified. The file is always rewritten in full.
pub fn register_tasks(
    config: &BridgeConfig,
    tasks: &[TaskDescriptor],
    inputs: &[PromptInput],
) -> Result<Registration> {
    let vscode_dir = config.vscode_dir();
    fs::create_dir_all(&vscode_dir)
        .with_context(|| format!("Failed to create directory: {}", vscode_dir.display()))?;

    let path = config.tasks_file();
    let mut file = TasksFile::read_or_default(&path)?;
    let mut registration = Registration {
        path: path.clone(),
        ..Default::default()
    };

    for task in tasks {
        if file.has_task(&task.label) {
            registration.skipped.push(task.label.clone());
            continue;
        }
        file.push_task(serde_json::to_value(task).context("Failed to serialize task")?);
        registration.added.push(task.label.clone());
    }

    for input in inputs {
        if file.has_input(&input.id) {
            continue;
        }
        file.push_input(serde_json::to_value(input).context("Failed to serialize input")?);
        registration.added_inputs.push(input.id.clone());
    }

    file.write(&path)?;
    tracing::info!(
        path = %path.display(),
        added = registration.added.len(),
        skipped = registration.skipped.len(),
        "tasks registered"
    );

    Ok(registration)
}
