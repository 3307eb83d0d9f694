//! Notebook document model (nbformat 4)
//!
//! Only the subset a freshly generated notebook needs: Colab runtime hints,
//! a Python kernel, and markdown/code cells with empty execution state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level `.ipynb` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub nbformat: u32,
    pub nbformat_minor: u32,
    pub metadata: NotebookMetadata,
    pub cells: Vec<Cell>,
}

impl Notebook {
    /// Wrap cells in the standard Colab envelope (GPU runtime, Python 3 kernel)
    pub fn colab(cells: Vec<Cell>) -> Self {
        Self {
            nbformat: 4,
            nbformat_minor: 0,
            metadata: NotebookMetadata::default(),
            cells,
        }
    }

    /// Serialize as 2-space indented JSON with a trailing newline
    ///
    /// Non-ASCII text (emoji, Hangul, ...) is written as-is.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub colab: ColabMetadata,
    pub kernelspec: KernelSpec,
    pub language_info: LanguageInfo,
    pub accelerator: String,
}

impl Default for NotebookMetadata {
    fn default() -> Self {
        Self {
            colab: ColabMetadata {
                provenance: Vec::new(),
                gpu_type: "T4".to_string(),
            },
            kernelspec: KernelSpec {
                name: "python3".to_string(),
                display_name: "Python 3".to_string(),
            },
            language_info: LanguageInfo {
                name: "python".to_string(),
            },
            accelerator: "GPU".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColabMetadata {
    pub provenance: Vec<Value>,
    #[serde(rename = "gpuType")]
    pub gpu_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub name: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
}

/// A notebook cell, tagged by `cell_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        metadata: Map<String, Value>,
        source: Vec<String>,
    },
    Code {
        execution_count: Option<u32>,
        metadata: Map<String, Value>,
        outputs: Vec<Value>,
        source: Vec<String>,
    },
}

impl Cell {
    /// Markdown cell from lines (newlines are added between lines)
    pub fn markdown(lines: &[&str]) -> Self {
        Self::Markdown {
            metadata: Map::new(),
            source: join_source(lines),
        }
    }

    /// Code cell from lines, never executed
    pub fn code(lines: &[&str]) -> Self {
        Self::Code {
            execution_count: None,
            metadata: Map::new(),
            outputs: Vec::new(),
            source: join_source(lines),
        }
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self, Self::Markdown { .. })
    }

    pub fn source(&self) -> &[String] {
        match self {
            Self::Markdown { source, .. } | Self::Code { source, .. } => source,
        }
    }
}

/// nbformat stores multi-line source as a list where every line but the
/// last keeps its `\n`.
fn join_source(lines: &[&str]) -> Vec<String> {
    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i < last {
                format!("{}\n", line)
            } else {
                (*line).to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_lines_keep_newlines_except_last() {
        let cell = Cell::markdown(&["# Title", "", "body"]);
        assert_eq!(cell.source(), ["# Title\n", "\n", "body"]);
        assert!(Cell::code(&[]).source().is_empty());
    }

    #[test]
    fn test_code_cell_json_shape() {
        let value = serde_json::to_value(Cell::code(&["print(1)"])).unwrap();
        assert_eq!(
            value,
            json!({
                "cell_type": "code",
                "execution_count": null,
                "metadata": {},
                "outputs": [],
                "source": ["print(1)"]
            })
        );
    }

    #[test]
    fn test_envelope_json_shape() {
        let value = serde_json::to_value(Notebook::colab(vec![])).unwrap();
        assert_eq!(
            value,
            json!({
                "nbformat": 4,
                "nbformat_minor": 0,
                "metadata": {
                    "colab": { "provenance": [], "gpuType": "T4" },
                    "kernelspec": { "name": "python3", "display_name": "Python 3" },
                    "language_info": { "name": "python" },
                    "accelerator": "GPU"
                },
                "cells": []
            })
        );
    }

    #[test]
    fn test_pretty_json_keeps_unicode() {
        let nb = Notebook::colab(vec![Cell::markdown(&["# 🎵 음악 분석"])]);
        let text = nb.to_json_pretty().unwrap();
        assert!(text.contains("🎵 음악 분석"));
        assert!(text.contains("\n  \"nbformat\": 4,"));
        assert!(text.ends_with("}\n"));
    }
}
