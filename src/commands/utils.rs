//! Shared utilities for commands

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Print `message` and read one trimmed line from `input`
///
/// Returns an empty string at end of input.
pub fn prompt_line<R: BufRead, W: Write>(message: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// [`prompt_line`] on the process's stdin/stdout
pub fn prompt_stdin(message: &str) -> Result<String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_line(message, &mut stdin.lock(), &mut stdout)
}

/// Render numbered steps, indenting continuation lines under the number
pub fn format_steps(steps: &[Vec<String>]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, step) in steps.iter().enumerate() {
        let mut step_lines = step.iter();
        if let Some(first) = step_lines.next() {
            lines.push(format!("{}. {}", i + 1, first));
        }
        for rest in step_lines {
            lines.push(format!("   {}", rest));
        }
    }
    lines
}
