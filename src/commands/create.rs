//! Create command - Generate a Colab-compatible notebook

use anyhow::Result;
use chrono::{DateTime, Local};
use owo_colors::OwoColorize;

use super::utils;
use colab_bridge::notebook::{create_notebook, CreatedNotebook, TemplateRegistry};
use colab_bridge::BridgeConfig;

/// Name used when the interactive prompt is answered with an empty line
pub fn fallback_name(now: DateTime<Local>) -> String {
    format!("music_analysis_{}", now.format("%Y%m%d_%H%M%S"))
}

/// The name argument, treating a blank one as missing
fn given_name(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.trim().is_empty())
}

/// Use `name` if given, otherwise ask on stdin
fn resolve_name(name: Option<&str>) -> Result<String> {
    if let Some(name) = given_name(name) {
        return Ok(name.to_string());
    }

    let answer = utils::prompt_stdin("Notebook name: ")?;
    if answer.is_empty() {
        let generated = fallback_name(Local::now());
        println!("{} using {}", "No name given,".yellow(), generated);
        return Ok(generated);
    }
    Ok(answer)
}

/// Execute the create command
pub fn execute(
    config: &BridgeConfig,
    registry: &TemplateRegistry,
    name: Option<&str>,
    template: Option<&str>,
) -> Result<CreatedNotebook> {
    let name = resolve_name(name)?;
    let template = template.unwrap_or(registry.default_id());
    println!("Creating Colab notebook: {}", name.bold());

    let created = create_notebook(config, registry, &name, template)?;

    if created.fell_back {
        println!(
            "{} unknown template '{}', used '{}'",
            "Warning:".yellow(),
            template,
            created.template_id
        );
    }
    println!("{} {}", "Created:".green(), created.path.display());
    println!("Open in Colab (after pushing):");
    println!("  {}", created.colab_url);

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_fallback_name_format() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(fallback_name(now), "music_analysis_20240309_070501");
    }

    #[test]
    fn test_blank_name_counts_as_missing() {
        assert_eq!(given_name(None), None);
        assert_eq!(given_name(Some("")), None);
        assert_eq!(given_name(Some("  \t")), None);
        assert_eq!(given_name(Some("beat_demo")), Some("beat_demo"));
    }

    #[test]
    fn test_execute_with_name_and_default_template() {
        let dir = tempdir().unwrap();
        let config = BridgeConfig::new(dir.path());
        let registry = TemplateRegistry::builtin();

        let created = execute(&config, &registry, Some("beat_demo"), None).unwrap();

        assert_eq!(created.path, dir.path().join("analysis/beat_demo.ipynb"));
        assert_eq!(created.template_id, "music_analysis");
        assert!(!created.fell_back);
    }

    #[test]
    fn test_execute_unknown_template_still_succeeds() {
        let dir = tempdir().unwrap();
        let config = BridgeConfig::new(dir.path());
        let registry = TemplateRegistry::builtin();

        let created = execute(&config, &registry, Some("x"), Some("nope")).unwrap();

        assert!(created.fell_back);
        assert!(created.path.exists());
    }

    #[test]
    fn test_execute_rejects_path_like_name() {
        let dir = tempdir().unwrap();
        let config = BridgeConfig::new(dir.path());
        let registry = TemplateRegistry::builtin();

        let err = execute(&config, &registry, Some("../outside"), None).unwrap_err();
        assert!(err.to_string().contains("path separator"));
    }
}
