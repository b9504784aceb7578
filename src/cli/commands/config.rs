//! Config inspection command.

use std::path::Path;

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::TomatickError;
use crate::output::to_json;

/// Execute config subcommands against the file at `path`.
///
/// # Errors
///
/// Returns an error if the config cannot be read, serialized or written.
pub fn config(
    cmd: &ConfigCommands,
    path: &Path,
    format: OutputFormat,
) -> Result<String, TomatickError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(path)?;
            match format {
                OutputFormat::Json => to_json(&config),
                OutputFormat::Pretty => config.to_yaml(),
            }
        }

        ConfigCommands::Path => Ok(path.display().to_string()),

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(TomatickError::Config(format!(
                    "{} already exists. Use --force to overwrite.",
                    path.display()
                )));
            }

            Config::default().save_to_path(path)?;
            tracing::info!(path = %path.display(), "wrote default config");

            match format {
                OutputFormat::Json => to_json(&serde_json::json!({ "path": path })),
                OutputFormat::Pretty => Ok(format!(
                    "{} {}",
                    "✓ Wrote default config to".green(),
                    path.display()
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        config(&ConfigCommands::Init { force: false }, &path, OutputFormat::Pretty).unwrap();
        assert!(path.exists());

        let err = config(&ConfigCommands::Init { force: false }, &path, OutputFormat::Pretty)
            .unwrap_err();
        assert!(err.to_string().contains("--force"));

        config(&ConfigCommands::Init { force: true }, &path, OutputFormat::Pretty).unwrap();
    }

    #[test]
    fn test_show_json_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let json = config(&ConfigCommands::Show, &path, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["notifications"]["enabled"], true);
        assert_eq!(value["general"]["default_output"], "pretty");
    }

    #[test]
    fn test_path_prints_location() {
        let path = Path::new("/tmp/tomatick/config.yaml");
        let out = config(&ConfigCommands::Path, path, OutputFormat::Pretty).unwrap();
        assert_eq!(out, "/tmp/tomatick/config.yaml");
    }
}
