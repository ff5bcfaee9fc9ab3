use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values plus defaults).
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the file. Returns them.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!(
                "Configuration file not found: {} (run `giftlog init`)",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let missing = missing_keys(&content)?;

        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
            info("Run `giftlog config --migrate` to add them with default values.");
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!(
                "Configuration file not found: {} (run `giftlog init`)",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let added = migrate_config_file(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added keys: {}", added.join(", ")));
        }
        Ok(added)
    }

    /// Open the file in `editor`, then `$EDITOR`/`$VISUAL`, then the
    /// platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let first = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if run_editor(&first, path) {
            success(format!("Configuration file edited using '{}'", first));
            return Ok(());
        }

        if first != default_editor {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                first, default_editor
            ));
            if run_editor(&default_editor, path) {
                success(format!(
                    "Configuration file edited using fallback '{}'",
                    default_editor
                ));
                return Ok(());
            }
        }

        Err(AppError::Config(format!(
            "failed to edit {} with '{}'",
            path.display(),
            default_editor
        )))
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
