use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                messages::success("Configuration looks good");
            } else {
                for p in &problems {
                    messages::warning(p);
                }
                return Err(AppError::Config(format!(
                    "{} problem(s) found",
                    problems.len()
                )));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(editor.clone())?;
        }
    }

    Ok(())
}

fn edit(requested: Option<String>) -> AppResult<()> {
    let path = Config::config_file();

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or_else(|| default_editor.clone());

    // First attempt: requested editor, then fall back to the default.
    match Command::new(&editor_to_use).arg(&path).status() {
        Ok(s) if s.success() => {
            messages::success(format!("Configuration edited with '{}'", editor_to_use));
            Ok(())
        }
        Ok(_) | Err(_) => {
            messages::warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));
            match Command::new(&default_editor).arg(&path).status() {
                Ok(s) if s.success() => {
                    messages::success(format!(
                        "Configuration edited with fallback '{}'",
                        default_editor
                    ));
                    Ok(())
                }
                Ok(_) | Err(_) => Err(AppError::Config(format!(
                    "failed to launch editor '{}'",
                    default_editor
                ))),
            }
        }
    }
}
