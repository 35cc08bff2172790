use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_stats_config::{Config, PathManager};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

pub fn run_config(cmd: crate::ConfigCommands, config_path: &Path, path_manager: &PathManager, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(config_path, output),
        crate::ConfigCommands::Init { force } => init_config(config_path, path_manager, force, output),
    }
}

fn show_config(config_path: &Path, output: &Output) -> Result<()> {
    let exists = config_path.exists();
    let config = Config::load_or_default(config_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_path.display(), e))?;

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            if !exists {
                output.warn(format!("Configuration file not found at: {} (showing defaults)", config_path.display()));
                output.info("Run 'moviestats config init' to create one.");
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Setting").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Value").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("Config File"), Cell::new(config_path.display().to_string())]);
            table.add_row(vec![Cell::new("Reviews File"), Cell::new(display_optional_path(config.data.reviews_file.as_deref()))]);
            table.add_row(vec![Cell::new("Average"), Cell::new(config.stats.average.as_str())]);
            table.add_row(vec![Cell::new("Default Top Amount"), Cell::new(config.stats.default_top_amount)]);
            table.add_row(vec![Cell::new("Log Level"), Cell::new(&config.logging.level)]);
            table.add_row(vec![
                Cell::new("JSON Logs"),
                Cell::new(if config.logging.json { "✓".green().to_string() } else { "✗".red().to_string() }),
            ]);
            table.add_row(vec![Cell::new("Log File"), Cell::new(display_optional_path(config.logging.file.as_deref()))]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            output.table(&table);

            if let Err(e) = config.validate() {
                output.warn(format!("Configuration is invalid: {}", e));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_path.display().to_string(),
                "exists": exists,
                "valid": config.validate().is_ok(),
                "config": config,
            }));
        }
    }

    Ok(())
}

fn init_config(config_path: &Path, path_manager: &PathManager, force: bool, output: &Output) -> Result<()> {
    if config_path.exists() && !force {
        output.warn(format!("Configuration already exists at: {}", config_path.display()));
        output.info("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    path_manager.ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create directories: {}", e))?;

    let mut config = Config::default();
    config.data.reviews_file = Some(path_manager.default_reviews_file());
    config.logging.file = Some(path_manager.log_file());
    config.save_to_file(config_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config to {}: {}", config_path.display(), e))?;

    output.success(format!("Configuration written to {}", config_path.display()));
    Ok(())
}

fn display_optional_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}
