use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();
    println!("  {:<22}{}", "defaults.theme", config.theme().cyan());
    let start_mode = config
        .defaults
        .as_ref()
        .and_then(|d| d.start_mode.as_deref())
        .unwrap_or("resume");
    println!("  {:<22}{}", "defaults.start_mode", start_mode.cyan());
    println!(
        "  {:<22}{}",
        "qa.path",
        config.qa_path().display().to_string().cyan()
    );
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    tracing::debug!(path = %path.display(), key, "saved configuration");
    println!("{} {} = {}", "Set".green().bold(), key, value.cyan());
    Ok(())
}
