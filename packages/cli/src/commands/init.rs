use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;
use strata_editor::{EditorConfig, DEFAULT_CONFIG_NAME};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Allow deleting the last block of a document
    #[arg(long)]
    pub allow_empty: bool,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Strata config...".bright_blue().bold());

    let config = EditorConfig {
        allow_empty_document: args.allow_empty,
        ..EditorConfig::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    for entry in &config.components {
        println!("    {} → {}", entry.name, entry.label);
    }
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to add components", DEFAULT_CONFIG_NAME);
    println!("  2. Run: strata run <script>");

    Ok(())
}
