//! ia config - show or change config.ini.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_ok};
use crate::config::AppConfig;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective settings
    Show,
    /// Set the directory filled forms are written to
    SetSavePath(SetSavePathArgs),
}

#[derive(Args, Debug)]
pub struct SetSavePathArgs {
    pub dir: PathBuf,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    let mut config = AppConfig::load(&ctx.paths.config())?;
    match &args.command {
        ConfigCommand::Show => run_show(ctx, &config),
        ConfigCommand::SetSavePath(set) => {
            config.set_save_path(&set.dir)?;
            if ctx.machine {
                return emit_ok(&config);
            }
            println!("Save path set to {}", set.dir.display());
            Ok(())
        }
    }
}

fn run_show(ctx: &AppContext, config: &AppConfig) -> Result<()> {
    if ctx.machine {
        return emit_ok(serde_json::json!({
            "data_dir": ctx.paths.root,
            "config": config,
        }));
    }
    let mut layout = HumanLayout::new();
    layout
        .title("Configuration")
        .kv("Data directory", &ctx.paths.root.display().to_string())
        .kv("Theme", config.theme())
        .kv(
            "Save path",
            &config
                .save_path()
                .map_or_else(|| "(unset)".to_string(), |path| path.display().to_string()),
        )
        .kv("New user", if config.new_user() { "yes" } else { "no" });
    let overridden = config.overridden_keys();
    if !overridden.is_empty() {
        layout.kv("Environment", &overridden.join(", "));
    }
    emit_human(layout);
    Ok(())
}
