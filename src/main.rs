//! typecycle CLI entry point

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use typecycle::cli::{Cli, Commands, ConfigCommands};
use typecycle::theme::current_theme;
use typecycle::Config;

fn main() {
    let cli = Cli::parse();
    let _logging = typecycle::logging::init();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!("{}", current_theme().error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = if cli.command.uses_config() {
        match cli.config {
            Some(path) => path,
            None => Config::config_path()?,
        }
    } else {
        // Only completions get here; they never touch the config
        PathBuf::new()
    };

    match cli.command {
        Commands::Play(args) => commands::play::handle(&config_path, &args),
        Commands::Trace(args) => commands::trace::handle(&config_path, &args),
        Commands::Config(cmd) => run_config(cmd, config_path),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

fn run_config(cmd: ConfigCommands, config_path: PathBuf) -> Result<()> {
    match cmd {
        ConfigCommands::Show => commands::config::handle_show(&config_path),
        ConfigCommands::Path => commands::config::handle_path(&config_path),
        ConfigCommands::Init { force } => commands::config::handle_init(&config_path, force),
        ConfigCommands::Migrate { yes } => commands::config::handle_migrate(&config_path, yes),
        ConfigCommands::Edit => commands::config::handle_edit(&config_path),
    }
}
