//! Development tasks for typecycle
//!
//! `cargo run -p xtask -- man [--out-dir DIR]` writes `typecycle.1` and one
//! page per subcommand.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use typecycle::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "typecycle development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let command = Cli::command();
    write_page(&command, out_dir, "typecycle")?;
    for sub in command.get_subcommands() {
        let name = format!("typecycle-{}", sub.get_name());
        write_page(sub, out_dir, &name)?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(command: &clap::Command, out_dir: &Path, name: &str) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(command.clone()).title(name).render(&mut buffer)?;
    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
