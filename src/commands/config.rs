//! Config subcommands handler

use anyhow::Result;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use typecycle::config::migrate_config;
use typecycle::theme::{self, current_theme};
use typecycle::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file location.
pub fn handle_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Write a config file with default settings.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(config_path: &Path, force: bool) -> Result<()> {
    let theme = current_theme();
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default().save_to(config_path)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote {}", config_path.display()))
    );
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(config_path: &Path) -> Result<()> {
    let theme = current_theme();

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save_to(config_path)?;
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist),
/// adds any missing fields from the current default config,
/// shows a preview of changes, and prompts for confirmation
/// unless `yes` is set.
pub fn handle_migrate(config_path: &Path, yes: bool) -> Result<()> {
    let theme = current_theme();
    let file_exists = config_path.exists();

    // Read existing content (empty string if file doesn't exist)
    let content = if file_exists {
        fs::read_to_string(config_path)?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if file_exists {
        let total_fields = result.added_fields.len();
        let total_sections = result.sections_added.len();
        let summary = if total_sections > 0 {
            format!(
                "Found {} missing field(s) in {} new section(s):",
                total_fields, total_sections
            )
        } else {
            format!("Found {} missing field(s):", total_fields)
        };
        println!("{}", theme.primary_text(&summary));
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
    }
    println!();
    print_diff_preview(&result.content, &result.added_fields, !file_exists);
    println!();

    let question = if file_exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&question)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(config_path, &result.content)?;
    println!("{}", theme.success_text("Config updated successfully."));

    Ok(())
}

/// Print the preview built by [`preview_lines`], added lines in green.
fn print_diff_preview(new_content: &str, added_fields: &[String], is_new_file: bool) {
    for line in preview_lines(new_content, added_fields, is_new_file) {
        match line {
            PreviewLine::Added(text) => println!("{}", added_line(&format!("+ {}", text))),
            PreviewLine::Context(text) => println!("  {}", text),
        }
    }
}

/// One line of the migration preview.
#[derive(Debug, PartialEq, Eq)]
enum PreviewLine<'a> {
    Added(&'a str),
    Context(&'a str),
}

/// Select the lines of `new_content` worth showing.
///
/// New files show everything as added. Otherwise only added keys are
/// shown, under their section header; the header is marked added when
/// the whole section is new and shown as context otherwise.
fn preview_lines<'a>(
    new_content: &'a str,
    added_fields: &[String],
    is_new_file: bool,
) -> Vec<PreviewLine<'a>> {
    let mut lines = Vec::new();
    let mut section = "";
    let mut header: Option<&'a str> = None;
    let mut section_is_new = false;
    // Inside a multi-line array that belongs to an added key
    let mut continuing = false;

    for line in new_content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if continuing {
            lines.push(PreviewLine::Added(line));
            continuing = !trimmed.starts_with(']');
            continue;
        }

        if let Some(name) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            section = name;
            header = Some(line);
            section_is_new =
                is_new_file || !content_has_other_keys(new_content, name, added_fields);
            continue;
        }

        let added = is_new_file
            || trimmed
                .split_once('=')
                .is_some_and(|(key, _)| is_added(added_fields, section, key.trim()));
        if !added {
            continue;
        }

        if let Some(h) = header.take() {
            lines.push(if section_is_new {
                PreviewLine::Added(h)
            } else {
                PreviewLine::Context(h)
            });
        }
        lines.push(PreviewLine::Added(line));
        continuing = trimmed.ends_with('[');
    }
    lines
}

/// Whether `section` holds keys that were not added by the migration.
fn content_has_other_keys(content: &str, section: &str, added_fields: &[String]) -> bool {
    let header = format!("[{}]", section);
    content
        .lines()
        .map(str::trim)
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| !line.starts_with('['))
        .filter_map(|line| line.split_once('=').map(|(key, _)| key.trim()))
        .any(|key| !is_added(added_fields, section, key))
}

fn is_added(added_fields: &[String], section: &str, key: &str) -> bool {
    let field = format!("{}.{}", section, key);
    added_fields.iter().any(|f| *f == field)
}

/// Color an added line green unless colors are disabled.
fn added_line(line: &str) -> String {
    if theme::color_enabled() {
        format!("\x1b[32m{}\x1b[0m", line)
    } else {
        line.to_string()
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
