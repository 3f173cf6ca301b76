//! Config migration: add fields introduced by newer versions.
//!
//! Existing values, comments and ordering are preserved; only missing
//! sections and keys are appended with their default values.

use toml_edit::DocumentMut;

use super::{Config, ConfigError};

/// Outcome of a migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// Full migrated document
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist at all
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add any section or field from the default config missing in `content`.
pub fn migrate_config(content: &str) -> Result<MigrateResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, default_item.clone());
            sections_added.push(section.to_string());
            added_fields.extend(
                default_table
                    .iter()
                    .map(|(key, _)| format!("{}.{}", section, key)),
            );
            continue;
        }

        // A non-table value under a section name is left for the user to fix
        let Some(existing) = doc
            .get_mut(section)
            .and_then(|item| item.as_table_like_mut())
        else {
            continue;
        };

        for (key, value) in default_table.iter() {
            if !existing.contains_key(key) {
                existing.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
