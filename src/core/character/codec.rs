//! JSON export and import of character sheets.
//!
//! Import performs no schema checks beyond the record shape: a payload that
//! deserializes is accepted verbatim, with missing keys taken from the default
//! record. Foreign skill keys and over-budget totals are kept as they are.
//!
//! Well-formed JSON is still refused when a field has the wrong type: a
//! `primaryKnowledge` other than the three literal labels, a skill value that
//! is not an integer in `0..=255` (`5.5`, `-1`), or a non-object pool.

use std::path::{Path, PathBuf};

use super::error::{CharacterError, Result};
use super::types::CharacterRecord;

/// Stem used when the character has no name yet.
pub const FALLBACK_FILE_STEM: &str = "arcadia_character";
/// Extension of exported sheets.
pub const EXPORT_EXTENSION: &str = "json";

/// Pretty-printed JSON with two-space indentation.
pub fn export_json(record: &CharacterRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Parse a sheet. The caller decides what to replace on success.
pub fn import_json(payload: &str) -> Result<CharacterRecord> {
    Ok(serde_json::from_str(payload)?)
}

/// `<name>.json`, or `arcadia_character.json` when the name is empty.
///
/// Path separators are replaced so the file always lands in the export directory.
pub fn export_file_name(record: &CharacterRecord) -> String {
    let stem = if record.name.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        record
            .name
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
            .collect()
    };
    format!("{stem}.{EXPORT_EXTENSION}")
}

/// Write the sheet into `dir`, returning the full path of the artifact.
pub fn write_export(dir: &Path, record: &CharacterRecord) -> Result<PathBuf> {
    let json = export_json(record)?;
    std::fs::create_dir_all(dir).map_err(|e| CharacterError::io(dir, e))?;
    let path = dir.join(export_file_name(record));
    std::fs::write(&path, json).map_err(|e| CharacterError::io(&path, e))?;
    log::info!("Exported character sheet to {}", path.display());
    Ok(path)
}

/// Read and parse a sheet from disk.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub async fn read_import(path: &Path) -> Result<CharacterRecord> {
    let payload = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CharacterError::io(path, e))?;
    let record = import_json(&payload)?;
    log::info!("Imported character sheet from {}", path.display());
    Ok(record)
}

/// Blocking variant of [`read_import`] for startup.
pub fn read_import_blocking(path: &Path) -> Result<CharacterRecord> {
    let payload = std::fs::read_to_string(path).map_err(|e| CharacterError::io(path, e))?;
    import_json(&payload)
}
