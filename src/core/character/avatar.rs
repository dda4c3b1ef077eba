//! Avatar uploads and the official portrait catalogue.
//!
//! Classification is by file name only: `avatar_<digits>.jpg`, any case.
//! Unofficial portraits are accepted, just flagged differently.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::CharacterError;

/// Public folder holding the sanctioned portraits.
pub const DEFAULT_GALLERY_URL: &str =
    "https://drive.google.com/drive/folders/1IymCZY8_lNoCCWgUkZs6EXfvlC7jL4Uv?usp=drive_link";

/// Number of portraits in the official gallery.
pub const OFFICIAL_AVATAR_COUNT: usize = 100;

static OFFICIAL_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^avatar_\d+\.jpg$").expect("official avatar pattern is valid")
});

/// Whether `file_name` follows the official asset naming convention.
pub fn is_official_file_name(file_name: &str) -> bool {
    OFFICIAL_NAME.is_match(file_name)
}

/// An image read from disk, ready to be stored on the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    /// `data:<mime>;base64,<payload>`
    pub data_uri: String,
    pub is_official: bool,
}

impl AvatarUpload {
    /// Build an upload from raw file contents.
    pub fn from_bytes(file_name: &str, bytes: &[u8]) -> Self {
        Self {
            file_name: file_name.to_string(),
            data_uri: data_uri(bytes),
            is_official: is_official_file_name(file_name),
        }
    }

    /// Read and encode an image file.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub async fn read(path: &Path) -> Result<Self, CharacterError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CharacterError::io(path, source))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::info!("Read avatar {} ({} bytes)", path.display(), bytes.len());
        Ok(Self::from_bytes(&file_name, &bytes))
    }
}

/// Embed bytes as a data URI, sniffing the image type from its header.
pub fn data_uri(bytes: &[u8]) -> String {
    let mime = image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// One entry of the official gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficialAvatar {
    pub id: String,
    pub file_name: String,
    pub name: String,
}

/// Catalogue of official portraits, `avatar_1` through `avatar_100`.
pub fn official_gallery() -> impl Iterator<Item = OfficialAvatar> {
    (1..=OFFICIAL_AVATAR_COUNT).map(|n| OfficialAvatar {
        id: format!("avatar_{n}"),
        file_name: format!("avatar_{n}.jpg"),
        name: format!("Official Portrait {n}"),
    })
}

/// Short description of the avatar field for the summary.
pub fn describe(avatar: &str) -> String {
    if avatar.is_empty() {
        "none".to_string()
    } else if let Some(rest) = avatar.strip_prefix("data:") {
        let mime = rest.split(';').next().unwrap_or("unknown");
        format!("embedded {mime}, {} chars", avatar.len())
    } else {
        avatar.to_string()
    }
}
