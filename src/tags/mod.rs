//! Tag list loading.
use std::path::Path;

use tracing::debug;

use crate::error::{AppError, AppResult, TagsError};


/// Reads the tag list: one `<tag>,<title>` entry per line, `#` lines skipped.
/// The text before the first comma is the tag; the remainder is discarded.
/// Tags are returned in file order, duplicates preserved.
///
/// # Errors
///
/// Returns an error when the file cannot be read, or when a non-comment line
/// has no comma delimiter (reported with its 1-based line number).
pub fn load_tags(path: &Path) -> AppResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::tags(TagsError::ReadTags {
            path: path.to_path_buf(),
            source: err,
        })
    })?;

    let mut tags = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.starts_with('#') {
            continue;
        }
        let Some((tag, _title)) = line.split_once(',') else {
            return Err(AppError::tags(TagsError::MissingDelimiter {
                path: path.to_path_buf(),
                line: index + 1,
            }));
        };
        tags.push(tag.to_owned());
    }

    debug!("Loaded {} tags from [{}]", tags.len(), path.display());
    Ok(tags)
}
