use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagsError {
    #[error("Could not load the tags from '{path}': {source}")]
    ReadTags {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed tag line {line} in '{path}': expected '<tag>,<title>'")]
    MissingDelimiter { path: PathBuf, line: usize },
}
