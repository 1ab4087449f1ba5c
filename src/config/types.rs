use std::path::PathBuf;

use serde::Deserialize;

/// Raw override set parsed from the config file. Every field is optional;
/// present values layer over the built-in defaults. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub local_url: Option<String>,
    pub external_url: Option<String>,
    pub tags_path: Option<String>,
    pub percent_cover: Option<f64>,
    pub verbose: Option<bool>,
    pub quiet: Option<bool>,
}

/// Validated run configuration. Built once per run, read-only afterward.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address reserved for local/staging comparison runs. Required in
    /// the config file but not used when issuing requests.
    pub local_url: String,
    /// Base address of the live site under test.
    pub external_url: String,
    /// Absolute path to the tag list, home-expanded.
    pub tags_path: PathBuf,
    /// Fraction of the tag population to exercise, 0-100.
    pub percent_cover: f64,
    pub verbose: bool,
    pub quiet: bool,
}
