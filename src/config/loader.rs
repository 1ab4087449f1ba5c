use std::path::Path;

use tracing::debug;

use crate::args::TesterArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::paths::absolutize;
use super::types::{Config, ConfigFile};

/// Loads the run configuration: file-provided values layered over the
/// defaults, then command-line overrides, then required-key validation.
///
/// A config file that cannot be read or parsed is reported on stdout and
/// treated as an empty override set; the required-key validation below still
/// applies and will catch most misconfigurations.
///
/// # Errors
///
/// Returns an error when a required key is missing after merging.
pub fn load_config(args: &TesterArgs) -> AppResult<Config> {
    let overrides = load_overrides(Path::new(&args.config_path));
    let config = merge(overrides, args)?;

    if config.verbose {
        println!("Loaded config from: [{}]\n", args.config_path);
        println!("----- command line arguments -----");
        println!("{:#?}", args);
        println!("---------- configuration ---------");
        println!("{:#?}", config);
        println!("\n----------------------------------");
    }

    Ok(config)
}

fn load_overrides(path: &Path) -> ConfigFile {
    match read_overrides(path) {
        Ok(overrides) => overrides,
        Err(err) => {
            println!("Could not load configuration from [{}]", path.display());
            println!("{}", err);
            ConfigFile::default()
        }
    }
}

fn read_overrides(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source: err,
    })?;
    debug!("Read config file [{}]", path.display());
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|err| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: err,
        }),
        // TOML is the documented format; any other extension is parsed as TOML.
        Some(_) | None => toml::from_str(&content).map_err(|err| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

fn merge(overrides: ConfigFile, args: &TesterArgs) -> AppResult<Config> {
    let mut verbose = overrides.verbose.unwrap_or(false);
    let mut quiet = overrides.quiet.unwrap_or(false);
    // A false command-line flag never clears a true file-provided value.
    if args.verbose {
        verbose = true;
    }
    if args.quiet {
        quiet = true;
    }

    let local_url = require(overrides.local_url, "local_url")?;
    let external_url = require(overrides.external_url, "external_url")?;
    let tags_path = require(overrides.tags_path, "tags_path")?;
    let percent_cover = require(overrides.percent_cover, "percent_cover")?;

    Ok(Config {
        local_url,
        external_url,
        tags_path: absolutize(&tags_path),
        percent_cover,
        verbose,
        quiet,
    })
}

fn require<T>(value: Option<T>, key: &'static str) -> AppResult<T> {
    value.ok_or_else(|| AppError::config(ConfigError::MissingKey { key }))
}
