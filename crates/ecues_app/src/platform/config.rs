//! Shell configuration, read from a RON file.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ecues_core::{HospitalCatalog, OTHER_SENTINEL};
use ecues_logging::LogDestination;
use ecues_output::{ExportOptions, PageLayout};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILENAME: &str = "ecues.ron";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub hospitals: Vec<String>,
    pub other_label: String,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub log: LogDestination,
    pub log_file: PathBuf,
    pub wrap_columns: usize,
    pub write_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hospitals: HospitalCatalog::default().hospitals().to_vec(),
            other_label: OTHER_SENTINEL.to_string(),
            output_dir: PathBuf::from("output"),
            file_prefix: "ECUES".to_string(),
            log: LogDestination::File,
            log_file: PathBuf::from("ecues.log"),
            wrap_columns: PageLayout::default().wrap_columns,
            write_json: true,
        }
    }
}

impl AppConfig {
    pub fn catalog(&self) -> HospitalCatalog {
        HospitalCatalog::new(self.hospitals.clone(), self.other_label.clone())
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            prefix: self.file_prefix.clone(),
            layout: PageLayout {
                wrap_columns: self.wrap_columns,
                ..PageLayout::default()
            },
            write_json: self.write_json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Loads the config from `path`, or from `./ecues.ron` when no path is given.
///
/// A missing default file is not an error; an explicitly named file must
/// exist.
pub fn load_config(path: Option<&Path>) -> Result<(AppConfig, ConfigSource), ConfigError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILENAME), false),
    };
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !explicit => {
            return Ok((AppConfig::default(), ConfigSource::Defaults));
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    Ok((config, ConfigSource::File(path)))
}

pub fn parse_config(content: &str) -> Result<AppConfig, ron::error::SpannedError> {
    ron::from_str(content)
}
