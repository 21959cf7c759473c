//! Run configuration: which services to analyze and where to write results.
//!
//! Values come from three layers, highest priority first: command-line
//! flags, an optional `covscan.toml` in the project root (or the file given
//! with `--config`), and built-in defaults.

use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::runner::DEFAULT_TIMEOUT;

/// Config file looked up in the project root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "covscan.toml";
pub const DEFAULT_RESULTS_DIR: &str = "test-results";
pub const DEFAULT_REPORT_NAME: &str = "test-coverage-report.json";

/// A named service and its root directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSpec {
    pub name: String,
    pub path: PathBuf,
}

impl ServiceSpec {
    pub fn new(name: &str, path: impl Into<PathBuf>) -> Self {
        ServiceSpec {
            name: name.to_string(),
            path: path.into(),
        }
    }
}

/// Services analyzed when neither the config file nor the command line
/// names any.
pub fn default_services() -> Vec<ServiceSpec> {
    vec![
        ServiceSpec::new("data-preprocessor", "java-services/data-preprocessor"),
        ServiceSpec::new("model-trainer", "java-services/model-trainer"),
    ]
}

/// Contents of a config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub results_dir: Option<PathBuf>,
    pub report_name: Option<String>,
    pub run_tests: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub services: Option<Vec<ServiceSpec>>,
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
        FileConfig::parse(&text).map_err(|e| format!("invalid config {}: {e}", path.display()).into())
    }
}

/// Settings given on the command line; `None` means "not given".
#[derive(Debug, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub services: Vec<ServiceSpec>,
    pub results_dir: Option<PathBuf>,
    pub report_name: Option<String>,
    pub no_run: bool,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved settings for one run. Paths are absolute or relative to
/// the working directory, never to the project root.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub project_root: PathBuf,
    pub services: Vec<ServiceSpec>,
    pub results_dir: PathBuf,
    pub report_name: String,
    pub run_tests: bool,
    pub timeout: Duration,
}

impl Config {
    /// Resolve settings for `project_root`.
    ///
    /// An explicit `--config` must exist and parse; the implicit
    /// `covscan.toml` is read only when present.
    pub fn resolve(project_root: &Path, overrides: Overrides) -> Result<Self, Box<dyn Error>> {
        let file = match &overrides.config {
            Some(path) => FileConfig::load(path)?,
            None => {
                let implicit = project_root.join(CONFIG_FILE_NAME);
                if implicit.is_file() {
                    FileConfig::load(&implicit)?
                } else {
                    FileConfig::default()
                }
            }
        };
        Config::merge(project_root, file, overrides)
    }

    fn merge(
        project_root: &Path,
        file: FileConfig,
        overrides: Overrides,
    ) -> Result<Self, Box<dyn Error>> {
        let services = if !overrides.services.is_empty() {
            overrides.services
        } else {
            file.services.unwrap_or_else(default_services)
        };
        let mut seen = HashSet::new();
        if let Some(dup) = services.iter().find(|s| !seen.insert(s.name.as_str())) {
            return Err(format!("duplicate service name {:?}", dup.name).into());
        }
        let services = services
            .into_iter()
            .map(|s| ServiceSpec {
                path: project_root.join(&s.path),
                name: s.name,
            })
            .collect();

        let results_dir = overrides
            .results_dir
            .or(file.results_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR));

        let timeout = overrides
            .timeout_secs
            .or(file.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Config {
            project_root: project_root.to_path_buf(),
            services,
            results_dir: project_root.join(results_dir),
            report_name: overrides
                .report_name
                .or(file.report_name)
                .unwrap_or_else(|| DEFAULT_REPORT_NAME.to_string()),
            run_tests: !overrides.no_run && file.run_tests.unwrap_or(true),
            timeout,
        })
    }
}

/// Parse a `NAME=PATH` service argument.
pub fn parse_service_arg(s: &str) -> Result<ServiceSpec, String> {
    let (name, path) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid service {s:?} (expected NAME=PATH)"))?;
    let name = name.trim();
    let path = path.trim();
    if name.is_empty() || path.is_empty() {
        return Err(format!("invalid service {s:?} (expected NAME=PATH)"));
    }
    Ok(ServiceSpec::new(name, path))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
