//! Configuration discovery and effective settings resolution.
//!
//! pylint-metrics reads `pylint-metrics.toml|yaml|yml` from the project root
//! (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config.
//! Defaults:
//! - `pylint`: `pylint`
//! - `rcfile`: none (pylint's own discovery)
//! - `format`: `human`
//! - `strip_reports`: false
//! - `extra_args`: empty
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::output::OutputFormat;
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_TOML: &str = "pylint-metrics.toml";
const CONFIG_YAML: [&str; 2] = ["pylint-metrics.yaml", "pylint-metrics.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `pylint-metrics.toml|yaml`.
pub struct MetricsConfig {
    /// Analyzer executable, name or path.
    pub pylint: Option<String>,
    /// pylint configuration file, relative to the config file's directory.
    pub rcfile: Option<String>,
    pub format: Option<OutputFormat>,
    pub strip_reports: Option<bool>,
    /// Appended to the pylint command line after `--reports=y`.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub pylint: String,
    pub rcfile: Option<String>,
    pub format: OutputFormat,
    pub strip_reports: bool,
    pub extra_args: Vec<String>,
}

/// Walk upward from `start` to find the project root.
///
/// Stops when a `pylint-metrics.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join(CONFIG_TOML).exists() || CONFIG_YAML.iter().any(|y| cur.join(y).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `MetricsConfig` from `pylint-metrics.toml` or `.yaml|yml` if present.
///
/// A file that exists but does not parse is reported and ignored.
pub fn load_config(root: &Path) -> Option<MetricsConfig> {
    let toml_path = root.join(CONFIG_TOML);
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        return match toml::from_str::<MetricsConfig>(&s) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!("ignoring {}: {}", toml_path.display(), e);
                None
            }
        };
    }
    for yml in CONFIG_YAML {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            return match serde_yaml::from_str::<MetricsConfig>(&s) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    warn!("ignoring {}: {}", p.display(), e);
                    None
                }
            };
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&Path>,
    cli_pylint: Option<&str>,
    cli_rcfile: Option<&str>,
    cli_format: Option<OutputFormat>,
    cli_strip_reports: Option<bool>,
) -> Effective {
    let start = cli_root.unwrap_or_else(|| Path::new("."));
    let root = detect_root(start);
    let cfg = match load_config(&root) {
        Some(cfg) => {
            debug!("loaded config from {}", root.display());
            cfg
        }
        None => MetricsConfig::default(),
    };

    let pylint = cli_pylint
        .map(|s| s.to_string())
        .or(cfg.pylint)
        .unwrap_or_else(|| "pylint".to_string());

    // a config-file rcfile is relative to the directory holding the config
    let rcfile = cli_rcfile.map(|s| s.to_string()).or_else(|| {
        cfg.rcfile.map(|rc| {
            let p = Path::new(&rc);
            if p.is_absolute() {
                rc
            } else {
                root.join(p).to_string_lossy().to_string()
            }
        })
    });

    let format = cli_format.or(cfg.format).unwrap_or_default();
    let strip_reports = cli_strip_reports.or(cfg.strip_reports).unwrap_or(false);

    Effective {
        root,
        pylint,
        rcfile,
        format,
        strip_reports,
        extra_args: cfg.extra_args,
    }
}
