//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::{AnnualRate, RoundingMode, Tenure};
use crate::error::{QuoteError, QuoteResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = "emicalc.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> QuoteResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| QuoteError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate().map_err(|e| QuoteError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    debug!(path = %path.display(), "loaded config");
    Ok((config, warnings))
}

/// Candidate config files, highest priority first
pub fn config_candidates(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_config_dir) = dirs_config_dir() {
        candidates.push(user_config_dir.join("emicalc/config.toml"));
    }
    candidates
}

/// Effective configuration and where it was read from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when built-in defaults were used
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Resolve the effective configuration
///
/// An explicit path must exist and parse. Otherwise the first candidate that
/// parses wins and broken candidates are skipped with a warning. Environment
/// overrides are applied last.
pub fn resolve(explicit: Option<&Path>, project_root: Option<&Path>) -> QuoteResult<LoadedConfig> {
    let loaded = match explicit {
        Some(path) => {
            let (config, warnings) = load_with_warnings(path)?;
            LoadedConfig {
                config,
                source: Some(path.to_path_buf()),
                warnings,
            }
        }
        None => discover(project_root),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

fn discover(project_root: Option<&Path>) -> LoadedConfig {
    for candidate in config_candidates(project_root) {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                return LoadedConfig {
                    config,
                    source: Some(candidate),
                    warnings,
                }
            }
            Err(e) => warn!(path = %candidate.display(), error = %e, "skipping config file"),
        }
    }

    LoadedConfig::default()
}

/// Apply environment variable overrides (EMICALC_* prefix)
fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(
        config,
        |key| std::env::var(key).ok(),
        &mut std::io::stderr(),
    )
}

/// Apply overrides from an arbitrary environment (for testing)
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    writer: &mut W,
) -> Config {
    // EMICALC_RATE
    if let Some(rate) = get_env("EMICALC_RATE") {
        let validator = EnvVarValidator::numeric("EMICALC_RATE", "a non-negative percentage such as 8.5");
        config.loan.annual_rate = validator.parse_with_writer(
            &rate,
            |s| s.parse::<AnnualRate>().ok().map(AnnualRate::percent),
            config.loan.annual_rate,
            writer,
        );
    }

    // EMICALC_TENURE
    if let Some(tenure) = get_env("EMICALC_TENURE") {
        let validator = EnvVarValidator::numeric("EMICALC_TENURE", "a whole number of years, at least 1");
        config.loan.tenure_years = validator.parse_with_writer(
            &tenure,
            |s| {
                s.trim()
                    .parse::<u32>()
                    .ok()
                    .and_then(|years| Tenure::from_years(years).ok())
                    .map(Tenure::years)
            },
            config.loan.tenure_years,
            writer,
        );
    }

    // EMICALC_ROUNDING
    if let Some(rounding) = get_env("EMICALC_ROUNDING") {
        let validator = EnvVarValidator::new("EMICALC_ROUNDING", RoundingMode::NAMES);
        config.loan.rounding = validator.parse_with_writer(
            &rounding,
            |s| s.parse::<RoundingMode>().ok(),
            config.loan.rounding,
            writer,
        );
    }

    // EMICALC_COLOR
    if let Some(color) = get_env("EMICALC_COLOR") {
        let validator = EnvVarValidator::new("EMICALC_COLOR", &["auto", "always", "never"]);
        config.output.color =
            validator.parse_with_writer(&color, ColorMode::parse, config.output.color, writer);
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "loan",
        "car_price",
        "down_payment",
        "tenure_years",
        "annual_rate",
        "rounding",
        "limits",
        "price_min",
        "price_max",
        "price_step",
        "down_payment_min_percent",
        "down_payment_max_percent",
        "down_payment_step",
        "tenure_min_years",
        "tenure_max_years",
        "output",
        "color",
        "unicode",
        "currency_symbol",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
