//! Configuration module for emicalc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (EMICALC_*)
//! 3. Project config (./emicalc.toml)
//! 4. User config (~/.config/emicalc/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{resolve, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, LoanDefaults, OutputConfig};

// Re-export domain types that appear in config files
pub use crate::domain::policies::LoanLimits;
pub use crate::domain::value_objects::RoundingMode;
