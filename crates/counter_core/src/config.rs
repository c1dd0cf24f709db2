use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "counter.toml";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub initial_value: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_value: 0.0,
            max: f64::INFINITY,
            step: 1.0,
        }
    }
}

/// Explicit per-field values, typically from command-line flags, applied last.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    pub initial_value: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl CounterConfig {
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(initial_value) = overrides.initial_value {
            self.initial_value = initial_value;
        }
        if let Some(max) = overrides.max {
            self.max = max;
        }
        if let Some(step) = overrides.step {
            self.step = step;
        }
        self
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Reports settings that make the counter behave oddly. Nothing here is enforced;
    /// the engine runs with whatever it is given.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("initial_value", self.initial_value), ("step", self.step)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.initial_value > self.max {
            return Err(ConfigError::InitialAboveMax {
                initial_value: self.initial_value,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let fields: [(&str, &str, &mut f64); 3] = [
            (
                "COUNTER_INITIAL_VALUE",
                "APP__INITIAL_VALUE",
                &mut self.initial_value,
            ),
            ("COUNTER_MAX", "APP__MAX", &mut self.max),
            ("COUNTER_STEP", "APP__STEP", &mut self.step),
        ];

        for (plain, prefixed, slot) in fields {
            for name in [plain, prefixed] {
                let Some(raw) = lookup(name) else {
                    continue;
                };
                match raw.trim().parse::<f64>() {
                    Ok(parsed) => *slot = parsed,
                    Err(_) => {
                        tracing::warn!(var = name, value = %raw, "ignoring unparseable override")
                    }
                }
            }
        }
    }
}

/// Defaults, then the TOML file if present, then environment overrides.
///
/// A missing file is not an error when `path` is `None`; an explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<CounterConfig, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    let mut config = match fs::read_to_string(&path) {
        Ok(raw) => CounterConfig::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
            CounterConfig::default()
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    config.apply_env_overrides();
    Ok(config)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
