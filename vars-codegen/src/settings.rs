/// Generator configuration. Loaded from an optional JSON file and then
/// overridden by command-line flags.
use serde::Deserialize;
use std::path::Path;

/// How missing descriptor keys are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fields missing `name`, `display_name`, `type` or a keyword's
    /// `constraint.enum` are skipped.
    Strict,
    /// Missing keys fall back to defaults; only structural errors abort.
    #[default]
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub mode: Mode,
    /// Summary functions a field must list, all of them, to get
    /// `Function::Some(..)`.
    pub functions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Lenient,
            functions: vec!["min".into(), "max".into()],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("function list must not be empty")]
    NoFunctions,
}

impl Settings {
    pub fn strict() -> Self {
        Self {
            mode: Mode::Strict,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&text).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// An empty list would make every field match, so it is rejected.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.functions.is_empty() {
            return Err(SettingsError::NoFunctions);
        }
        Ok(())
    }
}
