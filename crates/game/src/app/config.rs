use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use boxisle_engine::{BatchPolicy, ClassifyOptions};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

pub(crate) const CONFIG_ENV_VAR: &str = "BOXISLE_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ViewerConfig {
    pub(crate) options: ClassifyOptions,
    pub(crate) batch_policy: BatchPolicy,
    pub(crate) seed: Option<u64>,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path} at {field}: {source}")]
    Parse {
        path: PathBuf,
        field: String,
        #[source]
        source: serde_json::Error,
    },
}

/// `--config` wins over `BOXISLE_CONFIG`; with neither, defaults apply.
pub(crate) fn resolve_config_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }
    match env::var(CONFIG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => Some(PathBuf::from(value)),
        Ok(_) | Err(env::VarError::NotPresent) => None,
        Err(err) => {
            warn!(env_var = CONFIG_ENV_VAR, error = %err, "config_env_unreadable");
            None
        }
    }
}

pub(crate) fn load_viewer_config(path: Option<&Path>) -> Result<ViewerConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let config = parse_viewer_config(&raw, path)?;
            info!(path = %path.display(), "viewer_config_loaded");
            config
        }
        None => ViewerConfig::default(),
    };
    Ok(ViewerConfig {
        options: config.options.with_env_overrides(),
        ..config
    })
}

pub(crate) fn parse_viewer_config(raw: &str, path: &Path) -> Result<ViewerConfig, ConfigError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize::<_, ViewerConfig>(&mut deserializer).map_err(|error| {
        let field = error.path().to_string();
        ConfigError::Parse {
            path: path.to_path_buf(),
            field,
            source: error.into_inner(),
        }
    })
}
