use std::env;
use std::io;
use std::path::PathBuf;

use boxisle_engine::{
    resolve_asset_paths, BatchPolicy, LevelLoadError, StartupError, TileSelectError,
};
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use super::cli::CliArgs;
use super::config::{load_viewer_config, resolve_config_path, ConfigError};
use super::viewer::ViewerSettings;

pub(crate) const LEVELS_ENV_VAR: &str = "BOXISLE_LEVELS";

#[derive(Debug, Error)]
pub(crate) enum ViewerError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read level document {path}: {source}")]
    ReadLevels {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Load(#[from] LevelLoadError),
    #[error("no level named '{name}' in {path}")]
    LevelNotFound { name: String, path: PathBuf },
    #[error("failed to select tiles for level '{name}': {source}")]
    Select {
        name: String,
        #[source]
        source: TileSelectError,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .with_writer(io::stderr)
        .compact()
        .init();
}

/// Merges command line, config file and environment into one run.
pub(crate) fn build_settings(cli: CliArgs) -> Result<ViewerSettings, ViewerError> {
    let config_path = resolve_config_path(cli.config_path.as_deref());
    let mut config = load_viewer_config(config_path.as_deref())?;
    if cli.skip_invalid {
        config.batch_policy = BatchPolicy::SkipInvalid;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let levels_path = match pick_levels_path(cli.levels_path, levels_path_from_env()) {
        Some(path) => path,
        None => resolve_asset_paths()?.default_level_document(),
    };

    Ok(ViewerSettings {
        config,
        levels_path,
        level_name: cli.level_name,
        json: cli.json,
    })
}

fn pick_levels_path(cli_path: Option<PathBuf>, env_path: Option<PathBuf>) -> Option<PathBuf> {
    cli_path.or(env_path)
}

fn levels_path_from_env() -> Option<PathBuf> {
    match env::var(LEVELS_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => Some(PathBuf::from(value.trim())),
        Ok(_) | Err(env::VarError::NotPresent) => None,
        Err(err) => {
            warn!(env_var = LEVELS_ENV_VAR, error = %err, "levels_env_unreadable");
            None
        }
    }
}
