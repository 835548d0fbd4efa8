use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod level;
pub mod options;
pub mod tiles;

pub use level::{
    build_level, build_level_from_body, extract_definitions, load_level_document,
    parse_level_body, ActorKind, BatchPolicy, CatalogEntry, Level, LevelCatalog,
    LevelDefinition, LevelError, LevelFingerprint, LevelLoadError, TileGrid, TileOffset,
    TilePosition, TileType,
};
pub use options::{ClassifyOptions, PILLARS_ENV_VAR, POND_FILL_ENV_VAR};
pub use tiles::{
    NeighborSignature, PatternTable, RenderPlan, TileIndex, TileLayer, TileSelectError,
    TileSelector, WeightTable,
};

pub const ROOT_ENV_VAR: &str = "BOXISLE_ROOT";

#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub root: PathBuf,
    pub levels_dir: PathBuf,
}

impl AssetPaths {
    pub fn default_level_document(&self) -> PathBuf {
        self.levels_dir.join("classic.txt")
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to read environment variable {var}: {source}")]
    EnvVar {
        var: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("failed to resolve current executable path: {0}")]
    CurrentExe(#[source] std::io::Error),
    #[error("current executable path has no parent directory: {0}")]
    ExeHasNoParent(PathBuf),
    #[error(
        "BOXISLE_ROOT is set but does not point to a valid project root: {path}\n\
A valid root must contain Cargo.toml and either crates/ or assets/."
    )]
    InvalidEnvRoot { path: PathBuf },
    #[error(
        "Could not detect project root by walking upward from executable directory: {start_dir}\n\
Expected a directory containing Cargo.toml and either crates/ or assets/.\n\
Set {env_var} explicitly, for example:\n\
Bash/zsh: export {env_var}=\"/path/to/boxisle\""
    )]
    RootNotFound {
        start_dir: PathBuf,
        env_var: &'static str,
    },
}

pub fn resolve_asset_paths() -> Result<AssetPaths, StartupError> {
    let root = resolve_root()?;
    Ok(asset_paths_under(root))
}

fn asset_paths_under(root: PathBuf) -> AssetPaths {
    let levels_dir = root.join("assets").join("levels");
    AssetPaths { root, levels_dir }
}

fn resolve_root() -> Result<PathBuf, StartupError> {
    match env::var(ROOT_ENV_VAR) {
        Ok(value) => {
            let raw = PathBuf::from(value);
            let normalized = normalize_path(&raw);
            if is_repo_marker(&normalized) {
                Ok(normalized)
            } else {
                Err(StartupError::InvalidEnvRoot { path: normalized })
            }
        }
        Err(env::VarError::NotPresent) => {
            let exe = env::current_exe().map_err(StartupError::CurrentExe)?;
            let exe_dir = exe
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| StartupError::ExeHasNoParent(exe.clone()))?;
            find_root_from(&exe_dir).ok_or_else(|| StartupError::RootNotFound {
                start_dir: normalize_path(&exe_dir),
                env_var: ROOT_ENV_VAR,
            })
        }
        Err(source) => Err(StartupError::EnvVar {
            var: ROOT_ENV_VAR,
            source,
        }),
    }
}

fn find_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|candidate| is_repo_marker(candidate))
        .map(normalize_path)
}

fn is_repo_marker(path: &Path) -> bool {
    let cargo_toml = path.join("Cargo.toml").is_file();
    let has_crates = path.join("crates").is_dir();
    let has_assets = path.join("assets").is_dir();

    cargo_toml && (has_crates || has_assets)
}

fn normalize_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn repo_marker_requires_cargo_toml() {
        let temp = TempDir::new().expect("temp");
        fs::create_dir_all(temp.path().join("assets")).expect("assets");
        assert!(!is_repo_marker(temp.path()));
        fs::write(temp.path().join("Cargo.toml"), "[workspace]\n").expect("write");
        assert!(is_repo_marker(temp.path()));
    }

    #[test]
    fn root_is_found_from_a_nested_directory() {
        let temp = TempDir::new().expect("temp");
        fs::write(temp.path().join("Cargo.toml"), "[workspace]\n").expect("write");
        fs::create_dir_all(temp.path().join("crates")).expect("crates");
        let nested = temp.path().join("target").join("debug");
        fs::create_dir_all(&nested).expect("nested");

        let root = find_root_from(&nested).expect("root");
        assert_eq!(root, normalize_path(temp.path()));
        let paths = asset_paths_under(root.clone());
        assert_eq!(
            paths.default_level_document(),
            root.join("assets").join("levels").join("classic.txt")
        );
    }

    #[test]
    fn workspace_ships_the_default_level_document() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
        let paths = asset_paths_under(normalize_path(&root));
        assert!(paths.default_level_document().is_file());
    }
}
