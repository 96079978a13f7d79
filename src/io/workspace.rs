use std::path::{Path, PathBuf};

use crate::model::config::WorkspaceConfig;
use crate::store::storage::FileStorage;

/// Error type for workspace I/O operations
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("not a slate workspace: no slate/ directory found (run `sl init`)")]
    NotAWorkspace,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse slate.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("could not edit slate.toml: {0}")]
    ConfigEditError(#[from] toml_edit::TomlError),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A loaded slate workspace
pub struct Workspace {
    /// Directory containing the slate/ dir
    pub root: PathBuf,
    /// The slate/ dir itself (slate.toml, data/)
    pub slate_dir: PathBuf,
    pub config: WorkspaceConfig,
}

impl Workspace {
    /// Where the key files live
    pub fn data_dir(&self) -> PathBuf {
        self.slate_dir.join("data")
    }

    /// File-backed storage over the workspace data directory
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_dir())
    }
}

/// Discover the slate workspace by walking up from the given directory,
/// looking for a `slate/` subdirectory with a slate.toml inside.
pub fn discover_workspace(start: &Path) -> Result<PathBuf, WorkspaceError> {
    let mut current = start.to_path_buf();
    loop {
        let slate_dir = current.join("slate");
        if slate_dir.is_dir() && slate_dir.join("slate.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(WorkspaceError::NotAWorkspace);
        }
    }
}

/// Load a workspace from its root directory
pub fn load_workspace(root: &Path) -> Result<Workspace, WorkspaceError> {
    let slate_dir = root.join("slate");
    if !slate_dir.is_dir() {
        return Err(WorkspaceError::NotAWorkspace);
    }

    let config_path = slate_dir.join("slate.toml");
    let config_text =
        std::fs::read_to_string(&config_path).map_err(|e| WorkspaceError::ReadError {
            path: config_path,
            source: e,
        })?;
    let config: WorkspaceConfig = toml::from_str(&config_text)?;

    Ok(Workspace {
        root: root.to_path_buf(),
        slate_dir,
        config,
    })
}
