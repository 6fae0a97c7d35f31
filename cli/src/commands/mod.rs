pub mod layers;
pub mod render;

use std::path::{Path, PathBuf};

/// Layer sources resolve against `--data-dir`, else the config's directory.
pub(crate) fn data_root(config: &Path, data_dir: Option<&PathBuf>) -> PathBuf {
    match data_dir {
        Some(dir) => dir.clone(),
        None => config.parent().map(Path::to_path_buf).unwrap_or_default(),
    }
}
