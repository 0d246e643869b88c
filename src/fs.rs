use std::path::{Path, PathBuf};

use eyre::Result;
use tokio::fs::metadata;
use tracing::{debug, instrument};

/// Find a given file in the current working directory and its parent directories recursively
pub async fn find_file_in_previous_dirs(filename: &str) -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir()?;
    find_file_from(&current_dir, filename).await
}

#[instrument(skip(start))]
pub async fn find_file_from(start: &Path, filename: &str) -> Result<Option<PathBuf>> {
    let mut current_dir = Some(start);

    while let Some(dir) = current_dir {
        let path = dir.join(filename);
        if metadata(&path).await.is_ok_and(|meta| meta.is_file()) {
            debug!(path = %path.display(), "Found file");
            return Ok(Some(path));
        }
        current_dir = dir.parent();
    }

    Ok(None)
}
