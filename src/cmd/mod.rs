mod check;
mod init;
mod show;

use std::path::PathBuf;

use eyre::Result;
use tracing::debug;

use crate::{config::CONFIG_FILE, fs, provider::ConfigProvider};

pub use check::check;
pub use init::init;
pub use show::{show, OutputFormat};

/// Loads the nearest `sitemark.toml`, falling back to the defaults outside a site
async fn resolve_provider() -> Result<(ConfigProvider, Option<PathBuf>)> {
    match fs::find_file_in_previous_dirs(CONFIG_FILE).await? {
        Some(path) => Ok((ConfigProvider::from_file(&path).await?, Some(path))),
        None => {
            debug!("No {} found, using default configuration", CONFIG_FILE);
            Ok((ConfigProvider::new(), None))
        }
    }
}
