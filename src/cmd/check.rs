use std::path::{Path, PathBuf};

use colored::Colorize;
use eyre::{bail, Result};
use tracing::{info, instrument, warn};

use crate::{
    config::{format_issues, validate, ConfigIssue, Severity, CONFIG_FILE},
    fs,
    provider::ConfigProvider,
};

/// Validates the configuration at `path` and returns its issues
pub async fn check_file(path: &Path) -> Result<Vec<ConfigIssue>> {
    let provider = ConfigProvider::from_file(path).await?;
    Ok(validate(provider.config()))
}

#[instrument(skip_all)]
pub async fn check(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => match fs::find_file_in_previous_dirs(CONFIG_FILE).await? {
            Some(path) => path,
            None => bail!("Could not check the configuration: no {} found", CONFIG_FILE),
        },
    };

    let issues = check_file(&path).await?;
    if issues.is_empty() {
        info!("{} {}", path.display(), "is valid".green());
        return Ok(());
    }

    let report = format_issues(&path, &issues);
    if issues.iter().any(|issue| issue.severity() == Severity::Error) {
        bail!("{}", report.trim_end());
    }
    warn!("{}", report.trim_end());

    Ok(())
}
