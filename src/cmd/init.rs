use std::path::Path;

use colored::Colorize;
use eyre::{eyre, Result, WrapErr};
use indoc::formatdoc;
use tokio::fs;
use tracing::{info, instrument};

use crate::config::{SiteConfig, CONFIG_FILE};

/// Render the default site configuration TOML
fn default_config_toml() -> Result<String> {
    let options = toml::to_string_pretty(&SiteConfig::default())?;
    Ok(formatdoc! {r#"
        # Markdown processing options for the site builder.
        # syntaxHighlighter: "prism", "shiki" or false
        # codeBlockTheme and wrapLongLines only take effect with shiki.

        {options}"#
    })
}

#[instrument(skip_all, fields(dir = %dir.display()))]
pub async fn init(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);

    if fs::try_exists(&config_path).await? {
        let path = fs::canonicalize(&config_path).await?;
        return Err(eyre!("The file {} already exists.", path.display())
            .wrap_err("could not initialize the site configuration"));
    }

    fs::create_dir_all(dir).await?;
    fs::write(&config_path, default_config_toml()?)
        .await
        .wrap_err(format!(
            "{}: {}",
            "Failed to write site configuration".bold(),
            config_path.display()
        ))?;

    let path = fs::canonicalize(&config_path).await?;
    info!("Created {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ConfigProvider;

    #[tokio::test]
    async fn writes_a_loadable_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let site = dir.path().join("my-site");

        init(&site).await.unwrap();

        let provider = ConfigProvider::from_file(site.join(CONFIG_FILE)).await.unwrap();
        assert_eq!(provider.get_config(), SiteConfig::default());
    }

    #[tokio::test]
    async fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[markdown]\n").unwrap();

        let err = init(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("could not initialize"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap(),
            "[markdown]\n"
        );
    }
}
