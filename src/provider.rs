use std::{path::Path, sync::OnceLock};

use colored::Colorize;
use eyre::{eyre, Result, WrapErr};
use tracing::{debug, instrument};

use crate::config::SiteConfig;

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Owns the resolved site configuration and hands out copies of it.
///
/// A provider is built once at startup, either from the literal defaults or by
/// layering a `sitemark.toml` document over them, and is never mutated after.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigProvider {
    config: SiteConfig,
}

impl ConfigProvider {
    /// Provider holding the literal defaults, no I/O involved
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document, missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str::<SiteConfig>(content)
            .wrap_err("Invalid site configuration".bold())?;
        Ok(Self { config })
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading site configuration");
        let content = tokio::fs::read_to_string(path).await.wrap_err(format!(
            "{}: {}",
            "Failed to read site configuration".bold(),
            path.display()
        ))?;
        let provider = Self::from_toml_str(&content)
            .wrap_err(format!("while loading {}", path.display()))?;
        debug!(engine = %provider.config.markdown.syntax_highlighter, "Site configuration loaded");
        Ok(provider)
    }

    pub fn get_config(&self) -> SiteConfig {
        self.config.clone()
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

/// Installs the process-wide configuration, only the first call succeeds
pub fn install(config: SiteConfig) -> Result<()> {
    SITE_CONFIG
        .set(config)
        .map_err(|_| eyre!("The site configuration has already been installed"))
}

/// Process-wide configuration, the defaults when nothing was installed
pub fn get_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(SiteConfig::default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use indoc::indoc;

    use super::*;
    use crate::config::{SyntaxHighlighter, TransformRef};

    #[test]
    fn get_config_is_idempotent() {
        let provider = ConfigProvider::new();
        assert_eq!(provider.get_config(), provider.get_config());
        assert_eq!(provider.get_config(), SiteConfig::default());

        assert_eq!(get_config(), get_config());
        assert!(std::ptr::eq(get_config(), get_config()));
    }

    #[test]
    fn global_config_is_set_at_most_once() {
        let first = get_config().clone();
        // get_config already initialised the value above or in a sibling test
        assert!(install(SiteConfig::default()).is_err());
        assert_eq!(get_config(), &first);
    }

    #[test]
    fn layers_documents_over_defaults() {
        let provider = ConfigProvider::from_toml_str(indoc! {r#"
            [markdown]
            syntaxHighlighter = false
            remarkTransforms = ["remark-toc"]
        "#})
        .unwrap();

        let config = provider.get_config();
        assert_eq!(config.markdown.syntax_highlighter, SyntaxHighlighter::Disabled);
        assert_eq!(config.markdown.remark_transforms, vec![TransformRef::from("remark-toc")]);
        assert_eq!(config.markdown.code_block_theme, "dark-plus");
    }

    #[test]
    fn reports_invalid_documents() {
        let err = ConfigProvider::from_toml_str(r#"markdown = "prism""#).unwrap_err();
        assert!(err.to_string().contains("Invalid site configuration"));
        assert!(err
            .chain()
            .any(|cause| cause.downcast_ref::<toml::de::Error>().is_some()));
    }

    #[tokio::test]
    async fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[markdown]\nsyntaxHighlighter = \"shiki\"").unwrap();

        let provider = ConfigProvider::from_file(file.path()).await.unwrap();
        assert_eq!(provider.config().markdown.syntax_highlighter, SyntaxHighlighter::Shiki);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigProvider::from_file(dir.path().join("sitemark.toml"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read site configuration"));
    }
}
