use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Table};
use eyre::Result;
use tracing::{debug, instrument};

use crate::{
    config::{SiteConfig, TransformRef},
    provider::{self, ConfigProvider},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
    Table,
}

fn list_transforms(transforms: &[TransformRef]) -> String {
    if transforms.is_empty() {
        return "[]".to_string();
    }
    transforms
        .iter()
        .map(|transform| match transform.options() {
            Some(options) if !options.is_empty() => format!("{} ({} options)", transform.name(), options.len()),
            _ => transform.name().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_table(config: &SiteConfig) -> String {
    let markdown = &config.markdown;
    let (theme, wrap) = match markdown.code_block_style() {
        Some(style) => (style.theme.to_string(), style.wrap.to_string()),
        None => (
            format!("{} (inactive)", markdown.code_block_theme),
            format!("{} (inactive)", markdown.wrap_long_lines),
        ),
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Option", "Value", "Effect"])
        .add_row(vec![
            "syntaxHighlighter".to_string(),
            markdown.syntax_highlighter.to_string(),
            "Engine highlighting fenced code blocks".to_string(),
        ])
        .add_row(vec![
            "remarkTransforms".to_string(),
            list_transforms(&markdown.remark_transforms),
            "Markdown-AST transforms applied before HTML conversion".to_string(),
        ])
        .add_row(vec![
            "rehypeTransforms".to_string(),
            list_transforms(&markdown.rehype_transforms),
            "HTML-AST transforms applied after HTML conversion".to_string(),
        ])
        .add_row(vec![
            "codeBlockTheme".to_string(),
            theme,
            "Colour theme for rendered code".to_string(),
        ])
        .add_row(vec![
            "wrapLongLines".to_string(),
            wrap,
            "Soft-wrap code blocks instead of scrolling".to_string(),
        ]);
    table.to_string()
}

pub fn render(config: &SiteConfig, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Toml => toml::to_string_pretty(config)?,
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Table => render_table(config),
    })
}

#[instrument(skip_all, fields(?format, defaults))]
pub async fn show(format: OutputFormat, defaults: bool) -> Result<()> {
    let provider = if defaults {
        ConfigProvider::new()
    } else {
        let (provider, path) = super::resolve_provider().await?;
        if let Some(path) = path {
            debug!(path = %path.display(), "Using site configuration");
        }
        provider
    };

    provider::install(provider.get_config())?;
    println!("{}", render(provider::get_config(), format)?);

    Ok(())
}
