use serde::{Deserialize, Serialize};

mod highlighter;
mod transform;
mod validator;

pub use highlighter::SyntaxHighlighter;
pub use transform::TransformRef;
pub use validator::{format_issues, validate, ConfigIssue, Severity};

use transform::nullable_seq;

/// Name of the configuration file expected at the site root
pub const CONFIG_FILE: &str = "sitemark.toml";

pub const DEFAULT_CODE_BLOCK_THEME: &str = "dark-plus";
pub const DEFAULT_WRAP_LONG_LINES: bool = true;

#[derive(Default, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub markdown: MarkdownOptions,
}

/// Markdown processing options handed to the site builder.
///
/// Deserialization goes through `MarkdownOptionsRepr` so that missing keys
/// fall back to their defaults and the builder's own spelling of the keys
/// (`syntaxHighlight`, `remarkPlugins`, `shikiConfig`, ...) is understood.
/// Serialization always emits the canonical camelCase keys.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", from = "MarkdownOptionsRepr")]
pub struct MarkdownOptions {
    pub syntax_highlighter: SyntaxHighlighter,
    pub remark_transforms: Vec<TransformRef>,
    pub rehype_transforms: Vec<TransformRef>,
    pub code_block_theme: String,
    pub wrap_long_lines: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            syntax_highlighter: SyntaxHighlighter::default(),
            remark_transforms: Vec::new(),
            rehype_transforms: Vec::new(),
            code_block_theme: DEFAULT_CODE_BLOCK_THEME.to_string(),
            wrap_long_lines: DEFAULT_WRAP_LONG_LINES,
        }
    }
}

/// Theme and wrapping as seen by the engine that renders them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBlockStyle<'a> {
    pub theme: &'a str,
    pub wrap: bool,
}

impl MarkdownOptions {
    /// Returns the code block style only when the active engine consumes it.
    ///
    /// Theme and wrap are kept even under prism, but they are inert there: only
    /// one highlighting engine is active per build.
    pub fn code_block_style(&self) -> Option<CodeBlockStyle<'_>> {
        self.syntax_highlighter
            .styles_code_blocks()
            .then_some(CodeBlockStyle {
                theme: &self.code_block_theme,
                wrap: self.wrap_long_lines,
            })
    }

    /// Whether theme or wrap differ from the defaults
    pub fn has_custom_code_block_style(&self) -> bool {
        self.code_block_theme != DEFAULT_CODE_BLOCK_THEME
            || self.wrap_long_lines != DEFAULT_WRAP_LONG_LINES
    }
}

#[derive(Default, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
struct ShikiConfig {
    theme: Option<String>,
    wrap: Option<bool>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
struct MarkdownOptionsRepr {
    #[serde(alias = "syntaxHighlight")]
    syntax_highlighter: Option<SyntaxHighlighter>,
    #[serde(alias = "remarkPlugins", deserialize_with = "nullable_seq")]
    remark_transforms: Vec<TransformRef>,
    #[serde(alias = "rehypePlugins", deserialize_with = "nullable_seq")]
    rehype_transforms: Vec<TransformRef>,
    code_block_theme: Option<String>,
    wrap_long_lines: Option<bool>,
    shiki_config: Option<ShikiConfig>,
}

impl From<MarkdownOptionsRepr> for MarkdownOptions {
    fn from(repr: MarkdownOptionsRepr) -> Self {
        // Flat keys win over the nested shikiConfig table
        let shiki = repr.shiki_config.unwrap_or_default();
        Self {
            syntax_highlighter: repr.syntax_highlighter.unwrap_or_default(),
            remark_transforms: repr.remark_transforms,
            rehype_transforms: repr.rehype_transforms,
            code_block_theme: repr
                .code_block_theme
                .or(shiki.theme)
                .unwrap_or_else(|| DEFAULT_CODE_BLOCK_THEME.to_string()),
            wrap_long_lines: repr
                .wrap_long_lines
                .or(shiki.wrap)
                .unwrap_or(DEFAULT_WRAP_LONG_LINES),
        }
    }
}
