use std::{collections::HashSet, fmt, path::Path, sync::OnceLock};

use regex::Regex;

use super::{SiteConfig, TransformRef};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigIssue {
    InvalidTheme(String),
    EmptyTransformName {
        field: &'static str,
        index: usize,
    },
    DuplicateTransform {
        field: &'static str,
        name: String,
    },
    InertCodeBlockStyle {
        engine: String,
    },
}

impl ConfigIssue {
    pub fn severity(&self) -> Severity {
        match self {
            Self::InertCodeBlockStyle { .. } | Self::DuplicateTransform { .. } => Severity::Warning,
            Self::InvalidTheme(_) | Self::EmptyTransformName { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTheme(theme) => write!(
                f,
                "Invalid codeBlockTheme '{}': expected lowercase letters, digits and dashes",
                theme
            ),
            Self::EmptyTransformName { field, index } => {
                write!(f, "Empty transform name in '{}' at position {}", field, index)
            }
            Self::DuplicateTransform { field, name } => {
                write!(f, "Transform '{}' is listed more than once in '{}'", name, field)
            }
            Self::InertCodeBlockStyle { engine } => write!(
                f,
                "codeBlockTheme and wrapLongLines only apply to shiki, they are ignored with syntaxHighlighter = {}",
                engine
            ),
        }
    }
}

fn theme_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("theme pattern is valid"))
}

fn check_transforms(field: &'static str, transforms: &[TransformRef], issues: &mut Vec<ConfigIssue>) {
    let mut seen = HashSet::new();
    for (index, transform) in transforms.iter().enumerate() {
        let name = transform.name().trim();
        if name.is_empty() {
            issues.push(ConfigIssue::EmptyTransformName { field, index });
        } else if !seen.insert(name) {
            issues.push(ConfigIssue::DuplicateTransform {
                field,
                name: name.to_string(),
            });
        }
    }
}

/// Checks a configuration for values the site builder would reject or ignore
pub fn validate(config: &SiteConfig) -> Vec<ConfigIssue> {
    let markdown = &config.markdown;
    let mut issues = Vec::new();

    // An inert theme is covered by the InertCodeBlockStyle warning below
    if markdown.syntax_highlighter.styles_code_blocks()
        && !theme_pattern().is_match(&markdown.code_block_theme)
    {
        issues.push(ConfigIssue::InvalidTheme(markdown.code_block_theme.clone()));
    }

    check_transforms("remarkTransforms", &markdown.remark_transforms, &mut issues);
    check_transforms("rehypeTransforms", &markdown.rehype_transforms, &mut issues);

    if !markdown.syntax_highlighter.styles_code_blocks() && markdown.has_custom_code_block_style() {
        issues.push(ConfigIssue::InertCodeBlockStyle {
            engine: markdown.syntax_highlighter.to_string(),
        });
    }

    issues
}

pub fn format_issues(file_path: &Path, issues: &[ConfigIssue]) -> String {
    let errors = issues
        .iter()
        .filter(|issue| issue.severity() == Severity::Error)
        .count();
    let mut output = format!(
        "{}: Validation {} for '{}'\n",
        if errors == 0 { "Warning" } else { "Error" },
        if errors == 0 { "issues" } else { "failed" },
        file_path.display()
    );
    for issue in issues {
        let marker = match issue.severity() {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        output.push_str(&format!("  → [{}] {}\n", marker, issue));
    }
    output
}
