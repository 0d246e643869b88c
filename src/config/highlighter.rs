use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Engine responsible for colouring fenced code blocks.
///
/// Serialized as `"prism"`, `"shiki"` or the boolean `false` when highlighting
/// is turned off, which is the shape the site builder expects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxHighlighter {
    #[default]
    Prism,
    Shiki,
    Disabled,
}

impl SyntaxHighlighter {
    pub const ALL: [SyntaxHighlighter; 3] = [Self::Prism, Self::Shiki, Self::Disabled];

    /// Whether the engine consumes `codeBlockTheme` and `wrapLongLines`.
    ///
    /// Only shiki renders themed, optionally wrapped blocks at build time;
    /// prism ships its styling through a stylesheet instead.
    pub fn styles_code_blocks(&self) -> bool {
        matches!(self, Self::Shiki)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prism => "prism",
            Self::Shiki => "shiki",
            Self::Disabled => "none",
        }
    }
}

impl fmt::Display for SyntaxHighlighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyntaxHighlighter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prism" => Ok(Self::Prism),
            "shiki" => Ok(Self::Shiki),
            "none" | "false" => Ok(Self::Disabled),
            other => {
                let expected: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
                Err(format!(
                    "unknown syntax highlighter '{}' (expected one of {} or false)",
                    other,
                    expected.join(", ")
                ))
            }
        }
    }
}

impl Serialize for SyntaxHighlighter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            engine => serializer.serialize_str(engine.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for SyntaxHighlighter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(false) => Ok(Self::Disabled),
            Repr::Flag(true) => Err(de::Error::custom(
                "`true` is not a syntax highlighter, name an engine (prism or shiki) instead",
            )),
            Repr::Name(name) => name.parse().map_err(de::Error::custom),
        }
    }
}
