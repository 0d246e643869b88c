use serde::{Deserialize, Deserializer, Serialize};

/// Reference to a markdown-AST (remark) or HTML-AST (rehype) transform.
///
/// Transforms are never executed here, the build tool resolves the name. Two
/// forms are accepted:
///
/// ```toml
/// remarkTransforms = ["remark-toc", { name = "remark-gfm", options = { singleTilde = false } }]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransformRef {
    Name(String),
    Configured(ConfiguredTransform),
}

/// Table form of a transform, misspelled keys are rejected rather than dropped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfiguredTransform {
    pub name: String,
    #[serde(default, skip_serializing_if = "toml::Table::is_empty")]
    pub options: toml::Table,
}

impl TransformRef {
    pub fn configured(name: &str, options: toml::Table) -> Self {
        Self::Configured(ConfiguredTransform {
            name: name.to_string(),
            options,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Configured(transform) => &transform.name,
        }
    }

    pub fn options(&self) -> Option<&toml::Table> {
        match self {
            Self::Name(_) => None,
            Self::Configured(transform) => Some(&transform.options),
        }
    }
}

impl From<&str> for TransformRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Deserializes a transform sequence where a missing or `null` value means "no transforms"
pub(crate) fn nullable_seq<'de, D>(deserializer: D) -> Result<Vec<TransformRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TransformRef>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "nullable_seq")]
        transforms: Vec<TransformRef>,
    }

    #[test]
    fn accepts_both_forms_in_order() {
        let holder: Holder = toml::from_str(
            r#"transforms = ["remark-toc", { name = "remark-gfm", options = { singleTilde = false } }]"#,
        )
        .unwrap();

        let names: Vec<&str> = holder.transforms.iter().map(TransformRef::name).collect();
        assert_eq!(names, ["remark-toc", "remark-gfm"]);
        assert!(holder.transforms[0].options().is_none());
        assert_eq!(
            holder.transforms[1].options().unwrap()["singleTilde"],
            toml::Value::Boolean(false)
        );
    }

    #[test]
    fn absent_null_and_empty_all_normalise_to_empty() {
        let absent: Holder = serde_json::from_str("{}").unwrap();
        let null: Holder = serde_json::from_str(r#"{"transforms": null}"#).unwrap();
        let empty: Holder = serde_json::from_str(r#"{"transforms": []}"#).unwrap();

        assert!(absent.transforms.is_empty());
        assert!(null.transforms.is_empty());
        assert!(empty.transforms.is_empty());
    }

    #[test]
    fn configured_without_options_serializes_without_the_table() {
        let transform = TransformRef::configured("rehype-slug", toml::Table::new());
        assert_eq!(
            serde_json::to_string(&transform).unwrap(),
            r#"{"name":"rehype-slug"}"#
        );
    }

    #[test]
    fn rejects_misspelled_keys_in_transform_tables() {
        let result = toml::from_str::<Holder>(
            r#"transforms = [{ name = "remark-gfm", option = { singleTilde = false } }]"#,
        );
        assert!(result.is_err());
    }
}
