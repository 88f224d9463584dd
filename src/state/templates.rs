//! Template catalog model types.
//!
//! DESIGN
//! ======
//! Descriptors are transient render-time values handed to the card component
//! by the host page. They carry serde derives (camelCase field names) so a
//! catalog fetched as JSON deserializes directly into card props. Tag
//! polymorphism (plain string vs. structured record) is an exhaustive enum so
//! the renderer's dispatch is type-checked rather than duck-typed.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

/// A selectable template shown as one card in a gallery.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Ordered display sequence; `None` and `Some(vec![])` both suppress the
    /// tags section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// One tag attached to a template.
///
/// A JSON string deserializes to `Plain`, a JSON object to `Detailed`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Plain(String),
    Detailed(TagDetails),
}

/// Structured tag record: machine name plus optional display name and logo.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDetails {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl TagDetails {
    /// Human-facing label: `display_name` when present, else `name`.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// Rendering strategy applied uniformly to all tags of one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagDisplayMode {
    /// Logo icon wrapped in a hover tooltip.
    Icon,
    /// Display label inside a compact badge.
    #[default]
    Label,
    /// Display label as text with a ", " separator between tags.
    #[serde(rename = "default")]
    Text,
}

/// Horizontal alignment of the card's text region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}
