//! Typed document nodes decoded from JSON.

use serde::Deserialize;
use serde_json::Value;

/// Discriminator selecting how a document node is rendered.
///
/// Decoded once from the JSON `type` field; the renderer dispatches on the
/// variant, never on the raw tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// Inline text paragraph; content must be a literal string.
    Text,
    /// Heading paragraph; content must be a literal string.
    Title,
    /// Generic styled container block.
    Box,
    /// Code listing container.
    Code,
    /// Console session container.
    Console,
    /// Shell command container.
    Command,
    /// Command output container.
    Output,
    /// Reserved kind; recognized but renders nothing.
    Index,
    /// Unordered list of child nodes.
    BulletList,
    /// Ordered list of child nodes.
    NumberedList,
    /// Table with optional header cells and row objects.
    Table,
    /// Anything else; skipped silently.
    #[default]
    Unknown,
}

impl NodeKind {
    /// Decode a `type` tag into a node kind.
    ///
    /// Unrecognized tags map to [`NodeKind::Unknown`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "title" => Self::Title,
            "box" => Self::Box,
            "code" => Self::Code,
            "console" => Self::Console,
            "command" => Self::Command,
            "output" => Self::Output,
            "index" => Self::Index,
            "bullet-list" => Self::BulletList,
            "numbered-list" => Self::NumberedList,
            "table" => Self::Table,
            _ => Self::Unknown,
        }
    }

    /// Canonical tag for this kind, as written in the JSON `type` field.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Title => "title",
            Self::Box => "box",
            Self::Code => "code",
            Self::Console => "console",
            Self::Command => "command",
            Self::Output => "output",
            Self::Index => "index",
            Self::BulletList => "bullet-list",
            Self::NumberedList => "numbered-list",
            Self::Table => "table",
            Self::Unknown => "unknown",
        }
    }

    /// Presentation style used when a node carries no `style` field.
    ///
    /// For lists this is the list class or ordinal style; container kinds
    /// default to an empty class.
    #[must_use]
    pub fn default_style(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::BulletList => "defaultBulletList",
            Self::NumberedList => "1",
            _ => "",
        }
    }
}

/// Polymorphic node payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Literal text, valid for text-like leaves.
    Text(String),
    /// A single child node.
    One(Box<Node>),
    /// An ordered sequence of child nodes.
    Many(Vec<Node>),
}

/// One table row holding its cell nodes in column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    /// Cell nodes, decoded from the row object's `row` array.
    pub cells: Vec<Node>,
}

impl TableRow {
    fn from_value(value: &Value) -> Self {
        let cells = value
            .get("row")
            .and_then(Value::as_array)
            .map(|cells| cells.iter().map(Node::from_value).collect())
            .unwrap_or_default();
        Self { cells }
    }
}

/// A node of the document tree.
///
/// Nodes are immutable value data parsed once from the serialized document
/// array. Decoding is total: a value that is not an object, or whose `type`
/// is missing, non-string or unrecognized, becomes a [`NodeKind::Unknown`]
/// node, and fields of an invalid shape decode as absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct Node {
    /// Render dispatch discriminator (JSON `type`).
    pub kind: NodeKind,
    /// Polymorphic payload; `None` when absent or of an invalid shape.
    pub content: Option<Content>,
    /// Presentation style override; per-kind default applies when `None`.
    pub style: Option<String>,
    /// Heading level, meaningful for `title` nodes only; defaults to 0.
    pub level: u32,
    /// Header cells, `table` nodes only.
    pub headers: Option<Vec<Node>>,
    /// Row objects, `table` nodes only.
    pub rows: Option<Vec<TableRow>>,
}

impl Node {
    /// Decode a JSON value into a node. Never fails.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::unknown();
        };
        Self {
            kind: obj
                .get("type")
                .and_then(Value::as_str)
                .map_or(NodeKind::Unknown, NodeKind::from_tag),
            content: obj.get("content").and_then(decode_content),
            style: obj.get("style").and_then(Value::as_str).map(str::to_owned),
            level: obj.get("level").map_or(0, decode_level),
            headers: obj
                .get("headers")
                .and_then(Value::as_array)
                .map(|cells| cells.iter().map(Self::from_value).collect()),
            rows: obj
                .get("rows")
                .and_then(Value::as_array)
                .map(|rows| rows.iter().map(TableRow::from_value).collect()),
        }
    }

    fn unknown() -> Self {
        Self {
            kind: NodeKind::Unknown,
            content: None,
            style: None,
            level: 0,
            headers: None,
            rows: None,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

fn decode_content(value: &Value) -> Option<Content> {
    match value {
        Value::String(text) => Some(Content::Text(text.clone())),
        Value::Array(items) => Some(Content::Many(items.iter().map(Node::from_value).collect())),
        Value::Object(_) => Some(Content::One(Box::new(Node::from_value(value)))),
        _ => None,
    }
}

/// Decode a heading level: a non-negative integer or numeric string.
/// Anything unparsable yields 0.
fn decode_level(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_kind_tag_roundtrip() {
        for kind in [
            NodeKind::Text,
            NodeKind::Title,
            NodeKind::Box,
            NodeKind::Code,
            NodeKind::Console,
            NodeKind::Command,
            NodeKind::Output,
            NodeKind::Index,
            NodeKind::BulletList,
            NodeKind::NumberedList,
            NodeKind::Table,
        ] {
            assert_eq!(NodeKind::from_tag(kind.tag()), kind);
        }
    }

    #[test]
    fn test_unrecognized_tag_maps_to_unknown() {
        assert_eq!(NodeKind::from_tag("overview"), NodeKind::Unknown);
        assert_eq!(NodeKind::from_tag(""), NodeKind::Unknown);
    }

    #[test]
    fn test_missing_type_maps_to_unknown() {
        let node = Node::from(json!({"content": "orphan"}));
        assert_eq!(node.kind, NodeKind::Unknown);
    }

    #[test]
    fn test_non_string_type_maps_to_unknown() {
        let node = Node::from(json!({"type": 7}));
        assert_eq!(node.kind, NodeKind::Unknown);
    }

    #[test]
    fn test_non_object_decodes_to_unknown() {
        assert_eq!(Node::from(json!("bare string")).kind, NodeKind::Unknown);
        assert_eq!(Node::from(json!(null)).kind, NodeKind::Unknown);
    }

    #[test]
    fn test_string_content() {
        let node = Node::from(json!({"type": "text", "content": "hello"}));
        assert_eq!(node.content, Some(Content::Text("hello".to_owned())));
    }

    #[test]
    fn test_single_child_content() {
        let node = Node::from(json!({
            "type": "box",
            "content": {"type": "text", "content": "inner"}
        }));
        match node.content {
            Some(Content::One(child)) => assert_eq!(child.kind, NodeKind::Text),
            other => panic!("expected single child, got {other:?}"),
        }
    }

    #[test]
    fn test_sequence_content() {
        let node = Node::from(json!({
            "type": "bullet-list",
            "content": [{"type": "text", "content": "a"}, {"type": "text", "content": "b"}]
        }));
        match node.content {
            Some(Content::Many(items)) => assert_eq!(items.len(), 2),
            other => panic!("expected sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_content_shape_is_absent() {
        let node = Node::from(json!({"type": "text", "content": 42}));
        assert_eq!(node.content, None);
        let node = Node::from(json!({"type": "text", "content": true}));
        assert_eq!(node.content, None);
    }

    #[test]
    fn test_level_from_number() {
        let node = Node::from(json!({"type": "title", "level": 2}));
        assert_eq!(node.level, 2);
    }

    #[test]
    fn test_level_from_numeric_string() {
        let node = Node::from(json!({"type": "title", "level": "3"}));
        assert_eq!(node.level, 3);
    }

    #[test]
    fn test_level_fallback_to_zero() {
        assert_eq!(Node::from(json!({"type": "title"})).level, 0);
        assert_eq!(Node::from(json!({"type": "title", "level": -2})).level, 0);
        assert_eq!(Node::from(json!({"type": "title", "level": "high"})).level, 0);
        assert_eq!(Node::from(json!({"type": "title", "level": 1.5})).level, 0);
    }

    #[test]
    fn test_style_override() {
        let node = Node::from(json!({"type": "text", "style": "lead"}));
        assert_eq!(node.style.as_deref(), Some("lead"));
    }

    #[test]
    fn test_default_styles() {
        assert_eq!(NodeKind::Text.default_style(), "text");
        assert_eq!(NodeKind::BulletList.default_style(), "defaultBulletList");
        assert_eq!(NodeKind::NumberedList.default_style(), "1");
        assert_eq!(NodeKind::Box.default_style(), "");
        assert_eq!(NodeKind::Table.default_style(), "");
    }

    #[test]
    fn test_table_decoding() {
        let node = Node::from(json!({
            "type": "table",
            "headers": [{"type": "text", "content": "A"}, {"type": "text", "content": "B"}],
            "rows": [
                {"row": [{"type": "text", "content": "1"}, {"type": "text", "content": "2"}]}
            ]
        }));
        assert_eq!(node.kind, NodeKind::Table);
        assert_eq!(node.headers.as_ref().map(Vec::len), Some(2));
        let rows = node.rows.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells.len(), 2);
    }

    #[test]
    fn test_table_row_without_cells_is_empty() {
        let node = Node::from(json!({
            "type": "table",
            "rows": [{"note": "no row key"}]
        }));
        let rows = node.rows.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].cells.is_empty());
    }
}
