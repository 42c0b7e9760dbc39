//! Document node model for dox.
//!
//! Decodes a JSON document description into a tree of typed [`Node`] values.
//! Decoding is lenient by design: any JSON value decodes to *some* node.
//! Unrecognized `type` tags map to [`NodeKind::Unknown`], and fields of an
//! invalid shape are dropped rather than failing the parse. Only the outer
//! parse of the source text itself can fail.

mod node;

pub use node::{Content, Node, NodeKind, TableRow};

use thiserror::Error;

/// Errors from parsing a document source.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The source is not valid JSON or its top level is not an array.
    #[error("invalid document source: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON source string into a document node sequence.
///
/// # Errors
///
/// Returns [`DocumentError::Json`] if the source is not valid JSON or its
/// top level is not an array. Individual malformed nodes never fail the
/// parse; they decode to [`NodeKind::Unknown`] nodes, which render as
/// nothing.
pub fn parse(source: &str) -> Result<Vec<Node>, DocumentError> {
    Ok(serde_json::from_str(source)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_array() {
        let nodes = parse(r#"[{"type": "text", "content": "hi"}]"#).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, NodeKind::Text);
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse("[{").is_err());
    }

    #[test]
    fn test_parse_rejects_non_array_top_level() {
        assert!(parse(r#"{"type": "text"}"#).is_err());
    }

    #[test]
    fn test_parse_keeps_malformed_nodes_as_unknown() {
        let nodes = parse(r#"[{"type": "text"}, "stray", 42]"#).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].kind, NodeKind::Text);
        assert_eq!(nodes[1].kind, NodeKind::Unknown);
        assert_eq!(nodes[2].kind, NodeKind::Unknown);
    }
}
