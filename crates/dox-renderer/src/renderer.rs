//! Document tree rendering.
//!
//! [`DocumentRenderer`] walks a decoded node sequence and appends HTML
//! fragments to an owned sink in document order. Dispatch is a pure
//! function of the node kind; a malformed node never aborts the walk.

use std::fmt::Write;

use dox_document::{Content, Node, NodeKind};
use tracing::warn;

use crate::markup::translate;

/// Result of rendering a document tree.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML body fragments in document order.
    pub html: String,
    /// Structural mismatch diagnostics collected during rendering.
    pub warnings: Vec<String>,
}

/// Document tree renderer.
///
/// Renders depth-first, left to right. The only state threaded through the
/// recursion is the append-only output sink and the warning list; there is
/// no shared state across [`render`](Self::render) calls.
///
/// Error handling is local degradation: a node whose content shape does not
/// match its kind yields no output for that field and a recorded warning,
/// while siblings and ancestors render normally. Unknown kinds are skipped
/// silently.
pub struct DocumentRenderer {
    output: String,
    warnings: Vec<String>,
}

impl DocumentRenderer {
    /// Create a new renderer with an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            warnings: Vec::new(),
        }
    }

    /// Render a sequence of top-level nodes and return the result.
    #[must_use]
    pub fn render(mut self, nodes: &[Node]) -> RenderResult {
        for node in nodes {
            self.render_node(node);
        }
        RenderResult {
            html: self.output,
            warnings: self.warnings,
        }
    }

    fn render_node(&mut self, node: &Node) {
        match node.kind {
            NodeKind::Text => self.text(node),
            NodeKind::Title => self.title(node),
            NodeKind::Box
            | NodeKind::Code
            | NodeKind::Console
            | NodeKind::Command
            | NodeKind::Output => self.container(node),
            NodeKind::BulletList => self.bullet_list(node),
            NodeKind::NumberedList => self.numbered_list(node),
            NodeKind::Table => self.table(node),
            // `index` is reserved: recognized, renders nothing.
            NodeKind::Index | NodeKind::Unknown => {}
        }
    }

    fn text(&mut self, node: &Node) {
        match &node.content {
            Some(Content::Text(text)) => {
                let class = style_class(node);
                write!(self.output, r#"<p class="{class}">{}</p>"#, translate(text)).unwrap();
            }
            _ => self.mismatch(node.kind, "a literal string"),
        }
    }

    fn title(&mut self, node: &Node) {
        match &node.content {
            Some(Content::Text(text)) => {
                write!(
                    self.output,
                    r#"<p class="title{}">{}</p>"#,
                    node.level,
                    translate(text)
                )
                .unwrap();
            }
            _ => self.mismatch(node.kind, "a literal string"),
        }
    }

    fn container(&mut self, node: &Node) {
        let class = style_class(node);
        write!(self.output, r#"<div class="{class}">"#).unwrap();
        match &node.content {
            Some(Content::Many(children)) => {
                for child in children {
                    self.render_node(child);
                }
            }
            Some(Content::One(child)) => self.render_node(child),
            Some(Content::Text(_)) => self.mismatch(node.kind, "child nodes"),
            None => {}
        }
        self.output.push_str("</div>");
    }

    fn bullet_list(&mut self, node: &Node) {
        let class = style_class(node);
        write!(self.output, r#"<ul class="{class}">"#).unwrap();
        self.list_items(node);
        self.output.push_str("</ul>");
    }

    fn numbered_list(&mut self, node: &Node) {
        let ordinal = style_class(node);
        write!(self.output, r#"<ol type="{ordinal}">"#).unwrap();
        self.list_items(node);
        self.output.push_str("</ol>");
    }

    fn list_items(&mut self, node: &Node) {
        match &node.content {
            Some(Content::Many(items)) => {
                for item in items {
                    self.output.push_str("<li>");
                    self.render_node(item);
                    self.output.push_str("</li>");
                }
            }
            Some(_) => self.mismatch(node.kind, "a sequence of child nodes"),
            None => {}
        }
    }

    fn table(&mut self, node: &Node) {
        let class = style_class(node);
        write!(self.output, r#"<table class="{class}">"#).unwrap();
        if let Some(headers) = &node.headers {
            self.output.push_str("<thead><tr>");
            for cell in headers {
                self.output.push_str("<th>");
                self.render_node(cell);
                self.output.push_str("</th>");
            }
            self.output.push_str("</tr></thead>");
        }
        if let Some(rows) = &node.rows {
            self.output.push_str("<tbody>");
            for row in rows {
                self.output.push_str("<tr>");
                for cell in &row.cells {
                    self.output.push_str("<td>");
                    self.render_node(cell);
                    self.output.push_str("</td>");
                }
                self.output.push_str("</tr>");
            }
            self.output.push_str("</tbody>");
        }
        self.output.push_str("</table>");
    }

    fn mismatch(&mut self, kind: NodeKind, expected: &str) {
        let message = format!("{} node content is not {expected}; skipped", kind.tag());
        warn!("{message}");
        self.warnings.push(message);
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Node style with the per-kind default applied.
fn style_class(node: &Node) -> &str {
    node.style.as_deref().unwrap_or(node.kind.default_style())
}
