//! Inline markup translation and document tree rendering.
//!
//! Two components, consumed leaf-first:
//!
//! - [`translate`]: a pure function turning the inline markup language
//!   embedded in text content (style spans, link tags, backslash escapes)
//!   into HTML.
//! - [`DocumentRenderer`]: walks a decoded node tree depth-first, left to
//!   right, appending HTML fragments to an owned sink in document order.
//!
//! # Example
//!
//! ```
//! use dox_renderer::{DocumentRenderer, translate};
//!
//! assert_eq!(
//!     translate("[warn]{careful}"),
//!     r#"<span class="warn">careful</span>"#
//! );
//!
//! let nodes = dox_document::parse(r#"[{"type": "text", "content": "hi"}]"#).unwrap();
//! let result = DocumentRenderer::new().render(&nodes);
//! assert_eq!(result.html, r#"<p class="text">hi</p>"#);
//! ```

mod markup;
mod renderer;

pub use markup::translate;
pub use renderer::{DocumentRenderer, RenderResult};
