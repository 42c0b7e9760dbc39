//! HTML page envelope.
//!
//! The rendered body fragments are wrapped in a fixed envelope with the
//! stylesheet injected verbatim into a `<style>` block.

/// Assemble the final page around the rendered body.
pub(crate) fn assemble(css: &str, body: &str) -> String {
    format!("<html><title>Document</title><style>{css}</style><body>{body}</body></html>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_envelope_shape() {
        assert_eq!(
            assemble("p { color: red; }", "<p class=\"text\">hi</p>"),
            "<html><title>Document</title><style>p { color: red; }</style>\
             <body><p class=\"text\">hi</p></body></html>"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(
            assemble("", ""),
            "<html><title>Document</title><style></style><body></body></html>"
        );
    }
}
