//! Inline markup translation.
//!
//! Translates the small markup language embedded in text content into HTML
//! fragments. Three passes run in fixed order, each scanning the previous
//! pass's output:
//!
//! 1. link tags: `[label](url)` becomes `<a href="url">label</a>`
//! 2. style spans: `[class]{body}` becomes `<span class="class">body</span>`
//! 3. unescaping: `\[` `\]` `\(` `\)` `\{` `\}` collapse to the bare character
//!
//! A backslash escape protects a structural character from the first two
//! passes; the final pass strips the backslash. All structural characters
//! are ASCII, so the passes scan bytes; slices are only taken at structural
//! positions, which are always char boundaries.

use std::fmt::Write;

/// Translate inline markup to HTML.
///
/// Pure function: no state survives a call and it is safe to invoke from
/// concurrent threads. Malformed or unterminated markup degrades to the raw
/// text of the affected region; the function always returns a complete
/// string.
#[must_use]
pub fn translate(text: &str) -> String {
    unescape_pass(&style_pass(&link_pass(text)))
}

/// Scan state for the link pass, reset per input string.
#[derive(Default)]
struct LinkScan {
    /// Start of the pending literal run.
    text_start: usize,
    /// Offset of the `[` opening the current label candidate.
    label_start: Option<usize>,
    /// Offset of the `]` closing the current label.
    label_end: Option<usize>,
    /// Offset of the `(` opening the URL span.
    url_start: Option<usize>,
}

impl LinkScan {
    fn abandon(&mut self) {
        self.label_start = None;
        self.label_end = None;
        self.url_start = None;
    }
}

/// Rewrite `[label](url)` link tags to anchor elements.
///
/// An unescaped `[` opens a candidate label; a second `[` before the
/// matching `]` abandons the candidate and restarts from the new one. The
/// `(` must directly follow the closing `]`, otherwise the candidate is
/// abandoned. Inside the URL span only an unescaped `)` terminates; an
/// escaped `\)` stays as literal URL content for the unescape pass.
/// Unterminated candidates leave their region untouched, brackets included.
fn link_pass(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut scan = LinkScan::default();

    for (i, &b) in bytes.iter().enumerate() {
        let escaped = i > 0 && bytes[i - 1] == b'\\';
        match b {
            b'[' if !escaped && scan.url_start.is_none() => {
                scan.label_start = Some(i);
                scan.label_end = None;
            }
            b']' if !escaped && scan.url_start.is_none() => {
                if scan.label_end.is_some() {
                    // Stray `]` after a closed label resets the candidate.
                    scan.abandon();
                } else if scan.label_start.is_some() {
                    scan.label_end = Some(i);
                }
            }
            b'(' if scan.url_start.is_none() => match scan.label_end {
                Some(end) if i == end + 1 => scan.url_start = Some(i),
                Some(_) => scan.abandon(),
                None => {}
            },
            b')' if !escaped => {
                if let (Some(start), Some(end), Some(url)) =
                    (scan.label_start, scan.label_end, scan.url_start)
                {
                    out.push_str(&text[scan.text_start..start]);
                    let label = &text[start + 1..end];
                    let href = &text[url + 1..i];
                    write!(out, r#"<a href="{href}">{label}</a>"#).unwrap();
                    scan.text_start = i + 1;
                    scan.abandon();
                }
            }
            _ => {}
        }
    }

    out.push_str(&text[scan.text_start..]);
    out
}

/// Scan state for the style pass, reset per input string.
#[derive(Default)]
struct SpanScan {
    /// Start of the pending literal run.
    text_start: usize,
    /// Offset of the `[` opening the current class-name candidate.
    tag_start: Option<usize>,
    /// Offset of the `]` closing the current class name.
    tag_end: Option<usize>,
    /// Open span nesting depth.
    depth: usize,
}

/// Rewrite `[class]{body}` style spans to `<span>` elements.
///
/// A `{` opens a span only when it directly follows a closed `[...]` tag.
/// A `}` closes the innermost open span unless escaped, in which case the
/// backslash is dropped and the brace stays pending as literal text. Spans
/// still open at end of input each get a matching closing tag so output
/// stays balanced.
fn style_pass(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut scan = SpanScan::default();

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'[' => {
                scan.tag_start = Some(i);
                scan.tag_end = None;
            }
            b']' => {
                if scan.tag_start.is_some() {
                    scan.tag_end = Some(i);
                }
            }
            b'{' => {
                if let (Some(start), Some(end)) = (scan.tag_start, scan.tag_end) {
                    if i == end + 1 {
                        out.push_str(&text[scan.text_start..start]);
                        let class = &text[start + 1..end];
                        write!(out, r#"<span class="{class}">"#).unwrap();
                        scan.depth += 1;
                        scan.tag_start = None;
                        scan.tag_end = None;
                        scan.text_start = i + 1;
                    }
                }
            }
            b'}' if scan.depth > 0 => {
                if i > 0 && bytes[i - 1] == b'\\' {
                    // Escaped: drop the backslash, leave the brace pending
                    // for the unescape pass.
                    out.push_str(&text[scan.text_start..i - 1]);
                    scan.text_start = i;
                } else {
                    out.push_str(&text[scan.text_start..i]);
                    out.push_str("</span>");
                    scan.depth -= 1;
                    scan.text_start = i + 1;
                }
            }
            _ => {}
        }
    }

    out.push_str(&text[scan.text_start..]);
    for _ in 0..scan.depth {
        out.push_str("</span>");
    }
    out
}

fn is_structural(b: u8) -> bool {
    matches!(b, b'[' | b']' | b'(' | b')' | b'{' | b'}')
}

/// Collapse `\X` escape sequences for structural characters.
///
/// A backslash not followed by a structural character is left as-is.
/// Idempotent on already-unescaped text.
fn unescape_pass(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() && is_structural(bytes[i + 1]) {
            out.push_str(&text[start..i]);
            out.push(char::from(bytes[i + 1]));
            i += 2;
            start = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&text[start..]);
    out
}
