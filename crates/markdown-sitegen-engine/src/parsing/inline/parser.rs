use crate::parsing::error::ParseError;

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Reference},
    types::{TextNode, TextType},
};

/// A `[label](url)` or `![label](url)` occurrence located by byte position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceMatch<'a> {
    /// Byte offset of the opener (`[` or `!`).
    pub start: usize,
    /// Byte offset just past the closing `)`.
    pub end: usize,
    pub label: &'a str,
    pub url: &'a str,
}

/// Parses a run of inline Markdown into a sequence of [`TextNode`]s.
///
/// # Precedence
/// Delimiters are split in [`Emphasis::PRECEDENCE`] order, then images, then
/// links. Every pass only touches nodes that are still plain text, so a span
/// claimed by an earlier pass is never re-split by a later one.
///
/// # Errors
/// [`ParseError::UnbalancedDelimiter`] when a delimiter has no closing partner.
pub fn text_to_text_nodes(text: &str) -> Result<Vec<TextNode>, ParseError> {
    let mut nodes = vec![TextNode::plain(text)];
    for style in Emphasis::PRECEDENCE {
        nodes = split_nodes_delimiter(nodes, style)?;
    }
    let nodes = split_nodes_image(nodes);
    Ok(split_nodes_link(nodes))
}

/// Splits every plain node on `style`'s delimiter.
///
/// Text between an opening delimiter and the next occurrence becomes a span of
/// `style`; text outside stays plain. Empty fragments are dropped.
pub fn split_nodes_delimiter(
    nodes: Vec<TextNode>,
    style: Emphasis,
) -> Result<Vec<TextNode>, ParseError> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }
        split_delimited(&node.text, style, &mut out)?;
    }
    Ok(out)
}

fn split_delimited(text: &str, style: Emphasis, out: &mut Vec<TextNode>) -> Result<(), ParseError> {
    let delimiter = style.delimiter().as_bytes();
    let mut cur = Cursor::new(text);
    let mut text_start = cur.pos();

    while let Some(open) = cur.find(delimiter) {
        let inner_start = open + delimiter.len();
        cur.seek(inner_start);
        let Some(close) = cur.find(delimiter) else {
            return Err(ParseError::UnbalancedDelimiter {
                delimiter: style.delimiter(),
                text: text.to_string(),
            });
        };

        flush_text(out, &text[text_start..open]);
        if close > inner_start {
            out.push(TextNode::new(&text[inner_start..close], style.text_type()));
        }

        cur.seek(close + delimiter.len());
        text_start = cur.pos();
    }

    flush_text(out, &text[text_start..]);
    Ok(())
}

/// Splits every plain node around its `![alt](url)` images.
pub fn split_nodes_image(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_reference(nodes, Reference::Image)
}

/// Splits every plain node around its `[text](url)` links.
pub fn split_nodes_link(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_reference(nodes, Reference::Link)
}

fn split_nodes_reference(nodes: Vec<TextNode>, kind: Reference) -> Vec<TextNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        let mut text_start = 0;
        for m in find_references(&node.text, kind) {
            flush_text(&mut out, &node.text[text_start..m.start]);
            let kind = match kind {
                Reference::Image => TextType::Image {
                    url: m.url.to_string(),
                },
                Reference::Link => TextType::Link {
                    url: m.url.to_string(),
                },
            };
            out.push(TextNode::new(m.label, kind));
            text_start = m.end;
        }
        flush_text(&mut out, &node.text[text_start..]);
    }
    out
}

/// Returns all `![alt](url)` images in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<ReferenceMatch<'_>> {
    find_references(text, Reference::Image)
}

/// Returns all `[text](url)` links in `text`, left to right.
///
/// A `[` directly after `!` belongs to an image and never starts a link.
pub fn extract_markdown_links(text: &str) -> Vec<ReferenceMatch<'_>> {
    find_references(text, Reference::Link)
}

fn find_references(text: &str, kind: Reference) -> Vec<ReferenceMatch<'_>> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    while !cur.eof() {
        if let Some(m) = try_parse_reference(&mut cur, kind) {
            out.push(m);
            continue;
        }
        cur.bump();
    }
    out
}

/// Attempts to parse a reference starting at the current position.
///
/// Labels may not contain `[` or `]`, urls may not contain `(` or `)`.
/// On failure the cursor is left untouched.
fn try_parse_reference<'a>(cur: &mut Cursor<'a>, kind: Reference) -> Option<ReferenceMatch<'a>> {
    if !cur.starts_with(kind.opener()) {
        return None;
    }
    if kind == Reference::Link && cur.prev() == Some(Reference::BANG) {
        return None;
    }

    let mut probe = cur.clone();
    let start = probe.pos();
    probe.bump_n(kind.opener().len());

    let label = scan_enclosed(&mut probe, Reference::LABEL_OPEN, Reference::LABEL_CLOSE)?;
    if probe.peek() != Some(Reference::URL_OPEN) {
        return None;
    }
    probe.bump(); // (
    let url = scan_enclosed(&mut probe, Reference::URL_OPEN, Reference::URL_CLOSE)?;

    *cur = probe;
    Some(ReferenceMatch {
        start,
        end: cur.pos(),
        label,
        url,
    })
}

/// Consumes up to and including `close`, returning the text before it.
///
/// Gives up on a nested `open` or at end of input.
fn scan_enclosed<'a>(cur: &mut Cursor<'a>, open: u8, close: u8) -> Option<&'a str> {
    let start = cur.pos();
    loop {
        let b = cur.peek()?;
        if b == close {
            let inner = &cur.s[start..cur.pos()];
            cur.bump();
            return Some(inner);
        }
        if b == open {
            return None;
        }
        cur.bump();
    }
}

fn flush_text(out: &mut Vec<TextNode>, text: &str) {
    if !text.is_empty() {
        out.push(TextNode::plain(text));
    }
}
