use insta::assert_snapshot;
use markdown_sitegen_engine::{
    BlockType, Error, ParseError, TextNode, TextType, extract_inline_spans,
    parsing::blocks::{block_to_block_type, markdown_to_blocks},
    render_document,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn fixture_all_blocks() {
    assert_fixture("all_blocks");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let html = render_document(&md).unwrap();
    assert_eq!(html, expected.trim_end_matches('\n'));
}

#[test]
fn title_and_bold_paragraph() {
    assert_eq!(
        render_document("# Title\n\nSome **bold** text").unwrap(),
        "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>"
    );
}

#[test]
fn code_block_bypasses_inline_parsing() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_snapshot!(
        render_document(md).unwrap(),
        @r"
    <div><pre><code>This is text that _should_ remain
    the **same** even with inline stuff
    </code></pre></div>
    "
    );
}

#[test]
fn lists_and_quotes() {
    let md = "
- This is a list
- with items
- and _more_ items

1. This is an `ordered` list
2. with items
3. and more items

> This is a
> blockquote block
";
    assert_snapshot!(
        render_document(md).unwrap(),
        @"<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul><ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol><blockquote>This is a blockquote block</blockquote></div>"
    );
}

#[test]
fn ordered_list_with_gap_is_a_paragraph() {
    assert_eq!(block_to_block_type("1. a\n3. b"), BlockType::Paragraph);
    assert_eq!(
        render_document("1. a\n3. b").unwrap(),
        "<div><p>1. a 3. b</p></div>"
    );
}

#[test]
fn empty_input() {
    assert!(extract_inline_spans("").unwrap().is_empty());
    assert!(markdown_to_blocks("").is_empty());
    assert_eq!(render_document("").unwrap(), "<div></div>");
}

#[rstest]
#[case::bold("**bold")]
#[case::italic("an _open italic")]
#[case::code("`tick")]
#[case::in_heading("# Title **oops")]
#[case::in_list_item("- fine\n- `broken")]
fn unbalanced_delimiters_fail(#[case] md: &str) {
    assert!(matches!(
        render_document(md),
        Err(Error::Parse(ParseError::UnbalancedDelimiter { .. }))
    ));
}

#[rstest]
#[case("plain words")]
#[case("**bold** and _italic_ and `code`")]
#[case("# Heading with **bold**\n\n- _a_\n- `b`\n\n> **q**")]
#[case("****")]
fn balanced_delimiters_succeed(#[case] md: &str) {
    assert!(render_document(md).is_ok());
}

#[test]
fn image_is_never_a_link() {
    assert_eq!(
        extract_inline_spans("![a](u)").unwrap(),
        vec![TextNode::new("a", TextType::Image { url: "u".to_string() })]
    );
}

#[test]
fn repeated_links_render_each_occurrence() {
    assert_eq!(
        render_document("[x](/a) then [x](/a) again").unwrap(),
        r#"<div><p><a href="/a">x</a> then <a href="/a">x</a> again</p></div>"#
    );
}

#[test]
fn segmentation_is_a_fixed_point_on_single_blocks() {
    for block in ["# Heading", "- a\n- b", "> q\n> r", "plain\ntext"] {
        assert_eq!(markdown_to_blocks(block), vec![block.to_string()]);
    }
}

#[test]
fn error_messages_name_the_offending_text() {
    let err = render_document("_open").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"invalid markdown syntax: unmatched `_` in "_open""#
    );
}
