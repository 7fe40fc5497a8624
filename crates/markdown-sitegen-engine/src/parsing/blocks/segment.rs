/// Splits a document into blocks at blank lines.
///
/// Any run of blank (or whitespace-only) lines is one separator. Each block is
/// trimmed and empty blocks are dropped, so the result never holds an empty
/// string.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = vec![];
    let mut current: Vec<&str> = vec![];

    for line in markdown.lines() {
        if line.trim().is_empty() {
            flush_block(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    flush_block(&mut blocks, &mut current);

    blocks
}

fn flush_block(blocks: &mut Vec<String>, lines: &mut Vec<&str>) {
    if lines.is_empty() {
        return;
    }
    let block = lines.join("\n");
    lines.clear();

    let block = block.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
}
