// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_ and `code`.\n\n- Bullet point\n- Another [item](/item)\n\n1. First\n2. Second\n\n> A quote\n> over two lines\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_text(spans: usize) -> String {
    let mut text = String::new();
    for i in 0..spans {
        match i % 5 {
            0 => text.push_str("plain words then "),
            1 => text.push_str(&format!("**bold {i}** ")),
            2 => text.push_str(&format!("_italic {i}_ ")),
            3 => text.push_str(&format!("[link {i}](/page/{i}) ")),
            _ => text.push_str(&format!("![image {i}](/img/{i}.png) ")),
        }
    }
    text
}
