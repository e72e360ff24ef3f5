// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_inline_content(size: usize) -> String {
    let base = "Plain words, `inline code`, **bold text**, *italic text*, a [link](https://example.com/page) and ![an image](https://example.com/img.png). ";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_plain_content(size: usize) -> String {
    "Nothing to see here but plain prose without any markup at all. ".repeat(size)
}
