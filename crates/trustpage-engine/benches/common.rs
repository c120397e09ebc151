// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_post(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("Section {}:\n\n", section));
        content.push_str("Our volunteers worked through the **winter** to keep the shelters open. This helps create realistic paragraphs for benchmarking.\n\n");
        content.push_str("- Item one\n- Item `two`\n- Item *three*\n\n");
        if section % 3 == 0 {
            content.push_str("\"Every gift, however small, makes a real difference to the families we support each year.\"\n\n");
        }
        content.push_str("Why this matters to us and to the people we serve\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(repeats: usize) -> String {
    "Plain **strong** and *emphasis* with `code * here` and a stray * star. ".repeat(repeats)
}
