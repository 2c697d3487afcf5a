// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub const HEADER: &str = "Name: Benchmark\nDescription: Generated document\nSlug: bench\nDate: 2024-01-01\nTags: #bench #generated\n---\n";

#[allow(dead_code)]
pub fn generate_body(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str("Some paragraph content with multiple sentences.\nIt spans two lines & has <markup> to escape.\n\n");
        content.push_str("> https://example.com/docs Example docs\n\n");
        content.push_str("| Items\n");
        for i in 0..3 {
            content.push_str(&format!("- Item {i} of section {section}\n"));
        }
        content.push('\n');

        // Code block every third section
        if section % 3 == 0 {
            content.push_str("```rust\nfn benchmark_function() {\n    let value = 42;\n}\n````\n``` Example code\n\n");
        }

        content.push_str("* a line comment\n' $ cargo bench\n~ An alternative\n~ spread over two lines\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_document(sections: usize) -> String {
    format!("{HEADER}{}", generate_body(sections))
}
