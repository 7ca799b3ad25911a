//! Build script to generate the embedded seed dictionary
//!
//! Reads one data file per category and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_entry_list(
        "data/phrases.txt",
        &Path::new(&out_dir).join("phrases.rs"),
        "PHRASES",
        "Seed entries for the PHRASE category",
    );

    generate_entry_list(
        "data/people.txt",
        &Path::new(&out_dir).join("people.rs"),
        "PEOPLE",
        "Seed entries for the PERSON category",
    );

    generate_entry_list(
        "data/places.txt",
        &Path::new(&out_dir).join("places.rs"),
        "PLACES",
        "Seed entries for the PLACE category",
    );

    // Rebuild if seed lists change
    println!("cargo:rerun-if-changed=data/phrases.txt");
    println!("cargo:rerun-if-changed=data/people.txt");
    println!("cargo:rerun-if-changed=data/places.txt");
}

fn generate_entry_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated seed list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} entries)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for entry in entries {
        writeln!(output, "    {entry:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
