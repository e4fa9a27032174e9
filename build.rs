//! Build script to generate embedded dictionaries
//!
//! Reads the bundled word list files and generates Rust source code with const arrays.
//! Entries are copied verbatim; normalization and filtering happen at load time.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// (source file, generated file, const name, doc line)
const WORD_LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/dict.txt",
        "dict.rs",
        "DICTIONARY",
        "Bundled general-purpose Boggle dictionary (raw entries)",
    ),
    (
        "data/shortdict.txt",
        "shortdict.rs",
        "SHORT_DICTIONARY",
        "Five-word demo dictionary (raw entries)",
    ),
];

fn main() -> io::Result<()> {
    let out_dir = env::var_os("OUT_DIR")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?;

    for (source, target, const_name, doc) in WORD_LISTS {
        println!("cargo:rerun-if-changed={source}");
        let content = fs::read_to_string(source)?;
        fs::write(
            Path::new(&out_dir).join(target),
            render_word_list(&content, const_name, doc),
        )?;
    }

    Ok(())
}

fn render_word_list(content: &str, const_name: &str, doc: &str) -> String {
    let mut code = String::new();
    let mut count = 0usize;

    let _ = writeln!(code, "// Generated from a bundled word list; do not edit.\n");
    let _ = writeln!(code, "/// {doc}");
    let _ = writeln!(code, "pub const {const_name}: &[&str] = &[");
    for entry in content.lines() {
        let _ = writeln!(code, "    {:?},", entry.trim());
        count += 1;
    }
    let _ = writeln!(code, "];\n");
    let _ = writeln!(code, "/// Number of raw entries in {const_name}");
    let _ = writeln!(code, "pub const {const_name}_COUNT: usize = {count};");

    code
}
