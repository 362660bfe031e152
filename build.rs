//! Build script to generate embedded word lists
//!
//! Reads every `data/wordlist/*.txt` file and generates a lookup table of
//! const arrays keyed by list name (file stem).

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LIST_DIR: &str = "data/wordlist";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");

    let mut lists: Vec<(String, Vec<String>)> = Vec::new();
    if let Ok(entries) = fs::read_dir(LIST_DIR) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
            let words = content
                .lines()
                .map(|line| line.trim().to_lowercase())
                .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()))
                .collect();
            lists.push((stem.to_string(), words));
        }
    }
    lists.sort_by(|a, b| a.0.cmp(&b.0));

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Word lists compiled from `{LIST_DIR}`, keyed by list name").unwrap();
    writeln!(output, "pub const EMBEDDED_LISTS: &[(&str, &[&str])] = &[").unwrap();
    for (name, words) in &lists {
        writeln!(output, "    (\"{name}\", &[").unwrap();
        for word in words {
            writeln!(output, "        \"{word}\",").unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }
    writeln!(output, "];").unwrap();

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed={LIST_DIR}");
    for (name, _) in &lists {
        println!("cargo:rerun-if-changed={LIST_DIR}/{name}.txt");
    }
}
