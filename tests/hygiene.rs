//! Hygiene — production sources stay free of panics and silent error drops.
//!
//! Every pattern below has a budget of zero across `src/`. Unit test files
//! (`*_test.rs`) are exempt. The budget never grows: fix the code instead.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// A forbidden pattern and the number of occurrences tolerated.
struct Budget {
    pattern: &'static str,
    max: usize,
}

// Panics — these abort the pipeline with no error value.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

// Silent loss — errors discarded without being inspected or returned.
const SILENT_LOSS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
    Budget { pattern: ".unwrap_or_default()", max: 0 },
];

const STRUCTURE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0 }];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    let mut report = Vec::new();

    for budget in budgets {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|file| {
                let count = file.content.matches(budget.pattern).count();
                (count > 0).then(|| format!("  {}: {count}", file.path.display()))
            })
            .collect();
        let total: usize = files.iter().map(|f| f.content.matches(budget.pattern).count()).sum();
        if total > budget.max {
            report.push(format!("`{}` found {total}, max {}:\n{}", budget.pattern, budget.max, hits.join("\n")));
        }
    }

    assert!(report.is_empty(), "hygiene budget exceeded:\n{}", report.join("\n"));
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn silent_loss_budget() {
    check(SILENT_LOSS);
}

#[test]
fn structure_budget() {
    check(STRUCTURE);
}

#[test]
fn unit_test_paths_exist() {
    for file in source_files() {
        let Some(dir) = file.path.parent() else {
            continue;
        };
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(name) = rest.strip_suffix("\"]") else {
                continue;
            };
            assert!(dir.join(name).is_file(), "{} points at missing {name}", file.path.display());
        }
    }
}
