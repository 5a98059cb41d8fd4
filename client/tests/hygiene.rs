//! Hygiene — enforces coding standards at test time
//!
//! Scans the client crate's production sources, including the browser-only
//! modules that native test builds never compile. Budgets are zero.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", why: "propagate or log instead" },
    Budget { pattern: ".expect(", why: "propagate or log instead" },
    Budget { pattern: "panic!(", why: "log and recover" },
    Budget { pattern: "let _ =", why: "log the discarded result" },
    Budget { pattern: ".ok()", why: "match on the error and log it" },
    Budget { pattern: "println!(", why: "use log::info!" },
    Budget { pattern: "dbg!(", why: "remove debugging output" },
];

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn production_sources_stay_within_budget() {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the client crate root");

    let mut failures = Vec::new();
    for budget in BUDGETS {
        for (path, content) in &files {
            for (n, line) in content.lines().enumerate() {
                if line.contains(budget.pattern) {
                    failures.push(format!("{path}:{}: `{}` ({})", n + 1, budget.pattern, budget.why));
                }
            }
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn browser_modules_are_scanned() {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    for module in ["app.rs", "download.rs", "board_surface.rs"] {
        assert!(files.iter().any(|(path, _)| path.ends_with(module)), "{module} not scanned");
    }
}
