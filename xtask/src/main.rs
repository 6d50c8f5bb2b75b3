use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const COLUMNS: usize = 4;

fn main() {
    match run() {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), String> {
    match env::args().nth(1).as_deref() {
        None | Some("compliance") => check_compliance(),
        Some(other) => Err(format!(
            "unknown task '{other}'\n\nUsage: cargo run -p xtask [compliance]"
        )),
    }
}

/// Every requirement row must name at least one test, and every named test
/// must exist as a `fn` in the referenced file.
fn check_compliance() -> Result<(), String> {
    let repo = repo_root()?;
    let matrix_path = repo.join("docs/compliance_matrix.csv");
    if !matrix_path.exists() {
        return Err(format!(
            "compliance matrix missing at {}",
            matrix_path.display()
        ));
    }

    let content = fs::read_to_string(&matrix_path)
        .map_err(|e| format!("reading {} failed: {e}", matrix_path.display()))?;

    let mut missing_tests: Vec<String> = Vec::new();
    let mut missing_refs: Vec<String> = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split(',').collect();
        if columns.len() < COLUMNS {
            return Err(format!(
                "line {}: expected {} columns, found {}",
                idx + 1,
                COLUMNS,
                columns.len()
            ));
        }

        let requirement = columns[0].trim();
        if requirement.is_empty() {
            return Err(format!("line {}: requirement_id empty", idx + 1));
        }

        let test_refs = columns[COLUMNS - 1].trim();
        if test_refs.is_empty() {
            missing_tests.push(format!("{} (line {})", requirement, idx + 1));
            continue;
        }

        for reference in test_refs.split(';').map(str::trim) {
            if reference.is_empty() {
                continue;
            }
            if let Err(reason) = check_reference(&repo, reference) {
                missing_refs.push(format!(
                    "{} (line {}) ref {}: {}",
                    requirement,
                    idx + 1,
                    reference,
                    reason
                ));
            }
        }
    }

    if missing_tests.is_empty() && missing_refs.is_empty() {
        println!("Compliance matrix OK");
        return Ok(());
    }

    let mut message = String::from("Compliance matrix validation failed:\n");
    if !missing_tests.is_empty() {
        message.push_str("Rows with empty test_refs column:\n");
        for row in &missing_tests {
            message.push_str(&format!("  - {row}\n"));
        }
    }
    if !missing_refs.is_empty() {
        message.push_str("Unresolved test references:\n");
        for row in &missing_refs {
            message.push_str(&format!("  - {row}\n"));
        }
    }

    Err(message)
}

/// Resolve `path/to/file.rs::test_name` against the repository.
fn check_reference(repo: &Path, reference: &str) -> Result<(), String> {
    let (path_part, test_name) = match reference.split_once("::") {
        Some((path, name)) => (path.trim(), Some(name.trim())),
        None => (reference, None),
    };

    let path = repo.join(path_part);
    let source = fs::read_to_string(&path)
        .map_err(|_| format!("file not found at {}", path.display()))?;

    match test_name {
        Some(name) if !defines_fn(&source, name) => {
            Err(format!("no fn {name} in {}", path.display()))
        }
        _ => Ok(()),
    }
}

fn defines_fn(source: &str, name: &str) -> bool {
    let needle = format!("fn {name}(");
    source.lines().any(|line| line.trim_start().starts_with(&needle))
}

fn repo_root() -> Result<PathBuf, String> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| "xtask manifest directory has no parent".to_string())
}
