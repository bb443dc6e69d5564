//! Test harness for the prologue parser against fixture files.
//!
//! This test harness reads all .yaml files from the test/pass/ directory and
//! parses them, comparing the document report against the matching .out
//! file when one exists. It also reads .yaml files from test/fail/ (expected
//! to fail) and verifies they produce the error message in the corresponding
//! .error file.

use std::fs;
use std::path::{Path, PathBuf};

use libyamldoc::{describe, parse, parse_with_filename};

/// Root test directory.
fn test_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("test")
}

/// Get all .yaml files from a subdirectory of test/.
fn get_yaml_files(subdir: &str) -> Vec<PathBuf> {
    let pattern = test_root().join(subdir).join("*.yaml");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .expect("valid glob pattern")
        .flatten()
        .collect();
    files.sort();
    files
}

/// Read a sidecar file next to a fixture, e.g. `foo.out` for `foo.yaml`.
fn read_sidecar(path: &Path, ext: &str) -> Option<String> {
    fs::read_to_string(path.with_extension(ext)).ok()
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().to_string()
}

/// Run a single fixture that is expected to parse.
fn run_pass_test(path: &Path) -> Result<(), String> {
    let filename = file_name(path);
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", filename, e))?;

    let documents = parse(&content)
        .map_err(|e| format!("{}: Unexpected parse error: {}", filename, e))?;

    // Parsing twice must not observe any state from the first run.
    let again = parse(&content).map_err(|e| format!("{}: Second parse failed: {}", filename, e))?;
    if again != documents {
        return Err(format!("{}: Second parse differs", filename));
    }

    let actual = describe(&documents);
    match read_sidecar(path, "out") {
        Some(expected) if expected != actual => Err(format!(
            "{}: Report mismatch\n    expected: {:?}\n    actual:   {:?}",
            filename, expected, actual
        )),
        Some(_) => {
            println!("  {} => ok", filename);
            Ok(())
        }
        None => {
            println!("  {} => {} documents (no .out file)", filename, documents.len());
            Ok(())
        }
    }
}

/// Run a single fixture that is expected to fail with a specific error.
fn run_fail_test(path: &Path) -> Result<(), String> {
    let filename = file_name(path);
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", filename, e))?;

    // Parse with filename for error location reporting
    match parse_with_filename(&content, Some(&filename)) {
        Ok(documents) => Err(format!(
            "{}: Expected parse error, but got success: {:?}",
            filename, documents
        )),
        Err(e) => {
            let actual_error = e.to_string();
            match read_sidecar(path, "error") {
                Some(expected) => {
                    let expected = expected.trim();
                    if actual_error == expected {
                        println!("  {} => error (as expected)", filename);
                        Ok(())
                    } else {
                        Err(format!(
                            "{}: Error mismatch\n    expected: {}\n    actual:   {}",
                            filename, expected, actual_error
                        ))
                    }
                }
                None => {
                    println!(
                        "  {} => error: {} (no .error file to compare)",
                        filename, actual_error
                    );
                    Ok(())
                }
            }
        }
    }
}

fn run_all(subdir: &str, run: fn(&Path) -> Result<(), String>) {
    let files = get_yaml_files(subdir);
    assert!(!files.is_empty(), "no fixtures found in test/{}", subdir);

    println!("\nRunning {} test/{} fixtures:", files.len(), subdir);

    let errors: Vec<String> = files.iter().filter_map(|f| run(f.as_path()).err()).collect();

    println!(
        "\nResults: {} passed, {} failed",
        files.len() - errors.len(),
        errors.len()
    );
    for error in &errors {
        println!("  - {}", error);
    }

    assert!(errors.is_empty(), "{} test/{} fixtures failed", errors.len(), subdir);
}

#[test]
fn test_all_pass_fixtures() {
    run_all("pass", run_pass_test);
}

#[test]
fn test_all_fail_fixtures() {
    run_all("fail", run_fail_test);
}
