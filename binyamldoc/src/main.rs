//! Command-line tool for checking YAML stream prologues.
//!
//! Usage: yamldoc [OPTIONS] [FILE|DIR]
//!
//! Options:
//!   -o, --output <FILE>    Write the report to the specified file
//!   --check                Check if input is valid (exit 0 if valid, 1 if invalid)
//!   -h, --help             Print help
//!   -V, --version          Print version

use libyamldoc::{describe, parse_with_filename};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut output_file: Option<&str> = None;
    let mut check_only = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("yamldoc {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "--check" => {
                check_only = true;
            }
            "-" => {
                // Explicit stdin
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                input_path = Some(&args[i]);
            }
        }
        i += 1;
    }

    if check_only && output_file.is_some() {
        eprintln!("Error: --check and --output are mutually exclusive");
        process::exit(1);
    }

    if let Some(path) = input_path {
        if Path::new(path).is_dir() {
            if output_file.is_some() {
                eprintln!("Error: --output cannot be used with directory input");
                process::exit(1);
            }
            process_directory(path, check_only);
            return;
        }
    }

    let input = match input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    let exit_code = process_input(&input, input_path, output_file, check_only);
    process::exit(exit_code);
}

fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

fn process_directory(dir_path: &str, check_only: bool) {
    let entries = match fs::read_dir(dir_path) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error reading directory {}: {}", dir_path, e);
            process::exit(1);
        }
    };

    let mut paths: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| is_yaml_file(path))
        .collect();
    paths.sort();

    let mut had_errors = false;
    for path in paths {
        let path_str = path.to_string_lossy();
        let input = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", path_str, e);
                had_errors = true;
                continue;
            }
        };

        if process_input(&input, Some(&path_str), None, check_only) != 0 {
            had_errors = true;
        }
    }

    process::exit(if had_errors { 1 } else { 0 });
}

fn process_input(
    input: &str,
    input_file: Option<&str>,
    output_file: Option<&str>,
    check_only: bool,
) -> i32 {
    let filename = input_file.map(|p| {
        Path::new(p)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| p.to_string())
    });

    let documents = match parse_with_filename(input, filename.as_deref()) {
        Ok(documents) => documents,
        Err(e) => {
            if let Some(path) = input_file {
                eprintln!("{}: {}", path, e);
            } else {
                eprintln!("Parse error: {}", e);
            }
            return 1;
        }
    };

    if check_only {
        if let Some(path) = input_file {
            println!("{}: ok", path);
        }
        return 0;
    }

    let report = describe(&documents);
    match output_file {
        Some(path) => {
            if let Err(e) = fs::write(path, &report) {
                eprintln!("Error writing {}: {}", path, e);
                return 1;
            }
        }
        None => {
            if let Some(path) = input_file {
                println!("## {}", path);
            }
            print!("{}", report);
        }
    }
    0
}

fn print_help() {
    println!(
        "yamldoc - YAML stream prologue checker

USAGE:
    yamldoc [OPTIONS] [FILE|DIR]

ARGS:
    [FILE|DIR]    Input file or directory (reads from stdin if not provided)
                  When a directory is given, processes all .yaml and .yml files in it

OPTIONS:
    -o, --output <FILE>    Write the report to specified file (not valid with directory input)

    --check                Check if input is valid (exit 0 if valid, 1 if invalid)

    -h, --help             Print help

    -V, --version          Print version

EXAMPLES:
    # Report directives and document boundaries of a stream
    yamldoc stream.yaml

    # Validate a single file, as a conformance runner would
    yamldoc --check in.yaml

    # Validate every YAML file in a directory
    yamldoc --check ./suite/
"
    );
}
