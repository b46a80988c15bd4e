//! Interactive menu for the course catalog
//!
//! Prompts for a course file path (with a default fallback) until one can
//! be opened, then loops over a numbered menu of load / list / find / exit. The catalog is
//! session state owned by the menu loop and driven through the same three
//! operations the one-shot subcommands use.

use crate::app::services::catalog::CourseCatalog;
use crate::cli::commands::{normalize_query, print_course, print_load_summary, print_timing};
use crate::config::Config;
use crate::{Error, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// Run the interactive menu loop
pub fn run_menu(config: &Config) -> Result<()> {
    let file_path = prompt_course_file(config)?;
    let mut catalog = CourseCatalog::new();

    loop {
        println!("\nMenu:");
        println!("1. Load Courses");
        println!("2. Display All Courses");
        println!("3. Find Course");
        println!("9. Exit");

        let choice = prompt_line("Enter your choice: ")?;

        match choice.trim() {
            "1" => match catalog.load_from_with(&file_path, config.catalog.header_policy) {
                Ok(report) => print_load_summary(&report),
                Err(e) => println!("Error: {}", e),
            },
            "2" => display_all_courses(&catalog),
            "3" => {
                let course_id = prompt_line("Enter course ID: ")?;
                let course_id = course_id.trim();
                if course_id.is_empty() {
                    println!("Course ID cannot be empty.");
                    continue;
                }
                find_and_print(&catalog, config, course_id);
            }
            "9" => {
                println!("Goodbye!");
                return Ok(());
            }
            other => println!("Invalid choice '{}'. Try again.", other),
        }
    }
}

/// Prompt for a course file path until one can be opened
///
/// An empty answer falls back to the configured default file. The probe
/// handle is dropped immediately; the load operation re-opens the file and
/// may still fail later if the file disappears in between.
fn prompt_course_file(config: &Config) -> Result<PathBuf> {
    let default = config.catalog.file.clone();

    loop {
        let answer = prompt_line(&format!(
            "Enter the file name (press Enter to use default: '{}'): ",
            default.display()
        ))?;

        let path = if answer.trim().is_empty() {
            default.clone()
        } else {
            PathBuf::from(answer.trim())
        };

        match File::open(&path) {
            Ok(_) => {
                debug!("Course file confirmed openable: {}", path.display());
                return Ok(path);
            }
            Err(e) => {
                println!(
                    "Error: unable to open file at '{}' ({}). Please try again.",
                    path.display(),
                    e
                );
            }
        }
    }
}

/// Display every loaded course in sorted order
fn display_all_courses(catalog: &CourseCatalog) {
    if catalog.is_empty() {
        println!("No courses available. Load data first.");
        return;
    }

    let start = Instant::now();
    println!("All Courses (Lexicographical Order):");
    for (id, record) in catalog.courses_in_order() {
        println!("{}: {}", id, record.name);
    }
    print_timing(
        "All courses displayed",
        start.elapsed(),
        "O(n) for in-order traversal of the index",
    );
}

/// Look up one course and print it, or a not-found message
fn find_and_print(catalog: &CourseCatalog, config: &Config, course_id: &str) {
    let query = normalize_query(config, course_id);

    let start = Instant::now();
    let found = catalog.find(&query);
    let elapsed = start.elapsed();

    match found {
        Some(record) => print_course(record),
        None => println!("Course with ID {} not found.", query),
    }
    print_timing(
        "Course search completed",
        elapsed,
        "O(log n) for index lookup",
    );
}

/// Print a prompt and read one line from stdin
fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("failed to flush stdout", e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("failed to read user input", e))?;

    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
