//! Command implementations for the course catalog CLI
//!
//! This module contains the command execution logic: logging setup, layered
//! configuration, catalog loading, and rendering of query results with
//! elapsed-time reporting.

use crate::app::services::catalog::{CourseCatalog, LoadReport};
use crate::cli::args::{Args, Commands, OutputFormat};
use crate::cli::input;
use crate::config::Config;
use crate::{CourseRecord, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Main command runner
///
/// Orchestrates the workflow: set up logging, load layered configuration,
/// then dispatch to the requested operation. With no subcommand the tool
/// drops into the interactive menu.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    info!("Starting course catalog");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    match args.command.clone().unwrap_or(Commands::Interactive) {
        Commands::List => list_courses(&args, &config),
        Commands::Find { course_id } => find_course(&args, &config, &course_id),
        Commands::Interactive => input::run_menu(&config),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("course_catalog={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered precedence (defaults -> file -> args)
fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(file) = &args.file {
        config.catalog.file = file.clone();
    }
    if let Some(policy) = args.header_policy {
        config.catalog.header_policy = policy.into();
    }
    if args.exact_case {
        config.lookup.normalize_case = false;
    }
    config.logging.level = args.get_log_level().to_string();
}

/// Create a catalog and load the configured course file into it
pub fn load_catalog(config: &Config) -> Result<(CourseCatalog, LoadReport)> {
    let mut catalog = CourseCatalog::new();
    let report = catalog.load_from_with(&config.catalog.file, config.catalog.header_policy)?;
    Ok((catalog, report))
}

/// Normalize a queried course id according to the lookup configuration
pub fn normalize_query(config: &Config, course_id: &str) -> String {
    if config.lookup.normalize_case {
        course_id.to_uppercase()
    } else {
        course_id.to_string()
    }
}

/// Load the course file and list every course in sorted order
fn list_courses(args: &Args, config: &Config) -> Result<()> {
    let (catalog, report) = load_catalog(config)?;

    match args.output_format {
        OutputFormat::Human => {
            print_load_summary(&report);

            if catalog.is_empty() {
                println!("No courses available. Load a non-empty course file first.");
                return Ok(());
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
        OutputFormat::Json => {
            let courses: Vec<&CourseRecord> =
                catalog.courses_in_order().map(|(_, record)| record).collect();
            let output = serde_json::json!({
                "load": report,
                "courses": courses,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }

    Ok(())
}

/// Load the course file and look up one course by identifier
fn find_course(args: &Args, config: &Config, course_id: &str) -> Result<()> {
    let (catalog, report) = load_catalog(config)?;
    let query = normalize_query(config, course_id);

    let start = Instant::now();
    let found = catalog.find(&query).cloned();
    let elapsed = start.elapsed();

    match args.output_format {
        OutputFormat::Human => {
            print_load_summary(&report);

            match &found {
                Some(record) => print_course(record),
                None => println!("Course with ID {} not found.", query),
            }
            print_timing(
                "Course search completed",
                elapsed,
                "O(log n) for index lookup",
            );
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "load": report,
                "query": query,
                "found": found.is_some(),
                "course": found,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }

    Ok(())
}

/// Print a full course record with its prerequisites
pub fn print_course(record: &CourseRecord) {
    println!("Course ID: {}", record.id);
    println!("Course Name: {}", record.name);
    println!("Prerequisites: {}", record.prerequisites_display());
}

/// Print the load report summary for human output
pub fn print_load_summary(report: &LoadReport) {
    println!(
        "Courses loaded into the system in {} ({} loaded, {} skipped).",
        HumanDuration(report.load_duration),
        report.records_loaded,
        report.lines_skipped()
    );
    if report.has_skips() {
        for skipped in &report.skipped {
            println!(
                "Warning: skipped malformed line {}: {}",
                skipped.line_number, skipped.content
            );
        }
    }
    println!(
        "{}",
        "Time Complexity: O(n log n) due to index insertion for n courses."
            .green()
    );
}

/// Print an elapsed-time line with its complexity annotation
pub fn print_timing(label: &str, elapsed: Duration, complexity: &str) {
    println!("\n{} in {:.2?}.", label, elapsed);
    println!("{}", format!("Time Complexity: {}.", complexity).green());
}
