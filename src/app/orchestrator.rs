//! Main application orchestrator.
//!
//! Coordinates a single run:
//! 1. Initializes verbose logging when a log file is configured.
//! 2. Reads the origin and destination, from the command line or by prompting.
//! 3. Counts the paths and lists them when the total is within the threshold.
//! 4. Otherwise offers a bounded sample of the canonical enumeration.

use num_traits::Zero;
use std::io::{self, BufRead, Write};

use super::cli::Cli;
use super::error::AppError;
use super::logger;
use super::processing;
use super::prompt;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::path::{self, Point};

/// Runs the application against the process's stdin and stdout.
///
/// # Errors
/// Returns `AppError` on an unreachable destination, an invalid argument or a
/// failed terminal read/write.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Some(log_file_path) = &cli.log_file {
            if let Err(e) = logger::init_global_logger(log_file_path) {
                // Continue without file logging.
                eprintln!(
                    "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                    log_file_path.display(),
                    e
                );
            } else {
                verbose_println!(
                    quiet_mode,
                    "Verbose logging initialized to {}",
                    log_file_path.display()
                );
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_with(&cli, &mut stdin.lock(), &mut stdout.lock());

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of the log file: {}", e);
        }
    }

    result
}

/// Runs one enumeration session over the given input and output.
pub fn run_with<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let limits = processing::limits_from_cli(cli)?;

    let origin = read_point(cli.origin(), input, output, "starting")?;
    let destination = read_point(cli.destination(), input, output, "ending")?;

    verbose_println!(
        quiet_mode,
        "[STEP 1] Counting paths from {} to {} (threshold {}, partial limit {})",
        origin,
        destination,
        limits.show_all_threshold,
        limits.partial_limit
    );

    let listing = path::count_and_list(origin, destination, &limits).map_err(|e| {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
        AppError::Path(e)
    })?;

    verbose_println!(
        quiet_mode,
        "   => {} right, {} up, {} path(s), {} generated.",
        listing.steps.right,
        listing.steps.up,
        listing.total,
        listing.paths.len()
    );

    processing::write_total(output, &listing)?;

    if listing.total.is_zero() {
        writeln!(
            output,
            "Origin and destination are the same, there are no paths to walk."
        )?;
        return Ok(());
    }

    if !listing.is_truncated() {
        writeln!(output, "\nPossible paths:")?;
        processing::write_numbered(output, &listing.paths)?;
        return Ok(());
    }

    writeln!(output, "\nThere are too many paths to show them all.")?;
    let sample = match cli.sample {
        Some(requested) => Some(processing::sample_from_flag(requested, &limits, output)?),
        None => {
            if prompt::prompt_yes_no(input, output, "Do you want to see some examples? (y/n): ")? {
                Some(prompt::prompt_sample_size(input, output, &limits)?)
            } else {
                None
            }
        }
    };

    match sample {
        Some(requested) => {
            let count = processing::effective_sample(requested, &listing.total);
            verbose_println!(quiet_mode, "[STEP 2] Enumerating the first {} path(s)", count);
            writeln!(
                output,
                "\nShowing the first {} paths (out of {}):",
                count, listing.total
            )?;
            let steps = listing.steps;
            processing::write_numbered(
                output,
                path::enumerate_prefix(steps.right, steps.up, count),
            )?;
        }
        None => writeln!(output, "No paths will be shown.")?,
    }

    Ok(())
}

fn read_point<R: BufRead, W: Write>(
    given: Option<Point>,
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Point, AppError> {
    match given {
        Some(point) => Ok(point),
        None => Ok(prompt::prompt_point(input, output, label)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathError;
    use clap::Parser;
    use std::io::Cursor;

    fn run(args: &[&str], stdin: &str) -> (Result<(), AppError>, String) {
        let argv = std::iter::once("lattice-paths").chain(args.iter().copied());
        let cli = Cli::parse_from(argv);
        let mut input = Cursor::new(stdin.to_string());
        let mut output = Vec::new();
        let result = run_with(&cli, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn prompts_and_lists_all_paths() {
        let (result, text) = run(&["-q"], "0\n0\n2\n1\n");
        result.unwrap();
        assert!(text.contains("Enter the starting x coordinate: "));
        assert!(text.contains("Enter the ending y coordinate: "));
        assert!(text.contains("Total number of possible paths: 3"));
        assert!(text.contains("Possible paths:\n1. RRU\n2. RUR\n3. URR\n"));
    }

    #[test]
    fn same_point_reports_no_paths() {
        let (result, text) = run(&["-q", "--from", "5", "5", "--to", "5", "5"], "");
        result.unwrap();
        assert!(text.contains("Total number of possible paths: 0"));
        assert!(text.contains("there are no paths to walk"));
    }

    #[test]
    fn unreachable_destination_is_an_error() {
        let (result, text) = run(&["-q", "--from", "3", "3", "--to", "1", "5"], "");
        assert!(matches!(
            result,
            Err(AppError::Path(PathError::InvalidRegion { dx: -2, dy: 2 }))
        ));
        assert!(!text.contains("Total number"));
    }

    #[test]
    fn too_many_paths_offers_a_sample() {
        let (result, text) = run(
            &["-q", "--from", "0", "0", "--to", "3", "3", "--show-all-threshold", "5"],
            "y\n2\n",
        );
        result.unwrap();
        assert!(text.contains("Total number of possible paths: 20"));
        assert!(text.contains("There are too many paths to show them all."));
        assert!(text.contains("Showing the first 2 paths (out of 20):\n1. RRRUUU\n2. RRURUU\n"));
    }

    #[test]
    fn declining_the_sample_shows_nothing() {
        let (result, text) = run(&["-q", "--from", "0", "0", "--to", "10", "10"], "n\n");
        result.unwrap();
        assert!(text.contains("Total number of possible paths: 184756"));
        assert!(text.contains("No paths will be shown."));
        assert!(!text.contains("1. "));
    }

    #[test]
    fn sample_flag_skips_the_question() {
        let (result, text) = run(
            &[
                "-q",
                "--from",
                "0",
                "0",
                "--to",
                "10",
                "10",
                "--sample",
                "5000",
                "--partial-limit",
                "3",
            ],
            "",
        );
        result.unwrap();
        assert!(!text.contains("Do you want to see some examples?"));
        assert!(text.contains("Only the first 3 paths will be shown."));
        assert!(text.contains("Showing the first 3 paths (out of 184756):"));
        assert!(text.contains("3. RRRRRRRRRUURUUUUUUUU"));
    }

    #[test]
    fn end_of_input_while_prompting_is_an_io_error() {
        let (result, _) = run(&["-q"], "1\n");
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
