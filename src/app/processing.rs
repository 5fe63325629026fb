//! Presentation helpers between the enumerator and the terminal.
//!
//! Covers turning command line values into enumeration limits, resolving a
//! non-interactive sample request and writing numbered path listings.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::fmt::Display;
use std::io::{Error as IoError, Write};

use super::cli::Cli;
use super::error::AppError;
use super::prompt::{classify_sample_request, SampleRequest};
use crate::path::{EnumerationLimits, PathListing};

/// Builds the enumeration limits from the parsed command line.
///
/// # Errors
/// `AppError::InvalidArgument` when the partial limit is zero.
pub fn limits_from_cli(cli: &Cli) -> Result<EnumerationLimits, AppError> {
    if cli.partial_limit == 0 {
        return Err(AppError::InvalidArgument(
            "--partial-limit must be greater than 0".to_string(),
        ));
    }
    Ok(EnumerationLimits {
        show_all_threshold: cli.show_all_threshold,
        partial_limit: cli.partial_limit,
    })
}

/// Resolves a `--sample` value, announcing a clamp the same way the prompt does.
pub fn sample_from_flag<W: Write>(
    requested: i64,
    limits: &EnumerationLimits,
    output: &mut W,
) -> Result<usize, AppError> {
    match classify_sample_request(requested, limits) {
        SampleRequest::NonPositive => Err(AppError::InvalidArgument(format!(
            "--sample must be greater than 0, got {}",
            requested
        ))),
        SampleRequest::Accepted(count) => Ok(count),
        SampleRequest::Clamped(count) => {
            writeln!(output, "Only the first {} paths will be shown.", count)?;
            Ok(count)
        }
    }
}

/// Number of sample paths that will actually be produced: never more than exist.
pub fn effective_sample(requested: usize, total: &BigUint) -> usize {
    if BigUint::from(requested) > *total {
        total.to_usize().unwrap_or(requested)
    } else {
        requested
    }
}

pub fn write_total<W: Write>(output: &mut W, listing: &PathListing) -> Result<(), IoError> {
    writeln!(output, "\nTotal number of possible paths: {}", listing.total)
}

/// Writes `items` as a 1-based numbered list and returns how many were written.
pub fn write_numbered<W, I>(output: &mut W, items: I) -> Result<usize, IoError>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut written = 0;
    for (index, item) in items.into_iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, item)?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn zero_partial_limit_is_rejected() {
        let cli = Cli::parse_from(["lattice-paths", "--partial-limit", "0"]);
        assert!(matches!(
            limits_from_cli(&cli),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn limits_follow_cli_values() {
        let cli = Cli::parse_from([
            "lattice-paths",
            "--show-all-threshold",
            "5",
            "--partial-limit",
            "7",
        ]);
        let limits = limits_from_cli(&cli).unwrap();
        assert_eq!(limits.show_all_threshold, 5);
        assert_eq!(limits.partial_limit, 7);
    }

    #[test]
    fn sample_flag_clamps_and_rejects() {
        let limits = EnumerationLimits {
            partial_limit: 4,
            ..EnumerationLimits::default()
        };
        let mut output = Vec::new();
        assert_eq!(sample_from_flag(3, &limits, &mut output).unwrap(), 3);
        assert_eq!(sample_from_flag(9, &limits, &mut output).unwrap(), 4);
        assert!(String::from_utf8(output)
            .unwrap()
            .contains("Only the first 4 paths will be shown."));
        assert!(sample_from_flag(0, &limits, &mut Vec::new()).is_err());
    }

    #[test]
    fn effective_sample_never_exceeds_total() {
        assert_eq!(effective_sample(10, &BigUint::from(3u32)), 3);
        assert_eq!(effective_sample(2, &BigUint::from(3u32)), 2);
    }

    #[test]
    fn numbered_listing_starts_at_one() {
        let mut output = Vec::new();
        let written = write_numbered(&mut output, ["RU", "UR"]).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(output).unwrap(), "1. RU\n2. UR\n");
    }
}
