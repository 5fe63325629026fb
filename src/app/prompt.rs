//! Interactive input helpers for the application shell.
//!
//! Parsing is kept in small pure functions; the `prompt_*` wrappers loop over
//! them, re-asking on malformed input. All helpers are generic over the
//! reader and writer so they can be driven by in-memory buffers.

use std::io::{BufRead, Error as IoError, ErrorKind, Write};
use std::num::ParseIntError;

use crate::path::{EnumerationLimits, Point};

const INVALID_INTEGER: &str = "Please enter a valid integer.";

/// Parses one integer, ignoring surrounding whitespace.
pub fn parse_int(input: &str) -> Result<i64, ParseIntError> {
    input.trim().parse::<i64>()
}

/// Whether a yes/no answer counts as yes. Accepts English and Spanish forms.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

/// Outcome of checking a requested sample size against the partial limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRequest {
    NonPositive,
    Accepted(usize),
    /// The request exceeded the partial limit and was reduced to it.
    Clamped(usize),
}

pub fn classify_sample_request(requested: i64, limits: &EnumerationLimits) -> SampleRequest {
    if requested <= 0 {
        return SampleRequest::NonPositive;
    }
    let requested = usize::try_from(requested).unwrap_or(usize::MAX);
    let count = limits.clamp_sample(requested);
    if count < requested {
        SampleRequest::Clamped(count)
    } else {
        SampleRequest::Accepted(count)
    }
}

/// Reads one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, IoError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn ask<W: Write>(output: &mut W, message: &str) -> Result<(), IoError> {
    write!(output, "{}", message)?;
    output.flush()
}

/// Prompts until a valid integer is entered.
///
/// # Errors
/// `ErrorKind::UnexpectedEof` if input ends before a valid integer is read.
pub fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<i64, IoError> {
    loop {
        ask(output, message)?;
        let line = read_line(input)?.ok_or_else(|| {
            IoError::new(ErrorKind::UnexpectedEof, "input ended while reading an integer")
        })?;
        match parse_int(&line) {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "{}", INVALID_INTEGER)?,
        }
    }
}

/// Prompts for the x and then the y coordinate of a point.
/// `label` names the point in the prompt, e.g. "starting".
pub fn prompt_point<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Point, IoError> {
    let x = prompt_int(input, output, &format!("Enter the {} x coordinate: ", label))?;
    let y = prompt_int(input, output, &format!("Enter the {} y coordinate: ", label))?;
    Ok(Point::new(x, y))
}

/// Asks a yes/no question. End of input counts as "no".
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<bool, IoError> {
    ask(output, message)?;
    Ok(read_line(input)?.is_some_and(|line| is_affirmative(&line)))
}

/// Asks how many sample paths to show, re-asking until a positive integer is
/// given and clamping it to the partial limit.
pub fn prompt_sample_size<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    limits: &EnumerationLimits,
) -> Result<usize, IoError> {
    let message = format!(
        "How many paths do you want to see? (maximum {}): ",
        limits.partial_limit
    );
    loop {
        let requested = prompt_int(input, output, &message)?;
        match classify_sample_request(requested, limits) {
            SampleRequest::NonPositive => writeln!(output, "Must be a number greater than 0.")?,
            SampleRequest::Accepted(count) => return Ok(count),
            SampleRequest::Clamped(count) => {
                writeln!(output, "Only the first {} paths will be shown.", count)?;
                return Ok(count);
            }
        }
    }
}
