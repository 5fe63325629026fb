use clap::Parser;
use std::path::PathBuf;

use crate::path::{Point, DEFAULT_PARTIAL_LIMIT, DEFAULT_SHOW_ALL_THRESHOLD};

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Counts and lists the right/up lattice paths between two grid points.",
    long_about = None
)]
pub struct Cli {
    /// Starting point; prompted for when omitted.
    #[clap(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub from: Option<Vec<i64>>,

    /// Destination point; prompted for when omitted.
    #[clap(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub to: Option<Vec<i64>>,

    /// List every path when the total is at most this value.
    #[clap(long, default_value_t = DEFAULT_SHOW_ALL_THRESHOLD)]
    pub show_all_threshold: u64,

    /// Maximum number of paths shown when only a sample is listed.
    #[clap(long, default_value_t = DEFAULT_PARTIAL_LIMIT)]
    pub partial_limit: usize,

    /// Show this many sample paths without asking when there are too many to list.
    #[clap(long, value_name = "N")]
    pub sample: Option<i64>,

    /// Suppress verbose logging.
    #[clap(short, long)]
    pub quiet: bool,

    /// Write verbose progress messages to this file.
    #[clap(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn origin(&self) -> Option<Point> {
        self.from.as_deref().and_then(to_point)
    }

    pub fn destination(&self) -> Option<Point> {
        self.to.as_deref().and_then(to_point)
    }
}

fn to_point(coords: &[i64]) -> Option<Point> {
    match coords {
        [x, y] => Some(Point::new(*x, *y)),
        _ => None,
    }
}
