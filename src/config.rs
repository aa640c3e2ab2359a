use std::path::PathBuf;

use clap::Parser;

use crate::element::ElementKind;

/// Longest record kept, in bytes. Longer lines are truncated.
pub const DEFAULT_MAX_LEN: usize = 64;

/// Sorts the lines of a file as ints, doubles or strings.
#[derive(Parser, Debug)]
#[command(
    version,
    long_about = None,
    after_help = "No flags defaults to sorting strings."
)]
pub struct Args {
    /// Specifies the file contains ints. Each record must be an integer and nothing else.
    #[arg(short, long, conflicts_with = "doubles")]
    pub ints: bool,

    /// Specifies the file contains doubles. Each record must be a number and nothing else.
    #[arg(short, long)]
    pub doubles: bool,

    /// Maximum record length in bytes, longer lines are truncated.
    #[arg(short, long, default_value_t = DEFAULT_MAX_LEN, value_parser = parse_max_len)]
    pub max_len: usize,

    /// The file to sort.
    pub filename: PathBuf,
}

impl Args {
    pub fn into_config(self) -> Config {
        let kind = if self.ints {
            ElementKind::Int
        } else if self.doubles {
            ElementKind::Double
        } else {
            ElementKind::Text
        };

        Config {
            kind,
            path: self.filename,
            max_len: self.max_len,
        }
    }
}

/// Validated settings for a single `linesort` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub kind: ElementKind,
    pub path: PathBuf,
    pub max_len: usize,
}

impl Config {
    pub fn new(kind: ElementKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

fn parse_max_len(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".into()),
        Ok(max_len) => Ok(max_len),
        Err(err) => Err(err.to_string()),
    }
}
