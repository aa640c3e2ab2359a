use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::element::ElementKind;

/// Everything that can go wrong between reading the input file and writing the sorted output.
///
/// Sorting itself can't fail, all of these are detected before or after the sort runs.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot open '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Record {record_no} '{record}' is not a valid {kind}")]
    Parse {
        record_no: usize,
        record: String,
        kind: ElementKind,
    },

    #[error("Cannot write sorted output")]
    Write(#[source] io::Error),
}
