use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Error;

/// Reads all non-blank records from the file at `path`, see [`read_records`].
pub fn read_file(path: &Path, max_len: usize) -> Result<Vec<String>, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    read_records(BufReader::new(file), max_len).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads newline delimited records.
///
/// The line terminator (`\n` or `\r\n`) is stripped, records longer than `max_len` bytes are cut
/// down to at most `max_len` bytes, ending on a char boundary. Empty lines are skipped. Input that
/// is not valid UTF-8 yields an [`io::ErrorKind::InvalidData`] error.
pub fn read_records(reader: impl BufRead, max_len: usize) -> io::Result<Vec<String>> {
    let mut records = Vec::new();
    let mut truncated = 0usize;

    for line in reader.lines() {
        let mut record = line?;

        // `lines` only strips "\n" and "\r\n", a lone trailing '\r' can still be present at EOF.
        if record.ends_with('\r') {
            record.pop();
        }

        if record.is_empty() {
            continue;
        }

        if record.len() > max_len {
            truncate_on_char_boundary(&mut record, max_len);
            truncated += 1;
        }

        records.push(record);
    }

    if truncated != 0 {
        debug!("Truncated {truncated} records to {max_len} bytes");
    }

    Ok(records)
}

fn truncate_on_char_boundary(record: &mut String, max_len: usize) {
    let mut end = max_len;
    while !record.is_char_boundary(end) {
        end -= 1;
    }

    record.truncate(end);
}
