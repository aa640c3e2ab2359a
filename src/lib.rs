//! Reads a file line by line, interprets the lines as ints, doubles or strings, and prints them
//! sorted with the `lomuto` quicksort.

use std::io::{BufWriter, Write};
use std::time::Instant;

use log::{debug, trace};

pub mod config;
pub mod element;
pub mod error;
pub mod input;

pub use config::{Args, Config};
pub use element::{Element, ElementKind};
pub use error::Error;

/// Reads the file named by `config`, sorts its records and writes them to `out`, one per line.
///
/// Nothing is written if reading or converting the input fails.
pub fn run<W: Write>(config: &Config, out: W) -> Result<(), Error> {
    let records = input::read_file(&config.path, config.max_len)?;
    debug!(
        "Read {} records from '{}'",
        records.len(),
        config.path.display()
    );

    match config.kind {
        ElementKind::Text => sort_and_write::<String, W>(records, out),
        ElementKind::Int => sort_and_write::<i32, W>(records, out),
        ElementKind::Double => sort_and_write::<f64, W>(records, out),
    }
}

/// Converts `records` into `T` and returns them sorted.
pub fn sort_records<T: Element>(records: Vec<String>) -> Result<Vec<T>, Error> {
    let mut elements = element::parse_all::<T>(records)?;

    let start = Instant::now();
    lomuto::sort_by(&mut elements, T::compare);
    trace!(
        "Sorted {} {} elements in {:?}",
        elements.len(),
        T::KIND,
        start.elapsed()
    );

    Ok(elements)
}

fn sort_and_write<T: Element, W: Write>(records: Vec<String>, out: W) -> Result<(), Error> {
    let elements = sort_records::<T>(records)?;

    let mut out = BufWriter::new(out);
    element::write_all(&elements, &mut out).map_err(Error::Write)
}
