use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use lomuto::compare::{dbl_cmp, int_cmp, str_cmp};

use crate::error::Error;

/// The type records are interpreted as before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Int,
    Double,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Text => "string",
            ElementKind::Int => "int",
            ElementKind::Double => "double",
        };

        f.write_str(name)
    }
}

/// A record type that can be parsed, ordered and printed.
pub trait Element: Sized {
    const KIND: ElementKind;

    /// Hands `record` back if it doesn't represent a value of this type.
    fn parse(record: String) -> Result<Self, String>;

    fn compare(a: &Self, b: &Self) -> Ordering;

    fn write_line(&self, out: &mut impl Write) -> io::Result<()>;
}

impl Element for String {
    const KIND: ElementKind = ElementKind::Text;

    fn parse(record: String) -> Result<Self, String> {
        Ok(record)
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        str_cmp(a, b)
    }

    fn write_line(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::Int;

    fn parse(record: String) -> Result<Self, String> {
        record.trim().parse().map_err(|_| record)
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        int_cmp(a, b)
    }

    fn write_line(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Double;

    fn parse(record: String) -> Result<Self, String> {
        record.trim().parse().map_err(|_| record)
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        dbl_cmp(a, b)
    }

    fn write_line(&self, out: &mut impl Write) -> io::Result<()> {
        // Six decimal places, same as printf "%f".
        writeln!(out, "{self:.6}")
    }
}

/// Converts every record into `T`. Fails on the first record that doesn't parse.
pub fn parse_all<T: Element>(records: Vec<String>) -> Result<Vec<T>, Error> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            T::parse(record).map_err(|record| Error::Parse {
                record_no: i + 1,
                record,
                kind: T::KIND,
            })
        })
        .collect()
}

/// Writes one element per line.
pub fn write_all<T: Element>(elements: &[T], out: &mut impl Write) -> io::Result<()> {
    for elem in elements {
        elem.write_line(out)?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(vals: &[&str]) -> Vec<String> {
        vals.iter().map(|val| val.to_string()).collect()
    }

    fn render<T: Element>(elements: &[T]) -> String {
        let mut out = Vec::new();
        write_all(elements, &mut out).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_ints() {
        let ints = parse_all::<i32>(records(&["5", " -3", "0 ", "+5", "2147483647"])).unwrap();
        assert_eq!(ints, [5, -3, 0, 5, i32::MAX]);
    }

    #[test]
    fn parse_ints_rejects_garbage() {
        match parse_all::<i32>(records(&["1", "2", "abc"])) {
            Err(Error::Parse {
                record_no,
                record,
                kind,
            }) => {
                assert_eq!(record_no, 3);
                assert_eq!(record, "abc");
                assert_eq!(kind, ElementKind::Int);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        // Out of range for a 32 bit int.
        assert!(parse_all::<i32>(records(&["2147483648"])).is_err());
        assert!(parse_all::<i32>(records(&["1.5"])).is_err());
    }

    #[test]
    fn parse_doubles() {
        let doubles = parse_all::<f64>(records(&["3.14", "-1", "1e3", "inf"])).unwrap();
        assert_eq!(doubles, [3.14, -1.0, 1000.0, f64::INFINITY]);

        assert!(parse_all::<f64>(records(&["1.0", "one"])).is_err());
    }

    #[test]
    fn parse_text_is_verbatim() {
        let text = parse_all::<String>(records(&["  padded ", "x"])).unwrap();
        assert_eq!(text, ["  padded ", "x"]);
    }

    #[test]
    fn write_formats() {
        assert_eq!(render::<i32>(&[-3, 0, 5]), "-3\n0\n5\n");
        assert_eq!(
            render::<f64>(&[-1.0, 0.0, 2.71, 3.14]),
            "-1.000000\n0.000000\n2.710000\n3.140000\n"
        );
        assert_eq!(render::<String>(&records(&["apple", "banana"])), "apple\nbanana\n");
        assert_eq!(render::<i32>(&[]), "");
    }

    #[test]
    fn kind_names() {
        assert_eq!(ElementKind::Text.to_string(), "string");
        assert_eq!(ElementKind::Int.to_string(), "int");
        assert_eq!(ElementKind::Double.to_string(), "double");
    }
}
