// src/csv.rs
use std::io::{Read, Write};

use ::csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::Result;

/* ---------------- Parsing ---------------- */

/// Read every record as owned strings. No header handling, ragged rows allowed.
pub fn parse_rows<R: Read>(input: R) -> Result<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(record_to_row(&rec));
    }
    Ok(rows)
}

pub fn parse_str(text: &str) -> Result<Vec<Vec<String>>> {
    parse_rows(text.as_bytes())
}

/// Read raw logical lines: each record's fields glued back with ','.
///
/// A dump whose lines were exported as one quoted cell and a dump of bare
/// comma-separated lines both come out as the same line text.
pub fn parse_lines<R: Read>(input: R) -> Result<Vec<String>> {
    Ok(parse_rows(input)?
        .into_iter()
        .map(|row| row.join(","))
        .collect())
}

fn record_to_row(rec: &StringRecord) -> Vec<String> {
    rec.iter().map(|c| c.to_string()).collect()
}

/// Split the first row off as headers. Empty input → (None, []).
pub fn split_headers(mut rows: Vec<Vec<String>>) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    if rows.is_empty() {
        return (None, rows);
    }
    let header = rows.remove(0);
    (Some(header), rows)
}

/* ---------------- Writing ---------------- */

/// Write headers (if any) and rows; quoting is left to the csv writer.
pub fn write_rows<W: Write>(
    out: W,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
) -> Result<()> {
    let mut w = WriterBuilder::new().flexible(true).from_writer(out);
    if let Some(h) = headers {
        w.write_record(h)?;
    }
    for r in rows {
        w.write_record(r)?;
    }
    w.flush()?;
    Ok(())
}
