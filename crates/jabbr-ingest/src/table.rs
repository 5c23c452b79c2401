//! CSV reading and writing with a single quoting discipline.
//!
//! A field containing a comma, a double quote or a line break is wrapped in
//! double quotes and its quotes are doubled. Parsing a written field gives
//! back the original string.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ByteRecord, QuoteStyle, ReaderBuilder, Trim, WriterBuilder};

/// Whether cells are trimmed when read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTrim {
    Keep,
    Trim,
}

/// Reads every record of a CSV file, header row included.
///
/// Records may have differing lengths. Bytes that are not UTF-8 are replaced
/// rather than rejected; only ASCII letters and digits matter downstream.
pub fn read_rows(path: &Path, trim: CellTrim) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(match trim {
            CellTrim::Keep => Trim::None,
            CellTrim::Trim => Trim::All,
        })
        .from_path(path)
        .with_context(|| format!("failed to open {} for reading", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        rows.push(lossy_cells(&record));
    }
    if let Some(first) = rows.first_mut().and_then(|row| row.first_mut()) {
        strip_bom(first);
    }
    Ok(rows)
}

/// Reads a file as lines, one row per line, header line included.
///
/// Each line is parsed on its own, so a stray quote never swallows the lines
/// after it, and an empty line is an empty row.
pub fn read_line_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open {} for reading", path.display()))?;
    let mut rows = Vec::new();
    for (number, line) in BufReader::new(file).split(b'\n').enumerate() {
        let mut line = line.with_context(|| format!("read line: {}", path.display()))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let row = parse_bytes(&line)
            .with_context(|| format!("parse line {}: {}", number + 1, path.display()))?;
        rows.push(row);
    }
    if let Some(first) = rows.first_mut().and_then(|row| row.first_mut()) {
        strip_bom(first);
    }
    Ok(rows)
}

fn lossy_cells(record: &ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|cell| String::from_utf8_lossy(cell).into_owned())
        .collect()
}

fn strip_bom(cell: &mut String) {
    if let Some(rest) = cell.strip_prefix('\u{feff}') {
        *cell = rest.to_string();
    }
}

/// Writes records to a CSV file, quoting only where needed.
pub fn write_rows<R, S>(path: &Path, rows: R) -> Result<()>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let file = File::create(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;
    write_rows_to(BufWriter::new(file), rows).with_context(|| format!("write {}", path.display()))
}

/// Renders one record as a CSV line (without the line terminator).
pub fn format_record<I, S>(fields: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    writer.flush()?;
    let mut bytes = writer.into_inner().context("finish record")?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(String::from_utf8(bytes)?)
}

/// Parses one CSV line into its fields.
pub fn parse_record(line: &str) -> Result<Vec<String>> {
    parse_bytes(line.as_bytes())
}

fn parse_bytes(line: &[u8]) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line);
    let mut fields = Vec::new();
    if let Some(record) = reader.byte_records().next() {
        fields = lossy_cells(&record?);
    }
    Ok(fields)
}

/// Writes records to an arbitrary writer, quoting only where needed.
pub fn write_rows_to<W, R, S>(out: W, rows: R) -> Result<()>
where
    W: Write,
    R: IntoIterator,
    R::Item: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(out);
    for row in rows {
        writer.write_record(row).context("write record")?;
    }
    writer.flush().context("flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        assert_eq!(format_record(["Nature", "Cell"]).unwrap(), "Nature,Cell");
        assert_eq!(
            format_record(["J. Phys., A", "say \"hi\""]).unwrap(),
            "\"J. Phys., A\",\"say \"\"hi\"\"\""
        );
    }

    #[test]
    fn parses_quoted_fields() {
        assert_eq!(
            parse_record("\"a, b\",\"c \"\"d\"\"\",e").unwrap(),
            vec!["a, b", "c \"d\"", "e"]
        );
    }
}
