use crate::aggregate::AggregateTable;
use crate::error::{EngineError, RecordError, Result};
use crate::split::Span;
use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

const READ_BUFFER: usize = 256 * 1024;

/// Partial result of aggregating one span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkReport {
    pub table: AggregateTable,
    pub lines: u64,
    pub skipped: u64,
}

/// Aggregate exactly the bytes of `span` in the file at `path`.
///
/// The file is opened independently, so spans can be processed concurrently.
///
/// # Errors
/// Returns [`EngineError::Read`] if the file cannot be opened, seeked or read.
pub fn process_span(path: &Path, span: Span, delimiter: u8) -> Result<ChunkReport> {
    let read_err = |source| EngineError::Read {
        path: path.to_path_buf(),
        span,
        source,
    };

    let mut file = File::open(path).map_err(read_err)?;
    file.seek(SeekFrom::Start(span.offset)).map_err(read_err)?;

    // BufReader over-reads; `take` keeps it inside the span
    let mut reader = BufReader::with_capacity(READ_BUFFER, file.take(span.length));
    let report = aggregate_reader(&mut reader, delimiter).map_err(read_err)?;

    debug!(
        "span {span}: {} lines, {} keys, {} skipped",
        report.lines,
        report.table.len(),
        report.skipped
    );
    Ok(report)
}

/// Fold every `key<delimiter>value` line of `reader` into a fresh table.
///
/// # Errors
/// Propagates I/O errors from the reader. Malformed lines are counted, not returned.
pub fn aggregate_reader<R: BufRead>(reader: &mut R, delimiter: u8) -> std::io::Result<ChunkReport> {
    let mut report = ChunkReport::default();
    let mut line_buf = Vec::with_capacity(128);

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }

        let line = trim_line_end(&line_buf);
        if line.is_empty() {
            continue;
        }
        report.lines += 1;

        match parse_record(line, delimiter) {
            Ok((key, value)) => report.table.record(key, value),
            Err(e) => {
                report.skipped += 1;
                trace!("skipping line {:?}: {e}", String::from_utf8_lossy(line));
            }
        }
    }

    Ok(report)
}

/// Split a line at the first `delimiter` and parse the value.
///
/// # Errors
/// Returns a [`RecordError`] describing why the line cannot be used.
pub fn parse_record(line: &[u8], delimiter: u8) -> std::result::Result<(&str, f64), RecordError> {
    let pos = memchr::memchr(delimiter, line).ok_or(RecordError::MissingDelimiter)?;
    let key = std::str::from_utf8(&line[..pos]).map_err(|_| RecordError::InvalidKey)?;
    let raw = &line[pos + 1..];

    let value: f64 = std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| RecordError::InvalidValue(String::from_utf8_lossy(raw).into_owned()))?;
    if !value.is_finite() {
        return Err(RecordError::NonFiniteValue);
    }

    Ok((key, value))
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
