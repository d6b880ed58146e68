use crate::error::{EngineError, Result};
use std::fmt;
use std::io::{Read, Seek, SeekFrom};

/// Half-open byte range `[offset, offset + length)` of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub offset: u64,
    pub length: u64,
}

impl Span {
    #[must_use]
    pub const fn new(offset: u64, length: u64) -> Self {
        Self { offset, length }
    }

    /// First byte past the span.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.offset + self.length
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.offset, self.end())
    }
}

/// Split `size` bytes of `reader` into at most `parallelism` line-aligned spans.
///
/// Every span but the last ends immediately after a `\n`; the last ends at `size`.
/// The spans are contiguous and cover `[0, size)` exactly.
///
/// # Errors
/// Returns [`EngineError::Split`] when no line terminator exists within `window`
/// bytes before a computed boundary, and [`EngineError::Boundary`] on I/O failure.
pub fn split_file<R: Read + Seek>(
    reader: &mut R,
    size: u64,
    parallelism: usize,
    window: usize,
) -> Result<Vec<Span>> {
    if size == 0 {
        return Ok(Vec::new());
    }

    let parts = parallelism.max(1) as u64;
    let chunk = size / parts;
    if parts == 1 || chunk < window as u64 {
        return Ok(vec![Span::new(0, size)]);
    }

    let mut spans = Vec::with_capacity(parallelism);
    let mut start = 0u64;
    for _ in 1..parts {
        let target = start + chunk;
        if target >= size {
            break;
        }
        // chunk >= window keeps the boundary strictly after `start`
        let boundary = find_preceding_delimiter(reader, target, window, b'\n')?;
        spans.push(Span::new(start, boundary - start));
        start = boundary;
    }
    if start < size {
        spans.push(Span::new(start, size - start));
    }

    Ok(spans)
}

/// Find the nearest `delimiter` within the `window` bytes ending at `target`
/// and return the offset just past it.
///
/// # Errors
/// Returns [`EngineError::Split`] when the window holds no delimiter.
pub fn find_preceding_delimiter<R: Read + Seek>(
    reader: &mut R,
    target: u64,
    window: usize,
    delimiter: u8,
) -> Result<u64> {
    let window_start = target.saturating_sub(window as u64);
    #[allow(clippy::cast_possible_truncation)]
    let len = (target - window_start) as usize;
    let mut buf = vec![0u8; len];

    reader
        .seek(SeekFrom::Start(window_start))
        .and_then(|_| reader.read_exact(&mut buf))
        .map_err(|source| EngineError::Boundary {
            offset: target,
            source,
        })?;

    memchr::memrchr(delimiter, &buf)
        .map(|pos| window_start + pos as u64 + 1)
        .ok_or(EngineError::Split {
            offset: target,
            window,
        })
}
