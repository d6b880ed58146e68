use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write `line` plus a trailing newline to `writer` and flush it.
///
/// `name` identifies the destination in the error.
///
/// # Errors
/// Returns [`EngineError::Write`] if writing or flushing fails.
pub fn write_line<W: Write>(writer: &mut W, name: &Path, line: &str) -> Result<()> {
    writeln!(writer, "{line}")
        .and_then(|()| writer.flush())
        .map_err(|source| EngineError::Write {
            path: name.to_path_buf(),
            source,
        })
}

/// Write `line` to `path` when given, to stdout otherwise.
///
/// # Errors
/// Returns [`EngineError::Write`] if the file cannot be created or written.
pub fn write_summary(path: Option<&Path>, line: &str) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| EngineError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            write_line(&mut BufWriter::new(file), path, line)
        }
        None => write_line(&mut std::io::stdout().lock(), &PathBuf::from("<stdout>"), line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_summary_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        write_summary(Some(&out), "{a=1.0/1.0/1.0}").unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "{a=1.0/1.0/1.0}\n");
    }

    #[test]
    fn test_write_summary_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no/such/dir/out.txt");
        let err = write_summary(Some(&out), "{}").unwrap_err();
        assert!(matches!(err, EngineError::Write { .. }));
    }
}
