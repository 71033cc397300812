use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Streaming reader over a comma-separated file with one header row.
///
/// Yields one [`Row`] per data line, in file order. The reader is one-shot:
/// it consumes the underlying file as it iterates and is not restartable.
/// It knows nothing about what the rows mean — mapping fields into records
/// is the caller's concern.
pub struct TableReader {
    headers: Arc<[String]>,
    records: csv::StringRecordsIntoIter<File>,
}

impl TableReader {
    /// Open `path` and read its header row.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let mut reader = csv::Reader::from_path(path)?;
        let headers: Arc<[String]> = reader.headers()?.iter().map(str::to_string).collect();
        log::trace!("opened table {} ({} columns)", path.display(), headers.len());
        Ok(Self {
            headers,
            records: reader.into_records(),
        })
    }

    /// Column names from the header row, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl std::fmt::Debug for TableReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableReader")
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl Iterator for TableReader {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let values = match self.records.next()? {
            Ok(values) => values,
            Err(err) => return Some(Err(malformed_or_csv(err))),
        };
        Some(Ok(Row {
            headers: Arc::clone(&self.headers),
            values,
        }))
    }
}

/// A data line whose field count disagrees with the header row becomes a
/// [`Error::MalformedRecord`]; every other reader failure passes through.
fn malformed_or_csv(err: csv::Error) -> Error {
    if let csv::ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = err.kind()
    {
        return Error::MalformedRecord {
            line: pos.as_ref().map_or(0, |p| p.line()),
            expected: *expected_len as usize,
            found: *len as usize,
        };
    }
    Error::Csv(err)
}

/// One data line: field values addressable by header name or by position.
#[derive(Debug, Clone)]
pub struct Row {
    headers: Arc<[String]>,
    values: csv::StringRecord,
}

impl Row {
    /// The value under the named column, if the header declares one.
    pub fn get(&self, name: &str) -> Option<&str> {
        let index = self.headers.iter().position(|h| h == name)?;
        self.values.get(index)
    }

    /// The value at `index`, in field order.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.values.get(index)
    }

    /// Number of fields on this line.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 1-based line in the source file this row came from (0 if unknown).
    pub fn line(&self) -> u64 {
        self.values.position().map_or(0, |p| p.line())
    }
}
