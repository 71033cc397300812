use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("malformed record on line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("field `{field}` is not a whole number: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
