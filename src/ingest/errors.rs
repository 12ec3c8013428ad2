use thiserror::Error;

/// Failures that reject an upload as a whole. None of them leave partial data behind.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("The uploaded CSV file is empty")]
    Empty,
    #[error("The uploaded file is not valid UTF-8 text")]
    NotUtf8,
    #[error("The uploaded file is {size} bytes, above the {limit} byte limit")]
    TooLarge {
        size: usize,
        limit: usize
    },
    #[error("The CSV header is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("The uploaded CSV file could not be read: {0}")]
    Unreadable(#[from] csv::Error),
    #[error("Invalid file type '{0}'. Only CSV files are allowed")]
    InvalidFileType(String)
}
