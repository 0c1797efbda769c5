use thiserror::Error;

/// Errors that can occur while reading or writing JSONL records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be decoded as a candidate record.
    #[error("invalid record on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode output record: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}
