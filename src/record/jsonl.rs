//! JSONL readers/writers for candidate and scored records.

use std::io::{BufRead, Write};

use super::error::RecordError;
use super::types::{ScoredRecord, SearchCandidate};

/// Reads every candidate record from `reader`, one JSON object per line.
///
/// Blank lines are skipped. A malformed line fails the whole read with its
/// 1-based line number.
pub fn read_candidates<R: BufRead>(reader: R) -> Result<Vec<SearchCandidate>, RecordError> {
    let mut candidates = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let candidate =
            serde_json::from_str(&line).map_err(|source| RecordError::Decode {
                line: idx + 1,
                source,
            })?;
        candidates.push(candidate);
    }

    Ok(candidates)
}

/// Writes scored records to `writer`, one JSON object per line.
pub fn write_records<W: Write>(
    writer: &mut W,
    records: &[ScoredRecord],
) -> Result<(), RecordError> {
    for record in records {
        let line =
            serde_json::to_string(record).map_err(|source| RecordError::Encode { source })?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}
