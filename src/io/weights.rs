//! Weight table loading from `identifier,count` text files
//!
//! Blank lines and lines starting with `#` are ignored. A first line whose
//! count column is not numeric is treated as a header. Repeated identifiers
//! are summed, so per-level tallies can be listed as they were recorded.

use crate::allocation::WeightTable;
use crate::io::error::{MosaicError, Result};
use std::path::Path;

/// Parse weight file contents into `(identifier, count)` pairs
///
/// # Errors
///
/// Returns `WeightParse` for a line without exactly two columns, with an empty
/// identifier, or with a count that is not a non-negative integer
pub fn parse_counts(path: &Path, contents: &str) -> Result<Vec<(String, u64)>> {
    let mut counts = Vec::new();
    let mut header_checked = false;

    for (index, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = |reason: String| MosaicError::WeightParse {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        };

        let mut columns = line.split(',').map(str::trim);
        let (Some(identifier), Some(count), None) = (columns.next(), columns.next(), columns.next())
        else {
            return Err(parse_error(format!(
                "expected 'identifier,count', found '{line}'"
            )));
        };

        if identifier.is_empty() {
            return Err(parse_error("empty identifier".to_string()));
        }

        // Only the first meaningful line may be a header
        let may_be_header = !header_checked;
        header_checked = true;

        match count.parse::<u64>() {
            Ok(count) => counts.push((identifier.to_string(), count)),
            Err(_) if may_be_header && count.parse::<f64>().is_err() => {}
            Err(error) => {
                return Err(parse_error(format!("invalid count '{count}': {error}")));
            }
        }
    }

    Ok(counts)
}

/// Read a weight file and build a validated weight table
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A line cannot be parsed
/// - No identifier has a positive count
pub fn load_weight_table(path: &Path) -> Result<WeightTable> {
    let contents = std::fs::read_to_string(path).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read weights",
        source: e,
    })?;
    let counts = parse_counts(path, &contents)?;
    log::debug!("read {} weight rows from {}", counts.len(), path.display());
    WeightTable::from_counts(counts)
}
