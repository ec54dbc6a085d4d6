//! Dictionary loading.
//!
//! One record per line: `term`, `term,frequency`, or `term frequency`. The
//! first comma wins as delimiter; otherwise the last whitespace run splits
//! term from frequency, so space-delimited files can still carry multi-word
//! terms. Blank lines and `#` comments are skipped.
//!
//! A malformed frequency never aborts the build: the record falls back to
//! weight 1 and is logged, because one bad line must not take down the
//! whole dictionary. Only failing to read the source at all is fatal.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::index::AutocompleteIndex;

/// Why a dictionary could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be opened or read. The index must not silently
    /// serve an empty state, so this always surfaces to the caller.
    Source { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Source { path, source } => {
                write!(f, "cannot read dictionary {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Source { source, .. } => Some(source),
        }
    }
}

/// Outcome counters for one load.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadStats {
    /// Records inserted, malformed ones included.
    pub records: usize,
    /// Records whose frequency field did not parse and fell back to 1.
    pub malformed: usize,
}

/// Load a dictionary file into a fresh index.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<AutocompleteIndex, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Source {
        path: path.to_path_buf(),
        source,
    })?;

    let mut index = AutocompleteIndex::new();
    let stats =
        load_records(BufReader::new(file), &mut index).map_err(|source| LoadError::Source {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        terms = index.len(),
        records = stats.records,
        malformed = stats.malformed,
        "dictionary loaded"
    );
    Ok(index)
}

/// Feed records from any buffered reader into `index`.
///
/// Returns counters; only an I/O failure mid-stream is an error.
pub fn load_records<R: BufRead>(
    reader: R,
    index: &mut AutocompleteIndex,
) -> io::Result<LoadStats> {
    let mut stats = LoadStats::default();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let record = parse_record(line);
        if let Some(field) = record.malformed {
            warn!(
                line = lineno + 1,
                field, "malformed frequency, falling back to weight 1"
            );
            stats.malformed += 1;
        }
        index.insert(record.term, record.weight);
        stats.records += 1;
    }
    Ok(stats)
}

struct ParsedRecord<'a> {
    term: &'a str,
    weight: u64,
    /// The frequency field that failed to parse, when there was one.
    malformed: Option<&'a str>,
}

/// Split one record into term and weight.
///
/// An explicit comma delimiter with a bad frequency is a malformed record
/// (the term is kept at weight 1). A whitespace tail that does not parse as
/// an integer is not malformed -- the whole line is a bare phrase term.
fn parse_record(line: &str) -> ParsedRecord<'_> {
    if let Some((term, field)) = line.split_once(',') {
        let term = term.trim();
        let field = field.trim();
        return match field.parse::<u64>() {
            Ok(freq) => ParsedRecord {
                term,
                weight: freq.max(1),
                malformed: None,
            },
            Err(_) => ParsedRecord {
                term,
                weight: 1,
                malformed: Some(field),
            },
        };
    }

    if let Some((term, field)) = line.rsplit_once(char::is_whitespace) {
        if let Ok(freq) = field.trim().parse::<u64>() {
            return ParsedRecord {
                term: term.trim(),
                weight: freq.max(1),
                malformed: None,
            };
        }
    }

    ParsedRecord {
        term: line,
        weight: 1,
        malformed: None,
    }
}
