//! Summary file loading.
//!
//! A summary file is written by the simulator as one CSV record per line,
//! where each record is a single quoted field holding the real,
//! comma-separated tokens:
//!
//! ```text
//! "10,1000"
//! "Flush,100,40"
//! "Pair,700,350"
//! ```
//!
//! The first record is the header (`iterations,num_hands`), every following
//! record is `hand_name,times_played,times_won`. Only the first field of each
//! record is read and split again on `,`.

use crate::stats::{sort_by_win_ratio, HandStat, RunMetadata};
use csv::{Position, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use tracing::debug;

const TOKEN_SEPARATOR: char = ',';

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("summary file is empty, expected an `iterations,num_hands` header")]
    MissingHeader,
    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: `{field}` is not a valid count: {value:?}")]
    InvalidCount {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parsed contents of a summary file, hands already sorted by win ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSummary {
    hands: Vec<HandStat>,
    metadata: RunMetadata,
}

impl HandSummary {
    /// Parse a summary from any reader. Hands come back highest win ratio
    /// first, ties in file order.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input).map_err(csv::Error::from)?;
        let mut records =
            ReaderBuilder::new().has_headers(false).flexible(true).from_reader(input.as_slice());

        let mut metadata = None;
        let mut hands = Vec::new();
        for (index, record) in records.records().enumerate() {
            let record = record?;
            let line = record.position().map_or(index + 1, |pos| record_line(&input, pos));
            let tokens: Vec<&str> = record.get(0).unwrap_or("").split(TOKEN_SEPARATOR).collect();
            if metadata.is_none() {
                metadata = Some(RunMetadata::from_tokens(&tokens, line)?);
            } else {
                hands.push(HandStat::from_tokens(&tokens, line)?);
            }
        }

        let metadata = metadata.ok_or(LoadError::MissingHeader)?;
        debug!(hands = hands.len(), "parsed summary rows");
        sort_by_win_ratio(&mut hands);
        Ok(Self { hands, metadata })
    }

    pub fn hands(&self) -> &[HandStat] {
        &self.hands
    }

    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    pub fn into_parts(self) -> (Vec<HandStat>, RunMetadata) {
        (self.hands, self.metadata)
    }
}

/// Open `path` and parse it. The file is closed before this returns, whether
/// or not parsing succeeded.
pub fn load_summary(path: impl AsRef<Path>) -> Result<HandSummary, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading summary");
    let file =
        File::open(path).map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    HandSummary::from_reader(file)
}

impl RunMetadata {
    /// Header tokens: `iterations,num_hands`.
    pub fn from_tokens(tokens: &[&str], line: usize) -> Result<Self, LoadError> {
        let iterations = field(tokens, 0, "iterations", line)?;
        let total_hands = field(tokens, 1, "num_hands", line)?;
        Ok(Self::new(iterations, total_hands))
    }
}

impl HandStat {
    /// Row tokens: `hand_name,times_played,times_won`. Extra tokens are
    /// ignored.
    pub fn from_tokens(tokens: &[&str], line: usize) -> Result<Self, LoadError> {
        let name = field(tokens, 0, "hand_name", line)?;
        let times_played = count(tokens, 1, "times_played", line)?;
        let times_won = count(tokens, 2, "times_won", line)?;
        Ok(Self::new(name, times_played, times_won))
    }
}

/// File line of a record. Blank lines are skipped and quoted fields may span
/// lines, so the record index is not the line. The reader stamps a record's
/// position before skipping the blank lines in front of it.
fn record_line(input: &[u8], pos: &Position) -> usize {
    let start = usize::try_from(pos.byte()).unwrap_or(input.len()).min(input.len());
    let skipped = input[start..]
        .iter()
        .take_while(|b| matches!(b, b'\r' | b'\n'))
        .filter(|&&b| b == b'\n')
        .count();
    pos.line() as usize + skipped
}

fn field<'a>(
    tokens: &[&'a str],
    index: usize,
    name: &'static str,
    line: usize,
) -> Result<&'a str, LoadError> {
    tokens.get(index).copied().ok_or(LoadError::MissingField { line, field: name })
}

fn count(tokens: &[&str], index: usize, name: &'static str, line: usize) -> Result<u64, LoadError> {
    let raw = field(tokens, index, name, line)?;
    raw.trim().parse().map_err(|source| LoadError::InvalidCount {
        line,
        field: name,
        value: raw.to_string(),
        source,
    })
}
