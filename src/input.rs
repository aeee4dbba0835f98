//! Decoding of party vote tables.
//!
//! The input is CSV with a header row. Two columns are required, `Party`
//! and `Votes`; they are matched case-insensitively and may appear in any
//! position. Other columns are ignored.
//!
//! ```text
//! Party,Votes
//! A,99150
//! H,103330
//! ```

use crate::error::{Error, Result};
use crate::sainte_lague::PartyVotes;
use std::fs::File;
use std::io;
use std::path::Path;

const PARTY_COLUMN: &str = "party";
const VOTES_COLUMN: &str = "votes";

/// Reads party records from CSV data.
///
/// Vote counts are read as signed integers; negative values are left for
/// allocation to reject. Rows are returned in input order.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<PartyVotes>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let party_col = find_column(&headers, PARTY_COLUMN)?;
    let votes_col = find_column(&headers, VOTES_COLUMN)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row_number = i + 1;
        let row = row?;

        let party = row.get(party_col).unwrap_or_default();
        if party.is_empty() {
            return Err(Error::EmptyPartyName { row: row_number });
        }

        let raw_votes = row.get(votes_col).unwrap_or_default();
        let votes = raw_votes.parse::<i64>().map_err(|_| Error::InvalidVotes {
            row: row_number,
            value: raw_votes.to_string(),
        })?;

        records.push(PartyVotes::new(party, votes));
    }

    tracing::debug!(rows = records.len(), "Decoded party vote table");
    Ok(records)
}

/// Reads party records from a CSV file.
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<PartyVotes>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading party vote table");
    let file = File::open(path)?;
    read_records(io::BufReader::new(file))
}

fn find_column(headers: &csv::StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or(Error::MissingColumn { column: name })
}
