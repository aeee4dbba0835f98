//! Error types for apportionment runs and their surrounding I/O.

use thiserror::Error;

/// Errors produced while validating input, deriving the target, loading
/// configuration, or decoding and encoding data.
///
/// Allocation itself cannot fail once validation has passed; every
/// variant here is raised before the first round starts.
#[derive(Error, Debug)]
pub enum Error {
    /// No party records were supplied.
    #[error("no party records supplied")]
    EmptyInput,

    /// The same party identifier appears more than once.
    #[error("duplicate party identifier: {party}")]
    DuplicateParty { party: String },

    /// A party has a negative vote count.
    #[error("negative vote count for {party}: {votes}")]
    NegativeVotes { party: String, votes: i64 },

    /// A data row has an empty party identifier.
    #[error("empty party identifier in data row {row}")]
    EmptyPartyName { row: usize },

    /// A required column is absent from the input header.
    #[error("missing column: {column}")]
    MissingColumn { column: &'static str },

    /// A vote cell is not an integer.
    #[error("invalid vote count in data row {row}: {value:?}")]
    InvalidVotes { row: usize, value: String },

    /// More leveling seats are reserved than the district has mandates.
    #[error(
        "invalid target: {leveling_seats} leveling seats reserved out of {total_mandates} mandates"
    )]
    InvalidTarget {
        total_mandates: u32,
        leveling_seats: u32,
    },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error rejects the party records themselves, as opposed
    /// to the target, the configuration, or I/O.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput
                | Error::DuplicateParty { .. }
                | Error::NegativeVotes { .. }
                | Error::EmptyPartyName { .. }
                | Error::MissingColumn { .. }
                | Error::InvalidVotes { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_classification() {
        assert!(Error::EmptyInput.is_invalid_input());
        assert!(Error::DuplicateParty { party: "A".into() }.is_invalid_input());
        assert!(Error::NegativeVotes {
            party: "A".into(),
            votes: -1
        }
        .is_invalid_input());
        assert!(!Error::InvalidTarget {
            total_mandates: 1,
            leveling_seats: 2
        }
        .is_invalid_input());
        assert!(!Error::Io(std::io::Error::other("x")).is_invalid_input());
    }

    #[test]
    fn test_messages() {
        let e = Error::InvalidTarget {
            total_mandates: 3,
            leveling_seats: 4,
        };
        assert_eq!(
            e.to_string(),
            "invalid target: 4 leveling seats reserved out of 3 mandates"
        );
        let e = Error::NegativeVotes {
            party: "SV".into(),
            votes: -12,
        };
        assert_eq!(e.to_string(), "negative vote count for SV: -12");
    }
}
