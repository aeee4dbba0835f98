//! Per-party state and exact quotient arithmetic.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One decoded input row: a party and the votes it received.
///
/// Votes are signed so that negative counts coming from external data
/// survive decoding and are rejected by validation with a precise error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyVotes {
    /// Party identifier, unique within one run.
    pub party: String,
    /// Votes received.
    pub votes: i64,
}

impl PartyVotes {
    pub fn new(party: impl Into<String>, votes: i64) -> Self {
        Self {
            party: party.into(),
            votes,
        }
    }
}

/// A divisor from the sequence 1.4, 3, 5, 7, ...
///
/// Stored in tenths so that the non-integer first divisor stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Divisor {
    tenths: u64,
}

impl Divisor {
    /// The first divisor of the modified method, 1.4.
    pub const FIRST: Divisor = Divisor { tenths: 14 };

    /// The odd integer divisor `n` (3, 5, 7, ...).
    pub const fn odd(n: u64) -> Self {
        Self { tenths: n * 10 }
    }

    /// The divisor multiplied by ten.
    pub fn tenths(self) -> u64 {
        self.tenths
    }

    pub fn as_f64(self) -> f64 {
        self.tenths as f64 / 10.0
    }
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tenths % 10 == 0 {
            write!(f, "{}", self.tenths / 10)
        } else {
            write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
        }
    }
}

/// A party's score, `votes / divisor`, kept as an exact fraction.
///
/// Ordering and equality compare the fractions by cross-multiplication in
/// `u128`, so ties such as `14000 / 1.4 == 30000 / 3` are decided on exact
/// values rather than on floating-point rounding.
#[derive(Debug, Clone, Copy)]
pub struct Quotient {
    votes: u64,
    divisor: Divisor,
}

impl Quotient {
    pub fn new(votes: u64, divisor: Divisor) -> Self {
        Self { votes, divisor }
    }

    pub fn votes(&self) -> u64 {
        self.votes
    }

    pub fn divisor(&self) -> Divisor {
        self.divisor
    }

    /// Floating-point view, for display only.
    pub fn value(&self) -> f64 {
        self.votes as f64 / self.divisor.as_f64()
    }
}

impl Ord for Quotient {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.votes as u128 * other.divisor.tenths as u128;
        let rhs = other.votes as u128 * self.divisor.tenths as u128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Quotient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Quotient {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Quotient {}

impl fmt::Display for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

/// Allocation state of one party during a run.
///
/// Starts at `votes / 1.4` with next divisor 3. Every won seat replaces the
/// quotient with `votes / next_divisor` and advances the divisor by 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyState {
    party: String,
    votes: u64,
    quotient: Quotient,
    next_divisor: u64,
    seats: u32,
}

impl PartyState {
    pub fn new(party: impl Into<String>, votes: u64) -> Self {
        Self {
            party: party.into(),
            votes,
            quotient: Quotient::new(votes, Divisor::FIRST),
            next_divisor: 3,
            seats: 0,
        }
    }

    pub fn party(&self) -> &str {
        &self.party
    }

    pub fn votes(&self) -> u64 {
        self.votes
    }

    /// Current exact score.
    pub fn quotient(&self) -> Quotient {
        self.quotient
    }

    /// Current score as a float.
    pub fn score(&self) -> f64 {
        self.quotient.value()
    }

    /// Divisor that will be applied on the party's next win.
    pub fn next_divisor(&self) -> u64 {
        self.next_divisor
    }

    /// Seats won so far in this run.
    pub fn seats(&self) -> u32 {
        self.seats
    }

    /// Records a won seat and moves to the next divisor.
    ///
    /// Returns the divisor of the quotient that won the seat.
    pub(crate) fn award_seat(&mut self) -> Divisor {
        let won_with = self.quotient.divisor;
        self.seats += 1;
        self.quotient = Quotient::new(self.votes, Divisor::odd(self.next_divisor));
        self.next_divisor += 2;
        won_with
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisor_display() {
        assert_eq!(Divisor::FIRST.to_string(), "1.4");
        assert_eq!(Divisor::odd(3).to_string(), "3");
        assert_eq!(Divisor::odd(11).to_string(), "11");
    }

    #[test]
    fn test_divisor_as_f64() {
        assert!((Divisor::FIRST.as_f64() - 1.4).abs() < 1e-15);
        assert!((Divisor::odd(7).as_f64() - 7.0).abs() < 1e-15);
    }

    #[test]
    fn test_quotient_exact_equality() {
        let a = Quotient::new(30_000, Divisor::odd(3));
        let b = Quotient::new(50_000, Divisor::odd(5));
        let c = Quotient::new(14_000, Divisor::FIRST);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_quotient_ordering() {
        let a = Quotient::new(30_000, Divisor::FIRST);
        let b = Quotient::new(10_000, Divisor::FIRST);
        assert!(a > b);
        assert!(Quotient::new(30_000, Divisor::odd(3)) > b);
        assert!(Quotient::new(0, Divisor::FIRST) < Quotient::new(1, Divisor::odd(99)));
    }

    #[test]
    fn test_quotient_zero_votes_tie() {
        let a = Quotient::new(0, Divisor::FIRST);
        let b = Quotient::new(0, Divisor::odd(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_quotient_large_votes_do_not_overflow() {
        let a = Quotient::new(u64::MAX, Divisor::odd(3));
        let b = Quotient::new(u64::MAX - 1, Divisor::odd(3));
        assert!(a > b);
    }

    #[test]
    fn test_party_state_initial() {
        let p = PartyState::new("A", 30_000);
        assert_eq!(p.party(), "A");
        assert_eq!(p.next_divisor(), 3);
        assert_eq!(p.seats(), 0);
        assert_eq!(p.quotient().divisor(), Divisor::FIRST);
        assert!((p.score() - 30_000.0 / 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_party_state_award_sequence() {
        let mut p = PartyState::new("A", 30_000);
        assert_eq!(p.award_seat(), Divisor::FIRST);
        assert!((p.score() - 10_000.0).abs() < 1e-9);
        assert_eq!(p.next_divisor(), 5);

        assert_eq!(p.award_seat(), Divisor::odd(3));
        assert!((p.score() - 6_000.0).abs() < 1e-9);
        assert_eq!(p.next_divisor(), 7);

        assert_eq!(p.award_seat(), Divisor::odd(5));
        assert_eq!(p.seats(), 3);
        assert_eq!(p.quotient().divisor(), Divisor::odd(7));
    }
}
