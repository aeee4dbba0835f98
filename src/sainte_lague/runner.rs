//! Round-by-round seat allocation.

use super::config::SainteLagueConfig;
use super::types::{Divisor, PartyState, PartyVotes, Quotient};
use crate::error::{Error, Result};
use crate::random::{RandomTieBreaker, TieBreaker};
use std::collections::{BTreeMap, HashSet};

/// How the winner of a round was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TieBreak {
    /// A single party had the highest quotient.
    None,

    /// Several parties shared the highest quotient; the one with the most
    /// votes won. `contenders` lists the score-tied parties in input order.
    Votes { contenders: Vec<String> },

    /// Several parties shared both the highest quotient and the highest
    /// vote count; the winner was drawn by lot. `contenders` lists the
    /// vote-tied parties in input order and `pick` indexes the winner.
    Lot { contenders: Vec<String>, pick: usize },
}

/// One allocation round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based round number; equals the seat number awarded.
    pub number: usize,

    /// Winning party.
    pub party: String,

    /// The quotient that won the round.
    pub quotient: Quotient,

    /// How the round was decided.
    pub tie_break: TieBreak,
}

impl Round {
    /// Divisor behind the winning quotient: 1.4 for a party's first seat,
    /// then 3, 5, 7, ...
    pub fn divisor(&self) -> Divisor {
        self.quotient.divisor()
    }
}

/// Outcome of an allocation run.
#[derive(Debug, Clone)]
pub struct Apportionment {
    /// Seats per party. Parties without seats are absent.
    pub seats: BTreeMap<String, u32>,

    /// Every round in the order it was played.
    pub rounds: Vec<Round>,

    /// Final state of every party, in input order.
    pub parties: Vec<PartyState>,
}

impl Apportionment {
    /// Seats won by `party` (0 if it won none or is unknown).
    pub fn seats_for(&self, party: &str) -> u32 {
        self.seats.get(party).copied().unwrap_or(0)
    }

    /// Total seats awarded.
    pub fn total_seats(&self) -> u32 {
        self.seats.values().sum()
    }

    /// Parties with at least one seat, in the order of their first seat.
    pub fn order_of_first_seat(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rounds
            .iter()
            .filter(|r| seen.insert(r.party.as_str()))
            .map(|r| r.party.as_str())
            .collect()
    }

    /// Number of rounds that went to a lot.
    pub fn lots_drawn(&self) -> usize {
        self.rounds
            .iter()
            .filter(|r| matches!(r.tie_break, TieBreak::Lot { .. }))
            .count()
    }
}

/// Executes the modified Sainte-Laguë allocation.
pub struct SainteLagueRunner;

impl SainteLagueRunner {
    /// Allocates `seats` seats among `records`, drawing lots from `tie_breaker`.
    ///
    /// # Errors
    ///
    /// Rejects the call before any round is played when `records` is empty,
    /// contains a duplicate party, or contains a negative vote count.
    pub fn run<T: TieBreaker>(
        records: &[PartyVotes],
        seats: u32,
        mut tie_breaker: T,
    ) -> Result<Apportionment> {
        let mut parties = initial_states(records)?;
        let mut allocated = BTreeMap::new();
        let mut rounds = Vec::with_capacity(seats as usize);

        for number in 1..=seats as usize {
            let Some((winner, tie_break)) = select_winner(&parties, &mut tie_breaker) else {
                break;
            };

            let state = &mut parties[winner];
            let quotient = state.quotient();
            state.award_seat();
            *allocated.entry(state.party().to_string()).or_insert(0) += 1;

            if let TieBreak::Lot { contenders, pick } = &tie_break {
                tracing::info!(
                    round = number,
                    party = %state.party(),
                    contenders = ?contenders,
                    pick,
                    "Seat decided by lot"
                );
            }
            tracing::debug!(
                round = number,
                party = %state.party(),
                quotient = %quotient,
                divisor = %quotient.divisor(),
                "Seat awarded"
            );

            rounds.push(Round {
                number,
                party: state.party().to_string(),
                quotient,
                tie_break,
            });
        }

        tracing::info!(
            parties = parties.len(),
            seats,
            winners = allocated.len(),
            "Apportionment complete"
        );

        Ok(Apportionment {
            seats: allocated,
            rounds,
            parties,
        })
    }

    /// Runs with the seat count and seed from `config`.
    ///
    /// Lots are drawn from a generator seeded with `config.seed`, or from
    /// the operating system when no seed is set.
    pub fn run_with_config(
        records: &[PartyVotes],
        config: &SainteLagueConfig,
    ) -> Result<Apportionment> {
        let tie_breaker = RandomTieBreaker::from_seed_option(config.seed);
        Self::run(records, config.seats, tie_breaker)
    }
}

/// Allocates `seats` seats and returns only the party → seats mapping.
///
/// # Examples
///
/// ```
/// use u_apportion::sainte_lague::{allocate, PartyVotes};
///
/// let records = vec![PartyVotes::new("A", 30_000), PartyVotes::new("B", 10_000)];
/// let seats = allocate(&records, 2).unwrap();
/// assert_eq!(seats.get("A"), Some(&2));
/// assert_eq!(seats.get("B"), None);
/// ```
pub fn allocate(records: &[PartyVotes], seats: u32) -> Result<BTreeMap<String, u32>> {
    SainteLagueRunner::run(records, seats, RandomTieBreaker::from_entropy()).map(|a| a.seats)
}

/// Validates the records and builds the initial per-party state.
fn initial_states(records: &[PartyVotes]) -> Result<Vec<PartyState>> {
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(records.len());
    let mut parties = Vec::with_capacity(records.len());
    for record in records {
        let votes = u64::try_from(record.votes).map_err(|_| Error::NegativeVotes {
            party: record.party.clone(),
            votes: record.votes,
        })?;
        if !seen.insert(record.party.as_str()) {
            return Err(Error::DuplicateParty {
                party: record.party.clone(),
            });
        }
        parties.push(PartyState::new(record.party.clone(), votes));
    }
    Ok(parties)
}

/// Picks the winner of one round.
///
/// Scans every party for the highest quotient, narrows the score-tied set
/// to the parties with the most votes, and draws a lot only if more than
/// one party remains. Returns `None` only for an empty party list.
fn select_winner<T: TieBreaker>(
    parties: &[PartyState],
    tie_breaker: &mut T,
) -> Option<(usize, TieBreak)> {
    let best = parties.iter().map(PartyState::quotient).max()?;
    let score_tied: Vec<usize> = (0..parties.len())
        .filter(|&i| parties[i].quotient() == best)
        .collect();

    if let [only] = score_tied[..] {
        return Some((only, TieBreak::None));
    }

    let most_votes = score_tied.iter().map(|&i| parties[i].votes()).max()?;
    let vote_tied: Vec<usize> = score_tied
        .iter()
        .copied()
        .filter(|&i| parties[i].votes() == most_votes)
        .collect();

    if let [only] = vote_tied[..] {
        let contenders = names(parties, &score_tied);
        return Some((only, TieBreak::Votes { contenders }));
    }

    let pick = tie_breaker.pick(vote_tied.len());
    debug_assert!(pick < vote_tied.len(), "tie breaker picked out of range");
    let pick = pick % vote_tied.len();
    let contenders = names(parties, &vote_tied);
    Some((vote_tied[pick], TieBreak::Lot { contenders, pick }))
}

fn names(parties: &[PartyState], indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .map(|&i| parties[i].party().to_string())
        .collect()
}
