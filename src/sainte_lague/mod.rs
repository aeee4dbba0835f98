//! Modified Sainte-Laguë seat allocation.
//!
//! A highest-averages method: every party starts with the quotient
//! `votes / 1.4`; each round the highest quotient wins a seat and that
//! party's quotient becomes `votes / 3`, then `votes / 5`, `votes / 7`, ...
//! Divisors advance independently per party.
//!
//! Ties on the quotient go to the party with more votes. Parties tied on
//! both are decided by lot, drawn from an injected
//! [`TieBreaker`](crate::random::TieBreaker).
//!
//! Quotients are compared as exact fractions, never as floats.
//!
//! # References
//!
//! - Sainte-Laguë (1910), "La représentation proportionnelle et la méthode
//!   des moindres carrés"
//! - First divisor 1.4 as used for Norwegian Storting district mandates

mod config;
mod runner;
mod types;

pub use config::SainteLagueConfig;
pub use runner::{allocate, Apportionment, Round, SainteLagueRunner, TieBreak};
pub use types::{Divisor, PartyState, PartyVotes, Quotient};
