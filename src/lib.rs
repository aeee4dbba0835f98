//! District seat apportionment with the modified Sainte-Laguë method.
//!
//! Allocates a fixed number of mandates among parties by repeatedly
//! awarding a seat to the highest quotient `votes / divisor`, with
//! divisors 1.4, 3, 5, 7, ... advancing per party.
//!
//! - **[`sainte_lague`]**: the allocator: per-party state, exact quotients,
//!   round selection with score → votes → lot tie-breaking.
//! - **[`random`]**: injectable tie-break sources (seeded, entropy-backed,
//!   or scripted).
//! - **[`district`]**: district mandates minus reserved leveling seats,
//!   loadable from TOML.
//! - **[`input`]**: CSV vote tables.
//! - **[`report`]**: text and JSON rendering of a result.
//! - **[`cli`]**: the `apportion` command.
//!
//! # Example
//!
//! ```
//! use u_apportion::random::RandomTieBreaker;
//! use u_apportion::sainte_lague::{PartyVotes, SainteLagueRunner};
//!
//! let records = vec![
//!     PartyVotes::new("A", 30_000),
//!     PartyVotes::new("B", 14_000),
//! ];
//! let result = SainteLagueRunner::run(&records, 3, RandomTieBreaker::seeded(1)).unwrap();
//! assert_eq!(result.total_seats(), 3);
//! assert_eq!(result.seats_for("A"), 2);
//! ```

pub mod cli;
pub mod district;
pub mod error;
pub mod input;
pub mod random;
pub mod report;
pub mod sainte_lague;

pub use error::{Error, Result};
