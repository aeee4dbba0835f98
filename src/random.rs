//! Random sources for breaking exact ties.
//!
//! The allocator never touches a process-wide generator. Every run receives
//! a [`TieBreaker`] whose only capability is picking an index in a range,
//! so tests can replay fixed draws and production runs can use a seeded or
//! entropy-backed generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one index out of `len` tied candidates.
///
/// Implementations must return a value in `0..len`. The allocator only
/// calls `pick` with `len >= 2`.
pub trait TieBreaker {
    /// Returns the index of the chosen candidate.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: TieBreaker + ?Sized> TieBreaker for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform draw backed by a `rand` generator.
///
/// # Examples
///
/// ```
/// use u_apportion::random::{RandomTieBreaker, TieBreaker};
///
/// let mut a = RandomTieBreaker::seeded(7);
/// let mut b = RandomTieBreaker::seeded(7);
/// assert_eq!(a.pick(5), b.pick(5));
/// ```
#[derive(Debug, Clone)]
pub struct RandomTieBreaker<R> {
    rng: R,
}

impl<R: Rng> RandomTieBreaker<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomTieBreaker<StdRng> {
    /// Reproducible draws from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(create_rng(seed))
    }

    /// Draws seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> TieBreaker for RandomTieBreaker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed sequence of picks, cycling when exhausted.
///
/// Each stored pick is reduced modulo the number of candidates, so a
/// script written for one tie size stays in range for another. Useful for
/// reproducing a lot that was drawn by hand.
///
/// # Examples
///
/// ```
/// use u_apportion::random::{ScriptedTieBreaker, TieBreaker};
///
/// let mut tb = ScriptedTieBreaker::new(vec![1, 0]);
/// assert_eq!(tb.pick(2), 1);
/// assert_eq!(tb.pick(2), 0);
/// assert_eq!(tb.pick(2), 1);
/// assert_eq!(tb.draws(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedTieBreaker {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedTieBreaker {
    /// Creates a breaker replaying `picks`. An empty script always picks 0.
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }

    /// Always picks the first candidate.
    pub fn first() -> Self {
        Self::new(Vec::new())
    }

    /// Number of picks made so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl TieBreaker for ScriptedTieBreaker {
    fn pick(&mut self, len: usize) -> usize {
        let raw = if self.picks.is_empty() {
            0
        } else {
            self.picks[self.cursor % self.picks.len()]
        };
        self.cursor += 1;
        raw % len.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomTieBreaker::seeded(42);
        let mut b = RandomTieBreaker::seeded(42);
        let xs: Vec<usize> = (0..20).map(|_| a.pick(7)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.pick(7)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_random_picks_stay_in_range() {
        let mut tb = RandomTieBreaker::seeded(1);
        for len in 1..50 {
            for _ in 0..20 {
                assert!(tb.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_random_picks_cover_all_candidates() {
        let mut tb = RandomTieBreaker::seeded(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[tb.pick(4)] = true;
        }
        assert!(seen.iter().all(|&s| s), "expected every index drawn: {seen:?}");
    }

    #[test]
    fn test_scripted_wraps_modulo_len() {
        let mut tb = ScriptedTieBreaker::new(vec![5]);
        assert_eq!(tb.pick(3), 2);
        assert_eq!(tb.pick(2), 1);
    }

    #[test]
    fn test_scripted_first() {
        let mut tb = ScriptedTieBreaker::first();
        assert_eq!(tb.pick(4), 0);
        assert_eq!(tb.pick(9), 0);
        assert_eq!(tb.draws(), 2);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<T: TieBreaker>(mut tb: T) -> usize {
            tb.pick(2)
        }

        let mut inner = ScriptedTieBreaker::new(vec![1]);
        assert_eq!(draw(&mut inner), 1);
        assert_eq!(inner.draws(), 1);
    }
}
