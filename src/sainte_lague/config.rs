//! Allocation run configuration.

/// Configuration for one Sainte-Laguë allocation run.
///
/// # Examples
///
/// ```
/// use u_apportion::sainte_lague::SainteLagueConfig;
///
/// let config = SainteLagueConfig::default()
///     .with_seats(18)
///     .with_seed(2021);
/// assert_eq!(config.seats, 18);
/// assert_eq!(config.seed, Some(2021));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SainteLagueConfig {
    /// Number of seats to allocate.
    pub seats: u32,

    /// Seed for the lot among exact ties (None for entropy).
    pub seed: Option<u64>,
}

impl Default for SainteLagueConfig {
    fn default() -> Self {
        Self {
            seats: 0,
            seed: None,
        }
    }
}

impl SainteLagueConfig {
    /// Sets the number of seats to allocate.
    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = seats;
        self
    }

    /// Sets the random seed used for lots.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
