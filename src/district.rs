//! District configuration: how many mandates are allocated locally.
//!
//! A district has a fixed number of mandates, some of which may be
//! reserved as leveling seats decided at national level. Only the
//! remainder is distributed by the district allocation.
//!
//! Configuration can be built in code or read from a TOML file whose keys
//! are all optional and fall back to [`DistrictConfig::default`]:
//!
//! ```toml
//! name = "Akershus"
//! total_mandates = 19
//! leveling_seats = 1
//! seed = 2021
//! ```

use crate::error::{Error, Result};
use crate::sainte_lague::SainteLagueConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Mandate configuration for one district.
///
/// # Examples
///
/// ```
/// use u_apportion::district::DistrictConfig;
///
/// let district = DistrictConfig::default()
///     .with_total_mandates(19)
///     .with_leveling_seats(1);
/// assert_eq!(district.district_seats().unwrap(), 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictConfig {
    /// Display name of the district.
    pub name: Option<String>,

    /// Mandates assigned to the district in total.
    pub total_mandates: u32,

    /// Mandates reserved as leveling seats and not allocated here.
    pub leveling_seats: u32,

    /// Seed for lots among exact ties (None for entropy).
    pub seed: Option<u64>,
}

impl Default for DistrictConfig {
    fn default() -> Self {
        Self {
            name: None,
            total_mandates: 19,
            leveling_seats: 1,
            seed: None,
        }
    }
}

impl DistrictConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_total_mandates(mut self, n: u32) -> Self {
        self.total_mandates = n;
        self
    }

    pub fn with_leveling_seats(mut self, n: u32) -> Self {
        self.leveling_seats = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Fails with [`Error::InvalidTarget`] when more leveling seats are
    /// reserved than the district has mandates.
    pub fn validate(&self) -> Result<()> {
        if self.leveling_seats > self.total_mandates {
            return Err(Error::InvalidTarget {
                total_mandates: self.total_mandates,
                leveling_seats: self.leveling_seats,
            });
        }
        Ok(())
    }

    /// Seats to allocate in the district: total mandates minus leveling seats.
    pub fn district_seats(&self) -> Result<u32> {
        self.validate()?;
        Ok(self.total_mandates - self.leveling_seats)
    }

    /// Allocation config for this district's seats and seed.
    pub fn allocation_config(&self) -> Result<SainteLagueConfig> {
        let config = SainteLagueConfig::default().with_seats(self.district_seats()?);
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }

    /// Parses a TOML document, layering its keys over the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(s)?;
        let mut cfg = Self::default();
        if let Some(v) = file.name {
            cfg.name = Some(v);
        }
        if let Some(v) = file.total_mandates {
            cfg.total_mandates = v;
        }
        if let Some(v) = file.leveling_seats {
            cfg.leveling_seats = v;
        }
        if let Some(v) = file.seed {
            cfg.seed = Some(v);
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading district configuration");
        let s = fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&s)?;
        tracing::debug!(
            name = ?cfg.name,
            total_mandates = cfg.total_mandates,
            leveling_seats = cfg.leveling_seats,
            "District configuration loaded"
        );
        Ok(cfg)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    total_mandates: Option<u32>,
    #[serde(default)]
    leveling_seats: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}
