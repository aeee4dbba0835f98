//! Command-line interface for district apportionment.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::district::DistrictConfig;
use crate::error::Result;
use crate::input::read_records_from_path;
use crate::report::Report;
use crate::sainte_lague::SainteLagueRunner;

/// Allocate district mandates with the modified Sainte-Laguë method.
#[derive(Debug, Parser)]
#[command(name = "apportion")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CSV file with `Party` and `Votes` columns
    pub input: PathBuf,

    /// District configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Total mandates for the district (overrides the config file)
    #[arg(short, long)]
    pub mandates: Option<u32>,

    /// Mandates reserved as leveling seats (overrides the config file)
    #[arg(short, long)]
    pub leveling_seats: Option<u32>,

    /// Seed for lots among exact ties (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print the round-by-round trace after the result (text format)
    #[arg(long)]
    pub rounds: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    /// Log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// District configuration: defaults, then the config file, then flags.
    pub fn district_config(&self) -> Result<DistrictConfig> {
        let mut cfg = match &self.config {
            Some(path) => DistrictConfig::load(path)?,
            None => DistrictConfig::default(),
        };
        if let Some(v) = self.mandates {
            cfg.total_mandates = v;
        }
        if let Some(v) = self.leveling_seats {
            cfg.leveling_seats = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = Some(v);
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Runs the allocation described by `cli` and returns the rendered output.
pub fn run(cli: &Cli) -> Result<String> {
    let district = cli.district_config()?;
    let allocation = district.allocation_config()?;
    let records = read_records_from_path(&cli.input)?;

    let result = SainteLagueRunner::run_with_config(&records, &allocation)?;
    let report = Report::new(&district, &result);

    match cli.format {
        Format::Json => report.render_json(),
        Format::Text if cli.rounds => Ok(format!(
            "{}\n{}",
            report.render_text(),
            report.render_rounds()
        )),
        Format::Text => Ok(report.render_text()),
    }
}
