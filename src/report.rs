//! Presentation of allocation results.

use crate::district::DistrictConfig;
use crate::error::Result;
use crate::sainte_lague::{Apportionment, TieBreak};
use serde::Serialize;
use std::fmt::Write as _;

/// Seats won by one party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub party: String,
    pub votes: u64,
    pub seats: u32,
}

/// One allocation round, flattened for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundEntry {
    pub round: usize,
    pub party: String,
    pub divisor: String,
    pub quotient: f64,
    /// `"score"`, `"votes"` or `"lot"`.
    pub decided_by: &'static str,
    /// Parties the round was decided among; empty for a clear win.
    pub contenders: Vec<String>,
}

/// District result ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub district: Option<String>,
    pub total_mandates: u32,
    pub leveling_seats: u32,
    pub district_seats: u32,
    /// Parties with seats, in the order they won their first seat.
    pub entries: Vec<ReportEntry>,
    pub rounds: Vec<RoundEntry>,
}

impl Report {
    pub fn new(district: &DistrictConfig, result: &Apportionment) -> Self {
        let entries = result
            .order_of_first_seat()
            .into_iter()
            .map(|party| ReportEntry {
                party: party.to_string(),
                votes: result
                    .parties
                    .iter()
                    .find(|p| p.party() == party)
                    .map_or(0, |p| p.votes()),
                seats: result.seats_for(party),
            })
            .collect();

        let rounds = result
            .rounds
            .iter()
            .map(|r| {
                let (decided_by, contenders) = match &r.tie_break {
                    TieBreak::None => ("score", Vec::new()),
                    TieBreak::Votes { contenders } => ("votes", contenders.clone()),
                    TieBreak::Lot { contenders, .. } => ("lot", contenders.clone()),
                };
                RoundEntry {
                    round: r.number,
                    party: r.party.clone(),
                    divisor: r.divisor().to_string(),
                    quotient: r.quotient.value(),
                    decided_by,
                    contenders,
                }
            })
            .collect();

        Self {
            district: district.name.clone(),
            total_mandates: district.total_mandates,
            leveling_seats: district.leveling_seats,
            district_seats: result.total_seats(),
            entries,
            rounds,
        }
    }

    /// One line per party: `"H   :  5 mandates"`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if let Some(name) = &self.district {
            let _ = writeln!(
                out,
                "{name}: {} district mandates ({} of {} reserved for leveling)",
                self.district_seats, self.leveling_seats, self.total_mandates
            );
        }
        for entry in &self.entries {
            let _ = writeln!(out, "{:<4}: {:>2} mandates", entry.party, entry.seats);
        }
        out
    }

    /// Round-by-round trace.
    pub fn render_rounds(&self) -> String {
        let mut out = String::new();
        for r in &self.rounds {
            let note = match r.decided_by {
                "votes" => format!("  [score tie: {}; most votes]", r.contenders.join(", ")),
                "lot" => format!("  [lot among {}]", r.contenders.join(", ")),
                _ => String::new(),
            };
            let _ = writeln!(
                out,
                "{:>3}. {:<4} {:>12.1}  (divisor {}){}",
                r.round, r.party, r.quotient, r.divisor, note
            );
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedTieBreaker;
    use crate::sainte_lague::{PartyVotes, SainteLagueRunner};

    fn run(rows: &[(&str, i64)], seats: u32, picks: Vec<usize>) -> Apportionment {
        let records: Vec<PartyVotes> = rows.iter().map(|&(p, v)| PartyVotes::new(p, v)).collect();
        SainteLagueRunner::run(&records, seats, ScriptedTieBreaker::new(picks)).unwrap()
    }

    #[test]
    fn test_entries_in_first_seat_order() {
        let result = run(&[("SV", 100), ("AP", 300), ("H", 200)], 4, vec![]);
        let report = Report::new(&DistrictConfig::default(), &result);
        let parties: Vec<&str> = report.entries.iter().map(|e| e.party.as_str()).collect();
        assert_eq!(parties, vec!["AP", "H", "SV"]);
        assert_eq!(report.entries[0].votes, 300);
        assert_eq!(report.district_seats, 4);
    }

    #[test]
    fn test_render_text_lines() {
        let result = run(&[("A", 30_000), ("B", 10_000)], 2, vec![]);
        let report = Report::new(&DistrictConfig::default(), &result);
        assert_eq!(report.render_text(), "A   :  2 mandates\n");
    }

    #[test]
    fn test_render_text_with_heading() {
        let result = run(&[("A", 30_000), ("B", 10_000)], 2, vec![]);
        let district = DistrictConfig::default()
            .with_name("Test")
            .with_total_mandates(3)
            .with_leveling_seats(1);
        let text = Report::new(&district, &result).render_text();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Test: 2 district mandates (1 of 3 reserved for leveling)")
        );
        assert_eq!(lines.next(), Some("A   :  2 mandates"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_render_rounds_marks_ties() {
        let result = run(&[("A", 10_000), ("B", 10_000)], 1, vec![1]);
        let report = Report::new(&DistrictConfig::default(), &result);
        let trace = report.render_rounds();
        assert!(trace.starts_with("  1. B"), "{trace}");
        assert!(trace.contains("(divisor 1.4)"), "{trace}");
        assert!(trace.contains("[lot among A, B]"), "{trace}");
    }

    #[test]
    fn test_round_entries_decided_by() {
        let result = run(&[("B", 14_000), ("A", 30_000)], 2, vec![]);
        let report = Report::new(&DistrictConfig::default(), &result);
        assert_eq!(report.rounds[0].decided_by, "score");
        assert!(report.rounds[0].contenders.is_empty());
        assert_eq!(report.rounds[1].decided_by, "votes");
        assert_eq!(report.rounds[1].divisor, "3");
    }

    #[test]
    fn test_render_json() {
        let result = run(&[("A", 30_000), ("B", 10_000)], 2, vec![]);
        let report = Report::new(&DistrictConfig::default().with_name("X"), &result);
        let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert_eq!(json["district"], "X");
        assert_eq!(json["district_seats"], 2);
        assert_eq!(json["entries"][0]["party"], "A");
        assert_eq!(json["entries"][0]["seats"], 2);
        assert_eq!(json["rounds"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_result() {
        let result = run(&[("A", 1)], 0, vec![]);
        let report = Report::new(&DistrictConfig::default(), &result);
        assert!(report.entries.is_empty());
        assert_eq!(report.render_text(), "");
        assert_eq!(report.render_rounds(), "");
    }
}
