//! Simulation report generation: text summary, per-character CSV tables,
//! and JSON export.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::config::{CharacterSpec, SimConfig};
use super::runner::SimStats;

/// Aggregated results from a finished simulation.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub rounds: u32,
    pub draws_per_round: u32,
    pub success_threshold: u32,
    pub reroll_enabled: bool,
    pub reroll_budget: u32,
    pub initial_weight: f64,
    pub decay_ratio: f64,
    pub roster: Vec<CharacterSpec>,

    // Per-character summary, indexed like the roster
    pub avg_final_value: Vec<f64>,
    pub success_ratio: Vec<f64>,

    // Raw (character, draw index, value) occurrence counts
    pub stats: SimStats,
}

impl SimReport {
    /// Builds the report and its derived summary values from raw counts.
    pub fn from_stats(config: &SimConfig, stats: SimStats) -> Self {
        let final_index = config.draws_per_round as usize;
        let mut avg_final_value = Vec::with_capacity(config.roster.len());
        let mut success_ratio = Vec::with_capacity(config.roster.len());

        for character in 0..config.roster.len() {
            let buckets = stats.buckets(character, final_index);
            let observations: u32 = buckets.values().sum();
            let weighted_sum: f64 = buckets
                .iter()
                .map(|(&value, &count)| value as f64 * count as f64)
                .sum();
            let successes: u32 = buckets
                .iter()
                .filter(|(&value, _)| value > config.success_threshold)
                .map(|(_, &count)| count)
                .sum();

            let denominator = observations.max(1) as f64;
            avg_final_value.push(weighted_sum / denominator);
            success_ratio.push(successes as f64 / denominator);
        }

        Self {
            rounds: config.rounds,
            draws_per_round: config.draws_per_round,
            success_threshold: config.success_threshold,
            reroll_enabled: config.reroll_enabled,
            reroll_budget: config.reroll_budget,
            initial_weight: config.initial_weight,
            decay_ratio: config.decay_ratio,
            roster: config.roster.clone(),
            avg_final_value,
            success_ratio,
            stats,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  GACHA DRAW SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Rounds: {}, draws per round: {}\n",
            self.rounds, self.draws_per_round
        ));
        report.push_str(&format!(
            "Weight curve: {} × {}^value\n",
            self.initial_weight, self.decay_ratio
        ));
        if self.reroll_enabled {
            report.push_str(&format!("Rerolls: enabled, {} per round\n", self.reroll_budget));
        } else {
            report.push_str("Rerolls: disabled\n");
        }
        report.push_str(&format!(
            "Success counts final values above {}\n\n",
            self.success_threshold
        ));

        report.push_str("── ROSTER SUMMARY ───────────────────────────────────────────────\n");
        report.push_str("  Character                     Avg Final   Success\n");
        report.push_str("  ─────────                     ─────────   ───────\n");
        for (index, spec) in self.roster.iter().enumerate() {
            report.push_str(&format!(
                "  {:<28}  {:>9.2}   {:>6.1}%\n",
                spec.label(),
                self.avg_final_value[index],
                self.success_ratio[index] * 100.0
            ));
        }
        report.push('\n');

        report.push_str("── FINAL VALUE DISTRIBUTION ─────────────────────────────────────\n");
        let final_index = self.draws_per_round as usize;
        for (index, spec) in self.roster.iter().enumerate() {
            report.push_str(&format!("  {}\n", spec.label()));
            let buckets = self.stats.buckets(index, final_index);
            let mut values: Vec<u32> = buckets.keys().copied().collect();
            values.sort_unstable();
            for value in values {
                let count = buckets.get(&value).copied().unwrap_or(0);
                let pct = (count as f64 / self.rounds.max(1) as f64) * 100.0;
                let bar_len = (pct / 5.0) as usize;
                let bar: String = "█".repeat(bar_len);
                report.push_str(&format!("    value {:2}: {:>5.1}% {}\n", value, pct, bar));
            }
            report.push('\n');
        }

        report.push_str("═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// CSV table for one roster character: columns are draw indexes, rows
    /// are main-attribute values, cells are occurrence ratios over all
    /// rounds, rendered with four decimals.
    pub fn csv_for(&self, character: usize) -> String {
        let draw_indexes = self.stats.num_draw_indexes();

        // Union of every value observed at any draw index, ascending.
        let mut values = BTreeSet::new();
        for draw_index in 0..draw_indexes {
            values.extend(self.stats.buckets(character, draw_index).keys().copied());
        }

        let mut csv = String::new();
        for draw_index in 0..draw_indexes {
            csv.push_str(&format!(",gacha {}", draw_index));
        }
        csv.push('\n');

        for value in values {
            csv.push_str(&format!("value_{}", value));
            for draw_index in 0..draw_indexes {
                let count = self
                    .stats
                    .buckets(character, draw_index)
                    .get(&value)
                    .copied()
                    .unwrap_or(0);
                let ratio = count as f64 / self.rounds.max(1) as f64;
                csv.push_str(&format!(",{:.4}", ratio));
            }
            csv.push('\n');
        }

        csv
    }

    /// Writes one CSV file per roster character into `dir`, named after
    /// [`CharacterSpec::label`]. Returns the written paths.
    pub fn write_csv_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let mut paths = Vec::with_capacity(self.roster.len());
        for (index, spec) in self.roster.iter().enumerate() {
            let path = dir.join(format!("{}.csv", spec.label()));
            fs::write(&path, self.csv_for(index))?;
            paths.push(path);
        }
        Ok(paths)
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Implement Serialize for JSON output
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 11)?;
        state.serialize_field("rounds", &self.rounds)?;
        state.serialize_field("draws_per_round", &self.draws_per_round)?;
        state.serialize_field("success_threshold", &self.success_threshold)?;
        state.serialize_field("reroll_enabled", &self.reroll_enabled)?;
        state.serialize_field("reroll_budget", &self.reroll_budget)?;
        state.serialize_field("initial_weight", &self.initial_weight)?;
        state.serialize_field("decay_ratio", &self.decay_ratio)?;
        state.serialize_field("roster", &self.roster)?;
        state.serialize_field("avg_final_value", &self.avg_final_value)?;
        state.serialize_field("success_ratio", &self.success_ratio)?;
        state.serialize_field("stats", &self.stats)?;
        state.end()
    }
}
