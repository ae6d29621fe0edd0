pub mod filter;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Seed used when neither the CLI nor the config file overrides it.
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ROWS: usize = 500;

/// Last date in the generated range. Fixed so a given seed always
/// produces the same dataset regardless of wall-clock time.
const ANCHOR_DATE: (i32, u32, u32) = (2025, 12, 31);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn label(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Mobile,
    Desktop,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Web, Platform::Mobile, Platform::Desktop];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Web => "Web",
            Platform::Mobile => "Mobile",
            Platform::Desktop => "Desktop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Satisfaction {
    Low,
    Medium,
    High,
}

impl Satisfaction {
    pub fn label(&self) -> &'static str {
        match self {
            Satisfaction::Low => "Low",
            Satisfaction::Medium => "Medium",
            Satisfaction::High => "High",
        }
    }
}

/// One row of the reference dataset. Read-only after generation.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub date: NaiveDate,
    pub revenue: f64,
    pub users: u32,
    pub sessions: u32,
    pub region: Region,
    pub platform: Platform,
    pub satisfaction: Satisfaction,
}

/// The synthetic reference dataset, generated once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Generate `count` rows, one per consecutive day ending at the
    /// anchor date. Deterministic for a given seed.
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (y, m, d) = ANCHOR_DATE;
        // The anchor is a compile-time-known valid date.
        let end = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let start = end - Duration::days(count.saturating_sub(1) as i64);

        let rows = (0..count)
            .map(|i| {
                let date = start + Duration::days(i as i64);
                let users = rng.gen_range(50..500);
                Row {
                    date,
                    revenue: (rng.gen_range(1_000.0..10_000.0f64) * 100.0).round() / 100.0,
                    users,
                    sessions: users + rng.gen_range(10..300),
                    region: Region::ALL[rng.gen_range(0..Region::ALL.len())],
                    platform: Platform::ALL[rng.gen_range(0..Platform::ALL.len())],
                    satisfaction: match rng.gen_range(0..10) {
                        0..=1 => Satisfaction::Low,
                        2..=5 => Satisfaction::Medium,
                        _ => Satisfaction::High,
                    },
                }
            })
            .collect();

        tracing::info!(seed, count, "generated reference dataset");
        Self { rows }
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = Dataset::generate(7, 100);
        let b = Dataset::generate(7, 100);
        for (ra, rb) in a.rows.iter().zip(&b.rows) {
            assert_eq!(ra.date, rb.date);
            assert_eq!(ra.revenue, rb.revenue);
            assert_eq!(ra.region, rb.region);
        }
        let c = Dataset::generate(8, 100);
        assert!(a
            .rows
            .iter()
            .zip(&c.rows)
            .any(|(ra, rc)| ra.revenue != rc.revenue));
    }

    #[test]
    fn dates_are_consecutive_days() {
        let d = Dataset::generate(DEFAULT_SEED, 10);
        assert_eq!(d.rows.len(), 10);
        for pair in d.rows.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert_eq!(
            d.last_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }

    #[test]
    fn values_stay_in_bounds() {
        let d = Dataset::generate(DEFAULT_SEED, DEFAULT_ROWS);
        for row in &d.rows {
            assert!(row.revenue >= 1_000.0 && row.revenue < 10_000.0);
            assert!(row.users >= 50 && row.users < 500);
            assert!(row.sessions > row.users);
        }
    }
}
