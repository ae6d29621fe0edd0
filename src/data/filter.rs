//! Date-range and categorical filtering over the reference dataset,
//! plus the rollups the Analytics page renders.

use chrono::NaiveDate;

use super::{Dataset, Platform, Region, Row};

/// Current filter selection on the Analytics page. Regions and
/// platforms are subsets; an empty subset matches nothing.
#[derive(Debug, Clone)]
pub struct Filter {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub regions: Vec<Region>,
    pub platforms: Vec<Platform>,
}

impl Filter {
    /// Select everything the dataset covers.
    pub fn all(dataset: &Dataset) -> Self {
        let from = dataset.first_date().unwrap_or_default();
        let to = dataset.last_date().unwrap_or_default();
        Self {
            from,
            to,
            regions: Region::ALL.to_vec(),
            platforms: Platform::ALL.to_vec(),
        }
    }

    pub fn toggle_region(&mut self, region: Region) {
        if let Some(i) = self.regions.iter().position(|r| *r == region) {
            self.regions.remove(i);
        } else {
            self.regions.push(region);
        }
    }

    pub fn toggle_platform(&mut self, platform: Platform) {
        if let Some(i) = self.platforms.iter().position(|p| *p == platform) {
            self.platforms.remove(i);
        } else {
            self.platforms.push(platform);
        }
    }

    fn matches(&self, row: &Row) -> bool {
        row.date >= self.from
            && row.date <= self.to
            && self.regions.contains(&row.region)
            && self.platforms.contains(&row.platform)
    }

    /// Rows passing the date range (inclusive) and both subsets.
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Row> {
        dataset.rows.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Aggregates for the stat line above the charts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Summary {
    pub rows: usize,
    pub total_revenue: f64,
    pub avg_users: f64,
    pub high_satisfaction_pct: f64,
}

pub fn summarize(rows: &[&Row]) -> Summary {
    if rows.is_empty() {
        return Summary::default();
    }
    let total_revenue = rows.iter().map(|r| r.revenue).sum();
    let total_users: u64 = rows.iter().map(|r| u64::from(r.users)).sum();
    let high = rows
        .iter()
        .filter(|r| r.satisfaction == super::Satisfaction::High)
        .count();
    Summary {
        rows: rows.len(),
        total_revenue,
        avg_users: total_users as f64 / rows.len() as f64,
        high_satisfaction_pct: high as f64 * 100.0 / rows.len() as f64,
    }
}

/// Revenue rolled up per region, in `Region::ALL` order, for the bar
/// chart. Regions filtered out still appear with a zero bar.
pub fn revenue_by_region(rows: &[&Row]) -> Vec<(Region, u64)> {
    Region::ALL
        .iter()
        .map(|region| {
            let total: f64 = rows
                .iter()
                .filter(|r| r.region == *region)
                .map(|r| r.revenue)
                .sum();
            (*region, total.round() as u64)
        })
        .collect()
}

/// Revenue per row in date order, quantized for the sparkline.
pub fn revenue_series(rows: &[&Row]) -> Vec<u64> {
    rows.iter().map(|r| r.revenue.round() as u64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, DEFAULT_SEED};
    use chrono::Duration;

    fn dataset() -> Dataset {
        Dataset::generate(DEFAULT_SEED, 120)
    }

    #[test]
    fn full_filter_keeps_every_row() {
        let d = dataset();
        let f = Filter::all(&d);
        assert_eq!(f.apply(&d).len(), d.rows.len());
    }

    #[test]
    fn date_range_is_inclusive() {
        let d = dataset();
        let mut f = Filter::all(&d);
        f.from = d.rows[10].date;
        f.to = d.rows[20].date;
        let rows = f.apply(&d);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows.first().unwrap().date, f.from);
        assert_eq!(rows.last().unwrap().date, f.to);
    }

    #[test]
    fn subset_filters_restrict_rows() {
        let d = dataset();
        let mut f = Filter::all(&d);
        f.regions = vec![Region::North];
        for row in f.apply(&d) {
            assert_eq!(row.region, Region::North);
        }
        f.platforms = vec![Platform::Mobile];
        for row in f.apply(&d) {
            assert_eq!(row.region, Region::North);
            assert_eq!(row.platform, Platform::Mobile);
        }
    }

    #[test]
    fn empty_subset_matches_nothing() {
        let d = dataset();
        let mut f = Filter::all(&d);
        f.regions.clear();
        assert!(f.apply(&d).is_empty());

        let mut f = Filter::all(&d);
        f.platforms.clear();
        assert!(f.apply(&d).is_empty());
    }

    #[test]
    fn out_of_range_window_is_empty() {
        let d = dataset();
        let mut f = Filter::all(&d);
        f.from = d.last_date().unwrap() + Duration::days(1);
        f.to = f.from + Duration::days(10);
        assert!(f.apply(&d).is_empty());
    }

    #[test]
    fn summary_aggregates_match_hand_rollup() {
        let d = dataset();
        let f = Filter::all(&d);
        let rows = f.apply(&d);
        let s = summarize(&rows);
        assert_eq!(s.rows, rows.len());
        let expected: f64 = rows.iter().map(|r| r.revenue).sum();
        assert!((s.total_revenue - expected).abs() < 1e-9);
        assert!(s.avg_users >= 50.0 && s.avg_users < 500.0);
        assert!(s.high_satisfaction_pct >= 0.0 && s.high_satisfaction_pct <= 100.0);
    }

    #[test]
    fn empty_summary_is_zeroed() {
        let s = summarize(&[]);
        assert_eq!(s.rows, 0);
        assert_eq!(s.total_revenue, 0.0);
        assert_eq!(s.avg_users, 0.0);
    }

    #[test]
    fn region_rollup_totals_match_summary() {
        let d = dataset();
        let f = Filter::all(&d);
        let rows = f.apply(&d);
        let by_region = revenue_by_region(&rows);
        assert_eq!(by_region.len(), Region::ALL.len());
        let rollup: u64 = by_region.iter().map(|(_, v)| v).sum();
        let total = summarize(&rows).total_revenue.round() as u64;
        // Per-region rounding can drift from the grand total slightly.
        assert!(rollup.abs_diff(total) <= Region::ALL.len() as u64);
    }
}
