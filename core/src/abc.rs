//! ABC (Pareto) revenue classification.
//!
//! Records are ranked by revenue, highest first. Walking the ranking, each
//! record's cumulative share of total revenue decides its tier:
//!
//!   A  cumulative <= 70%
//!   B  cumulative <= 90%
//!   C  everything else
//!
//! RULES:
//!   - Ties keep their input order (stable sort). This makes the boundary
//!     bucket reproducible when several records share a revenue value.
//!   - Boundary values belong to the earlier letter.
//!   - The total is fixed once per input set; filtered views never
//!     re-rank, they only re-aggregate (see `summarize`).

use crate::{
    curve::{CurvePoint, THEORETICAL_CURVE},
    error::{AnalyticsError, AnalyticsResult},
    record::Record,
    types::Percent,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ── Categories ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcCategory {
    A,
    B,
    C,
}

impl AbcCategory {
    pub const ALL: [AbcCategory; 3] = [AbcCategory::A, AbcCategory::B, AbcCategory::C];

    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for AbcCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AbcCategory {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            other => Err(AnalyticsError::invalid(format!("unknown ABC category '{other}'"))),
        }
    }
}

// ── Threshold table ──────────────────────────────────────────────────────────

pub const DEFAULT_A_UPPER: Percent = 70.0;
pub const DEFAULT_B_UPPER: Percent = 90.0;

/// Ordered `(upper_bound, category)` bands. A cumulative percentage falls
/// into the first band whose bound it does not exceed; anything above the
/// last bound is `C`.
#[derive(Debug, Clone, PartialEq)]
pub struct AbcThresholds {
    bands: [(Percent, AbcCategory); 2],
}

impl AbcThresholds {
    /// Bounds must be finite, strictly increasing and within (0, 100].
    pub fn new(a_upper: Percent, b_upper: Percent) -> AnalyticsResult<Self> {
        let valid = |v: Percent| v.is_finite() && v > 0.0 && v <= 100.0;
        if !valid(a_upper) || !valid(b_upper) || a_upper >= b_upper {
            return Err(AnalyticsError::invalid(format!(
                "ABC thresholds must satisfy 0 < A ({a_upper}) < B ({b_upper}) <= 100"
            )));
        }
        Ok(Self {
            bands: [(a_upper, AbcCategory::A), (b_upper, AbcCategory::B)],
        })
    }

    pub fn bands(&self) -> &[(Percent, AbcCategory)] {
        &self.bands
    }

    pub fn categorize(&self, cumulative_revenue_pct: Percent) -> AbcCategory {
        self.bands
            .iter()
            .find(|(upper, _)| cumulative_revenue_pct <= *upper)
            .map(|(_, category)| *category)
            .unwrap_or(AbcCategory::C)
    }
}

impl Default for AbcThresholds {
    fn default() -> Self {
        Self {
            bands: [
                (DEFAULT_A_UPPER, AbcCategory::A),
                (DEFAULT_B_UPPER, AbcCategory::B),
            ],
        }
    }
}

// ── Ranked records ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecord {
    pub record: Record,
    /// 1-based position in descending-revenue order.
    pub rank: usize,
    pub cumulative_revenue: f64,
    pub cumulative_revenue_pct: Percent,
    pub cumulative_item_pct: Percent,
    pub category: AbcCategory,
}

/// Rank and classify `records` with the default 70/90 thresholds.
pub fn classify(records: &[Record]) -> AnalyticsResult<Vec<RankedRecord>> {
    classify_with(records, &AbcThresholds::default())
}

/// Rank and classify `records` against `thresholds`.
///
/// Fails with `InvalidInput` on an empty set, a negative or non-finite
/// revenue, or a total revenue that is not positive. On success every
/// record appears exactly once, in descending-revenue order.
pub fn classify_with(
    records: &[Record],
    thresholds: &AbcThresholds,
) -> AnalyticsResult<Vec<RankedRecord>> {
    if records.is_empty() {
        return Err(AnalyticsError::invalid("cannot classify an empty record set"));
    }
    if let Some(bad) = records.iter().find(|r| !r.revenue.is_finite() || r.revenue < 0.0) {
        return Err(AnalyticsError::invalid(format!(
            "SKU {} has invalid revenue {}",
            bad.sku, bad.revenue
        )));
    }

    // Vec::sort_by is stable: equal revenues keep input order.
    let mut ordered: Vec<&Record> = records.iter().collect();
    ordered.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));

    // Summed in ranking order so the final cumulative value equals the
    // total bit for bit and the last percentage is exactly 100.
    let total_revenue: f64 = ordered.iter().map(|r| r.revenue).sum();
    if total_revenue <= 0.0 {
        return Err(AnalyticsError::invalid(format!(
            "total revenue must be positive, got {total_revenue}"
        )));
    }

    let item_count = ordered.len() as f64;
    let mut cumulative_revenue = 0.0;
    let ranked = ordered
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let rank = idx + 1;
            cumulative_revenue += record.revenue;
            let cumulative_revenue_pct = cumulative_revenue * 100.0 / total_revenue;
            RankedRecord {
                record: record.clone(),
                rank,
                cumulative_revenue,
                cumulative_revenue_pct,
                cumulative_item_pct: rank as f64 * 100.0 / item_count,
                category: thresholds.categorize(cumulative_revenue_pct),
            }
        })
        .collect();

    Ok(ranked)
}

// ── Summary ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcSummary {
    pub category: AbcCategory,
    pub count: usize,
    pub revenue: f64,
    pub stock_levels: f64,
    /// Share of the revenue of the records passed to `summarize`.
    pub revenue_pct: Percent,
    /// `None` when no record in the category carries a lead time.
    pub mean_lead_time: Option<f64>,
}

/// Per-category aggregates of `ranked`.
///
/// `ranked` may already be filtered; `revenue_pct` is relative to its own
/// revenue, not to the total used for ranking. Categories without records
/// are absent from the map.
pub fn summarize(ranked: &[RankedRecord]) -> BTreeMap<AbcCategory, AbcSummary> {
    let filtered_total: f64 = ranked.iter().map(|r| r.record.revenue).sum();

    let mut summaries: BTreeMap<AbcCategory, AbcSummary> = BTreeMap::new();
    let mut lead_times: BTreeMap<AbcCategory, (f64, usize)> = BTreeMap::new();

    for r in ranked {
        let entry = summaries.entry(r.category).or_insert_with(|| AbcSummary {
            category: r.category,
            count: 0,
            revenue: 0.0,
            stock_levels: 0.0,
            revenue_pct: 0.0,
            mean_lead_time: None,
        });
        entry.count += 1;
        entry.revenue += r.record.revenue;
        entry.stock_levels += r.record.stock_levels;

        if let Some(lt) = r.record.lead_times {
            let acc = lead_times.entry(r.category).or_insert((0.0, 0));
            acc.0 += lt;
            acc.1 += 1;
        }
    }

    for (category, summary) in summaries.iter_mut() {
        summary.revenue_pct = if filtered_total > 0.0 {
            summary.revenue * 100.0 / filtered_total
        } else {
            0.0
        };
        summary.mean_lead_time = lead_times
            .get(category)
            .map(|(sum, n)| sum / *n as f64);
    }

    summaries
}

// ── Curves ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoCurves {
    pub actual: Vec<CurvePoint>,
    pub theoretical: Vec<CurvePoint>,
}

/// Actual cumulative curve of a full ranking next to the reference curve.
pub fn build_curve(ranked: &[RankedRecord]) -> ParetoCurves {
    let mut by_rank: Vec<&RankedRecord> = ranked.iter().collect();
    by_rank.sort_by_key(|r| r.rank);

    ParetoCurves {
        actual: by_rank
            .into_iter()
            .map(|r| CurvePoint::new(r.cumulative_item_pct, r.cumulative_revenue_pct))
            .collect(),
        theoretical: THEORETICAL_CURVE.to_vec(),
    }
}
