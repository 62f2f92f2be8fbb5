//! Grouped aggregates over categorical dimensions.
//!
//! Every function here is a pure pass over borrowed records. Groups are
//! keyed by the dimension's text value and returned in key order so that
//! repeated calls produce identical output. Records lacking the dimension
//! are left out of the grouping, as are records lacking the metric from
//! that metric's sums and means.

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Dimensions and metrics ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    ProductType,
    Supplier,
    ShippingCarrier,
    TransportationMode,
    Route,
    Location,
    CustomerDemographic,
}

impl Dimension {
    pub fn key<'a>(&self, record: &'a Record) -> Option<&'a str> {
        match self {
            Self::ProductType => Some(record.product_type.as_str()),
            Self::Supplier => record.supplier_name.as_deref(),
            Self::ShippingCarrier => record.shipping_carrier.as_deref(),
            Self::TransportationMode => record.transportation_mode.as_deref(),
            Self::Route => record.route.as_deref(),
            Self::Location => record.location.as_deref(),
            Self::CustomerDemographic => record.customer_demographics.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Revenue,
    StockLevels,
    ProductsSold,
    Price,
    LeadTimes,
    ShippingTimes,
    ShippingCosts,
    ProductionVolumes,
    ManufacturingCosts,
    DefectRates,
    Costs,
}

impl Metric {
    pub fn value(&self, record: &Record) -> Option<f64> {
        match self {
            Self::Revenue => Some(record.revenue),
            Self::StockLevels => Some(record.stock_levels),
            Self::ProductsSold => record.products_sold,
            Self::Price => record.price,
            Self::LeadTimes => record.lead_times,
            Self::ShippingTimes => record.shipping_times,
            Self::ShippingCosts => record.shipping_costs,
            Self::ProductionVolumes => record.production_volumes,
            Self::ManufacturingCosts => record.manufacturing_costs,
            Self::DefectRates => record.defect_rates,
            Self::Costs => record.costs,
        }
    }
}

// ── Basic reductions ─────────────────────────────────────────────────────────

pub fn sum<'a, I>(records: I, metric: Metric) -> f64
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter_map(|r| metric.value(r)).sum()
}

/// Mean over records that carry the metric; `None` if none do.
pub fn mean<'a, I>(records: I, metric: Metric) -> Option<f64>
where
    I: IntoIterator<Item = &'a Record>,
{
    let (total, n) = records
        .into_iter()
        .filter_map(|r| metric.value(r))
        .fold((0.0, 0usize), |(t, n), v| (t + v, n + 1));
    (n > 0).then(|| total / n as f64)
}

pub fn group_by<'a>(records: &'a [Record], dimension: Dimension) -> BTreeMap<&'a str, Vec<&'a Record>> {
    let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
    for record in records {
        if let Some(key) = dimension.key(record) {
            groups.entry(key).or_default().push(record);
        }
    }
    groups
}

// ── Single-metric grouping ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAggregate {
    pub key: String,
    pub count: usize,
    pub sum: f64,
    pub mean: Option<f64>,
    /// Share of `sum` across all groups.
    pub share_pct: f64,
}

/// Sum, mean and share of `metric` per value of `dimension`.
pub fn aggregate(records: &[Record], dimension: Dimension, metric: Metric) -> Vec<GroupAggregate> {
    let groups = group_by(records, dimension);
    let mut rows: Vec<GroupAggregate> = groups
        .into_iter()
        .map(|(key, members)| GroupAggregate {
            key: key.to_string(),
            count: members.len(),
            sum: sum(members.iter().copied(), metric),
            mean: mean(members.iter().copied(), metric),
            share_pct: 0.0,
        })
        .collect();

    let grand_total: f64 = rows.iter().map(|r| r.sum).sum();
    if grand_total != 0.0 {
        for row in rows.iter_mut() {
            row.share_pct = row.sum * 100.0 / grand_total;
        }
    }
    rows
}

// ── Dashboard cards ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub total_revenue: f64,
    pub items_sold: f64,
    pub avg_lead_time: Option<f64>,
}

pub fn key_metrics(records: &[Record]) -> KeyMetrics {
    KeyMetrics {
        total_revenue: sum(records, Metric::Revenue),
        items_sold: sum(records, Metric::ProductsSold),
        avg_lead_time: mean(records, Metric::LeadTimes),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeStatus {
    Ok,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub label: String,
    /// Rounded to two decimals.
    pub value: f64,
    pub status: GaugeStatus,
}

/// Mean of `metric` as a percentage gauge. Above `alert_above` the gauge
/// is flagged.
pub fn gauge(records: &[Record], metric: Metric, label: &str, alert_above: f64) -> Option<Gauge> {
    let value = round2(mean(records, metric)?);
    Some(Gauge {
        label: label.to_string(),
        value,
        status: if value > alert_above {
            GaugeStatus::Alert
        } else {
            GaugeStatus::Ok
        },
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRevenue {
    pub region: String,
    pub revenue: f64,
}

/// Revenue per region, where a record's region is looked up from its
/// `Location`. Locations without a mapping are dropped.
pub fn revenue_by_region(
    records: &[Record],
    location_to_region: &BTreeMap<String, String>,
) -> Vec<RegionRevenue> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    let mut unmapped = 0usize;
    for record in records {
        match record
            .location
            .as_deref()
            .and_then(|loc| location_to_region.get(loc))
        {
            Some(region) => *totals.entry(region.as_str()).or_insert(0.0) += record.revenue,
            None => unmapped += 1,
        }
    }
    if unmapped > 0 {
        log::warn!("revenue_by_region: {unmapped} records have no region mapping");
    }
    totals
        .into_iter()
        .map(|(region, revenue)| RegionRevenue {
            region: region.to_string(),
            revenue,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSeller {
    pub sku: String,
    pub products_sold: f64,
}

/// Records by units sold, highest first. Equal counts keep input order.
pub fn top_sellers(records: &[Record], limit: Option<usize>) -> Vec<TopSeller> {
    let mut sellers: Vec<TopSeller> = records
        .iter()
        .filter_map(|r| {
            r.products_sold.map(|sold| TopSeller {
                sku: r.sku.clone(),
                products_sold: sold,
            })
        })
        .collect();
    sellers.sort_by(|a, b| b.products_sold.total_cmp(&a.products_sold));
    if let Some(limit) = limit {
        sellers.truncate(limit);
    }
    sellers
}

/// Two decimals, halves to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
