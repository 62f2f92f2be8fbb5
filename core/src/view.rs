//! View trait and the sidebar menu.
//!
//! RULE: Every menu entry is served by exactly one DashboardView.
//! A view reads the immutable dataset through ViewContext and returns a
//! fresh ViewModel. Views never keep state between renders, so the same
//! selection always yields the same model.

use crate::{
    abc::{AbcSummary, AbcThresholds, ParetoCurves, RankedRecord},
    aggregate::{Gauge, GroupAggregate, KeyMetrics, RegionRevenue, TopSeller},
    config::DashboardConfig,
    curve::CurvePoint,
    error::{AnalyticsError, AnalyticsResult},
    filter::RecordFilter,
    record::Record,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Menu ─────────────────────────────────────────────────────────────────────

/// Sidebar entries, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visualization {
    MainDashboard,
    ProductTypeAnalytics,
    AbcAnalysis,
    SupplierAnalytics,
    ShipperAnalytics,
    CustomerAnalytics,
}

impl Visualization {
    pub const MENU: [Visualization; 6] = [
        Visualization::MainDashboard,
        Visualization::ProductTypeAnalytics,
        Visualization::AbcAnalysis,
        Visualization::SupplierAnalytics,
        Visualization::ShipperAnalytics,
        Visualization::CustomerAnalytics,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::MainDashboard => "main_dashboard",
            Self::ProductTypeAnalytics => "product_type_analytics",
            Self::AbcAnalysis => "abc_analysis",
            Self::SupplierAnalytics => "supplier_analytics",
            Self::ShipperAnalytics => "shipper_analytics",
            Self::CustomerAnalytics => "customer_analytics",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::MainDashboard => "Main Dashboard",
            Self::ProductTypeAnalytics => "Product Type Analytics",
            Self::AbcAnalysis => "ABC Analysis",
            Self::SupplierAnalytics => "Supplier Analytics",
            Self::ShipperAnalytics => "Shipper Analytics",
            Self::CustomerAnalytics => "Customer Analytics",
        }
    }
}

impl fmt::Display for Visualization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Accepts either the snake_case name or the menu title.
impl FromStr for Visualization {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::MENU
            .into_iter()
            .find(|v| v.name() == wanted || v.title().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AnalyticsError::invalid(format!("unknown visualization '{wanted}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub title: String,
}

// ── View contract ────────────────────────────────────────────────────────────

pub struct ViewContext<'a> {
    /// The full dataset as loaded.
    pub records: &'a [Record],
    pub config: &'a DashboardConfig,
    pub thresholds: &'a AbcThresholds,
    pub filter: &'a RecordFilter,
}

impl<'a> ViewContext<'a> {
    /// Records whose product type passes the filter. Category selections
    /// only apply to the ABC view, which works on ranked records.
    pub fn selected_records(&self) -> Vec<Record> {
        match &self.filter.product_types {
            Some(types) => self
                .records
                .iter()
                .filter(|r| types.contains(&r.product_type))
                .cloned()
                .collect(),
            None => self.records.to_vec(),
        }
    }
}

/// The contract every dashboard view must fulfill.
pub trait DashboardView {
    /// The menu entry this view serves.
    fn visualization(&self) -> Visualization;

    /// Build the view model for the current selection.
    fn render(&self, ctx: &ViewContext<'_>) -> AnalyticsResult<ViewModel>;
}

// ── View models ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    MainDashboard(MainDashboardModel),
    ProductTypeAnalytics(ProductTypeModel),
    AbcAnalysis(AbcModel),
    SupplierAnalytics(SupplierModel),
    ShipperAnalytics(ShipperModel),
    CustomerAnalytics(CustomerModel),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainDashboardModel {
    pub key_metrics: KeyMetrics,
    pub defect_rate: Option<Gauge>,
    pub revenue_by_state: Vec<RegionRevenue>,
    /// Upper end of the choropleth colour range.
    pub max_state_revenue: f64,
    pub top_sellers: Vec<TopSeller>,
    /// Upper end of the units-sold progress column.
    pub max_products_sold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTypeRow {
    pub product_type: String,
    pub count: usize,
    pub revenue: f64,
    pub revenue_pct: f64,
    pub products_sold: f64,
    pub stock_levels: f64,
    pub mean_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTypeModel {
    pub rows: Vec<ProductTypeRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcModel {
    /// Upper bounds for A and B, in that order.
    pub thresholds: Vec<f64>,
    /// Filtered ranking, in rank order.
    pub ranked: Vec<RankedRecord>,
    pub summary: Vec<AbcSummary>,
    /// Built from the unfiltered ranking.
    pub curves: ParetoCurves,
    /// Theoretical curve sampled at each actual x, for shading the gap.
    pub theoretical_at_actual: Vec<CurvePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRow {
    pub supplier: String,
    pub count: usize,
    pub revenue: f64,
    pub mean_lead_time: Option<f64>,
    pub mean_defect_rate: Option<f64>,
    pub mean_manufacturing_cost: Option<f64>,
    pub production_volumes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierModel {
    pub rows: Vec<SupplierRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierRow {
    pub carrier: String,
    pub count: usize,
    pub revenue: f64,
    pub mean_shipping_cost: Option<f64>,
    pub mean_shipping_time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipperModel {
    pub carriers: Vec<CarrierRow>,
    /// Mean `Costs` per transportation mode.
    pub transportation_modes: Vec<GroupAggregate>,
    /// Mean `Costs` per route.
    pub routes: Vec<GroupAggregate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub demographic: String,
    pub count: usize,
    pub revenue: f64,
    pub revenue_pct: f64,
    pub products_sold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerModel {
    pub rows: Vec<CustomerRow>,
}
