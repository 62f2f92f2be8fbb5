//! Supplier analytics.

use crate::{
    aggregate::{group_by, mean, sum, Dimension, Metric},
    error::AnalyticsResult,
    view::{DashboardView, SupplierModel, SupplierRow, ViewContext, ViewModel, Visualization},
};

pub struct SupplierView;

impl DashboardView for SupplierView {
    fn visualization(&self) -> Visualization {
        Visualization::SupplierAnalytics
    }

    fn render(&self, ctx: &ViewContext<'_>) -> AnalyticsResult<ViewModel> {
        let records = ctx.selected_records();

        let rows = group_by(&records, Dimension::Supplier)
            .into_iter()
            .map(|(supplier, members)| SupplierRow {
                supplier: supplier.to_string(),
                count: members.len(),
                revenue: sum(members.iter().copied(), Metric::Revenue),
                mean_lead_time: mean(members.iter().copied(), Metric::LeadTimes),
                mean_defect_rate: mean(members.iter().copied(), Metric::DefectRates),
                mean_manufacturing_cost: mean(members.iter().copied(), Metric::ManufacturingCosts),
                production_volumes: sum(members.iter().copied(), Metric::ProductionVolumes),
            })
            .collect();

        Ok(ViewModel::SupplierAnalytics(SupplierModel { rows }))
    }
}
