//! Main dashboard: KPI cards, defect-rate gauge, supplier geography and
//! the top-sellers table.

use crate::{
    aggregate::{gauge, key_metrics, revenue_by_region, top_sellers, Metric},
    error::AnalyticsResult,
    view::{DashboardView, MainDashboardModel, ViewContext, ViewModel, Visualization},
};

pub struct MainDashboardView;

impl DashboardView for MainDashboardView {
    fn visualization(&self) -> Visualization {
        Visualization::MainDashboard
    }

    fn render(&self, ctx: &ViewContext<'_>) -> AnalyticsResult<ViewModel> {
        let records = ctx.selected_records();

        let revenue_by_state = revenue_by_region(&records, &ctx.config.city_to_state);
        let max_state_revenue = revenue_by_state
            .iter()
            .map(|s| s.revenue)
            .fold(0.0, f64::max);

        let sellers = top_sellers(&records, ctx.config.top_products_limit);
        let max_products_sold = sellers.first().map_or(0.0, |s| s.products_sold);

        Ok(ViewModel::MainDashboard(MainDashboardModel {
            key_metrics: key_metrics(&records),
            defect_rate: gauge(
                &records,
                Metric::DefectRates,
                "Defect Rates",
                ctx.config.defect_rate_alert,
            ),
            revenue_by_state,
            max_state_revenue,
            top_sellers: sellers,
            max_products_sold,
        }))
    }
}
