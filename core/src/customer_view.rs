//! Customer analytics: revenue and volume per customer demographic.

use crate::{
    aggregate::{aggregate, group_by, sum, Dimension, Metric},
    error::AnalyticsResult,
    view::{CustomerModel, CustomerRow, DashboardView, ViewContext, ViewModel, Visualization},
};

pub struct CustomerView;

impl DashboardView for CustomerView {
    fn visualization(&self) -> Visualization {
        Visualization::CustomerAnalytics
    }

    fn render(&self, ctx: &ViewContext<'_>) -> AnalyticsResult<ViewModel> {
        let records = ctx.selected_records();
        let groups = group_by(&records, Dimension::CustomerDemographic);

        let rows = aggregate(&records, Dimension::CustomerDemographic, Metric::Revenue)
            .into_iter()
            .map(|rev| CustomerRow {
                products_sold: groups
                    .get(rev.key.as_str())
                    .map_or(0.0, |members| sum(members.iter().copied(), Metric::ProductsSold)),
                demographic: rev.key,
                count: rev.count,
                revenue: rev.sum,
                revenue_pct: rev.share_pct,
            })
            .collect();

        Ok(ViewModel::CustomerAnalytics(CustomerModel { rows }))
    }
}
