//! Product type analytics: revenue mix and volume per product type.

use crate::{
    aggregate::{group_by, mean, sum, Dimension, Metric},
    error::AnalyticsResult,
    view::{DashboardView, ProductTypeModel, ProductTypeRow, ViewContext, ViewModel, Visualization},
};

pub struct ProductTypeView;

impl DashboardView for ProductTypeView {
    fn visualization(&self) -> Visualization {
        Visualization::ProductTypeAnalytics
    }

    fn render(&self, ctx: &ViewContext<'_>) -> AnalyticsResult<ViewModel> {
        let records = ctx.selected_records();
        let total_revenue = sum(&records, Metric::Revenue);

        let rows = group_by(&records, Dimension::ProductType)
            .into_iter()
            .map(|(product_type, members)| {
                let revenue = sum(members.iter().copied(), Metric::Revenue);
                ProductTypeRow {
                    product_type: product_type.to_string(),
                    count: members.len(),
                    revenue,
                    revenue_pct: if total_revenue > 0.0 {
                        revenue * 100.0 / total_revenue
                    } else {
                        0.0
                    },
                    products_sold: sum(members.iter().copied(), Metric::ProductsSold),
                    stock_levels: sum(members.iter().copied(), Metric::StockLevels),
                    mean_price: mean(members.iter().copied(), Metric::Price),
                }
            })
            .collect();

        Ok(ViewModel::ProductTypeAnalytics(ProductTypeModel { rows }))
    }
}
