//! Shipper analytics: carriers, transportation modes and routes.

use crate::{
    aggregate::{aggregate, group_by, mean, sum, Dimension, Metric},
    error::AnalyticsResult,
    view::{CarrierRow, DashboardView, ShipperModel, ViewContext, ViewModel, Visualization},
};

pub struct ShipperView;

impl DashboardView for ShipperView {
    fn visualization(&self) -> Visualization {
        Visualization::ShipperAnalytics
    }

    fn render(&self, ctx: &ViewContext<'_>) -> AnalyticsResult<ViewModel> {
        let records = ctx.selected_records();

        let carriers = group_by(&records, Dimension::ShippingCarrier)
            .into_iter()
            .map(|(carrier, members)| CarrierRow {
                carrier: carrier.to_string(),
                count: members.len(),
                revenue: sum(members.iter().copied(), Metric::Revenue),
                mean_shipping_cost: mean(members.iter().copied(), Metric::ShippingCosts),
                mean_shipping_time: mean(members.iter().copied(), Metric::ShippingTimes),
            })
            .collect();

        Ok(ViewModel::ShipperAnalytics(ShipperModel {
            carriers,
            transportation_modes: aggregate(&records, Dimension::TransportationMode, Metric::Costs),
            routes: aggregate(&records, Dimension::Route, Metric::Costs),
        }))
    }
}
