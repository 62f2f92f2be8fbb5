//! Supply chain records: one row of the source table.
//!
//! Records are immutable once loaded. Every analytics step borrows them
//! and derives new structures; nothing writes extra columns back.

use crate::types::Sku;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    // Required
    pub sku: Sku,
    pub product_type: String,
    pub revenue: f64,
    pub stock_levels: f64,
    // Optional
    pub lead_times: Option<f64>,
    pub price: Option<f64>,
    pub availability: Option<f64>,
    pub products_sold: Option<f64>,
    pub customer_demographics: Option<String>,
    pub order_quantities: Option<f64>,
    pub shipping_times: Option<f64>,
    pub shipping_carrier: Option<String>,
    pub shipping_costs: Option<f64>,
    pub supplier_name: Option<String>,
    pub location: Option<String>,
    pub production_volumes: Option<f64>,
    pub manufacturing_lead_time: Option<f64>,
    pub manufacturing_costs: Option<f64>,
    pub inspection_results: Option<String>,
    pub defect_rates: Option<f64>,
    pub transportation_mode: Option<String>,
    pub route: Option<String>,
    pub costs: Option<f64>,
}

impl Record {
    /// A record carrying only the required fields.
    pub fn new(
        sku: impl Into<Sku>,
        product_type: impl Into<String>,
        revenue: f64,
        stock_levels: f64,
    ) -> Self {
        Self {
            sku: sku.into(),
            product_type: product_type.into(),
            revenue,
            stock_levels,
            lead_times: None,
            price: None,
            availability: None,
            products_sold: None,
            customer_demographics: None,
            order_quantities: None,
            shipping_times: None,
            shipping_carrier: None,
            shipping_costs: None,
            supplier_name: None,
            location: None,
            production_volumes: None,
            manufacturing_lead_time: None,
            manufacturing_costs: None,
            inspection_results: None,
            defect_rates: None,
            transportation_mode: None,
            route: None,
            costs: None,
        }
    }

    pub fn with_lead_times(mut self, lead_times: f64) -> Self {
        self.lead_times = Some(lead_times);
        self
    }
}
