//! CSV dataset loader.
//!
//! Parses the supply chain CSV into `Record`s. Column names follow the
//! published dataset headers:
//!   Product type, SKU, Price, Availability, Number of products sold,
//!   Revenue generated, Customer demographics, Stock levels, Lead times,
//!   Order quantities, Shipping times, Shipping carriers, Shipping costs,
//!   Supplier name, Location, Lead time, Production volumes,
//!   Manufacturing lead time, Manufacturing costs, Inspection results,
//!   Defect rates, Transportation modes, Routes, Costs
//!
//! Required columns are checked against the header before any row is read.
//! A required cell left empty fails the whole load; nothing is defaulted.

use crate::{
    error::{AnalyticsError, AnalyticsResult},
    record::Record,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;

pub const COL_SKU: &str = "SKU";
pub const COL_PRODUCT_TYPE: &str = "Product type";
pub const COL_REVENUE: &str = "Revenue generated";
pub const COL_STOCK_LEVELS: &str = "Stock levels";

pub const REQUIRED_COLUMNS: [&str; 4] = [COL_SKU, COL_PRODUCT_TYPE, COL_REVENUE, COL_STOCK_LEVELS];

/// One CSV row as it appears on disk. Every column is optional here so
/// that a blank required cell surfaces as `MissingField` rather than a
/// generic parse error.
#[derive(Debug, Clone, Deserialize)]
struct RawRecord {
    #[serde(rename = "SKU")]
    sku: Option<String>,
    #[serde(rename = "Product type")]
    product_type: Option<String>,
    #[serde(rename = "Revenue generated")]
    revenue: Option<f64>,
    #[serde(rename = "Stock levels")]
    stock_levels: Option<f64>,
    #[serde(rename = "Lead times")]
    lead_times: Option<f64>,
    #[serde(rename = "Price")]
    price: Option<f64>,
    #[serde(rename = "Availability")]
    availability: Option<f64>,
    #[serde(rename = "Number of products sold")]
    products_sold: Option<f64>,
    #[serde(rename = "Customer demographics")]
    customer_demographics: Option<String>,
    #[serde(rename = "Order quantities")]
    order_quantities: Option<f64>,
    #[serde(rename = "Shipping times")]
    shipping_times: Option<f64>,
    #[serde(rename = "Shipping carriers")]
    shipping_carrier: Option<String>,
    #[serde(rename = "Shipping costs")]
    shipping_costs: Option<f64>,
    #[serde(rename = "Supplier name")]
    supplier_name: Option<String>,
    #[serde(rename = "Location")]
    location: Option<String>,
    #[serde(rename = "Production volumes")]
    production_volumes: Option<f64>,
    #[serde(rename = "Manufacturing lead time")]
    manufacturing_lead_time: Option<f64>,
    #[serde(rename = "Manufacturing costs")]
    manufacturing_costs: Option<f64>,
    #[serde(rename = "Inspection results")]
    inspection_results: Option<String>,
    #[serde(rename = "Defect rates")]
    defect_rates: Option<f64>,
    #[serde(rename = "Transportation modes")]
    transportation_mode: Option<String>,
    #[serde(rename = "Routes")]
    route: Option<String>,
    #[serde(rename = "Costs")]
    costs: Option<f64>,
}

impl RawRecord {
    fn into_record(self, line: usize) -> AnalyticsResult<Record> {
        let missing = |field: &str| AnalyticsError::MissingField {
            field: field.to_string(),
            row: Some(line),
        };

        let sku = non_blank(self.sku).ok_or_else(|| missing(COL_SKU))?;
        let product_type = non_blank(self.product_type).ok_or_else(|| missing(COL_PRODUCT_TYPE))?;
        let revenue = self.revenue.ok_or_else(|| missing(COL_REVENUE))?;
        let stock_levels = self.stock_levels.ok_or_else(|| missing(COL_STOCK_LEVELS))?;

        if !revenue.is_finite() || revenue < 0.0 {
            return Err(AnalyticsError::invalid(format!(
                "line {line}: '{COL_REVENUE}' must be a non-negative number, got {revenue}"
            )));
        }
        if !stock_levels.is_finite() || stock_levels < 0.0 {
            return Err(AnalyticsError::invalid(format!(
                "line {line}: '{COL_STOCK_LEVELS}' must be a non-negative number, got {stock_levels}"
            )));
        }

        Ok(Record {
            sku,
            product_type,
            revenue,
            stock_levels,
            lead_times: self.lead_times,
            price: self.price,
            availability: self.availability,
            products_sold: self.products_sold,
            customer_demographics: non_blank(self.customer_demographics),
            order_quantities: self.order_quantities,
            shipping_times: self.shipping_times,
            shipping_carrier: non_blank(self.shipping_carrier),
            shipping_costs: self.shipping_costs,
            supplier_name: non_blank(self.supplier_name),
            location: non_blank(self.location),
            production_volumes: self.production_volumes,
            manufacturing_lead_time: self.manufacturing_lead_time,
            manufacturing_costs: self.manufacturing_costs,
            inspection_results: non_blank(self.inspection_results),
            defect_rates: self.defect_rates,
            transportation_mode: non_blank(self.transportation_mode),
            route: non_blank(self.route),
            costs: self.costs,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Load records from any CSV reader.
pub fn load_records<R: Read>(reader: R) -> AnalyticsResult<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AnalyticsError::MissingField {
                field: column.to_string(),
                row: None,
            });
        }
    }

    let mut records = Vec::new();
    let mut seen = HashSet::new();
    for (idx, result) in csv_reader.deserialize::<RawRecord>().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let record = result?.into_record(line)?;
        if !seen.insert(record.sku.clone()) {
            return Err(AnalyticsError::invalid(format!(
                "line {line}: duplicate SKU '{}'",
                record.sku
            )));
        }
        records.push(record);
    }

    log::debug!("loader: parsed {} records", records.len());
    Ok(records)
}

/// Load records from a CSV file path.
pub fn load_records_file(path: &str) -> AnalyticsResult<Vec<Record>> {
    let file = std::fs::File::open(path).map_err(|e| {
        AnalyticsError::Other(anyhow::anyhow!("Cannot open dataset {path}: {e}"))
    })?;
    let records = load_records(file)?;
    log::info!("loaded {} records from {path}", records.len());
    Ok(records)
}
