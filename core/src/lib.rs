//! Analytics core for the beauty-store supply chain dashboard.

pub mod abc;
pub mod abc_view;
pub mod aggregate;
pub mod config;
pub mod curve;
pub mod customer_view;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod main_view;
pub mod product_type_view;
pub mod record;
pub mod shipper_view;
pub mod supplier_view;
pub mod types;
pub mod view;
