//! Shared primitive types used across the whole crate.

/// Stock-keeping unit identifier, unique per record.
pub type Sku = String;

/// A percentage on the 0..=100 scale.
pub type Percent = f64;

