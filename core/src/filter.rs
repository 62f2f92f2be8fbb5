//! Selection filter: "product type in S1 and category in S2".
//!
//! `None` on either side means no restriction. An empty set matches
//! nothing, the same as clearing every option in a multiselect.

use crate::abc::{AbcCategory, RankedRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(default)]
    pub product_types: Option<BTreeSet<String>>,
    #[serde(default)]
    pub categories: Option<BTreeSet<AbcCategory>>,
}

impl RecordFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_product_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.product_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = AbcCategory>,
    {
        self.categories = Some(categories.into_iter().collect());
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.product_types.is_none() && self.categories.is_none()
    }

    pub fn matches(&self, ranked: &RankedRecord) -> bool {
        let type_ok = self
            .product_types
            .as_ref()
            .map_or(true, |s| s.contains(&ranked.record.product_type));
        let category_ok = self
            .categories
            .as_ref()
            .map_or(true, |s| s.contains(&ranked.category));
        type_ok && category_ok
    }

    /// Matching records, in their original order.
    pub fn apply(&self, ranked: &[RankedRecord]) -> Vec<RankedRecord> {
        ranked.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
