use crate::{
    abc::{AbcThresholds, DEFAULT_A_UPPER, DEFAULT_B_UPPER},
    error::AnalyticsResult,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbcConfig {
    pub a_upper: f64,
    pub b_upper: f64,
}

impl AbcConfig {
    pub fn thresholds(&self) -> AnalyticsResult<AbcThresholds> {
        AbcThresholds::new(self.a_upper, self.b_upper)
    }
}

impl Default for AbcConfig {
    fn default() -> Self {
        Self {
            a_upper: DEFAULT_A_UPPER,
            b_upper: DEFAULT_B_UPPER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: String,
    pub abc: AbcConfig,
    /// Defect-rate gauge turns to alert above this mean percentage.
    pub defect_rate_alert: f64,
    /// Rows shown in the top-sellers table; `None` shows all.
    pub top_products_limit: Option<usize>,
    /// Supplier city → state, for the revenue choropleth.
    pub city_to_state: BTreeMap<String, String>,
}

impl DashboardConfig {
    /// Load from a JSON file. Missing keys fall back to the defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: DashboardConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AnalyticsResult<()> {
        self.abc.thresholds()?;
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let city_to_state = [
            ("Kolkata", "West Bengal"),
            ("Mumbai", "Maharashtra"),
            ("Chennai", "Tamil Nadu"),
            ("Bangalore", "Karnataka"),
            ("Delhi", "Delhi"),
        ]
        .into_iter()
        .map(|(city, state)| (city.to_string(), state.to_string()))
        .collect();

        Self {
            data_path: "data/supply_chain_data.csv".into(),
            abc: AbcConfig::default(),
            defect_rate_alert: 2.0,
            top_products_limit: None,
            city_to_state,
        }
    }
}
