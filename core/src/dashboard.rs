//! The dashboard — owns the dataset and dispatches menu selections.
//!
//! MENU ORDER (fixed, matches the sidebar):
//!   1. Main Dashboard
//!   2. Product Type Analytics
//!   3. ABC Analysis
//!   4. Supplier Analytics
//!   5. Shipper Analytics
//!   6. Customer Analytics
//!
//! RULES:
//!   - The dataset is loaded once and never mutated.
//!   - Every selection re-renders its view from scratch.
//!   - Views do not call each other.

use crate::{
    abc::AbcThresholds,
    abc_view::AbcAnalysisView,
    config::DashboardConfig,
    customer_view::CustomerView,
    error::{AnalyticsError, AnalyticsResult},
    filter::RecordFilter,
    loader::load_records_file,
    main_view::MainDashboardView,
    product_type_view::ProductTypeView,
    record::Record,
    shipper_view::ShipperView,
    supplier_view::SupplierView,
    view::{DashboardView, MenuEntry, ViewContext, ViewModel, Visualization},
};

pub struct Dashboard {
    config: DashboardConfig,
    thresholds: AbcThresholds,
    records: Vec<Record>,
    views: Vec<Box<dyn DashboardView>>,
}

impl Dashboard {
    /// A dashboard with no views registered.
    pub fn new(records: Vec<Record>, config: DashboardConfig) -> AnalyticsResult<Self> {
        let thresholds = config.abc.thresholds()?;
        Ok(Self {
            config,
            thresholds,
            records,
            views: Vec::new(),
        })
    }

    /// Build a dashboard with every menu view registered.
    pub fn build(records: Vec<Record>, config: DashboardConfig) -> AnalyticsResult<Self> {
        let mut dashboard = Dashboard::new(records, config)?;
        dashboard.register(Box::new(MainDashboardView));
        dashboard.register(Box::new(ProductTypeView));
        dashboard.register(Box::new(AbcAnalysisView));
        dashboard.register(Box::new(SupplierView));
        dashboard.register(Box::new(ShipperView));
        dashboard.register(Box::new(CustomerView));
        log::info!(
            "dashboard ready: {} records, {} views",
            dashboard.records.len(),
            dashboard.views.len()
        );
        Ok(dashboard)
    }

    /// Load the dataset named by `config.data_path` and build.
    pub fn open(config: DashboardConfig) -> AnalyticsResult<Self> {
        let records = load_records_file(&config.data_path)?;
        Dashboard::build(records, config)
    }

    /// Register a view. Call in menu order.
    pub fn register(&mut self, view: Box<dyn DashboardView>) {
        self.views.push(view);
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        self.views
            .iter()
            .map(|v| {
                let vis = v.visualization();
                MenuEntry {
                    name: vis.name().to_string(),
                    title: vis.title().to_string(),
                }
            })
            .collect()
    }

    /// Render `visualization` for the given selection.
    pub fn select(
        &self,
        visualization: Visualization,
        filter: &RecordFilter,
    ) -> AnalyticsResult<ViewModel> {
        let view = self
            .views
            .iter()
            .find(|v| v.visualization() == visualization)
            .ok_or_else(|| {
                AnalyticsError::invalid(format!("view '{}' is not registered", visualization.name()))
            })?;

        let ctx = ViewContext {
            records: &self.records,
            config: &self.config,
            thresholds: &self.thresholds,
            filter,
        };
        log::debug!(
            "rendering {} (filtered: {})",
            visualization.name(),
            !filter.is_unrestricted()
        );
        view.render(&ctx)
    }
}
