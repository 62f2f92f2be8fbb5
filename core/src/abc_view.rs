//! ABC analysis view.
//!
//! Ranks the full dataset, then applies the selection filter. The curves
//! always describe the full ranking; the table and the summary follow the
//! filter, so summary shares are relative to the filtered revenue.

use crate::{
    abc::{build_curve, classify_with, summarize},
    curve::resample,
    error::AnalyticsResult,
    view::{AbcModel, DashboardView, ViewContext, ViewModel, Visualization},
};

pub struct AbcAnalysisView;

impl DashboardView for AbcAnalysisView {
    fn visualization(&self) -> Visualization {
        Visualization::AbcAnalysis
    }

    fn render(&self, ctx: &ViewContext<'_>) -> AnalyticsResult<ViewModel> {
        let ranked = classify_with(ctx.records, ctx.thresholds)?;
        let curves = build_curve(&ranked);
        let theoretical_at_actual = resample(&curves.theoretical, &curves.actual);

        let selected = ctx.filter.apply(&ranked);
        let summary = summarize(&selected).into_values().collect();

        log::debug!(
            "abc: {} ranked, {} selected by filter",
            ranked.len(),
            selected.len()
        );

        Ok(ViewModel::AbcAnalysis(AbcModel {
            thresholds: ctx.thresholds.bands().iter().map(|(upper, _)| *upper).collect(),
            ranked: selected,
            summary,
            curves,
            theoretical_at_actual,
        }))
    }
}
