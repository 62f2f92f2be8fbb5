use supply_dashboard_core::{
    abc::{build_curve, classify, summarize, AbcCategory, RankedRecord},
    curve::{interpolate, CurvePoint, THEORETICAL_CURVE},
    filter::RecordFilter,
    record::Record,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

/// The five-record reference set: A=500, B=300, C=150+40+10.
fn reference_ranking() -> Vec<RankedRecord> {
    let records = vec![
        Record::new("SKU0", "skincare", 500.0, 20.0).with_lead_times(10.0),
        Record::new("SKU1", "haircare", 300.0, 30.0).with_lead_times(20.0),
        Record::new("SKU2", "cosmetics", 150.0, 40.0).with_lead_times(5.0),
        Record::new("SKU3", "skincare", 40.0, 50.0),
        Record::new("SKU4", "haircare", 10.0, 60.0).with_lead_times(9.0),
    ];
    classify(&records).unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn summary_aggregates_each_category() {
    let summary = summarize(&reference_ranking());
    assert_eq!(summary.len(), 3);

    let a = &summary[&AbcCategory::A];
    assert_eq!(a.count, 1);
    assert_eq!(a.revenue, 500.0);
    assert_eq!(a.stock_levels, 20.0);
    assert_eq!(a.revenue_pct, 50.0);
    assert_eq!(a.mean_lead_time, Some(10.0));

    let c = &summary[&AbcCategory::C];
    assert_eq!(c.count, 3);
    assert_eq!(c.revenue, 200.0);
    assert_eq!(c.stock_levels, 150.0);
    assert_eq!(c.revenue_pct, 20.0);
    // SKU3 has no lead time; mean over the two that do.
    assert_eq!(c.mean_lead_time, Some(7.0));
}

/// Filtering to {A, B} makes the summary share relative to 800, not 1000.
#[test]
fn filtered_summary_uses_filtered_denominator() {
    let ranked = reference_ranking();
    let filtered = RecordFilter::all()
        .with_categories([AbcCategory::A, AbcCategory::B])
        .apply(&ranked);

    let summary = summarize(&filtered);
    assert_eq!(summary.len(), 2);
    assert!(!summary.contains_key(&AbcCategory::C));

    let a = &summary[&AbcCategory::A];
    assert!(
        (a.revenue_pct - 62.5).abs() < 1e-9,
        "A share should be 500/800 = 62.5%, got {}",
        a.revenue_pct
    );
    let b = &summary[&AbcCategory::B];
    assert!((b.revenue_pct - 37.5).abs() < 1e-9);

    // Category assignment itself is unchanged by filtering.
    assert_eq!(filtered[0].cumulative_revenue_pct, 50.0);
}

#[test]
fn empty_categories_are_absent() {
    let ranked = reference_ranking();
    let only_haircare = RecordFilter::all().with_product_types(["haircare"]).apply(&ranked);

    let summary = summarize(&only_haircare);
    let keys: Vec<AbcCategory> = summary.keys().copied().collect();
    assert_eq!(keys, vec![AbcCategory::B, AbcCategory::C]);
    assert_eq!(summary[&AbcCategory::B].revenue_pct, 300.0 * 100.0 / 310.0);
}

#[test]
fn summary_of_nothing_is_empty() {
    assert!(summarize(&[]).is_empty());
}

#[test]
fn filter_combines_product_type_and_category() {
    let ranked = reference_ranking();
    let filter = RecordFilter::all()
        .with_product_types(["skincare", "haircare"])
        .with_categories([AbcCategory::C]);
    let selected = filter.apply(&ranked);

    let skus: Vec<&str> = selected.iter().map(|r| r.record.sku.as_str()).collect();
    assert_eq!(skus, vec!["SKU3", "SKU4"]);

    let nothing = RecordFilter::all().with_categories(Vec::new()).apply(&ranked);
    assert!(nothing.is_empty(), "an empty selection matches no record");
}

#[test]
fn actual_curve_follows_rank_order() {
    let curves = build_curve(&reference_ranking());

    let expected = vec![
        CurvePoint::new(20.0, 50.0),
        CurvePoint::new(40.0, 80.0),
        CurvePoint::new(60.0, 95.0),
        CurvePoint::new(80.0, 99.0),
        CurvePoint::new(100.0, 100.0),
    ];
    assert_eq!(curves.actual, expected);
    assert_eq!(curves.theoretical, THEORETICAL_CURVE.to_vec());
}

#[test]
fn curve_is_rebuilt_in_rank_order_from_shuffled_input() {
    let mut ranked = reference_ranking();
    ranked.reverse();
    let curves = build_curve(&ranked);

    let xs: Vec<f64> = curves.actual.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![20.0, 40.0, 60.0, 80.0, 100.0]);
}

/// Both curves live on the same [0,100] domain, so the reference can be
/// sampled at the actual curve's x values.
#[test]
fn curves_share_a_domain() {
    let curves = build_curve(&reference_ranking());
    for p in curves.actual.iter().chain(&curves.theoretical) {
        assert!((0.0..=100.0).contains(&p.x), "x out of range: {}", p.x);
        assert!((0.0..=100.0).contains(&p.y), "y out of range: {}", p.y);
    }

    // At 20% of items the ideal curve says 70% of revenue.
    assert_eq!(interpolate(&curves.theoretical, 20.0), Some(70.0));
    assert_eq!(interpolate(&curves.theoretical, 40.0), Some(70.0 + 20.0 * 20.0 / 30.0));
}
