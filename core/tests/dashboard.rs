use supply_dashboard_core::{
    abc::AbcCategory,
    config::{AbcConfig, DashboardConfig},
    dashboard::Dashboard,
    error::AnalyticsError,
    filter::RecordFilter,
    loader::load_records,
    view::{ViewModel, Visualization},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

const SAMPLE_CSV: &str = "\
Product type,SKU,Price,Number of products sold,Revenue generated,Customer demographics,Stock levels,Lead times,Shipping times,Shipping carriers,Shipping costs,Supplier name,Location,Production volumes,Manufacturing costs,Defect rates,Transportation modes,Routes,Costs
skincare,SKU0,20,100,500,Female,10,10,2,Carrier A,2.0,Supplier 1,Mumbai,100,30,1.0,Road,Route A,100
haircare,SKU1,30,300,300,Male,20,20,4,Carrier B,4.0,Supplier 2,Kolkata,200,40,3.0,Air,Route B,200
cosmetics,SKU2,10,50,150,Female,30,30,6,Carrier A,6.0,Supplier 1,Delhi,300,50,2.0,Road,Route A,300
skincare,SKU3,15,400,40,Unknown,40,,8,Carrier C,8.0,Supplier 3,Chennai,400,60,1.5,Sea,Route C,400
haircare,SKU4,25,20,10,Male,50,5,10,Carrier B,10.0,Supplier 2,Bangalore,500,70,2.5,Rail,Route B,500
";

fn make_dashboard() -> Dashboard {
    let records = load_records(SAMPLE_CSV.as_bytes()).expect("sample csv");
    Dashboard::build(records, DashboardConfig::default()).expect("dashboard")
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn menu_lists_every_view_in_sidebar_order() {
    let dashboard = make_dashboard();
    let titles: Vec<String> = dashboard.menu().into_iter().map(|m| m.title).collect();
    assert_eq!(
        titles,
        vec![
            "Main Dashboard",
            "Product Type Analytics",
            "ABC Analysis",
            "Supplier Analytics",
            "Shipper Analytics",
            "Customer Analytics",
        ]
    );
}

#[test]
fn every_menu_entry_renders_its_own_view() {
    let dashboard = make_dashboard();
    for vis in Visualization::MENU {
        let model = dashboard.select(vis, &RecordFilter::all()).unwrap();
        let matches = matches!(
            (vis, &model),
            (Visualization::MainDashboard, ViewModel::MainDashboard(_))
                | (Visualization::ProductTypeAnalytics, ViewModel::ProductTypeAnalytics(_))
                | (Visualization::AbcAnalysis, ViewModel::AbcAnalysis(_))
                | (Visualization::SupplierAnalytics, ViewModel::SupplierAnalytics(_))
                | (Visualization::ShipperAnalytics, ViewModel::ShipperAnalytics(_))
                | (Visualization::CustomerAnalytics, ViewModel::CustomerAnalytics(_))
        );
        assert!(matches, "{} rendered the wrong model", vis.name());
    }
}

#[test]
fn main_dashboard_cards_and_map() {
    let dashboard = make_dashboard();
    let ViewModel::MainDashboard(m) = dashboard
        .select(Visualization::MainDashboard, &RecordFilter::all())
        .unwrap()
    else {
        panic!("expected main dashboard model");
    };

    assert_eq!(m.key_metrics.total_revenue, 1000.0);
    assert_eq!(m.key_metrics.items_sold, 870.0);
    // SKU3 has no lead time: (10 + 20 + 30 + 5) / 4
    assert_eq!(m.key_metrics.avg_lead_time, Some(16.25));

    let gauge = m.defect_rate.expect("defect gauge");
    assert_eq!(gauge.value, 2.0);

    assert_eq!(m.revenue_by_state.len(), 5);
    assert_eq!(m.max_state_revenue, 500.0);

    assert_eq!(m.top_sellers[0].sku, "SKU3");
    assert_eq!(m.max_products_sold, 400.0);
}

#[test]
fn abc_view_filters_table_but_not_curve() {
    let dashboard = make_dashboard();
    let filter = RecordFilter::all().with_categories([AbcCategory::A, AbcCategory::B]);
    let ViewModel::AbcAnalysis(m) = dashboard.select(Visualization::AbcAnalysis, &filter).unwrap()
    else {
        panic!("expected ABC model");
    };

    assert_eq!(m.thresholds, vec![70.0, 90.0]);
    assert_eq!(m.ranked.len(), 2);
    assert_eq!(m.curves.actual.len(), 5);
    assert_eq!(m.theoretical_at_actual.len(), 5);

    let a = m.summary.iter().find(|s| s.category == AbcCategory::A).unwrap();
    assert!((a.revenue_pct - 62.5).abs() < 1e-9, "got {}", a.revenue_pct);
}

#[test]
fn product_type_filter_restricts_aggregate_views() {
    let dashboard = make_dashboard();
    let filter = RecordFilter::all().with_product_types(["haircare"]);

    let ViewModel::ProductTypeAnalytics(m) = dashboard
        .select(Visualization::ProductTypeAnalytics, &filter)
        .unwrap()
    else {
        panic!("expected product type model");
    };
    assert_eq!(m.rows.len(), 1);
    assert_eq!(m.rows[0].product_type, "haircare");
    assert_eq!(m.rows[0].revenue, 310.0);
    assert_eq!(m.rows[0].revenue_pct, 100.0);
    assert_eq!(m.rows[0].mean_price, Some(27.5));
}

#[test]
fn supplier_shipper_and_customer_views_group_correctly() {
    let dashboard = make_dashboard();
    let all = RecordFilter::all();

    let ViewModel::SupplierAnalytics(s) = dashboard.select(Visualization::SupplierAnalytics, &all).unwrap() else {
        panic!("expected supplier model");
    };
    let s1 = s.rows.iter().find(|r| r.supplier == "Supplier 1").unwrap();
    assert_eq!(s1.revenue, 650.0);
    assert_eq!(s1.mean_lead_time, Some(20.0));
    assert_eq!(s1.production_volumes, 400.0);

    let ViewModel::ShipperAnalytics(sh) = dashboard.select(Visualization::ShipperAnalytics, &all).unwrap() else {
        panic!("expected shipper model");
    };
    let b = sh.carriers.iter().find(|c| c.carrier == "Carrier B").unwrap();
    assert_eq!(b.mean_shipping_cost, Some(7.0));
    assert_eq!(sh.transportation_modes.len(), 4);
    let route_a = sh.routes.iter().find(|r| r.key == "Route A").unwrap();
    assert_eq!(route_a.mean, Some(200.0));

    let ViewModel::CustomerAnalytics(c) = dashboard.select(Visualization::CustomerAnalytics, &all).unwrap() else {
        panic!("expected customer model");
    };
    let female = c.rows.iter().find(|r| r.demographic == "Female").unwrap();
    assert_eq!(female.revenue, 650.0);
    assert_eq!(female.products_sold, 150.0);
    assert_eq!(female.revenue_pct, 65.0);
}

/// The same selection twice yields the same JSON.
#[test]
fn repeated_selection_is_identical() {
    let dashboard = make_dashboard();
    let filter = RecordFilter::all().with_categories([AbcCategory::C]);
    for vis in Visualization::MENU {
        let a = serde_json::to_string(&dashboard.select(vis, &filter).unwrap()).unwrap();
        let b = serde_json::to_string(&dashboard.select(vis, &filter).unwrap()).unwrap();
        assert_eq!(a, b, "{} is not referentially transparent", vis.name());
    }
}

#[test]
fn view_names_parse_from_menu_names_and_titles() {
    assert_eq!("abc_analysis".parse::<Visualization>().unwrap(), Visualization::AbcAnalysis);
    assert_eq!("Shipper Analytics".parse::<Visualization>().unwrap(), Visualization::ShipperAnalytics);
    let err = "inventory".parse::<Visualization>().unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidInput { .. }));
}

#[test]
fn bad_thresholds_are_rejected_at_build() {
    let records = load_records(SAMPLE_CSV.as_bytes()).unwrap();
    let config = DashboardConfig {
        abc: AbcConfig { a_upper: 95.0, b_upper: 90.0 },
        ..DashboardConfig::default()
    };
    assert!(Dashboard::build(records, config).is_err());
}

#[test]
fn configured_thresholds_drive_the_abc_view() {
    let records = load_records(SAMPLE_CSV.as_bytes()).unwrap();
    let config = DashboardConfig {
        abc: AbcConfig { a_upper: 50.0, b_upper: 80.0 },
        ..DashboardConfig::default()
    };
    let dashboard = Dashboard::build(records, config).unwrap();

    let ViewModel::AbcAnalysis(m) = dashboard
        .select(Visualization::AbcAnalysis, &RecordFilter::all().with_categories([AbcCategory::A]))
        .unwrap()
    else {
        panic!("expected ABC model");
    };
    assert_eq!(m.thresholds, vec![50.0, 80.0]);
    assert_eq!(m.ranked.len(), 1);
    assert_eq!(m.ranked[0].record.sku, "SKU0");
}

/// A dataset with no revenue still renders the aggregate views; only the
/// ABC view refuses it.
#[test]
fn zero_revenue_dataset_only_fails_abc() {
    let csv = "SKU,Product type,Revenue generated,Stock levels\nSKU1,skincare,0,5\n";
    let dashboard =
        Dashboard::build(load_records(csv.as_bytes()).unwrap(), DashboardConfig::default()).unwrap();

    assert!(dashboard.select(Visualization::MainDashboard, &RecordFilter::all()).is_ok());
    let err = dashboard
        .select(Visualization::AbcAnalysis, &RecordFilter::all())
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidInput { .. }));
}

#[test]
fn config_loads_from_json_with_defaults_for_missing_keys() {
    let path = std::env::temp_dir().join(format!("dashboard-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "data_path": "elsewhere.csv", "abc": { "a_upper": 60, "b_upper": 85 } }"#)
        .unwrap();

    let config = DashboardConfig::load(path.to_str().unwrap()).unwrap();
    assert_eq!(config.data_path, "elsewhere.csv");
    assert_eq!(config.abc.a_upper, 60.0);
    assert_eq!(config.defect_rate_alert, 2.0);
    assert_eq!(config.city_to_state.len(), 5);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn partial_abc_section_keeps_the_other_default() {
    let path = std::env::temp_dir().join(format!("dashboard-abc-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "abc": { "a_upper": 60 } }"#).unwrap();

    let config = DashboardConfig::load(path.to_str().unwrap()).unwrap();
    assert_eq!(config.abc.a_upper, 60.0);
    assert_eq!(config.abc.b_upper, 90.0);
    assert!(Dashboard::build(Vec::new(), config).is_ok());

    std::fs::remove_file(&path).unwrap();
}
