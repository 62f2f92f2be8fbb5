//! dashboard-runner: headless runner for the supply chain dashboard.
//!
//! Usage:
//!   dashboard-runner --data data/supply_chain_data.csv --view abc_analysis
//!   dashboard-runner --config dashboard.json --ipc-mode

use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use supply_dashboard_core::{
    config::DashboardConfig,
    dashboard::Dashboard,
    filter::RecordFilter,
    view::{ViewModel, Visualization},
};

#[derive(Debug, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Menu,
    Select {
        view: Visualization,
        #[serde(default)]
        filter: RecordFilter,
    },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let mut config = match flag_value(&args, "--config") {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(data) = flag_value(&args, "--data") {
        config.data_path = data.to_string();
    }
    let view: Visualization = flag_value(&args, "--view")
        .unwrap_or("main_dashboard")
        .parse()?;

    if !ipc_mode {
        println!("Beauty Store Supply Chain - dashboard-runner");
        println!("  data:  {}", config.data_path);
        println!("  view:  {}", view.title());
        println!();
    }

    let dashboard = Dashboard::open(config)?;

    if ipc_mode {
        run_ipc_loop(&dashboard, io::stdin().lock(), io::stdout())?;
    } else {
        let model = dashboard.select(view, &RecordFilter::all())?;
        print_summary(&model);
    }

    Ok(())
}

/// One JSON reply line per command until `quit` or EOF. A bad command
/// gets an `{"error": ..}` reply and the loop keeps reading.
fn run_ipc_loop<R: BufRead, W: Write>(dashboard: &Dashboard, mut input: R, mut output: W) -> Result<()> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<IpcCommand>(&buffer) {
            Err(e) => serde_json::json!({ "error": e.to_string() }),
            Ok(IpcCommand::Quit) => break,
            Ok(IpcCommand::Menu) => serde_json::to_value(dashboard.menu())?,
            Ok(IpcCommand::Select { view, filter }) => match dashboard.select(view, &filter) {
                Ok(model) => serde_json::to_value(model)?,
                Err(e) => {
                    log::warn!("select {} failed: {e}", view.name());
                    serde_json::json!({ "error": e.to_string() })
                }
            },
        };
        writeln!(output, "{reply}")?;
        output.flush()?;
    }
    Ok(())
}

fn print_summary(model: &ViewModel) {
    match model {
        ViewModel::MainDashboard(m) => {
            println!("=== KEY METRICS ===");
            println!("  total revenue:  $ {:.0}", m.key_metrics.total_revenue);
            println!("  items sold:     {:.0}", m.key_metrics.items_sold);
            if let Some(lead) = m.key_metrics.avg_lead_time {
                println!("  avg lead time:  {lead:.0} days");
            }
            if let Some(g) = &m.defect_rate {
                println!("  {}:   {:.2}% ({:?})", g.label.to_lowercase(), g.value, g.status);
            }
            println!();
            println!("=== REVENUE BY STATE ===");
            for s in &m.revenue_by_state {
                println!("  {:<14} $ {:.0}", s.region, s.revenue);
            }
            println!();
            println!("=== TOP SELLING PRODUCTS ===");
            for t in m.top_sellers.iter().take(10) {
                println!("  {:<8} {:.0}", t.sku, t.products_sold);
            }
        }
        ViewModel::ProductTypeAnalytics(m) => {
            println!("=== PRODUCT TYPES ===");
            for r in &m.rows {
                println!(
                    "  {:<10} | Revenue: ${:.0} ({:.1}%) | Sold: {:.0} | Stock: {:.0}",
                    r.product_type, r.revenue, r.revenue_pct, r.products_sold, r.stock_levels
                );
            }
        }
        ViewModel::AbcAnalysis(m) => {
            println!("=== ABC SUMMARY ===");
            for s in &m.summary {
                println!(
                    "  {} | Items: {:>3} | Revenue: ${:.0} ({:.1}%) | Stock: {:.0}",
                    s.category, s.count, s.revenue, s.revenue_pct, s.stock_levels
                );
            }
            println!();
            println!("=== PARETO CURVE (every 10th item) ===");
            for (actual, reference) in m
                .curves
                .actual
                .iter()
                .zip(&m.theoretical_at_actual)
                .step_by(10)
            {
                println!(
                    "  items {:>5.1}% | revenue {:>5.1}% | ideal {:>5.1}%",
                    actual.x, actual.y, reference.y
                );
            }
        }
        ViewModel::SupplierAnalytics(m) => {
            println!("=== SUPPLIERS ===");
            for r in &m.rows {
                println!(
                    "  {:<12} | Revenue: ${:.0} | Lead: {} | Defects: {}",
                    r.supplier,
                    r.revenue,
                    fmt_opt(r.mean_lead_time),
                    fmt_opt(r.mean_defect_rate)
                );
            }
        }
        ViewModel::ShipperAnalytics(m) => {
            println!("=== CARRIERS ===");
            for r in &m.carriers {
                println!(
                    "  {:<10} | Revenue: ${:.0} | Cost: {} | Time: {}",
                    r.carrier,
                    r.revenue,
                    fmt_opt(r.mean_shipping_cost),
                    fmt_opt(r.mean_shipping_time)
                );
            }
            println!();
            println!("=== TRANSPORTATION MODES ===");
            for g in &m.transportation_modes {
                println!("  {:<8} | Mean cost: {}", g.key, fmt_opt(g.mean));
            }
            println!();
            println!("=== ROUTES ===");
            for g in &m.routes {
                println!("  {:<8} | Mean cost: {}", g.key, fmt_opt(g.mean));
            }
        }
        ViewModel::CustomerAnalytics(m) => {
            println!("=== CUSTOMER DEMOGRAPHICS ===");
            for r in &m.rows {
                println!(
                    "  {:<10} | Revenue: ${:.0} ({:.1}%) | Sold: {:.0}",
                    r.demographic, r.revenue, r.revenue_pct, r.products_sold
                );
            }
        }
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
