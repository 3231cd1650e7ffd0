use std::env;
use std::process;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use abc_pipeline::aggregator::AbcBreakdown;
use abc_pipeline::types::{AbcBand, CategoryTotal, UnitTotal};
use abc_pipeline::{
    ingest_path, AbcThresholds, Dataset, IngestConfig, InventoryRecord, PipelineState,
    SortDirection, SortKey, SortSpec, View, ViewQuery,
};

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ReportJson<'a> {
    generated_at: String,
    source: &'a str,
    header_row: Option<usize>,
    search: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<SortSpec>,
    load_ms: u128,
    summary: SummaryJson,
    unit_totals: &'a [UnitTotal],
    category_totals: &'a [CategoryTotal],
    abc: &'a AbcBreakdown,
    records: Vec<&'a InventoryRecord>,
}

#[derive(Serialize)]
struct SummaryJson {
    records_loaded: usize,
    rows_dropped: usize,
    records_visible: usize,
    records_filtered_out: usize,
    total_revenue: f64,
}

fn build_json<'a>(
    dataset: &'a Dataset,
    view: &'a View<'a>,
    query: &'a ViewQuery,
    top: Option<usize>,
    load_ms: u128,
) -> ReportJson<'a> {
    let shown = top.unwrap_or(view.records.len()).min(view.records.len());
    ReportJson {
        generated_at: Utc::now().to_rfc3339(),
        source: &dataset.source,
        header_row: dataset.header_row,
        search: &query.search,
        sort: query.sort,
        load_ms,
        summary: SummaryJson {
            records_loaded: dataset.records.len(),
            rows_dropped: dataset.dropped_rows(),
            records_visible: view.records.len(),
            records_filtered_out: view.filtered_out,
            total_revenue: view.aggregates.total_revenue,
        },
        unit_totals: &view.aggregates.unit_totals,
        category_totals: &view.aggregates.category_totals,
        abc: &view.abc,
        records: view.records[..shown].to_vec(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

/// Format a number with comma thousands separators and two decimals.
fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let s = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!(
        "{}{}.{:02}",
        sign,
        grouped.chars().rev().collect::<String>(),
        frac
    )
}

/// Quantities print without decimals when whole.
fn format_qty(qty: f64) -> String {
    if qty.fract() == 0.0 {
        format!("{}", qty as i64)
    } else {
        format!("{:.2}", qty)
    }
}

fn band_line(band: &AbcBand, total: f64) -> String {
    let share = if total != 0.0 {
        band.revenue / total * 100.0
    } else {
        0.0
    };
    format!(
        "  {}  {:>5} items  {:>16}  {:>5.1}%",
        band.category,
        band.count,
        format_amount(band.revenue),
        share
    )
}

fn print_human(dataset: &Dataset, view: &View<'_>, query: &ViewQuery, top: Option<usize>, load_ms: u128) {
    println!();
    println!("  ABC INVENTORY REPORT: {}", dataset.source);
    println!("  {:\u{2500}<72}", "");

    let header = match dataset.header_row {
        Some(row) => format!("header at row {}", row + 1),
        None => "no header found, row 1 assumed".to_string(),
    };
    println!(
        "  {} records loaded  \u{00b7}  {} rows dropped  \u{00b7}  {}",
        dataset.records.len(),
        dataset.dropped_rows(),
        header
    );
    if !query.search.trim().is_empty() {
        println!(
            "  search \"{}\": {} visible, {} hidden",
            query.search.trim(),
            view.records.len(),
            view.filtered_out
        );
    }
    println!();

    println!("  Revenue (visible): {}", format_amount(view.aggregates.total_revenue));
    println!();

    println!("  Quantity by unit");
    for unit in &view.aggregates.unit_totals {
        println!("    {:>12} {}", format_qty(unit.quantity), unit.unit);
    }
    println!();

    println!("  Revenue by category");
    for category in &view.aggregates.category_totals {
        println!(
            "    {:<8} {:>16}  qty {}",
            category.category,
            format_amount(category.revenue),
            format_qty(category.quantity)
        );
    }
    println!();

    println!("  ABC bands");
    for band in &view.abc.bands {
        println!("{}", band_line(band, view.aggregates.total_revenue));
    }
    println!();

    if view.records.is_empty() {
        println!("  No records match the current search.");
    } else {
        let shown = top.unwrap_or(view.records.len()).min(view.records.len());
        println!("  {:\u{2500}<72}", "");
        println!(
            "  {:3} {:<34} {:>10} {:>10} {:>14}",
            "ABC", "Material", "Physical", "Available", "Revenue"
        );
        for record in &view.records[..shown] {
            let category = record
                .abc_category
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".into());
            let material: String = record.material.chars().take(34).collect();
            let available_flag = if record.available_qty < 0.0 { "!" } else { " " };
            println!(
                "  {:3} {:<34} {:>10} {:>9}{} {:>14}",
                category,
                material,
                format!("{} {}", format_qty(record.physical_qty), record.unit),
                format_qty(record.available_qty),
                available_flag,
                format_amount(record.total_sale_value)
            );
            if !record.code.is_empty() {
                println!("      {}", record.code);
            }
        }
        if shown < view.records.len() {
            println!("  ... {} more", view.records.len() - shown);
        }
        println!("  {:\u{2500}<72}", "");
    }

    println!();
    println!("  \u{23f1}  Loaded and classified in {}ms", load_ms);
    println!();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn usage() -> ! {
    eprintln!("Usage: abc-server <inventory.xlsx|inventory.csv> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --sheet NAME      Sheet holding the inventory (default: Planilha4)");
    eprintln!("  --delimiter C     CSV field delimiter (default: ,)");
    eprintln!("  --search TEXT     Only show records whose material or code contains TEXT");
    eprintln!("  --sort KEY        Sort by code, material, available, physical, unit,");
    eprintln!("                    price, revenue, coverage or abc");
    eprintln!("  --desc            Sort descending");
    eprintln!("  --top N           Print at most N records");
    eprintln!("  --json            Output as JSON instead of formatted text");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  abc-server estoque.xlsx --sort revenue --desc --top 20");
    eprintln!("  abc-server estoque.csv --delimiter ';' --search balde --json");
    process::exit(1);
}

fn flag_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i + 1) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires a value", flag);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let path = &args[1];

    // Parse optional flags
    let mut config = IngestConfig::default();
    let mut query = ViewQuery::default();
    let mut sort_key: Option<SortKey> = None;
    let mut direction = SortDirection::Asc;
    let mut top: Option<usize> = None;
    let mut json_output = false;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--sheet" => {
                config.sheet_name = flag_value(&args, i, "--sheet");
                i += 2;
            }
            "--delimiter" => {
                let value = flag_value(&args, i, "--delimiter");
                config.csv_delimiter = match value.as_bytes() {
                    [b] => *b,
                    _ => {
                        eprintln!("Error: --delimiter requires a single ASCII character");
                        process::exit(1);
                    }
                };
                i += 2;
            }
            "--search" => {
                query.search = flag_value(&args, i, "--search");
                i += 2;
            }
            "--sort" => {
                let value = flag_value(&args, i, "--sort");
                sort_key = Some(value.parse().unwrap_or_else(|e| {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }));
                i += 2;
            }
            "--desc" => {
                direction = SortDirection::Desc;
                i += 1;
            }
            "--top" => {
                let value = flag_value(&args, i, "--top");
                top = Some(value.parse().unwrap_or_else(|_| {
                    eprintln!("Error: --top requires a positive integer");
                    process::exit(1);
                }));
                i += 2;
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            "-h" | "--help" => usage(),
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
    }
    query.sort = sort_key.map(|key| SortSpec { key, direction });

    // Ingest and classify
    let mut state = PipelineState::new();
    let load_start = Instant::now();
    let dataset = match state.ingest_with(|| ingest_path(path, &config, &AbcThresholds::default())) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Error loading '{}': {}", path, e);
            process::exit(1);
        }
    };
    let load_ms = load_start.elapsed().as_millis();
    log::debug!("{}: {} records in {}ms", path, dataset.records.len(), load_ms);

    let Some(view) = state.view(&query) else {
        eprintln!("Error: no dataset loaded");
        process::exit(1);
    };

    if json_output {
        let report = build_json(&dataset, &view, &query, top, load_ms);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_human(&dataset, &view, &query, top, load_ms);
    }
}
