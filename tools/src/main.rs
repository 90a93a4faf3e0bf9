//! dash-runner: headless runner for the sales dashboard pipeline.
//!
//! Usage:
//!   dash-runner --seed 42 --data-dir ./data
//!   dash-runner --seed 42 --ipc-mode

use anyhow::Result;
use salesdash_core::{
    command::FilterCommand,
    config::PipelineConfig,
    dashboard::{Dashboard, DashboardView, FilterOptions},
    record::Dataset,
    summary::{describe, info},
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetView,
    Filter { command: FilterCommand },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState<'a> {
    records: usize,
    options: FilterOptions,
    view:    &'a DashboardView,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    let config = PipelineConfig::load_or_default(data_dir)?;
    let seed = parse_arg(&args, "--seed", config.seed);
    let config = config.with_seed(seed);

    if !ipc_mode {
        println!("Sales Dashboard — dash-runner");
        println!("  seed:      {seed}");
        println!(
            "  dates:     {} .. {}",
            config.date_range.start, config.date_range.end
        );
        println!("  data_dir:  {data_dir}");
        println!();
    }

    let mut dashboard = Dashboard::build(config)?;

    if ipc_mode {
        run_ipc_loop(&mut dashboard)?;
    } else {
        print_description(dashboard.dataset())?;
        let view = dashboard.current_view();
        print_view(view);
    }

    Ok(())
}

fn run_ipc_loop(dashboard: &mut Dashboard) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Malformed request: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match request {
            IpcRequest::Quit => break,
            IpcRequest::GetView => {}
            IpcRequest::Filter { command } => {
                dashboard.handle(&command);
            }
        }

        let records = dashboard.dataset().len();
        let options = dashboard.options();
        let state = UiState {
            records,
            options,
            view: dashboard.current_view(),
        };
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_description(dataset: &Dataset) -> Result<()> {
    let (rows, columns) = dataset.shape();
    println!("=== DATASET ===");
    println!("  shape: ({rows}, {columns})");
    println!("  first rows:");
    for row in dataset.head(5) {
        println!("    {}", serde_json::to_string(&row)?);
    }

    println!();
    println!("=== INFO ===");
    println!("  {:<12} {:>8}  {}", "column", "non-null", "dtype");
    for col in info(dataset) {
        println!("  {:<12} {:>8}  {}", col.name, col.non_null, col.dtype);
    }

    println!();
    println!("=== DESCRIBE ===");
    println!(
        "  {:<12} {:>8} {:>10} {:>10} {:>9} {:>10} {:>10} {:>10} {:>10}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for (name, s) in describe(dataset).stats {
        println!(
            "  {:<12} {:>8} {:>10.2} {:>10.2} {:>9.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            name, s.count, s.mean, s.std, s.min, s.p25, s.p50, s.p75, s.max
        );
    }
    println!();
    Ok(())
}

fn print_view(view: &DashboardView) {
    println!("=== METRICS ===");
    println!("  total sales:     {}", view.formatted.total);
    println!("  average sale:    {}", view.formatted.mean);
    println!("  number of sales: {}", view.formatted.count);
    println!("  growth 2024:     {}", view.formatted.growth_pct);

    println!();
    println!("=== {} ===", view.ranking.title.to_uppercase());
    for entry in &view.ranking.entries {
        println!("  {:<12} ${:.0}", entry.category, entry.total_value);
    }

    println!();
    println!("=== {} ===", view.share.title.to_uppercase());
    for region in &view.share.regions {
        println!(
            "  {:<12} ${:.0} ({:.1}%)",
            region.region,
            region.total_value,
            region.proportion * 100.0
        );
    }

    println!();
    println!("=== {} ===", view.trend.title.to_uppercase());
    for point in &view.trend.points {
        println!("  {} ${:.0}", point.label, point.total_value);
    }

    println!();
    println!("=== {} ===", view.correlation.title.to_uppercase());
    for (i, label) in view.correlation.labels.iter().enumerate() {
        let cells: Vec<String> = (0..view.correlation.labels.len())
            .map(|j| match view.correlation.get(i, j) {
                Some(r) => format!("{r:>7.3}"),
                None => format!("{:>7}", "n/a"),
            })
            .collect();
        println!("  {:<12} {}", label, cells.join(" "));
    }

    println!();
    println!(
        "=== {} ({} buckets) ===",
        view.distribution.title.to_uppercase(),
        view.distribution.bucket_count()
    );
    for bucket in view.distribution.buckets() {
        println!(
            "  [{:>9.0}, {:>9.0}) {}",
            bucket.lower, bucket.upper, bucket.count
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
