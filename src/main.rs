// ===============================
// src/main.rs
// ===============================
/*
 cargo run --release -- --days 90 --seed 7
 OUTPUT_FORMAT=jsonl cargo run -q | tail -n 1      # ringkasan saja
 cargo run -q -- --print-metrics | grep '^backtest_'
*/
/*
=============================================================================
Project : gbm_crossover_bt — GBM price simulator + MA crossover backtest
Module  : main.rs
Version : 0.5.0
License : MIT (see LICENSE)

Summary : Simulates a daily price path with Geometric Brownian Motion,
          backtests a 7/30 moving-average crossover on it, and reports a
          day-by-day ledger plus ROI vs buy-and-hold.

=============================================================================
*/
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gbm_crossover_bt::config::{self, OutputFormat};
use gbm_crossover_bt::{metrics, report, CrossoverBacktester, PriceSimulator};

fn main() -> ExitCode {
    // ---- Load config ----
    let args = config::load();

    // ---- Logging (stderr; stdout khusus report) ----
    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // ---- Metrics ----
    metrics::init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &config::Args) -> Result<(), Box<dyn std::error::Error>> {
    // validasi semua parameter dulu, sebelum simulasi dimulai
    let params = args.simulation_parameters()?;
    let simulator = PriceSimulator::new(args.start_date);
    let backtester = CrossoverBacktester::new(args.backtest_config()?);

    info!(
        days = params.day_count(),
        initial_price = params.initial_price(),
        seed = params.seed(),
        drift = params.annual_drift(),
        volatility = params.annual_volatility(),
        initial_cash = backtester.config().initial_cash(),
        start_date = %simulator.start_date(),
        "startup config"
    );

    let prices = simulator.generate(&params)?;
    let result = backtester.run(&prices)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => report::write_table(&mut out, &result)?,
        OutputFormat::Jsonl => report::write_jsonl(&mut out, &result)?,
    }
    if args.print_metrics {
        writeln!(out)?;
        out.write_all(metrics::render().as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
