// ===============================
// src/config.rs
// ===============================
/*
=============================================================================
Project : gbm_crossover_bt — GBM price simulator + MA crossover backtest
Module  : config.rs
Version : 0.5.0
License : MIT (see LICENSE)

Summary : Simulates a daily price path with Geometric Brownian Motion,
          backtests a 7/30 moving-average crossover on it, and reports a
          day-by-day ledger plus ROI vs buy-and-hold.

=============================================================================
*/
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use dotenvy::dotenv;

use crate::error::ConfigError;

pub const DEFAULT_DAY_COUNT: usize = 60;
pub const DEFAULT_INITIAL_PRICE: f64 = 50_000.0;
pub const DEFAULT_SEED: u64 = 123;
pub const DEFAULT_ANNUAL_DRIFT: f64 = 0.5;
pub const DEFAULT_ANNUAL_VOLATILITY: f64 = 0.8;
pub const DEFAULT_INITIAL_CASH: f64 = 10_000.0;
pub const SHORT_WINDOW: usize = 7;
pub const LONG_WINDOW: usize = 30;

/// Parameter simulasi GBM. Hanya bisa dibuat lewat `new` (tervalidasi) atau `Default`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    day_count: usize,
    initial_price: f64,
    seed: u64,
    annual_drift: f64,
    annual_volatility: f64,
}

impl SimulationParameters {
    pub fn new(
        day_count: usize,
        initial_price: f64,
        seed: u64,
        annual_drift: f64,
        annual_volatility: f64,
    ) -> Result<Self, ConfigError> {
        if day_count == 0 {
            return Err(ConfigError::InvalidDayCount(0));
        }
        if !initial_price.is_finite() || initial_price <= 0.0 {
            return Err(ConfigError::InvalidInitialPrice(initial_price));
        }
        if !annual_drift.is_finite() {
            return Err(ConfigError::InvalidDrift(annual_drift));
        }
        if !annual_volatility.is_finite() || annual_volatility < 0.0 {
            return Err(ConfigError::InvalidVolatility(annual_volatility));
        }
        Ok(Self { day_count, initial_price, seed, annual_drift, annual_volatility })
    }

    pub fn day_count(&self) -> usize { self.day_count }
    pub fn initial_price(&self) -> f64 { self.initial_price }
    pub fn seed(&self) -> u64 { self.seed }
    pub fn annual_drift(&self) -> f64 { self.annual_drift }
    pub fn annual_volatility(&self) -> f64 { self.annual_volatility }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            day_count: DEFAULT_DAY_COUNT,
            initial_price: DEFAULT_INITIAL_PRICE,
            seed: DEFAULT_SEED,
            annual_drift: DEFAULT_ANNUAL_DRIFT,
            annual_volatility: DEFAULT_ANNUAL_VOLATILITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BacktestConfig {
    initial_cash: f64,
    short_window: usize,
    long_window: usize,
}

impl BacktestConfig {
    pub fn new(initial_cash: f64) -> Result<Self, ConfigError> {
        Self::with_windows(initial_cash, SHORT_WINDOW, LONG_WINDOW)
    }

    pub fn with_windows(initial_cash: f64, short_window: usize, long_window: usize) -> Result<Self, ConfigError> {
        if !initial_cash.is_finite() || initial_cash <= 0.0 {
            return Err(ConfigError::InvalidInitialCash(initial_cash));
        }
        if short_window == 0 || short_window >= long_window {
            return Err(ConfigError::InvalidWindow { short: short_window, long: long_window });
        }
        Ok(Self { initial_cash, short_window, long_window })
    }

    pub fn initial_cash(&self) -> f64 { self.initial_cash }
    pub fn short_window(&self) -> usize { self.short_window }
    pub fn long_window(&self) -> usize { self.long_window }
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self { initial_cash: DEFAULT_INITIAL_CASH, short_window: SHORT_WINDOW, long_window: LONG_WINDOW }
    }
}

/// Format output ke stdout
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Jsonl,
}

#[derive(Clone, Debug, Parser)]
#[command(name = "gbm_crossover_bt", version, about = "GBM price simulation + MA(7/30) crossover backtest")]
pub struct Args {
    // simulation
    #[arg(long, env = "DAYS", default_value_t = DEFAULT_DAY_COUNT as i64, allow_negative_numbers = true)]
    pub days: i64,
    #[arg(long, env = "INITIAL_PRICE", default_value_t = DEFAULT_INITIAL_PRICE)]
    pub initial_price: f64,
    #[arg(long, env = "SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    #[arg(long, env = "DRIFT", default_value_t = DEFAULT_ANNUAL_DRIFT, allow_negative_numbers = true)]
    pub drift: f64,
    #[arg(long, env = "VOLATILITY", default_value_t = DEFAULT_ANNUAL_VOLATILITY)]
    pub volatility: f64,
    #[arg(long, env = "START_DATE", default_value = "2023-01-01")]
    pub start_date: NaiveDate,

    // backtest
    #[arg(long, env = "INITIAL_CASH", default_value_t = DEFAULT_INITIAL_CASH)]
    pub initial_cash: f64,

    // output / observability
    #[arg(long, env = "OUTPUT_FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    #[arg(long, env = "PRINT_METRICS")]
    pub print_metrics: bool,
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn simulation_parameters(&self) -> Result<SimulationParameters, ConfigError> {
        // day_count <= 0 ditolak di sini, bukan di parser CLI
        let day_count = usize::try_from(self.days)
            .map_err(|_| ConfigError::InvalidDayCount(self.days))?;
        SimulationParameters::new(day_count, self.initial_price, self.seed, self.drift, self.volatility)
    }

    pub fn backtest_config(&self) -> Result<BacktestConfig, ConfigError> {
        BacktestConfig::new(self.initial_cash)
    }
}

pub fn load() -> Args {
    // Pastikan .env dibaca dulu supaya fallback env di clap ikut ter-load
    let _ = dotenv();
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let p = SimulationParameters::default();
        assert_eq!(p.day_count(), 60);
        assert_eq!(p.initial_price(), 50_000.0);
        assert_eq!(p.seed(), 123);
        assert_eq!(p.annual_drift(), 0.5);
        assert_eq!(p.annual_volatility(), 0.8);

        let b = BacktestConfig::default();
        assert_eq!(b.initial_cash(), 10_000.0);
        assert_eq!((b.short_window(), b.long_window()), (7, 30));
    }

    #[test]
    fn rejects_invalid_simulation_parameters() {
        assert_eq!(SimulationParameters::new(0, 100.0, 1, 0.0, 0.0), Err(ConfigError::InvalidDayCount(0)));
        assert_eq!(SimulationParameters::new(5, 0.0, 1, 0.0, 0.0), Err(ConfigError::InvalidInitialPrice(0.0)));
        assert_eq!(SimulationParameters::new(5, -1.0, 1, 0.0, 0.0), Err(ConfigError::InvalidInitialPrice(-1.0)));
        assert_eq!(SimulationParameters::new(5, 100.0, 1, 0.0, -0.1), Err(ConfigError::InvalidVolatility(-0.1)));
        assert!(matches!(
            SimulationParameters::new(5, 100.0, 1, f64::NAN, 0.1),
            Err(ConfigError::InvalidDrift(_))
        ));
    }

    #[test]
    fn zero_volatility_is_allowed() {
        assert!(SimulationParameters::new(10, 100.0, 1, 0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_invalid_backtest_config() {
        assert_eq!(BacktestConfig::new(0.0), Err(ConfigError::InvalidInitialCash(0.0)));
        assert_eq!(BacktestConfig::new(-5.0), Err(ConfigError::InvalidInitialCash(-5.0)));
        assert_eq!(
            BacktestConfig::with_windows(1_000.0, 30, 7),
            Err(ConfigError::InvalidWindow { short: 30, long: 7 })
        );
        assert!(BacktestConfig::with_windows(1_000.0, 0, 7).is_err());
    }

    #[test]
    fn cli_defaults_and_negative_days() {
        let args = Args::try_parse_from(["gbm_crossover_bt"]).unwrap();
        assert_eq!(args.simulation_parameters().unwrap(), SimulationParameters::default());
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.start_date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());

        let args = Args::try_parse_from(["gbm_crossover_bt", "--days", "-3"]).unwrap();
        assert_eq!(args.simulation_parameters(), Err(ConfigError::InvalidDayCount(-3)));
    }
}
