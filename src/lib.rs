// ===============================
// src/lib.rs
// ===============================
//
// Alur: SimulationParameters -> PriceSimulator (GBM) -> PricePoint[]
//       -> CrossoverBacktester (SMA 7/30 + state machine) -> ledger + summary
//
pub mod backtest;
pub mod config;
pub mod domain;
pub mod error;
pub mod indicators;
pub mod metrics;
pub mod report;
pub mod simulator;
pub mod strategy;

pub use backtest::{BacktestReport, CrossoverBacktester};
pub use config::{BacktestConfig, SimulationParameters};
pub use domain::{Action, IndicatorRow, LedgerEntry, PerformanceSummary, PortfolioState, Position, PricePoint};
pub use error::ConfigError;
pub use simulator::PriceSimulator;
