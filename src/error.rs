// ===============================
// src/error.rs
// ===============================
use thiserror::Error;

/// Semua kegagalan konfigurasi. Dicek di depan, sebelum simulasi/backtest jalan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("day_count must be positive (got {0})")]
    InvalidDayCount(i64),
    #[error("initial_price must be positive and finite (got {0})")]
    InvalidInitialPrice(f64),
    #[error("initial_cash must be positive and finite (got {0})")]
    InvalidInitialCash(f64),
    #[error("annual_volatility must be non-negative and finite (got {0})")]
    InvalidVolatility(f64),
    #[error("annual_drift must be finite (got {0})")]
    InvalidDrift(f64),
    #[error("invalid moving-average windows: short={short}, long={long}")]
    InvalidWindow { short: usize, long: usize },
    #[error("price at index {index} must be positive and finite (got {price})")]
    InvalidPrice { index: usize, price: f64 },
    #[error("price series is empty")]
    EmptyPriceSeries,
    #[error("date range overflows the calendar after {0} days")]
    DateOverflow(usize),
}
