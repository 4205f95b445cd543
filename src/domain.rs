// ===============================
// src/domain.rs
// ===============================
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint { pub date: NaiveDate, pub price: f64 }

/// Satu baris harga + SMA trailing. `None` = window belum penuh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow { pub date: NaiveDate, pub price: f64, pub short_ma: Option<f64>, pub long_ma: Option<f64> }

impl IndicatorRow {
    /// Both averages, only when both windows are full.
    pub fn averages(&self) -> Option<(f64, f64)> {
        Some((self.short_ma?, self.long_ma?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position { #[default] Neutral, Long }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action { Buy, Sell, Hold }

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self { Action::Buy => "BUY", Action::Sell => "SELL", Action::Hold => "HOLD" }
    }
}

/// NEUTRAL => holdings == 0, LONG => cash == 0. All-in / all-out, no partial sizing.
/// Field privat: state baru hanya lewat `new` atau transisi di `strategy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioState { cash: f64, holdings: f64, position: Position }

impl PortfolioState {
    pub fn new(initial_cash: f64) -> Self {
        Self::neutral(initial_cash)
    }

    pub(crate) fn neutral(cash: f64) -> Self {
        Self { cash, holdings: 0.0, position: Position::Neutral }
    }

    pub(crate) fn long(holdings: f64) -> Self {
        Self { cash: 0.0, holdings, position: Position::Long }
    }

    pub fn cash(&self) -> f64 { self.cash }
    pub fn holdings(&self) -> f64 { self.holdings }
    pub fn position(&self) -> Position { self.position }

    pub fn value_at(&self, price: f64) -> f64 {
        self.cash + self.holdings * price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub price: f64,
    pub short_ma: Option<f64>,
    pub long_ma: Option<f64>,
    pub action: Action,
    pub portfolio_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub initial_cash: f64,
    pub final_value: f64,
    pub profit_loss: f64,
    pub roi_pct: f64,
    pub buy_hold_final: f64,
    pub buy_hold_roi_pct: f64,
    pub buy_count: usize,
    pub sell_count: usize,
    pub final_position: Position,
}

// Event stream untuk output JSONL (satu baris per event)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event { Day(LedgerEntry), Summary(PerformanceSummary) }
