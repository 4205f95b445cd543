// ===============================
// src/backtest.rs
// ===============================
//
// Single-pass backtest:
// - indikator dihitung sekali di depan (SMA 7/30)
// - loop kronologis, state portfolio di-thread sebagai akumulator
// - satu LedgerEntry per hari, nilai dihitung setelah transisi
//
use tracing::{debug, info};

use crate::config::BacktestConfig;
use crate::domain::{Action, LedgerEntry, PerformanceSummary, PortfolioState, Position, PricePoint};
use crate::error::ConfigError;
use crate::indicators;
use crate::metrics::{ACTIONS, BUY_HOLD_ROI_PCT, FINAL_VALUE, ROI_PCT};
use crate::strategy;

#[derive(Debug, Clone, PartialEq)]
pub struct BacktestReport {
    pub ledger: Vec<LedgerEntry>,
    pub summary: PerformanceSummary,
}

#[derive(Debug, Clone)]
pub struct CrossoverBacktester {
    config: BacktestConfig,
}

impl CrossoverBacktester {
    pub fn new(config: BacktestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BacktestConfig {
        &self.config
    }

    pub fn run(&self, points: &[PricePoint]) -> Result<BacktestReport, ConfigError> {
        let first = points.first().ok_or(ConfigError::EmptyPriceSeries)?;
        let last = points.last().ok_or(ConfigError::EmptyPriceSeries)?;
        // seluruh seri dicek dulu; tidak ada hasil parsial
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !is_valid_price(p.price)) {
            return Err(ConfigError::InvalidPrice { index, price: p.price });
        }
        let initial_cash = self.config.initial_cash();

        let rows = indicators::compute(points, self.config.short_window(), self.config.long_window());

        let mut ledger = Vec::with_capacity(rows.len());
        let mut state = PortfolioState::new(initial_cash);
        let mut prev = None;

        for cur in &rows {
            let action = match prev {
                Some(p) => {
                    let (next, action) = strategy::step(state, p, cur);
                    state = next;
                    action
                }
                None => Action::Hold,
            };
            let portfolio_value = state.value_at(cur.price);

            if action != Action::Hold {
                debug!(
                    date = %cur.date,
                    price = cur.price,
                    short_ma = ?cur.short_ma,
                    long_ma = ?cur.long_ma,
                    action = action.as_str(),
                    value = portfolio_value,
                    "crossover"
                );
            }
            ACTIONS.with_label_values(&[action.as_str()]).inc();

            ledger.push(LedgerEntry {
                date: cur.date,
                price: cur.price,
                short_ma: cur.short_ma,
                long_ma: cur.long_ma,
                action,
                portfolio_value,
            });
            prev = Some(cur);
        }

        let summary = summarize(&ledger, initial_cash, first.price, last.price)?;

        FINAL_VALUE.set(summary.final_value);
        ROI_PCT.set(summary.roi_pct);
        BUY_HOLD_ROI_PCT.set(summary.buy_hold_roi_pct);
        info!(
            days = ledger.len(),
            buys = summary.buy_count,
            sells = summary.sell_count,
            final_value = summary.final_value,
            roi_pct = summary.roi_pct,
            buy_hold_roi_pct = summary.buy_hold_roi_pct,
            "backtest finished"
        );

        Ok(BacktestReport { ledger, summary })
    }
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// Ringkasan performa; fungsi murni dari ledger + cash awal + harga hari pertama/terakhir.
pub fn summarize(
    ledger: &[LedgerEntry],
    initial_cash: f64,
    first_price: f64,
    last_price: f64,
) -> Result<PerformanceSummary, ConfigError> {
    if !initial_cash.is_finite() || initial_cash <= 0.0 {
        return Err(ConfigError::InvalidInitialCash(initial_cash));
    }
    let final_value = ledger.last().ok_or(ConfigError::EmptyPriceSeries)?.portfolio_value;
    if !is_valid_price(first_price) {
        return Err(ConfigError::InvalidPrice { index: 0, price: first_price });
    }
    if !is_valid_price(last_price) {
        return Err(ConfigError::InvalidPrice { index: ledger.len() - 1, price: last_price });
    }
    let profit_loss = final_value - initial_cash;
    let roi_pct = profit_loss / initial_cash * 100.0;

    let buy_hold_units = initial_cash / first_price;
    let buy_hold_final = buy_hold_units * last_price;
    let buy_hold_roi_pct = (buy_hold_final - initial_cash) / initial_cash * 100.0;

    let buy_count = ledger.iter().filter(|e| e.action == Action::Buy).count();
    let sell_count = ledger.iter().filter(|e| e.action == Action::Sell).count();
    let final_position = match ledger.iter().rev().map(|e| e.action).find(|a| *a != Action::Hold) {
        Some(Action::Buy) => Position::Long,
        _ => Position::Neutral,
    };

    Ok(PerformanceSummary {
        initial_cash,
        final_value,
        profit_loss,
        roi_pct,
        buy_hold_final,
        buy_hold_roi_pct,
        buy_count,
        sell_count,
        final_position,
    })
}
