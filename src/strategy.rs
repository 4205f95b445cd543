// ===============================
// src/strategy.rs
// ===============================
//
// MOVING AVERAGE CROSSOVER (Trend-Following), versi backtest harian.
//    Ide: MA cepat menembus ke atas MA lambat -> Buy  (golden cross)
//         MA cepat menembus ke bawah MA lambat -> Sell (death cross)
//    Cara kerja:
//      - Butuh pasangan (baris kemarin, baris hari ini); keempat MA harus ada.
//      - Golden cross dicek duluan; kalau kena, death cross tidak dicek (satu aksi per hari).
//      - Posisi all-in / all-out: BUY pakai semua cash, SELL likuidasi semua holdings.
//
use crate::domain::{Action, IndicatorRow, PortfolioState, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cross {
    Golden,
    Death,
}

/// Crossover between two consecutive rows, golden checked first.
pub fn detect_cross(prev: &IndicatorRow, cur: &IndicatorRow) -> Option<Cross> {
    let (prev_short, prev_long) = prev.averages()?;
    let (short, long) = cur.averages()?;

    if prev_short <= prev_long && short > long {
        Some(Cross::Golden)
    } else if prev_short >= prev_long && short < long {
        Some(Cross::Death)
    } else {
        None
    }
}

/// Pure transition: (state, cross, price) -> (state', action).
/// A cross toward the position already held is a HOLD.
pub fn transition(state: PortfolioState, cross: Option<Cross>, price: f64) -> (PortfolioState, Action) {
    match (cross, state.position()) {
        (Some(Cross::Golden), Position::Neutral) => (PortfolioState::long(state.cash() / price), Action::Buy),
        (Some(Cross::Death), Position::Long) => (PortfolioState::neutral(state.holdings() * price), Action::Sell),
        _ => (state, Action::Hold),
    }
}

/// One backtest day: detect on (prev, cur), then transition at today's price.
pub fn step(state: PortfolioState, prev: &IndicatorRow, cur: &IndicatorRow) -> (PortfolioState, Action) {
    transition(state, detect_cross(prev, cur), cur.price)
}
