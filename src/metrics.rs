// ===============================
// src/metrics.rs
// ===============================
use once_cell::sync::Lazy;
use prometheus::{Encoder, Gauge, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

// Single custom registry (we register everything here)
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

// -------- Simulation --------
pub static SIM_DAYS: Lazy<IntCounter> =
    Lazy::new(|| IntCounter::new("sim_days_total", "simulated price days").unwrap());

// -------- Backtest --------
pub static ACTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("backtest_actions_total", "ledger actions (label: action)"),
        &["action"],
    )
    .unwrap()
});

pub static FINAL_VALUE: Lazy<Gauge> =
    Lazy::new(|| Gauge::new("backtest_final_value", "final portfolio value").unwrap());

pub static ROI_PCT: Lazy<Gauge> =
    Lazy::new(|| Gauge::new("backtest_roi_pct", "strategy ROI (%)").unwrap());

pub static BUY_HOLD_ROI_PCT: Lazy<Gauge> =
    Lazy::new(|| Gauge::new("backtest_buy_hold_roi_pct", "buy & hold ROI (%)").unwrap());

pub fn init() {
    // Register ulang -> AlreadyReg, diabaikan (aman dipanggil berkali-kali)
    for m in [
        REGISTRY.register(Box::new(SIM_DAYS.clone())),
        REGISTRY.register(Box::new(ACTIONS.clone())),
        REGISTRY.register(Box::new(FINAL_VALUE.clone())),
        REGISTRY.register(Box::new(ROI_PCT.clone())),
        REGISTRY.register(Box::new(BUY_HOLD_ROI_PCT.clone())),
    ] {
        let _ = m;
    }
}

// Encode all metrics in Prometheus text format
pub fn render() -> String {
    let encoder = TextEncoder::new();
    let families = REGISTRY.gather();
    let mut buf = Vec::new();
    if encoder.encode(&families, &mut buf).is_err() || buf.is_empty() {
        return "# no metrics\n".to_string();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_and_renders_text_format() {
        init();
        init();
        SIM_DAYS.inc();
        ACTIONS.with_label_values(&["HOLD"]).inc();
        let text = render();
        assert!(text.contains("sim_days_total"));
        assert!(text.contains("backtest_actions_total{action=\"HOLD\"}"));
    }
}
