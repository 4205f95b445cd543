// ===============================
// src/report.rs
// ===============================
//
// Presentation layer (di luar core):
// - write_table : tabel ledger + ringkasan performa (teks)
// - write_jsonl : satu Event JSON per baris (Day..., lalu Summary)
//
use std::io::{self, Write};

use crate::backtest::BacktestReport;
use crate::domain::{Event, LedgerEntry, PerformanceSummary};

fn money_or_na(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("${x:.2}"),
        None => "N/A".to_string(),
    }
}

pub fn write_ledger_row<W: Write>(w: &mut W, e: &LedgerEntry) -> io::Result<()> {
    let date = e.date.format("%Y-%m-%d").to_string();
    writeln!(
        w,
        "{:<12} | ${:<9.2} | {:<10} | {:<10} | {:<10} | ${:<14.2}",
        date,
        e.price,
        money_or_na(e.short_ma),
        money_or_na(e.long_ma),
        e.action.as_str(),
        e.portfolio_value
    )
}

pub fn write_summary<W: Write>(w: &mut W, s: &PerformanceSummary) -> io::Result<()> {
    writeln!(w, "\nFinal Portfolio Performance:")?;
    writeln!(w, "Initial Investment: ${:.2}", s.initial_cash)?;
    writeln!(w, "Final Value:        ${:.2}", s.final_value)?;
    writeln!(w, "Profit/Loss:        ${:.2}", s.profit_loss)?;
    writeln!(w, "ROI:                {:.2}%", s.roi_pct)?;
    writeln!(w, "Buy & Hold ROI:     {:.2}%", s.buy_hold_roi_pct)?;
    writeln!(w, "Trades:             {} buy / {} sell", s.buy_count, s.sell_count)
}

pub fn write_table<W: Write>(w: &mut W, report: &BacktestReport) -> io::Result<()> {
    writeln!(
        w,
        "{:<12} | {:<10} | {:<10} | {:<10} | {:<10} | {:<15}",
        "Date", "Price", "MA7", "MA30", "Action", "Portfolio Value"
    )?;
    writeln!(w, "{}", "-".repeat(80))?;
    for e in &report.ledger {
        write_ledger_row(w, e)?;
    }
    writeln!(w, "{}", "-".repeat(80))?;
    write_summary(w, &report.summary)
}

pub fn write_jsonl<W: Write>(w: &mut W, report: &BacktestReport) -> io::Result<()> {
    let events = report
        .ledger
        .iter()
        .map(|e| Event::Day(*e))
        .chain(std::iter::once(Event::Summary(report.summary)));
    for ev in events {
        serde_json::to_writer(&mut *w, &ev)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Action, Position};
    use chrono::NaiveDate;

    fn sample() -> BacktestReport {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let ledger = vec![
            LedgerEntry { date, price: 100.0, short_ma: None, long_ma: None, action: Action::Hold, portfolio_value: 1_000.0 },
            LedgerEntry {
                date: date.succ_opt().unwrap(),
                price: 101.5,
                short_ma: Some(100.25),
                long_ma: Some(99.0),
                action: Action::Buy,
                portfolio_value: 1_000.0,
            },
        ];
        let summary = PerformanceSummary {
            initial_cash: 1_000.0,
            final_value: 1_000.0,
            profit_loss: 0.0,
            roi_pct: 0.0,
            buy_hold_final: 1_015.0,
            buy_hold_roi_pct: 1.5,
            buy_count: 1,
            sell_count: 0,
            final_position: Position::Long,
        };
        BacktestReport { ledger, summary }
    }

    #[test]
    fn table_renders_na_and_money() {
        let mut out = Vec::new();
        write_table(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Date"));
        assert!(lines[2].starts_with("2023-01-01"));
        assert!(lines[2].contains("N/A"));
        assert!(lines[3].contains("$100.25"));
        assert!(lines[3].contains("BUY"));
        assert!(text.contains("Buy & Hold ROI:     1.50%"));
    }

    #[test]
    fn jsonl_has_one_line_per_day_plus_summary() {
        let mut out = Vec::new();
        write_jsonl(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> =
            text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["Day"]["action"], "HOLD");
        assert!(lines[0]["Day"]["short_ma"].is_null());
        assert_eq!(lines[1]["Day"]["date"], "2023-01-02");
        assert_eq!(lines[2]["Summary"]["final_position"], "LONG");
    }
}
