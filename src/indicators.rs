// ===============================
// src/indicators.rs
// ===============================
use crate::domain::{IndicatorRow, PricePoint};

/// Simple moving average atas `w` harga terakhir (termasuk index `i`).
/// `None` kalau window belum penuh.
pub fn sma_at(prices: &[f64], i: usize, w: usize) -> Option<f64> {
    if w == 0 || i >= prices.len() || i + 1 < w {
        return None;
    }
    let window = &prices[i + 1 - w..=i];
    Some(window.iter().sum::<f64>() / w as f64)
}

/// Trailing SMA for every index, aligned with the input.
pub fn sma_series(prices: &[f64], w: usize) -> Vec<Option<f64>> {
    (0..prices.len()).map(|i| sma_at(prices, i, w)).collect()
}

/// One `IndicatorRow` per price point. Stateless, computed over the whole series.
pub fn compute(points: &[PricePoint], short_w: usize, long_w: usize) -> Vec<IndicatorRow> {
    let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
    let short = sma_series(&prices, short_w);
    let long = sma_series(&prices, long_w);

    points
        .iter()
        .zip(short.into_iter().zip(long))
        .map(|(p, (short_ma, long_ma))| IndicatorRow { date: p.date, price: p.price, short_ma, long_ma })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn points(prices: &[f64]) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        prices
            .iter()
            .zip(start.iter_days())
            .map(|(&price, date)| PricePoint { date, price })
            .collect()
    }

    #[test]
    fn sma_is_trailing_mean_including_current() {
        let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(sma_at(&prices, 1, 3), None);
        assert_eq!(sma_at(&prices, 2, 3), Some(2.0));
        assert_eq!(sma_at(&prices, 4, 3), Some(4.0));
        assert_eq!(sma_at(&prices, 5, 3), None);
    }

    #[test]
    fn window_floors_for_7_and_30() {
        let prices: Vec<f64> = (0..45).map(|i| 100.0 + i as f64).collect();
        let rows = compute(&points(&prices), 7, 30);
        assert_eq!(rows.len(), 45);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.short_ma.is_some(), i >= 6, "short at {i}");
            assert_eq!(row.long_ma.is_some(), i >= 29, "long at {i}");
            assert_eq!(row.price, prices[i]);
        }
        // index 6: mean(100..=106) = 103
        assert_eq!(rows[6].short_ma, Some(103.0));
        // index 29: mean(100..=129) = 114.5
        assert_eq!(rows[29].long_ma, Some(114.5));
    }

    #[test]
    fn not_exponential_smoothing() {
        // spike di awal keluar sepenuhnya dari window setelah w hari
        let mut prices = vec![1_000.0];
        prices.extend(std::iter::repeat(10.0).take(10));
        let s = sma_series(&prices, 3);
        assert_eq!(s[3], Some(10.0));
        assert_eq!(s[10], Some(10.0));
    }

    #[test]
    fn short_series_has_no_long_average() {
        let rows = compute(&points(&[5.0; 10]), 7, 30);
        assert!(rows.iter().all(|r| r.long_ma.is_none()));
        assert_eq!(rows[9].short_ma, Some(5.0));
    }
}
