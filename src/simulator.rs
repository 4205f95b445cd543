// ===============================
// src/simulator.rs
// ===============================
//
// Price path generator (Geometric Brownian Motion, daily step):
// - day 0 = initial_price persis (tanpa random)
// - day i = price[i-1] * exp((mu - sigma^2/2) * dt + sigma * sqrt(dt) * Z)
// - RNG di-seed sekali per panggilan `generate`, satu draw normal per hari (1..N-1)
//
use chrono::{Days, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::debug;

use crate::config::SimulationParameters;
use crate::domain::PricePoint;
use crate::error::ConfigError;
use crate::metrics::SIM_DAYS;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Raw GBM path, tanpa tanggal.
pub fn simulate_path(params: &SimulationParameters) -> Vec<f64> {
    let mu = params.annual_drift();
    let sigma = params.annual_volatility();
    let dt = 1.0 / DAYS_PER_YEAR;
    let drift = (mu - 0.5 * sigma * sigma) * dt;
    let diffusion = sigma * dt.sqrt();

    let mut rng = StdRng::seed_from_u64(params.seed());
    let mut prices = Vec::with_capacity(params.day_count());
    prices.push(params.initial_price());

    let mut prev = params.initial_price();
    for _ in 1..params.day_count() {
        let z: f64 = rng.sample(StandardNormal);
        // harus multiplikatif supaya harga tetap > 0
        prev *= (drift + diffusion * z).exp();
        prices.push(prev);
    }
    prices
}

#[derive(Debug, Clone)]
pub struct PriceSimulator {
    start_date: NaiveDate,
}

impl PriceSimulator {
    pub fn new(start_date: NaiveDate) -> Self {
        Self { start_date }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Deterministic for a fixed seed: two calls with the same parameters are bit-identical.
    pub fn generate(&self, params: &SimulationParameters) -> Result<Vec<PricePoint>, ConfigError> {
        let day_count = params.day_count();
        if day_count == 0 {
            return Err(ConfigError::InvalidDayCount(0));
        }
        // cek tanggal terakhir dulu, sebelum kerja simulasi
        self.start_date
            .checked_add_days(Days::new((day_count - 1) as u64))
            .ok_or(ConfigError::DateOverflow(day_count))?;

        let points = simulate_path(params)
            .into_iter()
            .enumerate()
            .map(|(i, price)| {
                self.start_date
                    .checked_add_days(Days::new(i as u64))
                    .map(|date| PricePoint { date, price })
                    .ok_or(ConfigError::DateOverflow(day_count))
            })
            .collect::<Result<Vec<_>, _>>()?;

        SIM_DAYS.inc_by(points.len() as u64);
        debug!(
            days = points.len(),
            seed = params.seed(),
            first = points.first().map(|p| p.price),
            last = points.last().map(|p| p.price),
            "price path generated"
        );
        Ok(points)
    }
}

impl Default for PriceSimulator {
    fn default() -> Self {
        Self::new(default_start_date())
    }
}

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("2023-01-01 is a valid date")
}
