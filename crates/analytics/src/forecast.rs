//! Cash-spend forecast.
//!
//! This is a deliberately naive projection: the mean of the last three
//! observed monthly totals, carried forward with ±10% uniform jitter. It has
//! no seasonality, trend or error-bound component and should not be read as
//! a statistical forecast.

use chrono::{Months, NaiveDate};
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::trend::MonthlyBucket;

/// Number of observed months averaged.
pub const WINDOW_MONTHS: usize = 3;
/// Number of months projected ahead.
pub const HORIZON_MONTHS: usize = 6;

/// One projected month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// First day of the projected month.
    pub month: NaiveDate,
    pub amount: Decimal,
}

impl ForecastPoint {
    /// `YYYY-MM` label, continuing the observed sequence.
    pub fn label(&self) -> String {
        self.month.format("%Y-%m").to_string()
    }
}

/// Project [`HORIZON_MONTHS`] months beyond the observed trend.
///
/// The month labels are deterministic; the amounts are `mean * (1 + j)` with
/// `j` drawn uniformly from [-0.1, 0.1] out of the supplied RNG, so callers
/// that need reproducible output pass a seeded generator. An empty trend
/// yields an empty forecast.
pub fn project<R: Rng + ?Sized>(trend: &[MonthlyBucket], rng: &mut R) -> Vec<ForecastPoint> {
    let Some(last) = trend.last() else {
        return Vec::new();
    };

    let window = &trend[trend.len().saturating_sub(WINDOW_MONTHS)..];
    let sum: Decimal = window.iter().map(|b| b.invoice_sum).sum();
    let mean = sum / Decimal::from(window.len());

    (1..=HORIZON_MONTHS as u32)
        .map(|offset| {
            let month = last
                .month
                .checked_add_months(Months::new(offset))
                .unwrap_or(last.month);
            let jitter: f64 = rng.gen_range(-0.1..=0.1);
            let factor = Decimal::from_f64(1.0 + jitter).unwrap_or(Decimal::ONE);
            ForecastPoint {
                month,
                amount: (mean * factor).round_dp(2),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bucket(year: i32, month: u32, sum: i64) -> MonthlyBucket {
        MonthlyBucket {
            month: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            invoice_count: 1,
            invoice_sum: Decimal::from(sum),
        }
    }

    #[test]
    fn labels_continue_the_observed_sequence() {
        let trend = vec![bucket(2025, 4, 90), bucket(2025, 5, 100), bucket(2025, 6, 110)];
        let mut rng = StdRng::seed_from_u64(7);

        let forecast = project(&trend, &mut rng);
        let labels: Vec<String> = forecast.iter().map(ForecastPoint::label).collect();
        assert_eq!(
            labels,
            ["2025-07", "2025-08", "2025-09", "2025-10", "2025-11", "2025-12"]
        );
    }

    #[test]
    fn amounts_stay_within_ten_percent_of_the_mean() {
        let trend = vec![bucket(2025, 4, 100), bucket(2025, 5, 100), bucket(2025, 6, 100)];
        let mut rng = StdRng::seed_from_u64(42);

        let forecast = project(&trend, &mut rng);
        assert_eq!(forecast.len(), HORIZON_MONTHS);
        for point in &forecast {
            assert!(point.amount >= Decimal::from(90), "{:?}", point);
            assert!(point.amount <= Decimal::from(110), "{:?}", point);
        }
    }

    #[test]
    fn short_history_averages_what_exists() {
        let trend = vec![bucket(2025, 6, 120)];
        let mut rng = StdRng::seed_from_u64(1);

        let forecast = project(&trend, &mut rng);
        assert_eq!(forecast.len(), HORIZON_MONTHS);
        assert_eq!(forecast[0].label(), "2025-07");
        assert!(forecast[0].amount >= Decimal::from(108));
        assert!(forecast[0].amount <= Decimal::from(132));
    }

    #[test]
    fn empty_trend_yields_empty_forecast() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(project(&[], &mut rng).is_empty());
    }

    #[test]
    fn year_boundary_rolls_over() {
        let trend = vec![bucket(2025, 11, 100)];
        let mut rng = StdRng::seed_from_u64(3);
        let forecast = project(&trend, &mut rng);
        assert_eq!(forecast[1].label(), "2026-01");
    }
}
