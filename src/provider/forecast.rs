//! Placeholder price forecast.
//!
//! Not a model of anything: the price grows 1% per day from a fixed base so the
//! forecast capability has the same shape for every provider.

use chrono::{Days, NaiveDate};
use std::fmt;

/// Anchor price for the forecast.
pub const BASE_PRICE: f64 = 150.0;

/// Label of the forecast subject.
pub const SUBJECT: &str = "AAPL";

/// Number of calendar days forecast after today.
pub const FORECAST_DAYS: u64 = 3;

const DAILY_GROWTH: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Forecast for the days following `today`.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePrediction {
    pub subject: &'static str,
    pub points: Vec<PricePoint>,
}

impl fmt::Display for PricePrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Here are the mock price predictions for {}:", self.subject)?;
        for point in &self.points {
            writeln!(f, "{}: ${:.2}", point.date, point.price)?;
        }
        Ok(())
    }
}

/// Builds the forecast for days 1 through [`FORECAST_DAYS`] after `today`.
pub fn mock_forecast(today: NaiveDate) -> PricePrediction {
    let points = (1..=FORECAST_DAYS)
        .map(|offset| PricePoint {
            date: today + Days::new(offset),
            price: round_cents(BASE_PRICE * DAILY_GROWTH.mul_add(offset as f64, 1.0)),
        })
        .collect();

    PricePrediction {
        subject: SUBJECT,
        points,
    }
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
