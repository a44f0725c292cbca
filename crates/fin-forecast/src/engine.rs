//! Linear trend forecast over time-encoded features.
//!
//! Each observation's feature is its day offset from the earliest date,
//! min-max scaled into `[0, 1]`. A least-squares line over the scaled
//! feature is evaluated for every calendar day after the last observation.

use chrono::{Days, NaiveDate};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use fin_analysis::{paired_observations, population_std};
use fin_model::{DatedValue, ForecastOptions, ForecastResult, ModelParams};

use crate::error::{ForecastError, Result};
use crate::regression::fit_line;

/// Forecasts `horizon_days` days with the default minimum of 10 observations.
pub fn forecast(
    df: &DataFrame,
    date_column: &str,
    value_column: &str,
    horizon_days: i64,
) -> Result<ForecastResult> {
    let options = ForecastOptions::default().with_horizon_days(horizon_days);
    forecast_with_options(df, date_column, value_column, &options)
}

/// Fits the trend and projects it forward.
///
/// Parameters are checked before any data is read, then columns, then the
/// observation count, then date spread.
pub fn forecast_with_options(
    df: &DataFrame,
    date_column: &str,
    value_column: &str,
    options: &ForecastOptions,
) -> Result<ForecastResult> {
    let _span = info_span!("forecast", date_column, value_column).entered();
    let horizon_days = check_options(options)?;

    let dates = df
        .column(date_column)
        .map_err(|_| ForecastError::ColumnNotFound {
            column: date_column.to_string(),
        })?;
    let values = df
        .column(value_column)
        .map_err(|_| ForecastError::ColumnNotFound {
            column: value_column.to_string(),
        })?;

    let historical = paired_observations(dates, values);
    if historical.len() < options.min_observations {
        return Err(ForecastError::InsufficientData {
            required: options.min_observations,
            found: historical.len(),
        });
    }

    let (Some(first), Some(last)) = (historical.first(), historical.last()) else {
        return Err(ForecastError::InsufficientData {
            required: options.min_observations,
            found: 0,
        });
    };
    let (first_date, last_date) = (first.date, last.date);
    if first_date == last_date {
        return Err(ForecastError::DegenerateInput {
            reason: format!("all observations share the date {first_date}"),
        });
    }

    if last_date
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .is_none()
    {
        return Err(horizon_out_of_range());
    }

    let days: Vec<f64> = historical
        .iter()
        .map(|point| day_offset(first_date, point.date))
        .collect();
    let scale_min = 0.0;
    let scale_max = day_offset(first_date, last_date);
    let scaled: Vec<f64> = days
        .iter()
        .map(|d| (d - scale_min) / (scale_max - scale_min))
        .collect();
    let observed: Vec<f64> = historical.iter().map(|point| point.value).collect();

    let fit = fit_line(&scaled, &observed).ok_or_else(|| ForecastError::DegenerateInput {
        reason: "observations have no spread in time".to_string(),
    })?;
    let model_params = ModelParams {
        slope: fit.slope,
        intercept: fit.intercept,
        scale_min,
        scale_max,
    };

    let residuals: Vec<f64> = scaled
        .iter()
        .zip(&observed)
        .map(|(x, y)| y - fit.predict(*x))
        .collect();
    let residual_std = population_std(&residuals).unwrap_or(0.0);

    let predicted = (1..=u64::from(horizon_days))
        .map(|offset| {
            let date = last_date
                .checked_add_days(Days::new(offset))
                .ok_or_else(horizon_out_of_range)?;
            Ok(DatedValue::new(
                date,
                model_params.predict(day_offset(first_date, date)),
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        slope = model_params.slope,
        intercept = model_params.intercept,
        residual_std,
        "Fitted trend"
    );
    info!(
        observations = historical.len(),
        horizon_days, "Forecast complete"
    );

    Ok(ForecastResult {
        horizon_days,
        historical,
        predicted,
        model_params,
        residual_std,
    })
}

fn check_options(options: &ForecastOptions) -> Result<u32> {
    if options.horizon_days <= 0 {
        return Err(ForecastError::InvalidParameter {
            name: "horizon_days",
            reason: format!("must be positive, got {}", options.horizon_days),
        });
    }
    if options.min_observations < 2 {
        return Err(ForecastError::InvalidParameter {
            name: "min_observations",
            reason: format!("must be at least 2, got {}", options.min_observations),
        });
    }
    u32::try_from(options.horizon_days).map_err(|_| ForecastError::InvalidParameter {
        name: "horizon_days",
        reason: format!("{} is too large", options.horizon_days),
    })
}

fn horizon_out_of_range() -> ForecastError {
    ForecastError::InvalidParameter {
        name: "horizon_days",
        reason: "forecast extends past the supported calendar range".to_string(),
    }
}

fn day_offset(first: NaiveDate, date: NaiveDate) -> f64 {
    (date - first).num_days() as f64
}
