//! Read-only access to the historical weather dataset
//!
//! The dataset is a pre-populated SQLite file with a `station` and a
//! `measurement` table. Nothing here writes to it.

pub mod schema;

use std::{str::FromStr, time::Duration};

use shared::{Measurement, Station};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::error::AppResult;

pub use schema::verify_schema;

/// Open a read-only connection pool to the dataset
pub async fn connect(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Typed read queries over stations and measurements
///
/// Numeric columns may hold integers or reals; every one is cast to REAL so
/// it decodes as `f64` either way.
#[derive(Clone)]
pub struct ObservationStore {
    db: SqlitePool,
}

impl ObservationStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Check that the dataset still answers
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }

    /// Latest measurement date formatted `YYYY-MM-DD`, `None` for an empty dataset
    pub async fn latest_measurement_date(&self) -> AppResult<Option<String>> {
        let latest = sqlx::query_scalar::<_, Option<String>>(
            "SELECT MAX(strftime('%Y-%m-%d', date)) FROM measurement",
        )
        .fetch_one(&self.db)
        .await?;

        Ok(latest)
    }

    /// Min, average and max `tobs` over `start..=end` in a single scan
    pub async fn temperature_aggregates(
        &self,
        start: &str,
        end: &str,
    ) -> AppResult<(Option<f64>, Option<f64>, Option<f64>)> {
        let aggregates = sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(
            r#"
            SELECT CAST(MIN(tobs) AS REAL), CAST(AVG(tobs) AS REAL), CAST(MAX(tobs) AS REAL)
            FROM measurement
            WHERE date >= ? AND date <= ?
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.db)
        .await?;

        Ok(aggregates)
    }

    /// Measurements dated `start..=end`, or from `start` onwards when `end` is `None`
    pub async fn measurements_in_range(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> AppResult<Vec<Measurement>> {
        let rows = sqlx::query_as::<_, (i64, String, String, Option<f64>, f64)>(
            r#"
            SELECT id, station, date, CAST(prcp AS REAL) AS prcp, CAST(tobs AS REAL) AS tobs
            FROM measurement
            WHERE date >= ? AND (? IS NULL OR date <= ?)
            ORDER BY date, station
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, station, date, prcp, tobs)| Measurement {
                id,
                station,
                date,
                prcp,
                tobs,
            })
            .collect())
    }

    /// `(date, prcp)` pairs over the same bounds as [`Self::measurements_in_range`]
    ///
    /// Rows come back ordered by date, then id.
    pub async fn precipitation_in_range(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> AppResult<Vec<(String, Option<f64>)>> {
        let rows = sqlx::query_as::<_, (String, Option<f64>)>(
            r#"
            SELECT date, CAST(prcp AS REAL) AS prcp
            FROM measurement
            WHERE date >= ? AND (? IS NULL OR date <= ?)
            ORDER BY date, id
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    pub async fn all_stations(&self) -> AppResult<Vec<Station>> {
        let rows = sqlx::query_as::<_, (i64, String, String, f64, f64, f64)>(
            r#"
            SELECT id, station, name,
                   CAST(latitude AS REAL) AS latitude,
                   CAST(longitude AS REAL) AS longitude,
                   CAST(elevation AS REAL) AS elevation
            FROM station
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, station, name, latitude, longitude, elevation)| Station {
                id,
                station,
                name,
                latitude,
                longitude,
                elevation,
            })
            .collect())
    }
}
