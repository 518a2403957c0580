//! Shared fixtures: an in-memory dataset with the production table layout

#![allow(dead_code)]

use std::sync::Arc;

use climate_api::{
    config::{Config, DatabaseConfig, QueryConfig, ServerConfig},
    store::ObservationStore,
    AppState,
};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// `(station, date, prcp, tobs)`
pub type Row<'a> = (&'a str, &'a str, Option<f64>, f64);

/// Three readings from the worked example, latest date 2017-01-05
pub const EXAMPLE_ROWS: [Row<'static>; 3] = [
    ("USC00519397", "2017-01-01", Some(0.0), 60.0),
    ("USC00519397", "2017-01-02", None, 70.0),
    ("USC00519397", "2017-01-05", Some(0.35), 80.0),
];

/// A single-connection in-memory database that lives as long as the pool
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite")
}

pub async fn create_tables(pool: &SqlitePool) {
    sqlx::query(
        r#"
        CREATE TABLE station (
            id INTEGER NOT NULL,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT,
            PRIMARY KEY (id)
        )
        "#,
    )
    .execute(pool)
    .await
    .expect("create station");

    sqlx::query(
        r#"
        CREATE TABLE measurement (
            id INTEGER NOT NULL,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT,
            PRIMARY KEY (id)
        )
        "#,
    )
    .execute(pool)
    .await
    .expect("create measurement");
}

pub async fn insert_measurements(pool: &SqlitePool, rows: &[Row<'_>]) {
    for (station, date, prcp, tobs) in rows {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(pool)
            .await
            .expect("insert measurement");
    }
}

pub async fn insert_station(
    pool: &SqlitePool,
    station: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) {
    sqlx::query(
        "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(station)
    .bind(name)
    .bind(latitude)
    .bind(longitude)
    .bind(elevation)
    .execute(pool)
    .await
    .expect("insert station");
}

/// Pool with both tables created and `rows` loaded
pub async fn seeded_pool(rows: &[Row<'_>]) -> SqlitePool {
    let pool = memory_pool().await;
    create_tables(&pool).await;
    insert_measurements(&pool, rows).await;
    pool
}

pub async fn seeded_store(rows: &[Row<'_>]) -> ObservationStore {
    ObservationStore::new(seeded_pool(rows).await)
}

pub fn test_config(trailing_window_days: i64) -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            request_timeout_secs: 5,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout_secs: 1,
        },
        query: QueryConfig {
            trailing_window_days,
        },
    }
}

pub fn app_state(pool: SqlitePool) -> AppState {
    AppState {
        store: ObservationStore::new(pool),
        config: Arc::new(test_config(365)),
    }
}
