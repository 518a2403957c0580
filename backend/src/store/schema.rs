//! Static schema contract of the dataset
//!
//! The service only reads two tables. Their columns are declared here and
//! checked once at startup so a wrong or truncated dataset fails fast instead
//! of on the first request.

use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};

/// A table the service reads and the columns it relies on
#[derive(Debug, Clone, Copy)]
pub struct TableContract {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const STATION: TableContract = TableContract {
    name: "station",
    columns: &["id", "station", "name", "latitude", "longitude", "elevation"],
};

pub const MEASUREMENT: TableContract = TableContract {
    name: "measurement",
    columns: &["id", "station", "date", "prcp", "tobs"],
};

pub const TABLES: [TableContract; 2] = [STATION, MEASUREMENT];

/// Columns of `contract` absent from `present`
pub fn missing_columns(contract: &TableContract, present: &[String]) -> Vec<&'static str> {
    contract
        .columns
        .iter()
        .copied()
        .filter(|column| !present.iter().any(|p| p.eq_ignore_ascii_case(column)))
        .collect()
}

/// Verify every table in [`TABLES`] exists with its expected columns
pub async fn verify_schema(pool: &SqlitePool) -> AppResult<()> {
    let mut problems = Vec::new();

    for contract in TABLES {
        let present = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?)")
            .bind(contract.name)
            .fetch_all(pool)
            .await?;

        if present.is_empty() {
            problems.push(format!("table `{}` is missing", contract.name));
            continue;
        }

        let missing = missing_columns(&contract, &present);
        if !missing.is_empty() {
            problems.push(format!(
                "table `{}` is missing columns: {}",
                contract.name,
                missing.join(", ")
            ));
        }
    }

    if problems.is_empty() {
        tracing::debug!("Dataset schema verified");
        Ok(())
    } else {
        Err(AppError::SchemaMismatch(problems.join("; ")))
    }
}
