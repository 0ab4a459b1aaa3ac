//! SQLite storage for telemetry and prediction tables.

mod url;
mod values;

pub use url::DatabaseUrl;

use anyhow::{Context, Result, bail};
use polars::prelude::*;
use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use tracing::{debug, info};

use vigil_ports::{TableSinkPort, TelemetrySourcePort};

use values::{column_from_values, sql_type, sql_value};

/// One connection, opened once per run.
pub struct SqliteStorage {
    conn: Connection,
    url: DatabaseUrl,
}

impl SqliteStorage {
    pub fn open(url: &DatabaseUrl) -> Result<Self> {
        let conn = match url {
            DatabaseUrl::File(path) => Connection::open(path)
                .with_context(|| format!("failed to open sqlite database {}", path.display()))?,
            DatabaseUrl::Memory => {
                Connection::open_in_memory().context("failed to open in-memory sqlite database")?
            }
        };
        info!(%url, "connected to database");
        Ok(Self {
            conn,
            url: url.clone(),
        })
    }

    pub fn url(&self) -> &DatabaseUrl {
        &self.url
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1",
            [table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

impl TelemetrySourcePort for SqliteStorage {
    fn fetch_ordered(&mut self, table: &str, order_by: &str) -> Result<DataFrame> {
        let sql = format!(
            "SELECT * FROM {} ORDER BY {} ASC",
            quote_identifier(table),
            quote_identifier(order_by)
        );
        debug!(%sql, "fetching telemetry");
        let mut stmt = self
            .conn
            .prepare(&sql)
            .with_context(|| format!("failed to query table '{table}'"))?;
        let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut columns: Vec<Vec<Value>> = vec![Vec::new(); names.len()];
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            for (index, column) in columns.iter_mut().enumerate() {
                column.push(row.get::<_, Value>(index)?);
            }
        }

        let series = names
            .iter()
            .zip(&columns)
            .map(|(name, values)| column_from_values(name, values))
            .collect::<Result<Vec<_>>>()?;
        let frame = DataFrame::new(series)?;
        info!(table, rows = frame.height(), columns = frame.width(), "fetched telemetry");
        Ok(frame)
    }
}

impl TableSinkPort for SqliteStorage {
    fn replace_table(&mut self, table: &str, frame: &DataFrame) -> Result<usize> {
        if frame.width() == 0 {
            bail!("refusing to write table '{table}' without columns");
        }
        let quoted = quote_identifier(table);
        let definitions = frame
            .get_columns()
            .iter()
            .map(|series| {
                format!(
                    "{} {}",
                    quote_identifier(series.name()),
                    sql_type(series.dtype())
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=frame.width())
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");

        let tx = self.conn.transaction()?;
        tx.execute(&format!("DROP TABLE IF EXISTS {quoted}"), [])
            .with_context(|| format!("failed to drop table '{table}'"))?;
        tx.execute(&format!("CREATE TABLE {quoted} ({definitions})"), [])
            .with_context(|| format!("failed to create table '{table}'"))?;
        {
            let mut insert = tx.prepare(&format!("INSERT INTO {quoted} VALUES ({placeholders})"))?;
            let columns = frame.get_columns();
            for row in 0..frame.height() {
                let cells = columns
                    .iter()
                    .map(|series| series.get(row).map(sql_value))
                    .collect::<PolarsResult<Vec<Value>>>()?;
                insert
                    .execute(params_from_iter(cells.iter()))
                    .with_context(|| format!("failed to insert row {row} into '{table}'"))?;
            }
        }
        tx.commit()
            .with_context(|| format!("failed to commit table '{table}'"))?;

        info!(table, rows = frame.height(), "replaced table");
        Ok(frame.height())
    }
}

/// Double-quotes an identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
