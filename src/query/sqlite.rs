//! SQLite repository
//!
//! Store-backed implementation of [`AdvocateRepository`]. Filtering runs in
//! SQL through the `ilike_contains` scalar function, which wraps the same
//! predicate the in-memory backend uses. Specialties are kept as a JSON array
//! and matched element-wise with `json_each`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{
    functions::FunctionFlags, params, types::ValueRef, Connection, OptionalExtension, Row,
};
use serde_json::Value;
use tracing::debug;

use super::{contains_ignore_case, AdvocateRepository, SearchPage, SearchParams};
use crate::error::{DirectoryError, Result};
use crate::models::Advocate;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS advocates (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    city TEXT NOT NULL,
    degree TEXT NOT NULL,
    specialties TEXT NOT NULL DEFAULT '[]',
    years_of_experience INTEGER NOT NULL,
    phone_number INTEGER NOT NULL
)";

const COLUMNS: &str =
    "id, first_name, last_name, city, degree, specialties, years_of_experience, phone_number";

/// `?1` is the search term. Non-array specialties are treated as empty.
const FILTER: &str = "(?1 = ''
    OR ilike_contains(first_name || ' ' || last_name, ?1)
    OR ilike_contains(first_name, ?1)
    OR ilike_contains(last_name, ?1)
    OR ilike_contains(city, ?1)
    OR ilike_contains(degree, ?1)
    OR EXISTS (
        SELECT 1
        FROM json_each(
            CASE WHEN json_valid(specialties)
                THEN CASE WHEN json_type(specialties) = 'array' THEN specialties ELSE '[]' END
                ELSE '[]'
            END
        ) AS s
        WHERE ilike_contains(s.value, ?1)
    ))";

// == SQLite Repository ==
/// Advocate records stored in a SQLite table.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRepository {
    /// Opens the database named by a connection string.
    ///
    /// Accepts `sqlite://path`, `sqlite:path`, a bare path, or `:memory:`.
    pub fn open(url: &str) -> Result<Self> {
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);

        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        Self::from_connection(conn)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        register_functions(&conn)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Inserts records in one transaction. Ids come from the primary key.
    pub fn insert_all(&self, advocates: &[Advocate]) -> Result<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO advocates (first_name, last_name, city, degree, specialties, \
                 years_of_experience, phone_number) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for a in advocates {
                let specialties = serde_json::to_string(&a.specialties)
                    .map_err(|e| DirectoryError::Internal(e.to_string()))?;
                stmt.execute(params![
                    a.first_name,
                    a.last_name,
                    a.city,
                    a.degree,
                    specialties,
                    a.years_of_experience,
                    a.phone_number,
                ])?;
            }
        }
        tx.commit()?;
        Ok(advocates.len())
    }

    /// Inserts records only when the table has no rows. Returns rows inserted.
    pub fn seed_if_empty(&self, advocates: &[Advocate]) -> Result<usize> {
        if self.count()? > 0 {
            debug!("advocates table already populated, skipping seed");
            return Ok(0);
        }
        self.insert_all(advocates)
    }

    /// Total number of rows.
    pub fn count(&self) -> Result<u64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM advocates", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DirectoryError::Internal("connection mutex poisoned".to_string()))
    }

    /// Runs a closure against the connection on the blocking pool.
    async fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| DirectoryError::Internal("connection mutex poisoned".to_string()))?;
            f(&guard)
        })
        .await
        .map_err(|e| DirectoryError::Internal(format!("blocking task failed: {e}")))?
    }
}

#[async_trait]
impl AdvocateRepository for SqliteRepository {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn search(&self, params: &SearchParams) -> Result<SearchPage> {
        let term = params.query.clone();
        let limit = i64::from(params.limit);
        let offset = params.offset() as i64;

        self.run(move |conn| {
            let total: i64 = conn.query_row(
                &format!("SELECT COUNT(*) FROM advocates WHERE {FILTER}"),
                params![term],
                |row| row.get(0),
            )?;

            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM advocates WHERE {FILTER} ORDER BY id LIMIT ?2 OFFSET ?3"
            ))?;
            let data = stmt
                .query_map(params![term, limit, offset], advocate_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(SearchPage {
                data,
                total: total as u64,
            })
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Advocate>> {
        self.run(move |conn| {
            let advocate = conn
                .query_row(
                    &format!("SELECT {COLUMNS} FROM advocates WHERE id = ?1"),
                    params![id],
                    advocate_from_row,
                )
                .optional()?;
            Ok(advocate)
        })
        .await
    }
}

/// Registers `ilike_contains(haystack, needle)` on the connection.
fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "ilike_contains",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let haystack = sql_text(ctx.get_raw(0));
            let needle = sql_text(ctx.get_raw(1));
            Ok(match (haystack, needle) {
                (Some(h), Some(n)) => contains_ignore_case(&h, &n),
                _ => false,
            })
        },
    )
}

/// Text view of a SQL value; numbers are rendered, NULL and blobs are not text.
fn sql_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}

fn advocate_from_row(row: &Row<'_>) -> rusqlite::Result<Advocate> {
    let specialties: String = row.get(5)?;
    Ok(Advocate {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        city: row.get(3)?,
        degree: row.get(4)?,
        specialties: parse_specialties(&specialties),
        years_of_experience: row.get(6)?,
        phone_number: row.get(7)?,
    })
}

/// Reads a JSON array column; anything that is not an array reads as empty.
fn parse_specialties(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        _ => Vec::new(),
    }
}
