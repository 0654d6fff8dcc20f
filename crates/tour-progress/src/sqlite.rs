//! SQLite store backend (feature `sqlite`).
//!
//! Creates a single `progress.db` file in the configured directory with two
//! keyed tables, `visited_stops` and `notified_stops`.  Each save replaces
//! both tables inside one transaction, so readers only ever observe a fully
//! committed record.

use std::path::Path;

use rusqlite::Connection;

use crate::{ProgressRecord, ProgressResult, ProgressStore};

/// Stores the progress record in an SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) `progress.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> ProgressResult<Self> {
        Self::open(dir.join("progress.db"))
    }

    /// Open (or create) the database at an explicit path.
    pub fn open(path: impl AsRef<Path>) -> ProgressResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS visited_stops (
                 stop_id INTEGER PRIMARY KEY
             );
             CREATE TABLE IF NOT EXISTS notified_stops (
                 stop_id INTEGER PRIMARY KEY
             );",
        )?;

        Ok(Self { conn })
    }

    fn read_table(&mut self, table: &str) -> Vec<u32> {
        // A malformed table degrades to "nothing stored" rather than failing
        // the load; the schema is recreated on the next open and overwritten
        // on the next save.
        let sql = format!("SELECT stop_id FROM {table} ORDER BY stop_id");
        let Ok(mut stmt) = self.conn.prepare(&sql) else {
            return Vec::new();
        };
        let Ok(rows) = stmt.query_map([], |row| row.get::<_, u32>(0)) else {
            return Vec::new();
        };
        rows.filter_map(Result::ok).collect()
    }
}

impl ProgressStore for SqliteStore {
    fn load(&mut self) -> ProgressResult<ProgressRecord> {
        Ok(ProgressRecord {
            visited:  self.read_table("visited_stops"),
            notified: self.read_table("notified_stops"),
        })
    }

    fn save(&mut self, record: &ProgressRecord) -> ProgressResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            tx.execute("DELETE FROM visited_stops", [])?;
            tx.execute("DELETE FROM notified_stops", [])?;

            let mut insert_visited =
                tx.prepare_cached("INSERT OR IGNORE INTO visited_stops (stop_id) VALUES (?1)")?;
            for id in &record.visited {
                insert_visited.execute([id])?;
            }

            let mut insert_notified =
                tx.prepare_cached("INSERT OR IGNORE INTO notified_stops (stop_id) VALUES (?1)")?;
            for id in &record.notified {
                insert_notified.execute([id])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn clear(&mut self) -> ProgressResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM visited_stops", [])?;
        tx.execute("DELETE FROM notified_stops", [])?;
        tx.commit()?;
        Ok(())
    }
}
