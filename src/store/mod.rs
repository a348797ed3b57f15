/*! SQLite persistence.

Two tables:
- `Sources`: ledger of processed source ids, used to skip sources on later runs.
- `Words`: append-only word records.

Tables are created on open if needed, so opening an existing database is fine.
Each write runs in its own transaction, taken through `&self`.
!*/
use std::collections::HashSet;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use log::{debug, info};
use rusqlite::{params, Connection};

use crate::error::Error;
use crate::pos;
use crate::processing::Word;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS Sources (
    id TEXT PRIMARY KEY,
    first_seen_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS Words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    romanized TEXT NOT NULL,
    pos_raw TEXT NOT NULL,
    pos_normalized TEXT NOT NULL,
    pos_english TEXT NOT NULL,
    source_id TEXT NOT NULL REFERENCES Sources(id),
    timestamp TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_words_source ON Words(source_id);
";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, Error> {
        info!("opening database {:?}", path);
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, Error> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, Error> {
        // words must belong to a recorded source
        conn.pragma_update(None, "foreign_keys", true)?;
        let store = Self { conn };
        store.create_tables()?;
        Ok(store)
    }

    /// Create tables and indices. No-op on tables that already exist.
    pub fn create_tables(&self) -> Result<(), Error> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Check if a source has already been recorded.
    pub fn has(&self, id: &str) -> Result<bool, Error> {
        let mut stmt = self.conn.prepare_cached("SELECT 1 FROM Sources WHERE id = ?1")?;
        Ok(stmt.exists(params![id])?)
    }

    /// Get every recorded source id.
    pub fn known_ids(&self) -> Result<HashSet<String>, Error> {
        let mut stmt = self.conn.prepare("SELECT id FROM Sources")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<_, _>>()?;
        Ok(ids)
    }

    /// Record sources as seen now.
    ///
    /// Already recorded ids are left untouched. Returns the number of ids actually inserted.
    pub fn record_new<S: AsRef<str>>(&self, ids: &[S]) -> Result<usize, Error> {
        let tx = self.conn.unchecked_transaction()?;
        let inserted = insert_sources(&tx, ids, Local::now().naive_local())?;
        tx.commit()?;
        Ok(inserted)
    }

    /// Append a batch of words, in a single transaction.
    pub fn append_words(&self, words: &[Word]) -> Result<usize, Error> {
        let tx = self.conn.unchecked_transaction()?;
        let inserted = insert_words(&tx, words)?;
        tx.commit()?;
        Ok(inserted)
    }

    /// Record sources and append words in a single transaction.
    ///
    /// Returns the number of inserted sources and words.
    pub fn commit<S: AsRef<str>>(
        &self,
        ids: &[S],
        words: &[Word],
    ) -> Result<(usize, usize), Error> {
        let tx = self.conn.unchecked_transaction()?;
        let sources = insert_sources(&tx, ids, Local::now().naive_local())?;
        let words = insert_words(&tx, words)?;
        tx.commit()?;
        info!("committed {} sources and {} words", sources, words);
        Ok((sources, words))
    }

    /// Rewrite stored POS labels that are not canonical.
    ///
    /// Can be run any number of times. Returns the number of updated rows.
    pub fn normalize_pos(&self) -> Result<usize, Error> {
        let tx = self.conn.unchecked_transaction()?;
        let labels: Vec<String> = {
            let mut stmt = tx.prepare("SELECT DISTINCT pos_normalized FROM Words")?;
            let labels = stmt
                .query_map([], |row| row.get(0))?
                .collect::<Result<_, _>>()?;
            labels
        };

        let mut updated = 0;
        {
            let mut stmt =
                tx.prepare("UPDATE Words SET pos_normalized = ?1 WHERE pos_normalized = ?2")?;
            for label in labels.iter().filter(|l| !pos::is_canonical(l)) {
                let normalized = pos::normalize(label);
                let n = stmt.execute(params![normalized, label])?;
                debug!("{:?} -> {:?} ({} rows)", label, normalized, n);
                updated += n;
            }
        }
        tx.commit()?;

        info!("normalized POS of {} words", updated);
        Ok(updated)
    }

    /// Get stored words, in insertion order.
    pub fn words(&self) -> Result<Vec<Word>, Error> {
        let mut stmt = self.conn.prepare(
            "SELECT text, romanized, pos_raw, pos_normalized, pos_english, source_id, timestamp
             FROM Words ORDER BY id",
        )?;
        let words = stmt
            .query_map([], |row| {
                Ok(Word {
                    text: row.get(0)?,
                    romanized: row.get(1)?,
                    pos_raw: row.get(2)?,
                    pos_normalized: row.get(3)?,
                    pos_english: row.get(4)?,
                    source_id: row.get(5)?,
                    timestamp: row.get(6)?,
                })
            })?
            .collect::<Result<_, _>>()?;
        Ok(words)
    }

    pub fn count_sources(&self) -> Result<usize, Error> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Sources", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn count_words(&self) -> Result<usize, Error> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Words", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn insert_sources<S: AsRef<str>>(
    conn: &Connection,
    ids: &[S],
    now: NaiveDateTime,
) -> Result<usize, Error> {
    let mut stmt =
        conn.prepare_cached("INSERT OR IGNORE INTO Sources (id, first_seen_at) VALUES (?1, ?2)")?;
    let mut inserted = 0;
    for id in ids {
        inserted += stmt.execute(params![id.as_ref(), now])?;
    }
    Ok(inserted)
}

fn insert_words(conn: &Connection, words: &[Word]) -> Result<usize, Error> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO Words (text, romanized, pos_raw, pos_normalized, pos_english, source_id, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for w in words {
        stmt.execute(params![
            w.text,
            w.romanized,
            w.pos_raw,
            w.pos_normalized,
            w.pos_english,
            w.source_id,
            w.timestamp
        ])?;
    }
    Ok(words.len())
}
