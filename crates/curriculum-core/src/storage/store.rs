use super::schema::{BOOK_COLUMNS, VERSE_COLUMNS};
use super::VerseSource;
use crate::config::Settings;
use crate::model::Verse;
use crate::selector::SelectionRequest;
use anyhow::Context;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OpenFlags};
use std::path::Path;

/// Read-only handle on the SQLite verse database.
pub struct VerseStore {
    conn: Connection,
    verses_table: String,
    books_table: String,
}

impl VerseStore {
    pub fn open(path: &Path, settings: &Settings) -> anyhow::Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("failed to open sqlite db {}", path.display()))?;
        Self::from_connection(conn, settings)
    }

    /// Wraps an existing connection, checking the expected relations first.
    pub fn from_connection(conn: Connection, settings: &Settings) -> anyhow::Result<Self> {
        let store = Self {
            conn,
            verses_table: settings.verses_table.clone(),
            books_table: settings.books_table.clone(),
        };
        store.verify_schema()?;
        Ok(store)
    }

    fn verify_schema(&self) -> anyhow::Result<()> {
        for (table, required) in [
            (&self.verses_table, VERSE_COLUMNS),
            (&self.books_table, BOOK_COLUMNS),
        ] {
            let present = self.table_columns(table)?;
            if present.is_empty() {
                anyhow::bail!("schema mismatch: table {} not found", table);
            }
            if let Some(missing) = required
                .iter()
                .find(|c| !present.iter().any(|p| p.as_str() == **c))
            {
                anyhow::bail!("schema mismatch: {}.{} is missing", table, missing);
            }
        }
        Ok(())
    }

    fn table_columns(&self, table: &str) -> anyhow::Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare(&format!("PRAGMA table_info({table})"))
            .context("failed to inspect schema")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;

        let mut cols = Vec::new();
        for r in rows {
            cols.push(r?);
        }
        Ok(cols)
    }
}

impl VerseSource for VerseStore {
    fn find_unassigned(&self, req: &SelectionRequest<'_>) -> anyhow::Result<Vec<Verse>> {
        if req.is_empty() {
            return Ok(Vec::new());
        }

        let sql = selection_sql(
            &self.verses_table,
            &self.books_table,
            req.keywords.len(),
            req.exclude.len(),
        );

        let mut values: Vec<Value> = req
            .keywords
            .iter()
            .map(|k| Value::Text(k.as_like().to_string()))
            .collect();
        values.push(Value::Integer(req.min_len as i64));
        values.push(Value::Integer(req.max_len as i64));
        values.extend(req.exclude.iter().map(|id| Value::Integer(*id)));
        values.push(Value::Integer(req.limit as i64));

        let mut stmt = self.conn.prepare(&sql).context("failed to prepare selection query")?;
        let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
            Ok(Verse {
                book: row.get(0)?,
                chapter: row.get(1)?,
                verse: row.get(2)?,
                text: row.get(3)?,
                id: row.get(4)?,
            })
        })?;

        let mut verses = Vec::new();
        for r in rows {
            verses.push(r?);
        }
        Ok(verses)
    }

    fn count_assigned(&self, category: &str) -> anyhow::Result<u64> {
        let n: i64 = self.conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM {} WHERE category = ?1",
                self.verses_table
            ),
            params![category],
            |r| r.get(0),
        )?;
        Ok(n.max(0) as u64)
    }
}

/// Builds the candidate query. Placeholders, in order: one per keyword,
/// min length, max length, one per excluded id, limit.
pub fn selection_sql(
    verses_table: &str,
    books_table: &str,
    keyword_count: usize,
    exclude_count: usize,
) -> String {
    let conditions = vec!["v.text LIKE ?"; keyword_count].join(" OR ");
    let exclusion = if exclude_count == 0 {
        String::new()
    } else {
        format!(
            "\n        AND v.id NOT IN ({})",
            vec!["?"; exclude_count].join(", ")
        )
    };

    format!(
        "
        SELECT DISTINCT
            b.name AS book_name,
            v.chapter,
            v.verse,
            v.text,
            v.id
        FROM {verses_table} v
        JOIN {books_table} b ON v.book_id = b.id
        WHERE v.category IS NULL
        AND ({conditions})
        AND LENGTH(v.text) > ?
        AND LENGTH(v.text) < ?{exclusion}
        ORDER BY RANDOM()
        LIMIT ?
    "
    )
}
