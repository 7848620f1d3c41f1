//! SQLite store
//!
//! Element lists and response maps are stored as JSON TEXT columns.
//! Foreign keys are enabled so deleting a form cascades to its responses.
//! Calls run on tokio's blocking pool against a single shared connection.

use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::domain::{
    Form, FormDraft, FormId, FormResponse, FormResponseView, FormSummary, ResponseMap,
};
use crate::ports::{FormRepository, RepoResult, RepositoryError, ResponseRepository};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS forms (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    elements    TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS form_responses (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    form_id     INTEGER NOT NULL REFERENCES forms(id) ON DELETE CASCADE,
    responses   TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_form_responses_form_id ON form_responses(form_id);
";

const SELECT_FORM: &str =
    "SELECT id, title, elements, created_at, updated_at FROM forms";

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) a database file and apply the schema
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let path = path.as_ref();
        let store = Self::init(Connection::open(path)?)?;
        info!(path = %path.display(), "opened sqlite store");
        Ok(store)
    }

    /// Private in-memory database
    pub fn in_memory() -> RepoResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> RepoResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> RepoResult<T>
    where
        F: FnOnce(&mut Connection) -> RepoResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn.lock();
            f(&mut conn)
        })
        .await
        .map_err(|e| RepositoryError::Storage(format!("blocking task failed: {e}")))?
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    // Fixed width so TEXT ordering matches time ordering
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time rounded up to the stored precision, so the value read back
/// equals the value returned and is never before the call.
fn stored_now() -> DateTime<Utc> {
    let now = Utc::now();
    match now.timestamp_subsec_nanos() % 1_000 {
        0 => now,
        rem => now + Duration::nanoseconds(i64::from(1_000 - rem)),
    }
}

fn parse_timestamp(raw: &str) -> RepoResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Storage(format!("bad timestamp {raw:?}: {e}")))
}

struct FormRow {
    id: FormId,
    title: String,
    elements: String,
    created_at: String,
    updated_at: String,
}

impl FormRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            elements: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }

    fn into_form(self) -> RepoResult<Form> {
        Ok(Form {
            id: self.id,
            title: self.title,
            elements: serde_json::from_str(&self.elements)?,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

fn load_form(conn: &Connection, id: FormId) -> RepoResult<Option<Form>> {
    conn.query_row(&format!("{SELECT_FORM} WHERE id = ?1"), params![id], FormRow::from_row)
        .optional()?
        .map(FormRow::into_form)
        .transpose()
}

#[async_trait]
impl FormRepository for SqliteStore {
    async fn insert_form(&self, draft: &FormDraft) -> RepoResult<Form> {
        let title = draft.title().to_string();
        let elements = serde_json::to_string(draft.elements())?;

        self.with_conn(move |conn| {
            let now = timestamp(stored_now());
            conn.execute(
                "INSERT INTO forms (title, elements, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
                params![title, elements, now],
            )?;
            let id = conn.last_insert_rowid();
            load_form(conn, id)?
                .ok_or_else(|| RepositoryError::Storage(format!("form {id} vanished after insert")))
        })
        .await
    }

    async fn replace_form(&self, id: FormId, draft: &FormDraft) -> RepoResult<Form> {
        let title = draft.title().to_string();
        let elements = serde_json::to_string(draft.elements())?;

        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            let changed = tx.execute(
                "UPDATE forms SET title = ?1, elements = ?2, updated_at = ?3 WHERE id = ?4",
                params![title, elements, timestamp(stored_now()), id],
            )?;
            if changed == 0 {
                return Err(RepositoryError::NotFound(format!("form {id}")));
            }
            let form = load_form(&tx, id)?
                .ok_or_else(|| RepositoryError::NotFound(format!("form {id}")))?;
            tx.commit()?;
            Ok(form)
        })
        .await
    }

    async fn find_form(&self, id: FormId) -> RepoResult<Option<Form>> {
        self.with_conn(move |conn| load_form(conn, id)).await
    }

    async fn list_forms(&self) -> RepoResult<Vec<Form>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_FORM} ORDER BY id DESC"))?;
            let rows = stmt
                .query_map([], FormRow::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows.into_iter().map(FormRow::into_form).collect()
        })
        .await
    }

    async fn delete_form(&self, id: FormId) -> RepoResult<()> {
        self.with_conn(move |conn| {
            let deleted = conn.execute("DELETE FROM forms WHERE id = ?1", params![id])?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound(format!("form {id}")));
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl ResponseRepository for SqliteStore {
    async fn insert_response(&self, form_id: FormId, responses: &ResponseMap) -> RepoResult<FormResponse> {
        let encoded = serde_json::to_string(responses)?;
        let responses = responses.clone();

        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            let exists: bool = tx.query_row(
                "SELECT EXISTS(SELECT 1 FROM forms WHERE id = ?1)",
                params![form_id],
                |row| row.get(0),
            )?;
            if !exists {
                return Err(RepositoryError::NotFound(format!("form {form_id}")));
            }

            let created_at = stored_now();
            tx.execute(
                "INSERT INTO form_responses (form_id, responses, created_at) VALUES (?1, ?2, ?3)",
                params![form_id, encoded, timestamp(created_at)],
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;

            Ok(FormResponse {
                id,
                form_id,
                responses,
                created_at,
            })
        })
        .await
    }

    async fn list_responses(&self, form_id: Option<FormId>) -> RepoResult<Vec<FormResponseView>> {
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT r.id, r.form_id, r.responses, r.created_at, f.title
                 FROM form_responses r
                 JOIN forms f ON f.id = r.form_id
                 WHERE ?1 IS NULL OR r.form_id = ?1
                 ORDER BY r.created_at DESC, r.id DESC",
            )?;
            let rows = stmt
                .query_map(params![form_id], |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, FormId>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            rows.into_iter()
                .map(|(id, form_id, responses, created_at, title)| {
                    Ok(FormResponseView {
                        response: FormResponse {
                            id,
                            form_id,
                            responses: serde_json::from_str(&responses)?,
                            created_at: parse_timestamp(&created_at)?,
                        },
                        form: FormSummary { title },
                    })
                })
                .collect()
        })
        .await
    }
}
