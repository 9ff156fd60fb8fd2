use std::marker::PhantomData;

use async_trait::async_trait;
use rusqlite::{params_from_iter, OptionalExtension, Row, ToSql};
use tracing::debug;

use crate::database::DatabasePool;
use crate::models::Record;
use super::crud::CrudRepository;
use super::errors::RepositoryError;

/// Table mapping for a record stored in SQLite
pub trait SqliteRecord: Record {
    /// Table name
    const TABLE: &'static str;

    /// Integer primary key column
    const ID_COLUMN: &'static str;

    /// Non-key columns, in the order produced by `column_values`
    const COLUMNS: &'static [&'static str];

    /// Build a record from a row selected as `id, COLUMNS...`
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Values for `COLUMNS`, in order
    fn column_values(&self) -> Vec<&dyn ToSql>;
}

/// SQLite repository for any mapped record type
pub struct SqliteRepository<T> {
    pool: DatabasePool,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for SqliteRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: SqliteRecord> SqliteRepository<T> {
    /// Create a new repository over the given pool
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    fn select_clause() -> String {
        format!("SELECT {}, {} FROM {}", T::ID_COLUMN, T::COLUMNS.join(", "), T::TABLE)
    }

    /// Run a SELECT with an optional WHERE clause and positional parameters
    pub(crate) fn query_records(
        &self,
        where_clause: Option<&str>,
        params: &[&dyn ToSql],
    ) -> Result<Vec<T>, RepositoryError> {
        let mut sql = Self::select_clause();
        if let Some(clause) = where_clause {
            sql.push_str(" WHERE ");
            sql.push_str(clause);
        }
        sql.push_str(&format!(" ORDER BY {}", T::ID_COLUMN));

        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(params.iter()), |row| T::from_row(row))?;

        let mut result = Vec::new();
        for record in rows {
            result.push(record?);
        }
        Ok(result)
    }

    fn query_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError> {
        let sql = format!("{} WHERE {} = ?1", Self::select_clause(), T::ID_COLUMN);
        let conn = self.pool.get()?;
        let record = conn
            .query_row(&sql, [id], |row| T::from_row(row))
            .optional()?;
        Ok(record)
    }

    fn count_by_id(&self, id: i64) -> Result<i64, RepositoryError> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE {} = ?1", T::TABLE, T::ID_COLUMN);
        let conn = self.pool.get()?;
        let count = conn.query_row(&sql, [id], |row| row.get(0))?;
        Ok(count)
    }

    fn insert(&self, mut record: T) -> Result<T, RepositoryError> {
        let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders.join(", ")
        );

        let conn = self.pool.get()?;
        conn.execute(&sql, params_from_iter(record.column_values().iter()))?;
        let id = conn.last_insert_rowid();

        debug!("Inserted row into {}: {}={}", T::TABLE, T::ID_COLUMN, id);
        record.set_id(id);
        Ok(record)
    }

    fn upsert(&self, id: i64, record: T) -> Result<T, RepositoryError> {
        let placeholders: Vec<String> = (1..=T::COLUMNS.len() + 1).map(|i| format!("?{}", i)).collect();
        let assignments: Vec<String> = T::COLUMNS
            .iter()
            .map(|column| format!("{column} = excluded.{column}"))
            .collect();
        let sql = format!(
            "INSERT INTO {table} ({id_column}, {columns}) VALUES ({placeholders})
             ON CONFLICT({id_column}) DO UPDATE SET {assignments}",
            table = T::TABLE,
            id_column = T::ID_COLUMN,
            columns = T::COLUMNS.join(", "),
            placeholders = placeholders.join(", "),
            assignments = assignments.join(", "),
        );

        {
            let mut values: Vec<&dyn ToSql> = Vec::with_capacity(T::COLUMNS.len() + 1);
            values.push(&id);
            values.extend(record.column_values());

            let conn = self.pool.get()?;
            conn.execute(&sql, params_from_iter(values.iter()))?;
        }

        debug!("Upserted row in {}: {}={}", T::TABLE, T::ID_COLUMN, id);
        Ok(record)
    }

    fn update_existing(&self, id: i64, record: T) -> Result<Option<T>, RepositoryError> {
        let assignments: Vec<String> = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ?{}", column, i + 1))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            T::TABLE,
            assignments.join(", "),
            T::ID_COLUMN,
            T::COLUMNS.len() + 1
        );

        let changed = {
            let mut values = record.column_values();
            values.push(&id);

            let conn = self.pool.get()?;
            conn.execute(&sql, params_from_iter(values.iter()))?
        };

        if changed == 0 {
            debug!("No row in {} with {}={}", T::TABLE, T::ID_COLUMN, id);
            return Ok(None);
        }
        debug!("Updated row in {}: {}={}", T::TABLE, T::ID_COLUMN, id);
        Ok(Some(record))
    }

    fn delete_ids(&self, ids: &[i64]) -> Result<usize, RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE {} = ?1", T::TABLE, T::ID_COLUMN);

        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;
        let mut deleted = 0;
        {
            let mut stmt = tx.prepare(&sql)?;
            for id in ids {
                deleted += stmt.execute([id])?;
            }
        }
        tx.commit()?;

        debug!("Deleted {} row(s) from {}", deleted, T::TABLE);
        Ok(deleted)
    }
}

#[async_trait]
impl<T: SqliteRecord> CrudRepository<T> for SqliteRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        debug!("Getting all rows from {}", T::TABLE);
        self.query_records(None, &[])
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError> {
        debug!("Getting row from {} by id: {}", T::TABLE, id);
        self.query_by_id(id)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.count_by_id(id)? > 0)
    }

    async fn save(&self, record: T) -> Result<T, RepositoryError> {
        match record.id() {
            Some(id) => self.upsert(id, record),
            None => self.insert(record),
        }
    }

    async fn update(&self, record: T) -> Result<Option<T>, RepositoryError> {
        match record.id() {
            Some(id) => self.update_existing(id, record),
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        debug!("Deleting row from {} by id: {}", T::TABLE, id);
        self.delete_ids(&[id]).map(|_| ())
    }

    async fn delete_all(&self, records: &[T]) -> Result<usize, RepositoryError> {
        let ids: Vec<i64> = records.iter().filter_map(|record| record.id()).collect();
        self.delete_ids(&ids)
    }
}
