use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::Record;
use super::crud::CrudRepository;
use super::errors::RepositoryError;

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

/// In-memory storage for any record type.
///
/// Clones share the same underlying table. Ids are handed out the way an
/// AUTOINCREMENT column would: never reused, always above the largest id seen.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    table: Arc<Mutex<Table<T>>>,
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryRepository<T> {
    /// Create a new, empty in-memory repository
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl<T: Record> InMemoryRepository<T> {
    /// Create a repository pre-populated with records
    pub fn with_records(records: Vec<T>) -> Result<Self, RepositoryError> {
        let repo = Self::new();
        {
            let mut table = repo.table.lock()?;
            for record in records {
                Self::store(&mut table, record);
            }
        }
        Ok(repo)
    }

    fn store(table: &mut Table<T>, mut record: T) -> T {
        let id = match record.id() {
            Some(id) => id,
            None => {
                let id = table.next_id;
                record.set_id(id);
                id
            }
        };
        table.next_id = table.next_id.max(id + 1);
        table.rows.insert(id, record.clone());
        record
    }

    /// Records matching a predicate, ordered by id
    pub(crate) fn filter<P>(&self, predicate: P) -> Result<Vec<T>, RepositoryError>
    where
        P: Fn(&T) -> bool,
    {
        let table = self.table.lock()?;
        Ok(table.rows.values().filter(|r| predicate(r)).cloned().collect())
    }
}

#[async_trait]
impl<T: Record> CrudRepository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        self.filter(|_| true)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError> {
        let table = self.table.lock()?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let table = self.table.lock()?;
        Ok(table.rows.contains_key(&id))
    }

    async fn save(&self, record: T) -> Result<T, RepositoryError> {
        let mut table = self.table.lock()?;
        Ok(Self::store(&mut table, record))
    }

    async fn update(&self, record: T) -> Result<Option<T>, RepositoryError> {
        let Some(id) = record.id() else {
            return Ok(None);
        };
        let mut table = self.table.lock()?;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut table = self.table.lock()?;
        table.rows.remove(&id);
        Ok(())
    }

    async fn delete_all(&self, records: &[T]) -> Result<usize, RepositoryError> {
        let mut table = self.table.lock()?;
        let deleted = records
            .iter()
            .filter_map(|record| record.id())
            .filter(|id| table.rows.remove(id).is_some())
            .count();
        Ok(deleted)
    }
}
