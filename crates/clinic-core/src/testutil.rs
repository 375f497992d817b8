//! Test utilities: an in-memory [`Repository`] for service tests.
//!
//! Uses `Arc<Mutex<_>>` so clones share the same rows, the way pool-backed
//! repositories share one database.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::traits::{Entity, Repository};

struct Rows<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
    save_error: Option<AppError>,
}

#[derive(Clone)]
pub struct MemoryRepository<T: Entity> {
    inner: Arc<Mutex<Rows<T>>>,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Rows {
                rows: BTreeMap::new(),
                next_id: 1,
                save_error: None,
            })),
        }
    }

    /// The next `save` fails with `error`; later saves succeed.
    pub fn with_save_error(error: AppError) -> Self {
        let repo = Self::new();
        repo.inner.lock().unwrap().save_error = Some(error);
        repo
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

impl<T: Entity> Repository for MemoryRepository<T> {
    type Entity = T;

    async fn save(&self, entity: &T) -> Result<T, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(error) = inner.save_error.take() {
            return Err(error);
        }

        let mut stored = entity.clone();
        match entity.id() {
            None => {
                let id = inner.next_id;
                inner.next_id += 1;
                stored.set_id(id);
                inner.rows.insert(id, stored.clone());
            }
            Some(id) => {
                let Some(row) = inner.rows.get_mut(&id) else {
                    return Err(AppError::not_found(T::NAME, id));
                };
                *row = stored.clone();
            }
        }
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, AppError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, AppError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.inner.lock().unwrap().rows.remove(&id);
        Ok(())
    }
}
