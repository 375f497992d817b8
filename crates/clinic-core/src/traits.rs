use std::future::Future;

use crate::error::AppError;

/// A persisted record with a store-assigned numeric identity.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in errors and logs (e.g., "Dentist").
    const NAME: &'static str;

    /// `None` until the store has assigned an id.
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Field-level checks run by the service layer before persisting.
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// CRUD gateway over one table.
///
/// One implementation per entity; services are generic over it so the same
/// service code runs against PostgreSQL or the in-memory test store.
pub trait Repository: Send + Sync + Clone {
    type Entity: Entity;

    /// Insert when the entity has no id, otherwise update the row with that id.
    ///
    /// Updating an id that does not exist returns [`AppError::NotFound`].
    fn save(
        &self,
        entity: &Self::Entity,
    ) -> impl Future<Output = Result<Self::Entity, AppError>> + Send;

    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Self::Entity>, AppError>> + Send;

    /// All rows, ordered by id ascending.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Self::Entity>, AppError>> + Send;

    /// Remove by id. Deleting a missing id is not an error.
    fn delete_by_id(&self, id: i64) -> impl Future<Output = Result<(), AppError>> + Send;

    fn exists_by_id(&self, id: i64) -> impl Future<Output = Result<bool, AppError>> + Send {
        async move { Ok(self.find_by_id(id).await?.is_some()) }
    }
}
