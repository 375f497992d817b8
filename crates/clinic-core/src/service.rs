use crate::error::AppError;
use crate::traits::{Entity, Repository};

/// Service layer for entities without transport mapping (dentists, patients).
///
/// Forwards to the repository one-to-one, adding validation on writes and the
/// existence check that makes `update` fail for unknown ids.
#[derive(Clone)]
pub struct CrudService<R: Repository> {
    repo: R,
}

impl<R: Repository> CrudService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and persist. An entity without id is inserted.
    pub async fn save(&self, entity: R::Entity) -> Result<R::Entity, AppError> {
        entity.validate()?;
        let saved = self.repo.save(&entity).await?;
        tracing::info!(entity = R::Entity::NAME, id = ?saved.id(), "Saved");
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<R::Entity>, AppError> {
        self.repo.find_by_id(id).await
    }

    /// Replace an existing entity.
    ///
    /// Fails with [`AppError::Validation`] when the entity carries no id and
    /// with [`AppError::NotFound`] when nothing is stored under it.
    pub async fn update(&self, entity: R::Entity) -> Result<R::Entity, AppError> {
        let id = entity.id().ok_or_else(|| {
            AppError::Validation(format!("{} id is required for update", R::Entity::NAME))
        })?;

        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::not_found(R::Entity::NAME, id));
        }

        entity.validate()?;
        let updated = self.repo.save(&entity).await?;
        tracing::info!(entity = R::Entity::NAME, id, "Updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete_by_id(id).await?;
        tracing::info!(entity = R::Entity::NAME, id, "Deleted");
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<R::Entity>, AppError> {
        self.repo.find_all().await
    }
}
