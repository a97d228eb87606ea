use async_trait::async_trait;

use crate::domain::{Worker, WorkerId};

use super::RepositoryError;

/// Read-only access to the worker directory. Listing order is the directory's insertion order.
#[async_trait]
pub trait WorkerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Worker>, RepositoryError>;
    async fn find_by_id(&self, id: &WorkerId) -> Result<Option<Worker>, RepositoryError>;
}
