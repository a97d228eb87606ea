use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{RepositoryError, WorkerRepository};
use crate::domain::{Worker, WorkerId};

const SEED_WORKERS: &str = include_str!("seed_workers.json");

/// Worker directory held entirely in memory, in seed order.
pub struct InMemoryWorkerRepository {
    workers: Vec<Worker>,
}

impl InMemoryWorkerRepository {
    pub fn from_workers(workers: Vec<Worker>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::with_capacity(workers.len());

        for worker in &workers {
            if worker.id.as_str().trim().is_empty() {
                return Err(RepositoryError::InvalidRecord(format!(
                    "worker '{}' has an empty id",
                    worker.name
                )));
            }
            if worker.name.trim().is_empty() || worker.profession.trim().is_empty() {
                return Err(RepositoryError::InvalidRecord(format!(
                    "worker {} is missing a name or profession",
                    worker.id
                )));
            }
            if !seen.insert(worker.id.clone()) {
                return Err(RepositoryError::DuplicateId(worker.id.to_string()));
            }
        }

        Ok(Self { workers })
    }

    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        let workers: Vec<Worker> = serde_json::from_str(json)
            .map_err(|e| RepositoryError::SeedLoadFailed(e.to_string()))?;
        Self::from_workers(workers)
    }

    /// The bundled demo directory.
    pub fn seeded() -> Result<Self, RepositoryError> {
        Self::from_json(SEED_WORKERS)
    }

    pub async fn from_file(path: &Path) -> Result<Self, RepositoryError> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            RepositoryError::SeedLoadFailed(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Reads `seed_path` when given, the bundled directory otherwise.
    pub async fn load(seed_path: Option<&Path>) -> Result<Self, RepositoryError> {
        let repository = match seed_path {
            Some(path) => Self::from_file(path).await?,
            None => Self::seeded()?,
        };

        let source = seed_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled".to_string());
        tracing::info!(
            workers = repository.workers.len(),
            source = %source,
            "Worker directory loaded"
        );

        Ok(repository)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

#[async_trait]
impl WorkerRepository for InMemoryWorkerRepository {
    async fn list(&self) -> Result<Vec<Worker>, RepositoryError> {
        Ok(self.workers.clone())
    }

    async fn find_by_id(&self, id: &WorkerId) -> Result<Option<Worker>, RepositoryError> {
        Ok(self.workers.iter().find(|w| &w.id == id).cloned())
    }
}
