use std::sync::Arc;

use crate::application::ports::{RepositoryError, WorkerRepository};
use crate::domain::{ParsedQuery, Worker, WorkerId};

use super::query_parser::process_regional_query;

/// Resolves search text against the worker directory.
///
/// No scoring is applied: results keep directory order.
pub struct WorkerMatcher {
    repository: Arc<dyn WorkerRepository>,
}

impl WorkerMatcher {
    pub fn new(repository: Arc<dyn WorkerRepository>) -> Self {
        Self { repository }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Worker>, RepositoryError> {
        let parsed = process_regional_query(query);
        self.search_parsed(query, &parsed).await
    }

    /// Same as [`search`](Self::search) when the caller already parsed the query.
    pub async fn search_parsed(
        &self,
        query: &str,
        parsed: &ParsedQuery,
    ) -> Result<Vec<Worker>, RepositoryError> {
        let workers = self.repository.list().await?;
        let matches = filter_workers(workers, query, parsed);

        tracing::debug!(
            match_type = %parsed.match_type,
            profession = parsed.profession.as_deref().unwrap_or("-"),
            location = parsed.location.as_deref().unwrap_or("-"),
            results = matches.len(),
            "Worker search completed"
        );

        Ok(matches)
    }

    pub async fn by_id(&self, id: &WorkerId) -> Result<Option<Worker>, RepositoryError> {
        self.repository.find_by_id(id).await
    }

    pub async fn all(&self) -> Result<Vec<Worker>, RepositoryError> {
        self.repository.list().await
    }
}

/// Structured filter when the parser found a profession or location, otherwise a
/// free-text scan of every field.
pub fn filter_workers(workers: Vec<Worker>, query: &str, parsed: &ParsedQuery) -> Vec<Worker> {
    if parsed.is_structured() {
        let profession = parsed.profession.as_deref().map(str::to_lowercase);
        let location = parsed.location.as_deref().map(str::to_lowercase);

        return workers
            .into_iter()
            .filter(|worker| {
                profession.as_deref().is_none_or(|p| worker.practices(p))
                    && location.as_deref().is_none_or(|l| worker.is_located_in(l))
            })
            .collect();
    }

    let needle = query.to_lowercase();
    workers
        .into_iter()
        .filter(|worker| worker.mentions(&needle))
        .collect()
}
