mod in_memory_worker_repository;

pub use in_memory_worker_repository::InMemoryWorkerRepository;
