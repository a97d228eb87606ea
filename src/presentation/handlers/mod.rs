mod error;
mod health;
mod languages;
mod search;
mod translate;
mod workers;

pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use languages::languages_handler;
pub use search::{search_handler, voice_search_handler};
pub use translate::{detect_handler, translate_handler};
pub use workers::{get_worker_handler, list_workers_handler};
