use std::sync::Arc;

use crate::application::services::VoiceSearchService;
use crate::infrastructure::speech::RecognizerCapability;
use crate::presentation::config::{Environment, Settings};

#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<VoiceSearchService>,
    /// Resolved once at startup; `None` disables voice search.
    pub recognizer: Option<RecognizerCapability>,
    pub settings: Settings,
    pub environment: Environment,
}
