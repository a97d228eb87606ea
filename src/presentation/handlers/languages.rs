use axum::Json;
use serde::Serialize;

use crate::application::services::supported_languages;
use crate::domain::LanguageCode;

#[derive(Serialize)]
pub struct LanguageEntry {
    pub code: LanguageCode,
    pub name: &'static str,
}

pub async fn languages_handler() -> Json<Vec<LanguageEntry>> {
    Json(
        supported_languages()
            .into_iter()
            .map(|(code, name)| LanguageEntry { code, name })
            .collect(),
    )
}
