use std::sync::Arc;

use kazi::application::services::{WorkerMatcher, filter_workers, process_regional_query};
use kazi::domain::{Worker, WorkerId};
use kazi::infrastructure::persistence::InMemoryWorkerRepository;

fn matcher() -> WorkerMatcher {
    WorkerMatcher::new(Arc::new(InMemoryWorkerRepository::seeded().unwrap()))
}

fn ids(workers: &[Worker]) -> Vec<&str> {
    workers.iter().map(|w| w.id.as_str()).collect()
}

#[tokio::test]
async fn given_profession_keyword_when_searching_then_returns_matching_workers() {
    let workers = matcher().search("plumber").await.unwrap();

    assert_eq!(ids(&workers), vec!["w1"]);
    assert_eq!(workers[0].name, "Daniel Ochieng");
}

#[tokio::test]
async fn given_profession_shared_by_several_workers_when_searching_then_keeps_directory_order() {
    let workers = matcher().search("electrician").await.unwrap();

    assert_eq!(ids(&workers), vec!["w2", "w8"]);
}

#[tokio::test]
async fn given_profession_and_location_when_searching_then_both_must_match() {
    let workers = matcher().search("Abeg find electrician for Lagos").await.unwrap();

    assert_eq!(ids(&workers), vec!["w8"]);
}

#[tokio::test]
async fn given_skill_keyword_in_structured_query_when_searching_then_matches_skills() {
    let workers = matcher()
        .search("Emi help me look for a tailoring in Abuja")
        .await
        .unwrap();

    assert_eq!(ids(&workers), vec!["w10"]);
}

#[tokio::test]
async fn given_unknown_text_when_searching_then_returns_empty_list() {
    let workers = matcher().search("nonexistent-xyz").await.unwrap();

    assert!(workers.is_empty());
}

#[tokio::test]
async fn given_free_text_language_when_searching_then_scans_every_field() {
    let workers = matcher().search("Wolof").await.unwrap();

    assert_eq!(ids(&workers), vec!["w4", "w9", "w11", "w14", "w17"]);
}

#[tokio::test]
async fn given_known_id_when_looking_up_then_returns_worker() {
    let worker = matcher().by_id(&WorkerId::new("w5")).await.unwrap();

    assert_eq!(worker.map(|w| w.name), Some("Kofi Adebayo".to_string()));
}

#[tokio::test]
async fn given_unknown_id_when_looking_up_then_returns_none() {
    let worker = matcher().by_id(&WorkerId::new("w99")).await.unwrap();

    assert!(worker.is_none());
}

#[tokio::test]
async fn given_seed_directory_when_listing_all_then_returns_seventeen_workers() {
    let workers = matcher().all().await.unwrap();

    assert_eq!(workers.len(), 17);
    assert_eq!(workers[0].id.as_str(), "w1");
}

#[tokio::test]
async fn given_location_only_query_when_filtering_then_matches_by_location() {
    let workers = matcher().all().await.unwrap();
    let query = "someone at Dakar";
    let mut parsed = process_regional_query(query);
    parsed.location = Some("dakar".to_string());

    let matches = filter_workers(workers, query, &parsed);

    assert_eq!(ids(&matches), vec!["w4", "w11", "w17"]);
}
