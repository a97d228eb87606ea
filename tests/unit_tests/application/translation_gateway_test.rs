use std::sync::Arc;
use std::time::Duration;

use kazi::application::ports::TranslationProvider;
use kazi::application::services::{GatewayLimits, TranslationError, TranslationGateway};
use kazi::domain::LanguageCode;
use kazi::infrastructure::translation::MockTranslationProvider;

fn limits(requests_per_window: u32, cache_max_entries: usize) -> GatewayLimits {
    GatewayLimits {
        requests_per_window,
        window: Duration::from_secs(60),
        cache_ttl: Duration::from_secs(24 * 60 * 60),
        cache_max_entries,
    }
}

fn gateway(
    primaries: &[Arc<MockTranslationProvider>],
    fallback: Option<Arc<MockTranslationProvider>>,
    limits: GatewayLimits,
) -> TranslationGateway {
    TranslationGateway::new(
        primaries
            .iter()
            .map(|p| Arc::clone(p) as Arc<dyn TranslationProvider>)
            .collect(),
        fallback.map(|f| f as Arc<dyn TranslationProvider>),
        limits,
    )
}

fn sw() -> LanguageCode {
    LanguageCode::new("sw")
}

#[tokio::test]
async fn given_same_request_twice_when_translating_then_provider_is_called_once() {
    let provider = Arc::new(MockTranslationProvider::succeeding("primary", "find a plumber"));
    let gateway = gateway(&[Arc::clone(&provider)], None, GatewayLimits::default());

    let first = gateway.to_english("tafuta fundi bomba", &sw()).await.unwrap();
    let second = gateway.to_english("tafuta fundi bomba", &sw()).await.unwrap();

    assert_eq!(first, "find a plumber");
    assert_eq!(second, first);
    assert_eq!(provider.translate_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn given_rate_limit_reached_when_translating_then_fails_without_calling_provider() {
    let provider = Arc::new(MockTranslationProvider::succeeding("primary", "ok"));
    let gateway = gateway(&[Arc::clone(&provider)], None, limits(2, 100));

    gateway.to_english("one", &sw()).await.unwrap();
    gateway.to_english("two", &sw()).await.unwrap();
    let third = gateway.to_english("three", &sw()).await;

    assert!(matches!(third, Err(TranslationError::RateLimitExceeded)));
    assert_eq!(provider.translate_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn given_cooldown_elapsed_when_translating_then_window_resets() {
    let provider = Arc::new(MockTranslationProvider::succeeding("primary", "ok"));
    let gateway = gateway(&[Arc::clone(&provider)], None, limits(1, 100));

    gateway.to_english("one", &sw()).await.unwrap();
    assert!(gateway.to_english("two", &sw()).await.is_err());

    tokio::time::advance(Duration::from_secs(60)).await;

    assert!(gateway.to_english("two", &sw()).await.is_ok());
    assert_eq!(provider.translate_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn given_exhausted_quota_when_request_is_cached_then_still_served() {
    let provider = Arc::new(MockTranslationProvider::succeeding("primary", "ok"));
    let gateway = gateway(&[Arc::clone(&provider)], None, limits(1, 100));

    gateway.to_english("one", &sw()).await.unwrap();

    assert_eq!(gateway.to_english("one", &sw()).await.unwrap(), "ok");
    assert_eq!(provider.translate_calls(), 1);
}

#[tokio::test]
async fn given_failing_first_primary_when_translating_then_next_primary_answers() {
    let broken = Arc::new(MockTranslationProvider::failing("broken"));
    let healthy = Arc::new(MockTranslationProvider::succeeding("healthy", "hello"));
    let fallback = Arc::new(MockTranslationProvider::succeeding("fallback", "unused"));
    let gateway = gateway(
        &[Arc::clone(&broken), Arc::clone(&healthy)],
        Some(Arc::clone(&fallback)),
        GatewayLimits::default(),
    );

    let translated = gateway.to_english("habari", &sw()).await.unwrap();

    assert_eq!(translated, "hello");
    assert_eq!(broken.translate_calls(), 1);
    assert_eq!(healthy.translate_calls(), 1);
    assert_eq!(fallback.translate_calls(), 0);
}

#[tokio::test]
async fn given_all_primaries_failing_when_translating_then_fallback_answers() {
    let broken = Arc::new(MockTranslationProvider::failing("broken"));
    let fallback = Arc::new(MockTranslationProvider::succeeding("fallback", "hello"));
    let gateway = gateway(
        &[Arc::clone(&broken)],
        Some(Arc::clone(&fallback)),
        GatewayLimits::default(),
    );

    let translated = gateway.from_english("hello", &sw()).await.unwrap();

    assert_eq!(translated, "hello");
    assert_eq!(fallback.translate_calls(), 1);
}

#[tokio::test]
async fn given_every_provider_failing_when_translating_then_all_providers_failed() {
    let broken = Arc::new(MockTranslationProvider::failing("broken"));
    let fallback = Arc::new(MockTranslationProvider::failing("fallback"));
    let gateway = gateway(&[broken], Some(fallback), GatewayLimits::default());

    let result = gateway.to_english("habari", &sw()).await;

    assert!(matches!(result, Err(TranslationError::AllProvidersFailed(_))));
}

#[tokio::test]
async fn given_failed_translation_when_retried_then_nothing_was_cached() {
    let broken = Arc::new(MockTranslationProvider::failing("broken"));
    let gateway = gateway(&[Arc::clone(&broken)], None, GatewayLimits::default());

    assert!(gateway.to_english("habari", &sw()).await.is_err());
    assert!(gateway.to_english("habari", &sw()).await.is_err());

    assert_eq!(broken.translate_calls(), 2);
}

#[tokio::test]
async fn given_cache_of_two_when_third_text_translated_then_oldest_is_refetched() {
    let provider = Arc::new(MockTranslationProvider::succeeding("primary", "ok"));
    let gateway = gateway(&[Arc::clone(&provider)], None, limits(100, 2));

    gateway.to_english("a", &sw()).await.unwrap();
    gateway.to_english("b", &sw()).await.unwrap();
    gateway.to_english("c", &sw()).await.unwrap();
    gateway.to_english("b", &sw()).await.unwrap();
    assert_eq!(provider.translate_calls(), 3);

    gateway.to_english("a", &sw()).await.unwrap();
    assert_eq!(provider.translate_calls(), 4);
}

#[tokio::test]
async fn given_language_pairs_when_translating_then_direction_is_chosen_by_english_side() {
    let provider = Arc::new(MockTranslationProvider::succeeding("primary", "ok"));
    let gateway = gateway(&[Arc::clone(&provider)], None, GatewayLimits::default());

    gateway
        .translate("hello", &LanguageCode::english(), &sw())
        .await
        .unwrap();
    gateway
        .translate("hello", &LanguageCode::english(), &sw())
        .await
        .unwrap();
    gateway
        .between("hello", &LanguageCode::english(), &sw())
        .await
        .unwrap();

    assert_eq!(provider.translate_calls(), 2);
}

#[tokio::test]
async fn given_detecting_primary_when_detecting_then_returns_and_caches_code() {
    let broken = Arc::new(MockTranslationProvider::failing("broken"));
    let detector = Arc::new(MockTranslationProvider::succeeding("detector", "").detecting("YO"));
    let gateway = gateway(
        &[Arc::clone(&broken), Arc::clone(&detector)],
        None,
        GatewayLimits::default(),
    );

    assert_eq!(gateway.detect("bawo ni").await.as_str(), "yo");
    assert_eq!(gateway.detect("bawo ni").await.as_str(), "yo");
    assert_eq!(detector.detect_calls(), 1);
}

#[tokio::test]
async fn given_no_provider_can_detect_when_detecting_then_defaults_to_english() {
    let broken = Arc::new(MockTranslationProvider::failing("broken"));
    let fallback = Arc::new(MockTranslationProvider::succeeding("fallback", "x").detecting("fr"));
    let gateway = gateway(&[broken], Some(Arc::clone(&fallback)), GatewayLimits::default());

    assert!(gateway.detect("bonjour").await.is_english());
    assert_eq!(fallback.detect_calls(), 0);
}
