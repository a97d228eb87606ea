mod google_translate_provider;
mod libre_translate_provider;
mod mock_translation_provider;
mod mymemory_provider;
mod translation_gateway_factory;

pub use google_translate_provider::{GOOGLE_TRANSLATE_ENDPOINT, GoogleTranslateProvider};
pub use libre_translate_provider::LibreTranslateProvider;
pub use mock_translation_provider::MockTranslationProvider;
pub use mymemory_provider::{MYMEMORY_ENDPOINT, MyMemoryProvider};
pub use translation_gateway_factory::{
    DEFAULT_LIBRE_INSTANCES, TranslationGatewayFactory, TranslationProfile,
};
