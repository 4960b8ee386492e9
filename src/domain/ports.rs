use crate::domain::model::{Language, RecognitionOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Speech-to-text capability. One call is one capture session.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    fn is_supported(&self) -> bool {
        true
    }

    async fn recognize(&self, language: Language) -> RecognitionOutcome;
}

/// Where catalog, suggestion and trigger data come from.
pub trait CatalogSource {
    fn load(&self) -> Result<crate::config::toml_config::StoreConfig>;
}
