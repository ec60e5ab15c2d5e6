use crate::domain::model::{TranslationJob, TranslatorExit};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait SettingsProvider: Send + Sync {
    fn translator(&self) -> &str;
    fn template(&self) -> &Path;
    fn format(&self) -> &str;
    fn keep_threshold(&self) -> u8;
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Runs the translation and waits for it; a non-zero exit is not an error.
    async fn translate(&self, job: &TranslationJob) -> Result<TranslatorExit>;
}
