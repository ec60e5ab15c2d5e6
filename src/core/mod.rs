pub mod compress;
pub mod engine;

pub use crate::domain::model::{TranslationJob, TranslatorExit};
pub use crate::domain::ports::{SettingsProvider, Translator};
pub use crate::utils::error::Result;
