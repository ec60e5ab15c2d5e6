pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::translator::Po4aTranslator;
pub use config::ManhelperSettings;
pub use core::engine::TranslateEngine;
pub use domain::model::{TranslationJob, TranslatorExit};
pub use utils::error::{ManhelperError, Result};
