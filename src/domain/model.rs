use crate::domain::ports::SettingsProvider;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// 一次翻譯的所有路徑與參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub template: PathBuf,
    pub scratch: PathBuf,
    pub format: String,
    pub keep_threshold: u8,
}

impl TranslationJob {
    /// `source` and `destination` are resolved against the current directory;
    /// the scratch file gets a fresh name in the system temp directory.
    pub fn new(
        source: &Path,
        destination: &Path,
        template: PathBuf,
        format: impl Into<String>,
        keep_threshold: u8,
    ) -> std::io::Result<Self> {
        Ok(Self {
            source: std::path::absolute(source)?,
            destination: std::path::absolute(destination)?,
            template,
            scratch: scratch_path(&std::env::temp_dir()),
            format: format.into(),
            keep_threshold,
        })
    }

    pub fn from_settings<S: SettingsProvider>(
        source: &Path,
        destination: &Path,
        settings: &S,
    ) -> std::io::Result<Self> {
        Self::new(
            source,
            destination,
            settings.template().to_path_buf(),
            settings.format(),
            settings.keep_threshold(),
        )
    }

    pub fn with_scratch(mut self, scratch: PathBuf) -> Self {
        self.scratch = scratch;
        self
    }
}

pub fn scratch_path(dir: &Path) -> PathBuf {
    dir.join(Uuid::new_v4().to_string())
}

/// Exit status of the translation tool, as the shell would report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorExit(pub i32);

impl TranslatorExit {
    pub const SUCCESS: Self = Self(0);

    pub fn success(&self) -> bool {
        self.0 == 0
    }

    pub fn code(&self) -> i32 {
        self.0
    }
}

impl From<std::process::ExitStatus> for TranslatorExit {
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self(128 + signal);
            }
        }

        Self(1)
    }
}
