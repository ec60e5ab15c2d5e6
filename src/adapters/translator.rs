use crate::domain::model::{TranslationJob, TranslatorExit};
use crate::domain::ports::{SettingsProvider, Translator};
use crate::utils::error::{ManhelperError, Result};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;

pub const DEFAULT_TRANSLATOR: &str = "po4a-translate";

/// Runs `po4a-translate` (or a compatible program) as a child process.
#[derive(Debug, Clone)]
pub struct Po4aTranslator {
    program: String,
}

impl Po4aTranslator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_settings<S: SettingsProvider>(settings: &S) -> Self {
        Self::new(settings.translator())
    }

    /// Resolves the program on `PATH` (or as a literal path).
    pub fn resolve(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|e| match self.non_executable_candidate() {
            Some(path) => ManhelperError::TranslatorNotExecutable {
                program: self.program.clone(),
                path: path.display().to_string(),
            },
            None => ManhelperError::TranslatorNotFound {
                program: self.program.clone(),
                reason: e.to_string(),
            },
        })
    }

    /// 檔案存在但沒有執行權限（shell 在這種情況回報 126）
    fn non_executable_candidate(&self) -> Option<PathBuf> {
        let program = Path::new(&self.program);
        if program.components().count() > 1 {
            return program.is_file().then(|| program.to_path_buf());
        }
        let paths = std::env::var_os("PATH")?;
        std::env::split_paths(&paths)
            .map(|dir| dir.join(program))
            .find(|candidate| candidate.is_file())
    }

    /// `-f <format> -k <keep> -m <template> -p <source> -l <scratch>`
    pub fn arguments(job: &TranslationJob) -> Vec<OsString> {
        vec![
            "-f".into(),
            job.format.clone().into(),
            "-k".into(),
            job.keep_threshold.to_string().into(),
            "-m".into(),
            job.template.clone().into_os_string(),
            "-p".into(),
            job.source.clone().into_os_string(),
            "-l".into(),
            job.scratch.clone().into_os_string(),
        ]
    }
}

#[async_trait]
impl Translator for Po4aTranslator {
    async fn translate(&self, job: &TranslationJob) -> Result<TranslatorExit> {
        let program = self.resolve()?;
        let args = Self::arguments(job);

        tracing::debug!("Running {} {:?}", program.display(), args);

        let status = Command::new(&program)
            .args(&args)
            .kill_on_drop(true)
            .status()
            .await?;

        let exit = TranslatorExit::from(status);
        tracing::debug!("{} exited with {}", self.program, exit.code());
        Ok(exit)
    }
}
