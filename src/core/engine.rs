use crate::core::compress::compress_to_gzip;
use crate::core::{TranslationJob, Translator, TranslatorExit};
use crate::utils::error::Result;

pub struct TranslateEngine<T: Translator> {
    translator: T,
    job: TranslationJob,
}

impl<T: Translator> TranslateEngine<T> {
    pub fn new(translator: T, job: TranslationJob) -> Self {
        Self { translator, job }
    }

    /// Translate into the scratch file, then gzip it into the destination.
    ///
    /// The translator's exit code is returned as-is. On a non-zero exit the
    /// destination is not written and the scratch file is left behind.
    pub async fn run(&self) -> Result<TranslatorExit> {
        let job = &self.job;
        tracing::info!(
            "Translating {} -> {}",
            job.source.display(),
            job.destination.display()
        );
        tracing::debug!("Scratch file: {}", job.scratch.display());

        let exit = self.translator.translate(job).await?;
        if !exit.success() {
            tracing::warn!(
                "Translator exited with {}; {} not written, scratch left at {}",
                exit.code(),
                job.destination.display(),
                job.scratch.display()
            );
            return Ok(exit);
        }

        let bytes = compress_to_gzip(&job.scratch, &job.destination)?;
        std::fs::remove_file(&job.scratch)?;

        tracing::info!(
            "Wrote {} ({} bytes uncompressed)",
            job.destination.display(),
            bytes
        );
        Ok(exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// 假的翻譯器：寫入固定內容並回傳指定的退出碼
    struct MockTranslator {
        output: Option<&'static str>,
        code: i32,
        calls: AtomicUsize,
    }

    impl MockTranslator {
        fn new(output: Option<&'static str>, code: i32) -> Self {
            Self {
                output,
                code,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Translator for MockTranslator {
        async fn translate(&self, job: &TranslationJob) -> Result<TranslatorExit> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(output) = self.output {
                std::fs::write(&job.scratch, output)?;
            }
            Ok(TranslatorExit(self.code))
        }
    }

    fn job_in(dir: &Path) -> TranslationJob {
        TranslationJob::new(
            &dir.join("de.po"),
            &dir.join("manhelper.1.gz"),
            PathBuf::from("modem-manager-gui.1"),
            "man",
            1,
        )
        .unwrap()
        .with_scratch(dir.join("scratch"))
    }

    #[tokio::test]
    async fn test_success_compresses_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let job = job_in(dir.path());
        let engine = TranslateEngine::new(MockTranslator::new(Some(".TH X 1\n"), 0), job.clone());

        let exit = engine.run().await.unwrap();

        assert_eq!(exit, TranslatorExit::SUCCESS);
        assert!(!job.scratch.exists());

        let mut out = String::new();
        GzDecoder::new(std::fs::File::open(&job.destination).unwrap())
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, ".TH X 1\n");
    }

    #[tokio::test]
    async fn test_failure_skips_compression_and_keeps_scratch() {
        let dir = TempDir::new().unwrap();
        let job = job_in(dir.path());
        let engine = TranslateEngine::new(MockTranslator::new(Some("partial"), 4), job.clone());

        let exit = engine.run().await.unwrap();

        assert_eq!(exit.code(), 4);
        assert!(!job.destination.exists());
        assert!(job.scratch.exists());
        assert_eq!(engine.translator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_success_without_output_is_an_error() {
        let dir = TempDir::new().unwrap();
        let job = job_in(dir.path());
        let engine = TranslateEngine::new(MockTranslator::new(None, 0), job.clone());

        let result = tokio_test::block_on(engine.run());

        assert!(result.is_err());
        assert!(!job.destination.exists());
    }
}
