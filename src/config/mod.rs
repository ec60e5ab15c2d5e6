pub mod toml_config;

use crate::adapters::translator::DEFAULT_TRANSLATOR;
use crate::core::SettingsProvider;
use crate::utils::error::{ManhelperError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

/// Untranslated page shipped next to the executable.
pub const TEMPLATE_NAME: &str = "modem-manager-gui.1";
pub const DEFAULT_FORMAT: &str = "man";
pub const DEFAULT_KEEP_THRESHOLD: u8 = 1;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "manhelper")]
#[command(about = "Translate a manual page with po4a and write it gzip-compressed")]
pub struct CliConfig {
    /// Translation catalog for the manual page
    #[arg(value_name = "SOURCE FILE")]
    pub source: PathBuf,

    /// Compressed output file
    #[arg(value_name = "DESTINATION FILE")]
    pub destination: PathBuf,

    /// Translator executable (default: po4a-translate)
    #[arg(long)]
    pub translator: Option<String>,

    /// Reference manual page (default: modem-manager-gui.1 next to this program)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// po4a document format
    #[arg(long)]
    pub format: Option<String>,

    /// po4a keep threshold in percent
    #[arg(long)]
    pub keep: Option<u8>,

    /// TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Settings after layering defaults, the optional TOML file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManhelperSettings {
    pub translator: String,
    pub template: PathBuf,
    pub format: String,
    pub keep_threshold: u8,
}

impl ManhelperSettings {
    pub fn with_template(template: PathBuf) -> Self {
        Self {
            translator: DEFAULT_TRANSLATOR.to_string(),
            template,
            format: DEFAULT_FORMAT.to_string(),
            keep_threshold: DEFAULT_KEEP_THRESHOLD,
        }
    }

    pub fn merge_file(mut self, file: TomlConfig) -> Self {
        let section = file.translator;
        if let Some(program) = section.program {
            self.translator = program;
        }
        if let Some(template) = section.template {
            self.template = template;
        }
        if let Some(format) = section.format {
            self.format = format;
        }
        if let Some(keep) = section.keep_threshold {
            self.keep_threshold = keep;
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn merge_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(program) = &cli.translator {
            self.translator = program.clone();
        }
        if let Some(template) = &cli.template {
            self.template = template.clone();
        }
        if let Some(format) = &cli.format {
            self.format = format.clone();
        }
        if let Some(keep) = cli.keep {
            self.keep_threshold = keep;
        }
        self
    }

    /// defaults < `--config` file < flags
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::with_template(default_template()?);
        if let Some(path) = &cli.config {
            tracing::debug!("Loading settings from {}", path.display());
            settings = settings.merge_file(TomlConfig::from_file(path)?);
        }
        let settings = settings.merge_cli(cli);
        settings.validate()?;
        Ok(settings)
    }
}

/// `modem-manager-gui.1` in the directory holding the running executable.
pub fn default_template() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        ManhelperError::config(format!("executable {} has no parent directory", exe.display()))
    })?;
    Ok(dir.join(TEMPLATE_NAME))
}

impl Validate for ManhelperSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("translator", &self.translator)?;
        validate_non_empty_string("format", &self.format)?;
        validate_path("template", &self.template)?;
        validate_range("keep_threshold", self.keep_threshold, 0, 100)?;
        Ok(())
    }
}

impl SettingsProvider for ManhelperSettings {
    fn translator(&self) -> &str {
        &self.translator
    }

    fn template(&self) -> &Path {
        &self.template
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn keep_threshold(&self) -> u8 {
        self.keep_threshold
    }
}
