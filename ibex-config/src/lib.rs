//! Shared configuration loader for linger2ibex.
//!
//! `defaults/ibex.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`IbexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use ibex_babel::formats::ibex::{
    IbexOptions, JudgmentOptions, PracticeQuestion, PracticeTrial, SeparatorOptions,
};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/ibex.default.toml");

/// Top-level configuration consumed by linger2ibex.
#[derive(Debug, Clone, Deserialize)]
pub struct IbexConfig {
    pub convert: ConvertConfig,
    pub linger: LingerConfig,
    pub ibex: IbexOutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Kept as text so an invalid name surfaces as a conversion error that
    /// names the offending value.
    pub experiment_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LingerConfig {
    pub filler_prefix: String,
}

/// Fixed text written into the generated data include.
#[derive(Debug, Clone, Deserialize)]
pub struct IbexOutputConfig {
    pub completion_message: String,
    pub intro_html: String,
    pub question_separator_message: String,
    pub separator: SeparatorConfig,
    pub dashed_sentence: DashedSentenceConfig,
    pub judgment: JudgmentConfig,
    #[serde(default)]
    pub practice: Vec<PracticeConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeparatorConfig {
    pub transfer: u32,
    pub normal_message: String,
    pub error_message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashedSentenceConfig {
    pub mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JudgmentConfig {
    pub scale: Vec<String>,
    pub present_as_scale: bool,
    pub instructions: String,
    pub left_comment: String,
    pub right_comment: String,
    pub question: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PracticeConfig {
    pub sentence: String,
    pub question: Option<String>,
    #[serde(default)]
    pub answers: Vec<String>,
}

impl From<PracticeConfig> for PracticeTrial {
    fn from(config: PracticeConfig) -> Self {
        PracticeTrial {
            sentence: config.sentence,
            question: config.question.map(|text| PracticeQuestion {
                text,
                answers: config.answers,
            }),
        }
    }
}

impl From<&IbexConfig> for IbexOptions {
    fn from(config: &IbexConfig) -> Self {
        let ibex = config.ibex.clone();
        IbexOptions {
            filler_prefix: config.linger.filler_prefix.clone(),
            completion_message: ibex.completion_message,
            intro_html: ibex.intro_html,
            question_separator_message: ibex.question_separator_message,
            separator: SeparatorOptions {
                transfer: ibex.separator.transfer,
                normal_message: ibex.separator.normal_message,
                error_message: ibex.separator.error_message,
            },
            dashed_sentence_mode: ibex.dashed_sentence.mode,
            judgment: JudgmentOptions {
                scale: ibex.judgment.scale,
                present_as_scale: ibex.judgment.present_as_scale,
                instructions: ibex.judgment.instructions,
                left_comment: ibex.judgment.left_comment,
                right_comment: ibex.judgment.right_comment,
                question: ibex.judgment.question,
            },
            practice: ibex.practice.into_iter().map(Into::into).collect(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override a single key, such as the experiment type named on the command line.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<IbexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.convert.experiment_type, "DashedSentence");
        assert_eq!(config.linger.filler_prefix, "filler");
        assert_eq!(config.ibex.separator.transfer, 1000);
        assert_eq!(config.ibex.judgment.scale.len(), 7);
        assert_eq!(config.ibex.practice.len(), 3);
    }

    #[test]
    fn default_config_matches_default_options() {
        let config = Loader::new().build().expect("defaults to deserialize");
        let options = IbexOptions::from(&config);
        assert_eq!(options, IbexOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("convert.experiment_type", "AcceptabilityJudgment")
            .expect("override to apply")
            .set_override("ibex.separator.transfer", 250i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.experiment_type, "AcceptabilityJudgment");
        assert_eq!(config.ibex.separator.transfer, 250);
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("linger2ibex.toml");
        fs::write(
            &path,
            r#"[linger]
filler_prefix = "distractor"

[[ibex.practice]]
sentence = "Only practice."
"#,
        )
        .unwrap();

        let config = Loader::new()
            .with_file(&path)
            .build()
            .expect("config to build");

        assert_eq!(config.linger.filler_prefix, "distractor");
        assert_eq!(config.ibex.intro_html, "example_intro.html");
        let options = IbexOptions::from(&config);
        assert_eq!(options.practice, vec![PracticeTrial::new("Only practice.")]);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/definitely/not/here/linger2ibex.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/linger2ibex.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.linger.filler_prefix, "filler");
    }

    #[test]
    fn practice_without_question_has_none() {
        let trial = PracticeTrial::from(PracticeConfig {
            sentence: "Practice.".to_string(),
            question: None,
            answers: vec!["ignored".to_string()],
        });
        assert_eq!(trial, PracticeTrial::new("Practice."));
    }
}
