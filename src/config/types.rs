use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::input::locale_file::SourceFormat;
use crate::types::LanguageCode;

/// 設定値 1 つ分の問題
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// 問題のあるフィールド（例: `languages[1]`）
    pub field: String,
    /// 内容
    pub message: String,
}

impl ValidationError {
    /// 新しい `ValidationError` を作成
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// 設定ファイルを使えない理由
#[derive(Error, Debug)]
pub enum ConfigError {
    /// ファイルを読めない
    #[error("Cannot read {}", path.display())]
    Read {
        /// 設定ファイルのパス
        path: PathBuf,
        /// 原因
        #[source]
        source: std::io::Error,
    },

    /// JSON として解釈できない、または値の型が違う
    #[error("Cannot parse {}: {source}", path.display())]
    Parse {
        /// 設定ファイルのパス
        path: PathBuf,
        /// 原因
        #[source]
        source: serde_json::Error,
    },

    /// 値の検証に失敗（見つかった問題をすべて持つ）
    #[error("{} has invalid settings:{}", path.display(), bullet_list(problems))]
    Invalid {
        /// 設定ファイルのパス
        path: PathBuf,
        /// 見つかった問題
        problems: Vec<ValidationError>,
    },
}

/// 問題を 1 行ずつの箇条書きにする
fn bullet_list(problems: &[ValidationError]) -> String {
    problems.iter().map(|problem| format!("\n  - {problem}")).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    /// Directory holding the locale files, relative to the project root.
    pub locales_dir: PathBuf,

    /// File name prefix: sources are named `<prefix>.<language>.<ext>`.
    pub file_prefix: String,

    /// Source file format, `toml` or `json`.
    pub format: SourceFormat,

    /// Language literal strings are authored in.
    pub master_language: LanguageCode,

    /// Language translations are produced in.
    /// If unset, the master language is used.
    pub active_language: Option<LanguageCode>,

    /// Languages to load.
    ///
    /// - `None`: every language with a file in `localesDir` (default)
    /// - `Some([...])`: exactly these languages; a missing file is an error
    pub languages: Option<Vec<LanguageCode>>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("locales"),
            file_prefix: "active".to_string(),
            format: SourceFormat::Toml,
            master_language: "en".to_string(),
            active_language: None,
            languages: None,
        }
    }
}

impl LocaleSettings {
    /// The active language, defaulting to the master language.
    #[must_use]
    pub fn active_language(&self) -> &str {
        self.active_language.as_deref().unwrap_or(&self.master_language)
    }

    /// # Errors
    /// - Required field is empty
    /// - Prefix that cannot form a file name
    /// - Explicit language list missing the master or active language
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.file_prefix.is_empty() {
            errors.push(ValidationError::new(
                "filePrefix",
                "The prefix cannot be empty. Example: \"active\"",
            ));
        } else if self.file_prefix.contains(['.', '/', '\\']) {
            errors.push(ValidationError::new(
                "filePrefix",
                format!(
                    "The prefix '{}' must not contain '.' or path separators",
                    self.file_prefix
                ),
            ));
        }

        if self.master_language.is_empty() {
            errors.push(ValidationError::new(
                "masterLanguage",
                "The master language cannot be empty. Example: \"en\"",
            ));
        }

        if let Some(active) = &self.active_language
            && active.is_empty()
        {
            errors.push(ValidationError::new(
                "activeLanguage",
                "The active language cannot be empty. Specify a code, or remove this field",
            ));
        }

        if let Some(languages) = &self.languages {
            if languages.is_empty() {
                errors.push(ValidationError::new(
                    "languages",
                    "At least one language is required. Example: [\"en\", \"fr\"]",
                ));
            }

            for (index, language) in languages.iter().enumerate() {
                if language.is_empty() {
                    errors.push(ValidationError::new(
                        format!("languages[{index}]"),
                        "The language code cannot be empty",
                    ));
                }
            }

            if !self.master_language.is_empty() && !languages.contains(&self.master_language) {
                errors.push(ValidationError::new(
                    "languages",
                    format!("The master language '{}' must be listed", self.master_language),
                ));
            }

            if let Some(active) = &self.active_language
                && !active.is_empty()
                && !languages.contains(active)
            {
                errors.push(ValidationError::new(
                    "languages",
                    format!("The active language '{active}' must be listed"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
