//! `.locale-store.json` の読み込み

use std::io::ErrorKind;
use std::path::Path;

use super::{
    ConfigError,
    LocaleSettings,
};

/// プロジェクトルートに置く設定ファイルの名前
pub const CONFIG_FILE_NAME: &str = ".locale-store.json";

impl LocaleSettings {
    /// `root` 直下の設定ファイルを読み込み、検証する
    ///
    /// 設定ファイルがなければデフォルト値を返す。
    ///
    /// # Errors
    /// - ファイルを読めない (`Read`)
    /// - JSON として不正、または値の型が違う (`Parse`)
    /// - 検証エラー (`Invalid`、見つかった問題をすべて含む)
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        let settings: Self = serde_json::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;

        if let Err(problems) = settings.validate() {
            return Err(ConfigError::Invalid { path, problems });
        }

        tracing::debug!(
            path = %path.display(),
            master = %settings.master_language,
            active = %settings.active_language(),
            "Loaded config"
        );
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;
    use crate::input::locale_file::SourceFormat;

    /// 設定ファイルを書いた一時ディレクトリ
    fn root_with_config(content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();
        temp_dir
    }

    #[rstest]
    fn load_config_file() {
        let root = root_with_config(r#"{"masterLanguage": "ja", "languages": ["ja", "en"]}"#);

        let settings = LocaleSettings::load(root.path()).unwrap();

        assert_that!(settings.master_language, eq("ja"));
        assert_that!(settings.active_language(), eq("ja"));
        assert_that!(settings.format, eq(SourceFormat::Toml));
    }

    #[rstest]
    fn load_without_config_file_uses_defaults() {
        let root = TempDir::new().unwrap();

        let settings = LocaleSettings::load(root.path()).unwrap();

        assert_eq!(settings, LocaleSettings::default());
    }

    #[rstest]
    #[case::invalid_json("invalid json")]
    #[case::wrong_type(r#"{"languages": "en"}"#)]
    fn load_unparsable_config(#[case] content: &str) {
        let root = root_with_config(content);

        let result = LocaleSettings::load(root.path());

        match result {
            Err(ConfigError::Parse { path, .. }) => {
                assert_eq!(path, root.path().join(CONFIG_FILE_NAME));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[rstest]
    fn load_invalid_config_reports_every_problem() {
        let root =
            root_with_config(r#"{"filePrefix": "", "activeLanguage": "fr", "languages": ["en"]}"#);

        let result = LocaleSettings::load(root.path());

        match result {
            Err(ConfigError::Invalid { problems, .. }) => {
                let fields: Vec<_> =
                    problems.iter().map(|problem| problem.field.as_str()).collect();
                assert_eq!(fields, vec!["filePrefix", "languages"]);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[rstest]
    fn load_unreadable_config() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join(CONFIG_FILE_NAME)).unwrap();

        let result = LocaleSettings::load(root.path());

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
