//! ロケールデータの読み込み
//!
//! 言語コードごとに 1 つのソースを読み、
//! 言語 → ページ → キー → 文字列の入れ子構造を組み立てる。
//! どれか 1 つでも失敗したら部分的な結果は返さない。

/// 読み込みエラー
mod error;

use std::path::{
    Path,
    PathBuf,
};

use globset::Glob;
use ignore::WalkBuilder;

pub use error::LoadError;

use crate::config::LocaleSettings;
use crate::input::locale_file::{
    SourceFormat,
    language_from_file_name,
    parse_locale_table,
    source_file_name,
};
use crate::types::{
    LanguageCode,
    LocaleTable,
    Locales,
};

/// 言語ごとのロケールデータの供給元
pub trait LocaleSource {
    /// 指定言語のページ → キー → 文字列のテーブルを読み込む
    ///
    /// # Errors
    /// - ソースが存在しない、または読めない (`SourceUnavailable`)
    /// - 形式が不正 (`SourceMalformed`)
    fn read(&self, language: &str) -> Result<LocaleTable, LoadError>;

    /// 指定言語のソースの所在（エラーメッセージやログ用）
    fn describe(&self, language: &str) -> PathBuf;
}

/// `<dir>/<prefix>.<language>.<ext>` というファイルから読み込むソース
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocaleSource {
    /// ロケールファイルを置くディレクトリ
    dir: PathBuf,
    /// ファイル名の接頭辞（例: `active`）
    prefix: String,
    /// ファイル形式
    format: SourceFormat,
}

impl FileLocaleSource {
    /// 新しいファイルソースを作成
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, format: SourceFormat) -> Self {
        Self { dir: dir.into(), prefix: prefix.into(), format }
    }

    /// 設定からファイルソースを作成
    ///
    /// # Arguments
    /// * `settings` - 検証済みの設定
    /// * `root` - `localesDir` の基準となるルートパス
    #[must_use]
    pub fn from_settings(settings: &LocaleSettings, root: &Path) -> Self {
        Self::new(root.join(&settings.locales_dir), settings.file_prefix.clone(), settings.format)
    }

    /// ロケールファイルのディレクトリを取得
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// ディレクトリにある言語コードを列挙する
    ///
    /// サブディレクトリは見ない。シンボリックリンクはリンク先で判定する。
    /// 結果はソート済みで重複なし。
    ///
    /// # Errors
    /// - ディレクトリが存在しない
    /// - 走査中のエラー（リンク切れを含む）
    pub fn discover_languages(&self) -> Result<Vec<LanguageCode>, LoadError> {
        if !self.dir.is_dir() {
            return Err(LoadError::Discovery(format!(
                "'{}' is not a directory",
                self.dir.display()
            )));
        }

        let pattern = format!("{}.*.{}", globset::escape(&self.prefix), self.format.extension());
        let matcher = Glob::new(&pattern)
            .map_err(|e| LoadError::Discovery(format!("Invalid file pattern '{pattern}': {e}")))?
            .compile_matcher();

        let mut languages = Vec::new();
        let walker = WalkBuilder::new(&self.dir)
            .max_depth(Some(1))
            .follow_links(true)
            .standard_filters(false)
            .build();

        for result in walker {
            let entry = result.map_err(|e| LoadError::Discovery(e.to_string()))?;

            // ファイル（リンク先がファイルのものを含む）のみを対象
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if !matcher.is_match(file_name) {
                continue;
            }

            if let Some(language) = language_from_file_name(&self.prefix, self.format, file_name) {
                languages.push(language);
            }
        }

        languages.sort();
        languages.dedup();
        tracing::debug!(dir = %self.dir.display(), ?languages, "Discovered locale sources");

        Ok(languages)
    }
}

impl LocaleSource for FileLocaleSource {
    fn read(&self, language: &str) -> Result<LocaleTable, LoadError> {
        let path = self.describe(language);

        let content =
            std::fs::read_to_string(&path).map_err(|source| LoadError::SourceUnavailable {
                language: language.to_string(),
                path: path.clone(),
                source,
            })?;

        parse_locale_table(&content, self.format).map_err(|reason| LoadError::SourceMalformed {
            language: language.to_string(),
            path,
            reason,
        })
    }

    fn describe(&self, language: &str) -> PathBuf {
        self.dir.join(source_file_name(&self.prefix, language, self.format))
    }
}

/// 指定された全言語を読み込む
///
/// 同じ言語コードが複数回指定された場合は後勝ち。
///
/// # Errors
/// 1 言語でも読み込みに失敗した場合、その言語のエラーを返す
pub fn load_locales<S, L>(source: &S, languages: &[L]) -> Result<Locales, LoadError>
where
    S: LocaleSource + ?Sized,
    L: AsRef<str>,
{
    let mut locales = Locales::new();

    for language in languages {
        let language = language.as_ref();
        tracing::debug!(language, source = %source.describe(language).display(), "Loading locale");

        let table = source.read(language)?;
        let strings: usize = table.values().map(|page| page.len()).sum();
        tracing::debug!(language, pages = table.len(), strings, "Loaded locale");

        locales.insert(language.to_string(), table);
    }

    Ok(locales)
}
