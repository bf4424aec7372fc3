//! ロケールファイルの読み込みから翻訳までの結合テスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use locale_store::config::LocaleSettings;
use locale_store::input::locale_file::SourceFormat;
use locale_store::loader::{
    FileLocaleSource,
    LoadError,
    LocaleSource,
};
use locale_store::types::MissingEntry;
use locale_store::{
    LookupError,
    SharedStore,
    TranslationStore,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// 設定ファイルに従ってストアを読み込む
fn load_fixture_store() -> TranslationStore {
    let root = fixtures_root();
    let settings = LocaleSettings::load(&root).unwrap();

    let source = FileLocaleSource::from_settings(&settings, &root);
    let languages = source.discover_languages().unwrap();

    let mut store = TranslationStore::new(&settings.master_language, settings.active_language());
    store.load(&source, &languages).unwrap();
    store
}

#[test]
fn test_translate_scenario() {
    let store = load_fixture_store();

    assert_eq!(store.master_language(), "en");
    assert_eq!(store.active_language(), "fr");
    assert_eq!(store.translate("Hello, world!"), "Bonjour, le monde!");
    assert_eq!(store.translate("Goodbye"), "");
    assert!(store.contains("Hello, world!"));
    assert!(!store.contains("Goodbye"));
}

#[test]
fn test_discovered_languages_are_loaded() {
    let store = load_fixture_store();

    assert_eq!(store.languages().collect::<Vec<_>>(), vec!["de", "en", "fr"]);
}

#[test]
fn test_page_strings_round_trip() {
    let store = load_fixture_store();
    let source =
        FileLocaleSource::new(fixtures_root().join("locales"), "active", SourceFormat::Toml);

    for language in ["de", "en", "fr"] {
        let table = source.read(language).unwrap();
        for (page, strings) in &table {
            assert_eq!(store.get_strings_for_page(page, language).unwrap(), strings);
        }
    }
}

#[test]
fn test_page_lookup_not_found() {
    let store = load_fixture_store();

    assert_eq!(
        store.get_strings_for_page("footer", "de"),
        Err(LookupError::PageNotFound { language: "de".to_string(), page: "footer".to_string() })
    );
    assert_eq!(
        store.get_strings_for_page("home", "it"),
        Err(LookupError::LanguageNotFound("it".to_string()))
    );
}

#[test]
fn test_repeated_master_text_resolves_to_first_page() {
    let store = load_fixture_store();

    // "Contact" は about と footer の両方にある
    assert_eq!(store.locate("Contact"), Some(("about", "contact")));
    assert_eq!(store.translate("Contact"), "Nous écrire");
}

#[test]
fn test_structural_mismatch_degrades_to_blank() {
    let store = load_fixture_store();

    assert_eq!(store.translate_to("Sign in", "de"), "");
    assert_eq!(
        store.try_translate("Sign in", "de"),
        Err(LookupError::StructuralMismatch {
            language: "de".to_string(),
            page: "home".to_string(),
            key: "sign_in".to_string(),
        })
    );
}

#[test]
fn test_check_parity() {
    let store = load_fixture_store();

    assert_eq!(
        store.check_parity(),
        vec![
            MissingEntry { language: "de".into(), page: "footer".into(), key: None },
            MissingEntry {
                language: "de".into(),
                page: "home".into(),
                key: Some("sign_in".into())
            },
        ]
    );
}

#[test]
fn test_reload_with_missing_source_keeps_store() {
    let temp_dir = TempDir::new().unwrap();
    for language in ["en", "fr"] {
        let name = format!("active.{language}.toml");
        fs::copy(fixtures_root().join("locales").join(&name), temp_dir.path().join(&name))
            .unwrap();
    }
    let source = FileLocaleSource::new(temp_dir.path(), "active", SourceFormat::Toml);
    let mut store = TranslationStore::new("en", "fr");
    store.load(&source, &["en", "fr"]).unwrap();
    let shared = SharedStore::new(store);

    let result = shared.reload(&source, &["en", "fr", "ja"]);

    match result {
        Err(LoadError::SourceUnavailable { language, path, .. }) => {
            assert_eq!(language, "ja");
            assert_eq!(path, temp_dir.path().join("active.ja.toml"));
        }
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
    let current = shared.snapshot();
    assert_eq!(current.translate("Hello, world!"), "Bonjour, le monde!");
}

#[test]
fn test_load_json_sources() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("strings.en.json"), r#"{"home": {"title": "Home"}}"#).unwrap();
    fs::write(temp_dir.path().join("strings.ja.json"), r#"{"home": {"title": "ホーム"}}"#).unwrap();
    let source = FileLocaleSource::new(temp_dir.path(), "strings", SourceFormat::Json);

    let languages = source.discover_languages().unwrap();
    let mut store = TranslationStore::new("en", "ja");
    store.load(&source, &languages).unwrap();

    assert_eq!(languages, vec!["en", "ja"]);
    assert_eq!(store.translate("Home"), "ホーム");
}
