//! locale-store
//!
//! サーバーレンダリング向けの UI 文字列ストア。起動時に言語ごとのファイルを
//! 読み込み、ページ単位の参照とマスター言語の文字列からの逆引き翻訳を提供する。
//!
//! ```no_run
//! use locale_store::input::locale_file::SourceFormat;
//! use locale_store::loader::FileLocaleSource;
//! use locale_store::store::TranslationStore;
//!
//! let source = FileLocaleSource::new("locales", "active", SourceFormat::Toml);
//! let mut store = TranslationStore::new("en", "fr");
//! store.load(&source, &["en", "fr"])?;
//!
//! assert_eq!(store.translate("Hello, world!"), "Bonjour, le monde!");
//! # Ok::<(), locale_store::loader::LoadError>(())
//! ```

pub mod config;
pub mod input;
pub mod loader;
pub mod shared;
pub mod store;
pub mod types;

pub use shared::SharedStore;
pub use store::{
    LookupError,
    TranslationStore,
};
