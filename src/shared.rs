//! 複数スレッドから参照されるストアのハンドル
//!
//! 読み取り側は [`SharedStore::snapshot`] で現在のストアを受け取り、
//! 以降はロックなしで参照する。再読み込みは新しいストアを組み立ててから
//! 参照を差し替えるため、読み取り中のストアが書き換わることはない。

use std::sync::{
    Arc,
    PoisonError,
    RwLock,
};

use crate::loader::{
    LoadError,
    LocaleSource,
};
use crate::store::TranslationStore;

/// 差し替え可能なストアへの共有ハンドル
#[derive(Debug, Clone)]
pub struct SharedStore {
    /// 現在のストア
    current: Arc<RwLock<Arc<TranslationStore>>>,
}

impl SharedStore {
    /// 読み込み済みのストアからハンドルを作成
    #[must_use]
    pub fn new(store: TranslationStore) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::new(store))) }
    }

    /// 現在のストアを取得
    #[must_use]
    pub fn snapshot(&self) -> Arc<TranslationStore> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }

    /// ストアを差し替え、以前のストアを返す
    #[must_use]
    pub fn replace(&self, store: TranslationStore) -> Arc<TranslationStore> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, Arc::new(store))
    }

    /// 同じマスター言語とアクティブ言語で全言語を読み込み直す
    ///
    /// 読み込みに成功した場合のみ差し替える。
    ///
    /// # Errors
    /// 読み込みエラー（その場合、現在のストアはそのまま）
    pub fn reload<S, L>(&self, source: &S, languages: &[L]) -> Result<(), LoadError>
    where
        S: LocaleSource + ?Sized,
        L: AsRef<str>,
    {
        let current = self.snapshot();
        let mut next =
            TranslationStore::new(current.master_language(), current.active_language());
        next.load(source, languages)?;

        let previous = self.replace(next);
        tracing::debug!(
            previous_languages = previous.languages().count(),
            "Translation store reloaded"
        );

        Ok(())
    }
}
