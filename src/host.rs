//! ホストアプリケーションとの境界
//!
//! プラグインがホストに要求する機能（ステータスバー、拡張登録、イベント購読、
//! アクティブなリーフの問い合わせ）をトレイトとして定義する。
//! 登録はすべて `Subscription` で返り、ドロップ時に確実に解除される。

use std::fmt;

/// ステータスバーのラベル
pub trait StatusBarItem {
    /// 表示文字列を設定する
    fn set_text(&mut self, text: &str);
}

/// ワークスペースのイベント種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceEvent {
    /// アクティブなリーフ（ペイン）が切り替わった
    ActiveLeafChange,
}

/// リーフに表示されているビューの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewKind {
    /// Markdown ドキュメントの編集ビュー
    Markdown,
    /// それ以外（グラフ、画像、設定画面など）
    Other(String),
}

/// ワークスペースのペイン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub kind: ViewKind,
    /// 編集面（エディタ）が接続されているか
    pub has_editor: bool,
}

impl Leaf {
    pub fn markdown() -> Self {
        Self {
            kind: ViewKind::Markdown,
            has_editor: true,
        }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self {
            kind: ViewKind::Other(name.into()),
            has_editor: false,
        }
    }

    /// 文字数を表示できるテキスト編集ビューかどうか
    pub fn is_text_editor(&self) -> bool {
        self.kind == ViewKind::Markdown && self.has_editor
    }
}

/// ホストへの登録ハンドル
///
/// ドロップまたは `release` で解除処理が一度だけ実行される。
pub struct Subscription {
    name: String,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(name: impl Into<String>, release: impl FnOnce() + 'static) -> Self {
        Self {
            name: name.into(),
            release: Some(Box::new(release)),
        }
    }

    /// 解除処理を持たないハンドル（ホストが自動で後始末する場合）
    pub fn detached(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            release: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 明示的に解除する
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            log::debug!(target: "line_char_count", "releasing {}", self.name);
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("name", &self.name)
            .field("pending", &self.release.is_some())
            .finish()
    }
}

/// プラグインから見たホストの機能
pub trait Host {
    /// ステータスバーにラベルを追加する
    fn add_status_bar_item(&mut self) -> Box<dyn StatusBarItem>;

    /// エディタ拡張を登録する
    ///
    /// 登録後、ホストはエディタビューごとに `view_created` / `view_updated` /
    /// `view_destroyed` をプラグインへ通知する。
    fn register_editor_extension(&mut self) -> Subscription;

    /// ワークスペースイベントを購読する
    fn register_event(&mut self, event: WorkspaceEvent) -> Subscription;

    /// 現在アクティブなリーフ
    fn active_leaf(&self) -> Option<Leaf>;
}
