//! line-char-count - 現在行の文字数をステータスバーに表示するエディタプラグイン
//!
//! カーソル行から Markdown 記号を取り除いた「見える文字数」を数え、
//! 変化したときだけステータスバーのラベルを書き換える。
//! ホストアプリケーションとは `host` モジュールのトレイトで接続する。

// コアモジュール
pub mod config;
pub mod error;
pub mod logging;

// ホスト境界
pub mod host;

// ロジック層
pub mod editor;
pub mod markdown;

// 表示層
pub mod reporter;

// プラグイン本体
pub mod plugin;

// 公開API
pub use config::{CountUnit, Settings};
pub use editor::{EditorSnapshot, EditorView, LineInspector, ViewId, ViewUpdate};
pub use error::{PluginError, Result};
pub use host::{Host, Leaf, StatusBarItem, Subscription, WorkspaceEvent};
pub use markdown::{clean_line, count_visible};
pub use plugin::CurrentLineCharCount;
pub use reporter::{DisplayState, Reporter};
