//! エラーハンドリング
//!
//! プラグイン全体で使用するエラー型。表示ロジック自体は失敗しないため、
//! ここで扱うのはライフサイクルの誤用と設定読み込みのエラーのみ。

use crate::config::ConfigError;
use crate::editor::ViewId;
use thiserror::Error;

/// プラグインのエラー型
#[derive(Error, Debug)]
pub enum PluginError {
    /// 既に activate 済み
    #[error("Plugin is already active")]
    AlreadyActive,

    /// activate 前の呼び出し
    #[error("Plugin is not active")]
    NotActive,

    /// 登録されていないビューへの通知
    #[error("Unknown editor view: {0}")]
    UnknownView(ViewId),

    /// 設定エラー
    #[error("Configuration error")]
    Config(#[from] ConfigError),
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, PluginError>;
