//! プラグイン設定
//!
//! ホストのプラグインデータファイル（JSON）から読み込む。全項目にデフォルト値があり、
//! デフォルト設定では `Chars: 12` / `Chars: N/A` の表示になる。

use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// 設定固有のエラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// 文字数の数え方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountUnit {
    /// Unicode スカラー値の数
    #[default]
    Chars,
    /// UTF-16 コードユニット数（JavaScript の `length` と同じ）
    Utf16,
    /// 端末上の表示幅
    DisplayWidth,
}

impl CountUnit {
    /// 文字列の長さをこの単位で数える
    pub fn measure(self, text: &str) -> usize {
        match self {
            CountUnit::Chars => text.chars().count(),
            CountUnit::Utf16 => text.encode_utf16().count(),
            CountUnit::DisplayWidth => text.width(),
        }
    }
}

/// プラグイン設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// ラベルの接頭辞（`{prefix}: {count}`）
    pub label_prefix: String,
    /// 対象外のときに表示する文字列
    pub not_applicable_text: String,
    pub count_unit: CountUnit,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            label_prefix: "Chars".to_string(),
            not_applicable_text: "N/A".to_string(),
            count_unit: CountUnit::Chars,
            log_level: LogLevel::Info,
        }
    }
}

impl Settings {
    /// JSON 文字列から読み込む
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// 設定ファイルから読み込む
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// 値の妥当性を検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "label_prefix".to_string(),
                value: self.label_prefix.clone(),
            });
        }
        Ok(())
    }

    /// 件数表示用のラベル文字列
    pub fn format_count(&self, count: usize) -> String {
        format!("{}: {}", self.label_prefix, count)
    }

    /// 対象外表示用のラベル文字列
    pub fn format_not_applicable(&self) -> String {
        format!("{}: {}", self.label_prefix, self.not_applicable_text)
    }
}
