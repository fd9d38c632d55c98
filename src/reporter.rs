//! ステータスバー表示
//!
//! 単一のラベルを所有し、件数または「対象外」を書き込む。

use crate::config::Settings;
use crate::host::{Leaf, StatusBarItem};

/// ラベルに表示中の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Showing(usize),
    NotApplicable,
}

/// ステータスバーのラベルを管理する
pub struct Reporter {
    item: Box<dyn StatusBarItem>,
    settings: Settings,
    state: DisplayState,
    label: String,
}

impl Reporter {
    /// ラベルへはまだ書き込まない（初期表示は呼び出し側が行う）
    pub fn new(item: Box<dyn StatusBarItem>, settings: Settings) -> Self {
        Self {
            item,
            settings,
            state: DisplayState::NotApplicable,
            label: String::new(),
        }
    }

    /// 件数を表示する。`None` は対象外
    pub fn update_status_bar(&mut self, count: Option<usize>) {
        let (state, label) = match count {
            Some(count) => (DisplayState::Showing(count), self.settings.format_count(count)),
            None => (DisplayState::NotApplicable, self.settings.format_not_applicable()),
        };
        self.item.set_text(&label);
        self.state = state;
        self.label = label;
    }

    /// アクティブなリーフが切り替わった
    ///
    /// テキスト編集ビューなら何もしない。正しい件数はそのビューの
    /// `LineInspector` が次の更新で書き込む。
    pub fn on_active_leaf_change(&mut self, leaf: Option<&Leaf>) {
        match leaf {
            Some(leaf) if leaf.is_text_editor() => {}
            _ => self.update_status_bar(None),
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// 最後に書き込んだラベル文字列
    pub fn label_text(&self) -> &str {
        &self.label
    }
}
