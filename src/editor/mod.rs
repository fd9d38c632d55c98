//! エディタビューとの連携
//!
//! ホストのエディタビューを読み取り専用で扱うためのトレイトと、
//! 更新通知・行ごとの文字数監視（`LineInspector`）を提供する。

mod document;
mod inspector;

pub use document::{Document, Line, Selection, SelectionRange};
pub use inspector::LineInspector;

use std::fmt;

/// エディタビューの識別子（ホストが採番する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// ホストのエディタビュー
pub trait EditorView {
    /// 入力フォーカスを持っているか
    fn has_focus(&self) -> bool;

    fn document(&self) -> &Document;

    fn selection(&self) -> &Selection;
}

/// データだけを持つ `EditorView` 実装
#[derive(Debug, Clone, Default)]
pub struct EditorSnapshot {
    pub document: Document,
    pub selection: Selection,
    pub focused: bool,
}

impl EditorSnapshot {
    /// フォーカスありでカーソルを `cursor` に置いたスナップショット
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        Self {
            document: Document::new(text),
            selection: Selection::cursor(cursor),
            focused: true,
        }
    }
}

impl EditorView for EditorSnapshot {
    fn has_focus(&self) -> bool {
        self.focused
    }

    fn document(&self) -> &Document {
        &self.document
    }

    fn selection(&self) -> &Selection {
        &self.selection
    }
}

/// ホストからの更新通知
#[derive(Clone, Copy)]
pub struct ViewUpdate<'a> {
    pub view: &'a dyn EditorView,
    pub doc_changed: bool,
    pub selection_set: bool,
    pub viewport_changed: bool,
    pub focus_changed: bool,
}

impl<'a> ViewUpdate<'a> {
    /// 変更フラグなしの通知
    pub fn new(view: &'a dyn EditorView) -> Self {
        Self {
            view,
            doc_changed: false,
            selection_set: false,
            viewport_changed: false,
            focus_changed: false,
        }
    }

    pub fn doc_changed(mut self) -> Self {
        self.doc_changed = true;
        self
    }

    pub fn selection_set(mut self) -> Self {
        self.selection_set = true;
        self
    }

    pub fn viewport_changed(mut self) -> Self {
        self.viewport_changed = true;
        self
    }

    pub fn focus_changed(mut self) -> Self {
        self.focus_changed = true;
        self
    }

    /// 再計算が必要な変更を含むか
    pub fn needs_recount(&self) -> bool {
        self.doc_changed || self.selection_set || self.viewport_changed || self.focus_changed
    }
}

impl fmt::Debug for ViewUpdate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewUpdate")
            .field("doc_changed", &self.doc_changed)
            .field("selection_set", &self.selection_set)
            .field("viewport_changed", &self.viewport_changed)
            .field("focus_changed", &self.focus_changed)
            .finish_non_exhaustive()
    }
}
