//! 現在行の文字数監視
//!
//! エディタビューごとに一つ生成され、カーソル行の「見える文字数」を計算して
//! 前回の報告から変化したときだけ `Reporter` に書き込む。

use super::{EditorView, ViewUpdate};
use crate::config::CountUnit;
use crate::markdown::count_visible;
use crate::reporter::Reporter;

const LOG_TARGET: &str = "line_char_count";

/// 行ごとの文字数監視
#[derive(Debug, Clone)]
pub struct LineInspector {
    /// 最後に報告した文字数
    last_reported_char_count: Option<usize>,
    /// 最後に報告した行番号
    last_line_number: Option<usize>,
    unit: CountUnit,
}

impl LineInspector {
    /// 生成と同時に強制的に一度報告する
    pub fn new(view: &dyn EditorView, reporter: &mut Reporter, unit: CountUnit) -> Self {
        let mut inspector = Self {
            last_reported_char_count: None,
            last_line_number: None,
            unit,
        };
        inspector.update_count(view, reporter, true);
        inspector
    }

    /// ホストからの更新通知を処理する
    ///
    /// フォーカスの変化は強制更新として扱う。
    pub fn update(&mut self, update: &ViewUpdate<'_>, reporter: &mut Reporter) {
        if update.needs_recount() {
            self.update_count(update.view, reporter, update.focus_changed);
        }
    }

    fn update_count(&mut self, view: &dyn EditorView, reporter: &mut Reporter, force: bool) {
        // フォーカスがなければ N/A。キャッシュは更新しない
        if !view.has_focus() {
            reporter.update_status_bar(None);
            return;
        }

        let head = view.selection().main().head;
        let line = view.document().line_at(head);
        let char_count = count_visible(line.text, self.unit);

        if force
            || self.last_line_number != Some(line.number)
            || self.last_reported_char_count != Some(char_count)
        {
            log::debug!(
                target: LOG_TARGET,
                "line {}: {} chars{}",
                line.number,
                char_count,
                if force { " (forced)" } else { "" }
            );
            reporter.update_status_bar(Some(char_count));
            self.last_reported_char_count = Some(char_count);
            self.last_line_number = Some(line.number);
        }
    }

    pub fn last_reported_char_count(&self) -> Option<usize> {
        self.last_reported_char_count
    }

    pub fn last_line_number(&self) -> Option<usize> {
        self.last_line_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::editor::{Document, EditorSnapshot, Selection, SelectionRange};
    use crate::host::StatusBarItem;
    use crate::reporter::DisplayState;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingItem(Rc<RefCell<Vec<String>>>);

    impl StatusBarItem for RecordingItem {
        fn set_text(&mut self, text: &str) {
            self.0.borrow_mut().push(text.to_string());
        }
    }

    fn reporter() -> (Reporter, Rc<RefCell<Vec<String>>>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let item = RecordingItem(Rc::clone(&writes));
        (Reporter::new(Box::new(item), Settings::default()), writes)
    }

    const TEXT: &str = "# Hello World\n- [x] Buy milk\n> **quoted** text";

    #[test]
    fn test_construction_forces_report() {
        let (mut reporter, writes) = reporter();
        let view = EditorSnapshot::new(TEXT, 0);
        let inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);

        assert_eq!(*writes.borrow(), vec!["Chars: 11"]);
        assert_eq!(inspector.last_line_number(), Some(1));
        assert_eq!(inspector.last_reported_char_count(), Some(11));
    }

    #[test]
    fn test_unchanged_line_is_not_reported_again() {
        let (mut reporter, writes) = reporter();
        let mut view = EditorSnapshot::new(TEXT, 0);
        let mut inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);

        // 同じ行内でカーソル移動
        view.selection = Selection::cursor(5);
        inspector.update(&ViewUpdate::new(&view).selection_set(), &mut reporter);
        inspector.update(&ViewUpdate::new(&view).viewport_changed(), &mut reporter);
        assert_eq!(writes.borrow().len(), 1);
    }

    #[test]
    fn test_line_change_reports() {
        let (mut reporter, writes) = reporter();
        let mut view = EditorSnapshot::new(TEXT, 0);
        let mut inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);

        view.selection = Selection::cursor(15);
        inspector.update(&ViewUpdate::new(&view).selection_set(), &mut reporter);
        assert_eq!(*writes.borrow(), vec!["Chars: 11", "Chars: 8"]);
        assert_eq!(inspector.last_line_number(), Some(2));
    }

    #[test]
    fn test_same_count_on_different_line_reports() {
        let (mut reporter, writes) = reporter();
        let mut view = EditorSnapshot::new(TEXT, 0);
        let mut inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);

        // 1 行目と 3 行目はどちらも 11 文字
        view.selection = Selection::cursor(TEXT.chars().count());
        inspector.update(&ViewUpdate::new(&view).selection_set(), &mut reporter);
        assert_eq!(*writes.borrow(), vec!["Chars: 11", "Chars: 11"]);
        assert_eq!(inspector.last_line_number(), Some(3));
    }

    #[test]
    fn test_edit_on_same_line_reports() {
        let (mut reporter, writes) = reporter();
        let mut view = EditorSnapshot::new("# Hello", 7);
        let mut inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);

        view.document = Document::new("# Hello!");
        view.selection = Selection::cursor(8);
        inspector.update(&ViewUpdate::new(&view).doc_changed(), &mut reporter);
        assert_eq!(*writes.borrow(), vec!["Chars: 5", "Chars: 6"]);
    }

    #[test]
    fn test_edit_keeping_count_is_not_reported() {
        let (mut reporter, writes) = reporter();
        let mut view = EditorSnapshot::new("# Hello", 7);
        let mut inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);

        // 強調記号の追加では見える文字数は変わらない
        view.document = Document::new("# *Hello*");
        view.selection = Selection::cursor(9);
        inspector.update(&ViewUpdate::new(&view).doc_changed(), &mut reporter);
        assert_eq!(*writes.borrow(), vec!["Chars: 5"]);
        assert_eq!(inspector.last_reported_char_count(), Some(5));
    }

    #[test]
    fn test_selection_across_lines_uses_head() {
        let (mut reporter, _writes) = reporter();
        let mut view = EditorSnapshot::new(TEXT, 0);
        view.selection = Selection::single(0, 30);
        let inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);
        assert_eq!(inspector.last_line_number(), Some(3));
    }

    #[test]
    fn test_update_without_flags_is_ignored() {
        let (mut reporter, writes) = reporter();
        let mut view = EditorSnapshot::new(TEXT, 0);
        let mut inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);

        view.selection = Selection::cursor(15);
        inspector.update(&ViewUpdate::new(&view), &mut reporter);
        assert_eq!(writes.borrow().len(), 1);
    }

    #[test]
    fn test_focus_loss_reports_not_applicable_and_keeps_cache() {
        let (mut reporter, writes) = reporter();
        let mut view = EditorSnapshot::new(TEXT, 0);
        let mut inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);

        view.focused = false;
        inspector.update(&ViewUpdate::new(&view).doc_changed(), &mut reporter);
        assert_eq!(reporter.state(), DisplayState::NotApplicable);
        assert_eq!(inspector.last_reported_char_count(), Some(11));
        assert_eq!(inspector.last_line_number(), Some(1));
        assert_eq!(*writes.borrow(), vec!["Chars: 11", "Chars: N/A"]);
    }

    #[test]
    fn test_regaining_focus_reports_once() {
        let (mut reporter, writes) = reporter();
        let mut view = EditorSnapshot::new(TEXT, 0);
        let mut inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);

        view.focused = false;
        inspector.update(&ViewUpdate::new(&view).focus_changed(), &mut reporter);
        view.focused = true;
        inspector.update(&ViewUpdate::new(&view).focus_changed(), &mut reporter);
        inspector.update(&ViewUpdate::new(&view).selection_set(), &mut reporter);

        assert_eq!(*writes.borrow(), vec!["Chars: 11", "Chars: N/A", "Chars: 11"]);
        assert_eq!(reporter.state(), DisplayState::Showing(11));
    }

    #[test]
    fn test_unfocused_construction_shows_not_applicable() {
        let (mut reporter, writes) = reporter();
        let mut view = EditorSnapshot::new(TEXT, 0);
        view.focused = false;
        let inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);

        assert_eq!(*writes.borrow(), vec!["Chars: N/A"]);
        assert_eq!(inspector.last_line_number(), None);
    }

    #[test]
    fn test_uses_main_selection_head() {
        let (mut reporter, _writes) = reporter();
        let view = EditorSnapshot {
            document: Document::new(TEXT),
            // 主選択は 2 番目。anchor は 1 行目、head は 2 行目
            selection: Selection::new(
                vec![SelectionRange::cursor(0), SelectionRange::new(2, 16)],
                1,
            ),
            focused: true,
        };
        let inspector = LineInspector::new(&view, &mut reporter, CountUnit::Chars);
        assert_eq!(inspector.last_line_number(), Some(2));
        assert_eq!(reporter.state(), DisplayState::Showing(8));
    }

    #[test]
    fn test_count_unit_applies() {
        let (mut reporter, _writes) = reporter();
        let view = EditorSnapshot::new("- 😀 ok", 0);
        LineInspector::new(&view, &mut reporter, CountUnit::Utf16);
        assert_eq!(reporter.state(), DisplayState::Showing(5));
    }
}
