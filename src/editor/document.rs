//! ドキュメントと選択範囲
//!
//! ホストのエディタ状態の読み取り専用スナップショット。位置はすべて文字単位の
//! オフセットで表す。

use std::ops::Range;

/// 行の情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1 始まりの行番号
    pub number: usize,
    /// 行頭の文字オフセット
    pub from: usize,
    /// 行末（改行の手前）の文字オフセット
    pub to: usize,
    pub text: &'a str,
}

#[derive(Debug, Clone)]
struct LineSpan {
    char_start: usize,
    char_len: usize,
    bytes: Range<usize>,
}

/// テキストドキュメント
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    lines: Vec<LineSpan>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = index_lines(&text);
        Self { text, lines }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// ドキュメント全体の文字数（改行を含む）
    pub fn len_chars(&self) -> usize {
        self.lines
            .last()
            .map(|span| span.char_start + span.char_len)
            .unwrap_or(0)
    }

    /// オフセットを含む行を返す
    ///
    /// 範囲外のオフセットは末尾に丸める。
    pub fn line_at(&self, offset: usize) -> Line<'_> {
        let offset = offset.min(self.len_chars());
        let index = self
            .lines
            .partition_point(|span| span.char_start <= offset)
            .saturating_sub(1);
        self.line(index)
    }

    fn line(&self, index: usize) -> Line<'_> {
        let span = &self.lines[index];
        let raw = &self.text[span.bytes.clone()];
        // CRLF の CR は行内容に含めない
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        Line {
            number: index + 1,
            from: span.char_start,
            to: span.char_start + span.char_len,
            text,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(String::new())
    }
}

fn index_lines(text: &str) -> Vec<LineSpan> {
    let mut lines = Vec::new();
    let mut char_start = 0;
    let mut byte_start = 0;

    for raw in text.split('\n') {
        let char_len = raw.chars().count();
        let byte_end = byte_start + raw.len();
        lines.push(LineSpan {
            char_start,
            char_len,
            bytes: byte_start..byte_end,
        });
        // 改行 1 文字分進める
        char_start += char_len + 1;
        byte_start = byte_end + 1;
    }

    lines
}

/// 選択範囲の一つ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    /// 選択の起点
    pub anchor: usize,
    /// 選択の先端（カーソル位置）
    pub head: usize,
}

impl SelectionRange {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    pub fn cursor(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// 選択状態（複数カーソル対応）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ranges: Vec<SelectionRange>,
    main: usize,
}

impl Selection {
    /// 範囲が空の場合は先頭のカーソルになる。`main` は範囲内に丸める
    pub fn new(ranges: Vec<SelectionRange>, main: usize) -> Self {
        if ranges.is_empty() {
            return Self::cursor(0);
        }
        let main = main.min(ranges.len() - 1);
        Self { ranges, main }
    }

    pub fn cursor(pos: usize) -> Self {
        Self {
            ranges: vec![SelectionRange::cursor(pos)],
            main: 0,
        }
    }

    pub fn single(anchor: usize, head: usize) -> Self {
        Self {
            ranges: vec![SelectionRange::new(anchor, head)],
            main: 0,
        }
    }

    /// 主選択範囲
    pub fn main(&self) -> SelectionRange {
        self.ranges[self.main]
    }

    pub fn ranges(&self) -> &[SelectionRange] {
        &self.ranges
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::cursor(0)
    }
}
