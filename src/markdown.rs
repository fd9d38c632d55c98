//! Markdown 記号の除去
//!
//! 行テキストから見出し・リスト・チェックボックス・引用・強調記号・リンク・画像を
//! 一つの正規表現で取り除き、空白を畳んだ「見える文字」だけを残す。
//!
//! パーサではなく近似である点に注意。一度きりの置換で、入れ子や重なった構文は
//! 扱わない（`- - item` は先頭の `- ` だけが消える）。

use crate::config::CountUnit;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// 除去対象の Markdown 構文
///
/// 先頭から順に: 見出し、チェックボックス付きリスト、リスト、引用、
/// インライン記号、リンク（ラベルは残す）、画像。
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(^#+\s*)",
        r"|(^\s*[-*+]\s+\[[ xX]?\]\s+)",
        r"|(^\s*[-*+]\s+)",
        r"|(^>\s*)",
        r"|([`*~_])",
        r"|(\[(?P<label>.*?)\]\(.*?\))",
        r"|(!\[.*?\]\(.*?\))",
    ))
    .expect("markup pattern is valid")
});

/// リンクラベル内に残るインライン記号
static INLINE_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[`*~_]").expect("inline pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// 行から Markdown 記号を除去し、空白を正規化する
pub fn clean_line(line: &str) -> String {
    let trimmed = line.trim();
    let stripped = strip_markup(trimmed);
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// 除去後の行の文字数
pub fn count_visible(line: &str, unit: CountUnit) -> usize {
    unit.measure(&clean_line(line))
}

fn strip_markup(text: &str) -> Cow<'_, str> {
    MARKUP.replace_all(text, |caps: &Captures<'_>| match caps.name("label") {
        Some(label) => INLINE_MARKS.replace_all(label.as_str(), "").into_owned(),
        None => String::new(),
    })
}
