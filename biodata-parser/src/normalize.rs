//! # 字段值规范化
//!
//! 所有函数都是纯函数，无法识别时返回 `None` 或原样返回，从不 panic。

use regex::Regex;
use std::sync::OnceLock;

macro_rules! cached_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> Option<&'static Regex> {
            static RE: OnceLock<Option<Regex>> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).ok()).as_ref()
        }
    };
}

cached_regex!(separator_re, r"^([^:.]*?)\s*(?::{1,2}|\.{1,2})\s*(.*)$");
cached_regex!(number_re, r"\d{1,3}");
cached_regex!(range_re, r"(?i)(?:^|\D)(\d{1,2})\s*(?:-|–|to)\s*(\d{1,2})(?:\D|$)");
cached_regex!(
    feet_inches_re,
    r"(?i)^(\d)\s*(?:feet|foot|ft)\.?\s*(\d{1,2})\s*(?:inches|inch|in)?\.?$"
);
cached_regex!(apostrophe_re, r#"^(\d)\s*['’′]\s*(\d{1,2})?\s*(?:["”″]|'')?$"#);
cached_regex!(bare_re, r"^(\d)\s+(\d{1,2})$");
cached_regex!(feet_only_re, r"(?i)^(\d)\s*(?:feet|foot|ft)\.?$");

/// 行首的项目符号
const BULLETS: &[char] = &['•', '●', '○', '◦', '▪', '▫', '■', '□', '►', '▶', '➢', '➤', '✓', '✔', '·', '-', '–', '—', '*'];

/// 去掉行首的项目符号串
pub fn strip_bullets(line: &str) -> &str {
    line.trim_start_matches(|c: char| BULLETS.contains(&c) || c.is_whitespace())
}

/// 按第一个 `:` / `::` / `.` / `..` 拆出 `(标签, 值)`，任一部分为空则丢弃
///
/// `Name..... Ahmed` 这类点线引导符多出的分隔符从值的开头去掉。
pub fn split_label(line: &str) -> Option<(&str, &str)> {
    let caps = separator_re()?.captures(line)?;
    let label = caps.get(1)?.as_str().trim();
    let value = caps
        .get(2)?
        .as_str()
        .trim_start_matches(|c: char| c == ':' || c == '.' || c.is_whitespace())
        .trim_end();
    if label.is_empty() || value.is_empty() {
        return None;
    }
    Some((label, value))
}

/// 第一段 1-3 位数字
pub fn numeric(value: &str) -> Option<u32> {
    number_re()?.find(value)?.as_str().parse().ok()
}

/// `21-30` / `21 to 30` 形式的区间
pub fn range(value: &str) -> Option<(u32, u32)> {
    let caps = range_re()?.captures(value)?;
    let from = caps.get(1)?.as_str().parse().ok()?;
    let to = caps.get(2)?.as_str().parse().ok()?;
    Some((from, to))
}

/// 身高规范为 `英尺'英寸`，无法识别的格式原样返回
pub fn height(value: &str) -> String {
    let value = value.trim();
    let canonical = |feet: &str, inches: Option<&str>| {
        let inches = inches
            .and_then(|i| i.parse::<u32>().ok())
            .unwrap_or(0);
        format!("{feet}'{inches}")
    };

    for re in [feet_inches_re(), apostrophe_re(), bare_re(), feet_only_re()].into_iter().flatten() {
        if let Some(caps) = re.captures(value) {
            if let Some(feet) = caps.get(1) {
                return canonical(feet.as_str(), caps.get(2).map(|m| m.as_str()));
            }
        }
    }
    value.to_string()
}

/// 整词匹配：`phrase` 的各个词在 `words` 中连续出现
fn has_phrase(words: &[String], phrase: &str) -> bool {
    let phrase: Vec<&str> = phrase.split_whitespace().collect();
    !phrase.is_empty()
        && words
            .windows(phrase.len())
            .any(|window| window.iter().zip(&phrase).all(|(w, p)| w == p))
}

/// 关键词整词匹配，第一组命中的返回对应标签，都未命中时原样返回
fn keyword(value: &str, groups: &[(&[&str], &str)]) -> String {
    let words: Vec<String> = value
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    groups
        .iter()
        .find(|(phrases, _)| phrases.iter().any(|p| has_phrase(&words, p)))
        .map(|(_, tag)| tag.to_string())
        .unwrap_or_else(|| value.trim().to_string())
}

/// 性别
pub fn gender(value: &str) -> String {
    keyword(value, &[
        (&["female", "woman", "girl"], "female"),
        (&["male", "man", "boy"], "male"),
    ])
}

/// 婚姻状况；`never married` 含 `married`，未婚组必须先判断
pub fn marital_status(value: &str) -> String {
    keyword(value, &[
        (&["single", "never", "unmarried"], "never_married"),
        (&["divorced", "divorcee", "divorce", "khula"], "divorced"),
        (&["widow", "widowed", "widower"], "widowed"),
        (&["separated"], "separated"),
        (&["married"], "married"),
    ])
}

/// 多偶意愿
pub fn polygamy(value: &str) -> String {
    keyword(value, &[
        (&["maybe", "may be", "not sure", "depends"], "maybe"),
        (&["yes"], "yes"),
        (&["no"], "no"),
    ])
}

/// 全名拆分：第一个词为名，其余为姓
pub fn split_name(value: &str) -> Option<(String, Option<String>)> {
    let mut tokens = value.split_whitespace();
    let first = tokens.next()?.to_string();
    let rest = tokens.collect::<Vec<_>>().join(" ");
    Some((first, (!rest.is_empty()).then_some(rest)))
}
