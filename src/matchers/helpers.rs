use crate::models::{Cell, Record};

/// 正規化済みの列名がいずれかの語を部分一致で含むか
pub fn contains_any(normalized: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| normalized.contains(term))
}

/// 大文字小文字を区別しない部分一致
pub fn value_matches(target: &str, pattern: &str) -> bool {
    let pattern_lower = pattern.to_lowercase();
    if pattern_lower.is_empty() {
        return true;
    }
    target.to_lowercase().contains(&pattern_lower)
}

/// レコードのいずれかの値が検索語を含むか
pub fn record_matches(record: &Record, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    record
        .values
        .values()
        .any(|cell| value_matches(&cell.display(), search))
}

/// セル値が選択値と一致するか（表示文字列で比較）
pub fn cell_equals(cell: Option<&Cell>, selected: &str) -> bool {
    cell.map(|value| value.display() == selected)
        .unwrap_or(false)
}
