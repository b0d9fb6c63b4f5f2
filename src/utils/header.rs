use std::collections::HashSet;

use crate::models::{Cell, CellKind};

/// 1行目が文字列である割合・重複のない割合の下限
const HEADER_RATIO_THRESHOLD: f64 = 0.8;

/// ヘッダー文字列を正規化（前後の空白除去、小文字化）
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// ヘッダーなしのときに使う列名（1始まり）
pub fn default_column_name(index: usize) -> String {
    format!("Column {}", index + 1)
}

/// ヘッダー判定の決め手
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderReason {
    EmptyGrid,
    BlankFirstRow,
    MostlyNonText,
    RepeatedLabels,
    TypedDataRow,
    NoDisqualifyingSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderVerdict {
    pub has_headers: bool,
    pub reason: HeaderReason,
}

impl HeaderVerdict {
    fn new(has_headers: bool, reason: HeaderReason) -> Self {
        Self {
            has_headers,
            reason,
        }
    }
}

/// 1行目がヘッダー行かどうか判定
pub fn has_headers(grid: &[Vec<Cell>]) -> bool {
    detect_header(grid).has_headers
}

/// 1行目がヘッダー行かどうかを、判定理由つきで返す
///
/// 否定材料（空行・文字列が少ない・重複が多い）がなければヘッダーありとみなす。
/// 2行目の型が異なり数値を含む場合は確証として扱うが、
/// 確証がなくても結果はヘッダーありになる。
pub fn detect_header(grid: &[Vec<Cell>]) -> HeaderVerdict {
    let Some(first_row) = grid.first() else {
        return HeaderVerdict::new(false, HeaderReason::EmptyGrid);
    };

    if first_row.iter().all(Cell::is_blank) {
        return HeaderVerdict::new(false, HeaderReason::BlankFirstRow);
    }

    let column_count = first_row.len() as f64;

    let text_cells = first_row
        .iter()
        .filter(|cell| matches!(cell, Cell::String(s) if !s.trim().is_empty()))
        .count();
    if (text_cells as f64) / column_count < HEADER_RATIO_THRESHOLD {
        return HeaderVerdict::new(false, HeaderReason::MostlyNonText);
    }

    let distinct: HashSet<String> = first_row
        .iter()
        .map(|cell| cell.display().trim().to_string())
        .collect();
    if (distinct.len() as f64) < column_count * HEADER_RATIO_THRESHOLD {
        return HeaderVerdict::new(false, HeaderReason::RepeatedLabels);
    }

    if let Some(second_row) = grid.get(1) {
        let first_kinds: Vec<CellKind> = first_row.iter().map(Cell::kind).collect();
        let second_kinds: Vec<CellKind> = second_row.iter().map(Cell::kind).collect();
        if first_kinds != second_kinds && second_kinds.contains(&CellKind::Number) {
            return HeaderVerdict::new(true, HeaderReason::TypedDataRow);
        }
    }

    HeaderVerdict::new(true, HeaderReason::NoDisqualifyingSignal)
}
