use csv::ReaderBuilder;

use crate::models::{AppError, Cell, ImportOptions, RawGrid};

/// CSVのバイト列をセルの表に変換する
pub fn read_csv_grid(bytes: &[u8], options: &ImportOptions) -> Result<RawGrid, AppError> {
    let content = bytes.strip_prefix("\u{FEFF}".as_bytes()).unwrap_or(bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(content);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(parse_text_cell).collect());
    }

    Ok(rows)
}

/// テキストのセルを数値・真偽値・文字列に振り分ける
pub fn parse_text_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Cell::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Cell::Bool(false);
    }
    if is_numeric(trimmed) {
        if let Ok(number) = trimmed.parse::<f64>() {
            return Cell::Number(number);
        }
    }
    Cell::String(raw.to_string())
}

// "inf" や "NaN" は文字列のまま扱う
fn is_numeric(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && value.chars().any(|c| c.is_ascii_digit())
}
