use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::mapping::{find_duplicate_roles, suggest_roles};
use crate::models::{
    AppError, Cell, ColumnSample, Dataset, HeaderMode, ImportOptions, ImportPreview, RawGrid,
    Record,
};
use crate::utils::header::{default_column_name, detect_header};

/// 内部管理用のレコードID（エクスポートには含めない）
pub fn new_record_id() -> String {
    format!("row-{}", Uuid::new_v4())
}

/// セルの表からインポート候補（列名・レコード・役割候補）を組み立てる
pub fn build_import(grid: RawGrid, options: &ImportOptions) -> Result<ImportPreview, AppError> {
    if grid.is_empty() {
        return Err(AppError::NoData);
    }

    let has_headers = match options.header_mode {
        HeaderMode::Present => true,
        HeaderMode::Absent => false,
        HeaderMode::Auto => {
            let verdict = detect_header(&grid);
            tracing::debug!(
                has_headers = verdict.has_headers,
                reason = ?verdict.reason,
                "ヘッダー行を判定しました"
            );
            verdict.has_headers
        }
    };

    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    let (headers, data_rows) = if has_headers {
        (header_names(&grid[0], width), &grid[1..])
    } else {
        ((0..width).map(default_column_name).collect(), &grid[..])
    };

    if headers.is_empty() {
        return Err(AppError::NoColumns);
    }

    let mut records = Vec::new();
    for row in data_rows {
        if is_blank_row(row) {
            continue;
        }

        let values: HashMap<String, Cell> = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.clone(), row.get(idx).cloned().unwrap_or_default()))
            .collect();

        records.push(Record {
            id: new_record_id(),
            values,
        });
    }

    let samples = collect_samples(&headers, &records);
    let suggestions = suggest_roles(&samples);
    let duplicate_roles = find_duplicate_roles(suggestions.iter().map(|s| &s.role))
        .into_iter()
        .collect();

    tracing::info!(
        columns = headers.len(),
        records = records.len(),
        has_headers,
        "インポート候補を作成しました"
    );

    Ok(ImportPreview {
        dataset: Dataset { headers, records },
        has_headers,
        samples,
        suggestions,
        duplicate_roles,
    })
}

/// 1行目から列名を作る（空欄は「Column N」、重複は連番を付ける）
fn header_names(first_row: &[Cell], width: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut headers = Vec::with_capacity(width);

    for idx in 0..width {
        let raw = first_row
            .get(idx)
            .map(|cell| cell.display().trim().to_string())
            .unwrap_or_default();
        let base = if raw.is_empty() {
            default_column_name(idx)
        } else {
            raw
        };

        let mut name = base.clone();
        let mut counter = 0usize;
        while seen.contains(&name) {
            counter += 1;
            name = format!("{}_{}", base, counter);
        }
        seen.insert(name.clone());
        headers.push(name);
    }

    headers
}

/// 列ごとに最初の空でない値をサンプルとして取り出す
fn collect_samples(headers: &[String], records: &[Record]) -> Vec<ColumnSample> {
    headers
        .iter()
        .map(|header| {
            let preview = records
                .iter()
                .filter_map(|record| record.get(header))
                .find(|cell| cell.is_truthy() && !cell.is_blank())
                .map(Cell::display);
            ColumnSample {
                column: header.clone(),
                preview,
            }
        })
        .collect()
}

fn is_blank_row(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_blank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn text_row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::from(*c)).collect()
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        let result = build_import(Vec::new(), &ImportOptions::default());
        assert!(matches!(result, Err(AppError::NoData)));
    }

    #[test]
    fn test_headered_grid() {
        let grid = vec![
            text_row(&["Site", "Link", "Login", "Secret"]),
            text_row(&["", "", "", ""]),
            vec![
                Cell::from("GitHub"),
                Cell::from("https://github.com"),
                Cell::from("octocat"),
                Cell::from("hunter22"),
            ],
        ];
        let preview = build_import(grid, &ImportOptions::default()).unwrap();

        assert!(preview.has_headers);
        assert_eq!(preview.dataset.headers, vec!["Site", "Link", "Login", "Secret"]);
        assert_eq!(preview.dataset.records.len(), 1);
        assert!(preview.dataset.records[0].id.starts_with("row-"));

        let roles: Vec<Role> = preview.suggestions.iter().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![Role::Title, Role::Url, Role::Username, Role::Password]
        );
        assert!(preview.duplicate_roles.is_empty());
    }

    #[test]
    fn test_headerless_grid_gets_generated_names() {
        let grid = vec![
            vec![Cell::Number(1.0), Cell::Number(2.0)],
            vec![Cell::Number(3.0), Cell::Number(4.0), Cell::from("extra")],
        ];
        let preview = build_import(grid, &ImportOptions::default()).unwrap();

        assert!(!preview.has_headers);
        assert_eq!(
            preview.dataset.headers,
            vec!["Column 1", "Column 2", "Column 3"]
        );
        assert_eq!(preview.dataset.records.len(), 2);
        assert_eq!(
            preview.dataset.records[0].get("Column 3"),
            Some(&Cell::Empty)
        );
    }

    #[test]
    fn test_forced_header_mode() {
        let grid = vec![
            vec![Cell::Number(1.0), Cell::Number(2.0)],
            vec![Cell::Number(3.0), Cell::Number(4.0)],
        ];
        let options = ImportOptions {
            header_mode: HeaderMode::Present,
            ..ImportOptions::default()
        };
        let preview = build_import(grid, &options).unwrap();
        assert_eq!(preview.dataset.headers, vec!["1", "2"]);
        assert_eq!(preview.dataset.records.len(), 1);
    }

    #[test]
    fn test_header_names_fill_blanks_and_dedupe() {
        let names = header_names(
            &[Cell::from("Name"), Cell::from(" Name "), Cell::Empty],
            4,
        );
        assert_eq!(names, vec!["Name", "Name_1", "Column 3", "Column 4"]);
    }

    #[test]
    fn test_samples_skip_falsy_values() {
        let grid = vec![
            text_row(&["Count", "Notes"]),
            vec![Cell::Number(0.0), Cell::from("  ")],
            vec![Cell::Number(5.0), Cell::from("first note")],
        ];
        let preview = build_import(grid, &ImportOptions::default()).unwrap();
        assert_eq!(preview.samples[0].preview.as_deref(), Some("5"));
        assert_eq!(preview.samples[1].preview.as_deref(), Some("first note"));
    }

    #[test]
    fn test_duplicate_suggestions_are_reported() {
        let grid = vec![
            text_row(&["Site", "Name"]),
            text_row(&["GitHub", "octocat"]),
        ];
        let preview = build_import(grid, &ImportOptions::default()).unwrap();
        assert_eq!(preview.duplicate_roles, vec![Role::Title]);
    }
}
