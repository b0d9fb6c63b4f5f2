mod builder;
mod csv;
mod excel;
mod vault;

use std::path::Path;

use crate::models::{AppError, ImportOptions, ImportPreview};

pub use builder::{build_import, new_record_id};
pub use vault::parse_vault;

/// スプレッドシートのバイト列を読み込み、インポート候補を返す
///
/// # 引数
/// * `bytes` - ファイル内容
/// * `file_name` - 拡張子の判定に使うファイル名
/// * `options` - 読み込みオプション
pub fn parse_spreadsheet(
    bytes: &[u8],
    file_name: &str,
    options: &ImportOptions,
) -> Result<ImportPreview, AppError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .ok_or_else(|| AppError::UnsupportedFormat(file_name.to_string()))?;

    let grid = match ext.as_str() {
        "csv" => csv::read_csv_grid(bytes, options)?,
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => excel::read_excel_grid(bytes, &ext, options)?,
        other => {
            tracing::warn!(extension = other, "サポートされていないファイル形式です");
            return Err(AppError::UnsupportedFormat(other.to_string()));
        }
    };

    build_import(grid, options)
}
