use rust_xlsxwriter::{Format, Workbook};

use crate::models::{AppError, Cell, Dataset};

const SHEET_NAME: &str = "Dashboard Data";

/// Excel（xlsx）をバッファに生成
pub fn export_xlsx(dataset: &Dataset) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| AppError::Export(format!("シート名設定エラー: {}", e)))?;

    for (col, header) in dataset.headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(|e| AppError::Export(format!("ヘッダー書き込みエラー: {}", e)))?;
    }

    for (idx, record) in dataset.records.iter().enumerate() {
        let row = (idx + 1) as u32;
        for (col, header) in dataset.headers.iter().enumerate() {
            let col = col as u16;
            let result = match record.get(header) {
                Some(Cell::String(s)) => worksheet.write_string(row, col, s),
                Some(Cell::Number(n)) => worksheet.write_number(row, col, *n),
                Some(Cell::Bool(b)) => worksheet.write_boolean(row, col, *b),
                Some(Cell::Empty) | None => continue,
            };
            result.map_err(|e| AppError::Export(format!("セル書き込みエラー: {}", e)))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::Export(format!("Excel生成エラー: {}", e)))
}
