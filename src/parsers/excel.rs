use std::io::Cursor;

use calamine::{open_workbook_from_rs, DataType, Ods, Reader, Xls, Xlsb, Xlsx};

use crate::models::{AppError, Cell, ImportOptions, RawGrid};

/// Excel/ODSのバイト列から指定シートをセルの表に変換する
pub fn read_excel_grid(
    bytes: &[u8],
    extension: &str,
    options: &ImportOptions,
) -> Result<RawGrid, AppError> {
    let cursor = Cursor::new(bytes);
    let sheet_index = options.sheet_index;

    match extension {
        "xlsx" | "xlsm" => read_sheet::<Xlsx<_>>(cursor, sheet_index),
        "xlsb" => read_sheet::<Xlsb<_>>(cursor, sheet_index),
        "xls" => read_sheet::<Xls<_>>(cursor, sheet_index),
        "ods" => read_sheet::<Ods<_>>(cursor, sheet_index),
        other => Err(AppError::UnsupportedFormat(other.to_string())),
    }
}

fn read_sheet<'a, R>(cursor: Cursor<&'a [u8]>, sheet_index: usize) -> Result<RawGrid, AppError>
where
    R: Reader<Cursor<&'a [u8]>>,
    R::Error: std::fmt::Display,
{
    let mut workbook = open_workbook_from_rs::<R, _>(cursor)
        .map_err(|err| AppError::Excel(err.to_string()))?;

    let range = workbook
        .worksheet_range_at(sheet_index)
        .ok_or_else(|| {
            AppError::Excel(format!(
                "ワークシートが見つかりませんでした（{}番目）",
                sheet_index + 1
            ))
        })?
        .map_err(|err| AppError::Excel(format!("ワークシートの解析に失敗しました: {err}")))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(data_type_to_cell).collect())
        .collect())
}

fn data_type_to_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::Empty => Cell::Empty,
        DataType::String(s) => Cell::String(s.clone()),
        DataType::Float(f) => Cell::Number(*f),
        DataType::Int(v) => Cell::Number(*v as f64),
        DataType::Bool(v) => Cell::Bool(*v),
        DataType::DateTime(f) => Cell::Number(*f),
        DataType::Error(_) => Cell::Empty,
        _ => Cell::String(cell.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_to_cell() {
        assert_eq!(data_type_to_cell(&DataType::Int(3)), Cell::Number(3.0));
        assert_eq!(
            data_type_to_cell(&DataType::String("Bob".to_string())),
            Cell::from("Bob")
        );
        assert_eq!(data_type_to_cell(&DataType::Empty), Cell::Empty);
        assert_eq!(data_type_to_cell(&DataType::Bool(false)), Cell::Bool(false));
    }

    #[test]
    fn test_invalid_workbook_bytes() {
        let result = read_excel_grid(b"not a workbook", "xlsx", &ImportOptions::default());
        assert!(matches!(result, Err(AppError::Excel(_))));
    }
}
