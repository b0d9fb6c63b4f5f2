use csv::WriterBuilder;

use crate::models::{AppError, Dataset};

/// CSVエクスポート（Excelで開けるようUTF-8 BOMを付ける）
pub fn export_csv(dataset: &Dataset) -> Result<Vec<u8>, AppError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    // ヘッダー行
    writer.write_record(&dataset.headers)?;

    // データ行
    for record in &dataset.records {
        let row: Vec<String> = dataset
            .headers
            .iter()
            .map(|header| record.get(header).map(|cell| cell.display()).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSVバッファ取得エラー: {}", e)))?;

    let mut output = "\u{FEFF}".as_bytes().to_vec();
    output.extend(data);
    Ok(output)
}
