pub mod csv;
pub mod excel;
pub mod vault;

use crate::dashboard::Dashboard;
use crate::models::AppError;

/// ダッシュボードの内容をエクスポート
///
/// # 引数
/// * `dashboard` - エクスポートするダッシュボード
/// * `format` - 出力フォーマット（"csv", "xlsx", "vault"）
///
/// # 戻り値
/// エクスポートされたファイル内容
pub fn export_dashboard(dashboard: &Dashboard, format: &str) -> Result<Vec<u8>, AppError> {
    let dataset = dashboard.dataset();
    let bytes = match format.trim().to_uppercase().as_str() {
        "CSV" => csv::export_csv(dataset)?,
        "XLSX" => excel::export_xlsx(dataset)?,
        "VAULT" => vault::export_vault(dataset, dashboard.mapping())?,
        other => {
            tracing::warn!(format = other, "未対応のエクスポート形式です");
            return Err(AppError::UnsupportedFormat(other.to_string()));
        }
    };

    tracing::info!(
        format = format,
        cards = dataset.records.len(),
        bytes = bytes.len(),
        "エクスポートしました"
    );
    Ok(bytes)
}
