use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::{AppError, Cell, ColumnMapping, Dataset, Record, Role, RoleAssignment};

use super::builder::new_record_id;

#[derive(Deserialize)]
struct VaultFile {
    mapping: Option<Map<String, Value>>,
    data: Option<Vec<Map<String, Value>>>,
}

/// .vaultファイル（マッピングとデータのJSON）を読み込む
///
/// # 引数
/// * `content` - ファイル内容
///
/// # 戻り値
/// 役割の割り当てと、IDを振り直したデータ
pub fn parse_vault(content: &str) -> Result<(RoleAssignment, Dataset), AppError> {
    let vault: VaultFile = serde_json::from_str(content)?;

    let (Some(raw_mapping), Some(rows)) = (vault.mapping, vault.data) else {
        tracing::warn!("mapping または data を含まない.vaultファイルです");
        return Err(AppError::InvalidVault);
    };

    // 文書中の順に処理し、同じ役割に正規化されるキーは後のものを採用する
    let mut mapping = RoleAssignment::new();
    for (key, raw_column) in raw_mapping {
        match Role::from_name(&key) {
            Some(Role::None) | None => {
                tracing::warn!(role = %key, "未知の役割を読み飛ばしました");
            }
            Some(role) => {
                let column: ColumnMapping = serde_json::from_value(raw_column)?;
                mapping.insert(role, column);
            }
        }
    }

    let mut headers: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let mut values = HashMap::new();
        for (key, value) in row {
            if seen.insert(key.clone()) {
                headers.push(key.clone());
            }
            values.insert(key, json_to_cell(value));
        }
        records.push(Record {
            id: new_record_id(),
            values,
        });
    }

    Ok((mapping, Dataset { headers, records }))
}

fn json_to_cell(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Empty,
        Value::Bool(b) => Cell::Bool(b),
        Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
        Value::String(s) => Cell::String(s),
        other => Cell::String(other.to_string()),
    }
}
