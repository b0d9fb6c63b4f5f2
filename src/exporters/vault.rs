use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{AppError, Cell, Dataset, RoleAssignment};

#[derive(Serialize)]
struct VaultFile<'a> {
    mapping: &'a RoleAssignment,
    data: Vec<Map<String, Value>>,
}

/// マッピングとデータを.vault形式（整形済みJSON）で出力する
///
/// 内部IDは含めず、各行のキーは列の並び順に従う。
pub fn export_vault(dataset: &Dataset, mapping: &RoleAssignment) -> Result<Vec<u8>, AppError> {
    let data = dataset
        .records
        .iter()
        .map(|record| {
            dataset
                .headers
                .iter()
                .filter_map(|header| {
                    record
                        .get(header)
                        .map(|cell| (header.clone(), cell_to_json(cell)))
                })
                .collect::<Map<String, Value>>()
        })
        .collect();

    let vault = VaultFile { mapping, data };
    Ok(serde_json::to_vec_pretty(&vault)?)
}

fn cell_to_json(cell: &Cell) -> Value {
    match cell {
        // 元の表計算ソフトと同じく空欄は空文字で出力する
        Cell::Empty => Value::String(String::new()),
        other => serde_json::to_value(other).unwrap_or(Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColumnMapping, Record, Role};
    use std::collections::HashMap;

    #[test]
    fn test_export_vault() {
        let dataset = Dataset {
            headers: vec!["Site".to_string(), "Port".to_string(), "Note".to_string()],
            records: vec![Record {
                id: "row-1".to_string(),
                values: HashMap::from([
                    ("Port".to_string(), Cell::Number(443.0)),
                    ("Site".to_string(), Cell::from("GitHub")),
                    ("Note".to_string(), Cell::Empty),
                ]),
            }],
        };
        let mapping = RoleAssignment::from([(
            Role::Title,
            ColumnMapping {
                header: "Site".to_string(),
                label: "Title".to_string(),
            },
        )]);

        let bytes = export_vault(&dataset, &mapping).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["mapping"]["title"]["header"], "Site");
        let row = value["data"][0].as_object().unwrap();
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["Site", "Port", "Note"]);
        assert_eq!(row["Port"], 443.0);
        assert_eq!(row["Note"], "");
        assert!(!String::from_utf8(bytes).unwrap().contains("row-1"));
    }
}
