use std::collections::BTreeSet;

use crate::matchers::helpers::{cell_equals, record_matches};
use crate::models::{Dataset, FilterCriteria, Record, Role, RoleAssignment};

/// 絞り込み条件に一致するレコードを返す
///
/// カテゴリ・ステータスは列が割り当てられていない場合は無視する。
pub fn filter_records<'a>(
    dataset: &'a Dataset,
    mapping: &RoleAssignment,
    criteria: &FilterCriteria,
) -> Vec<&'a Record> {
    let selected = |role: Role, value: &Option<String>| -> Option<(String, String)> {
        let header = mapping.get(&role)?.header.clone();
        value.clone().map(|value| (header, value))
    };
    let category = selected(Role::Category, &criteria.category);
    let status = selected(Role::Status, &criteria.status);

    dataset
        .records
        .iter()
        .filter(|record| {
            let category_match = category
                .as_ref()
                .map(|(header, value)| cell_equals(record.get(header), value))
                .unwrap_or(true);
            let status_match = status
                .as_ref()
                .map(|(header, value)| cell_equals(record.get(header), value))
                .unwrap_or(true);
            category_match && status_match && record_matches(record, &criteria.search)
        })
        .collect()
}

/// 役割に割り当てられた列の値の一覧（重複なし・昇順）
pub fn filter_options(dataset: &Dataset, mapping: &RoleAssignment, role: Role) -> Vec<String> {
    let Some(column) = mapping.get(&role) else {
        return Vec::new();
    };

    dataset
        .records
        .iter()
        .filter_map(|record| record.get(&column.header))
        .filter(|cell| cell.is_truthy())
        .map(|cell| cell.display())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, ColumnMapping};
    use std::collections::HashMap;

    fn sample() -> (Dataset, RoleAssignment) {
        let rows = [
            ("GitHub", "Dev", "Done"),
            ("Jira", "Work", "Active"),
            ("GitLab", "Dev", "Planned"),
            ("Wiki", "", "Done"),
        ];
        let records = rows
            .iter()
            .enumerate()
            .map(|(idx, (site, group, state))| Record {
                id: format!("row-{}", idx),
                values: HashMap::from([
                    ("Site".to_string(), Cell::from(*site)),
                    ("Group".to_string(), Cell::from(*group)),
                    ("State".to_string(), Cell::from(*state)),
                ]),
            })
            .collect();
        let dataset = Dataset {
            headers: vec!["Site".into(), "Group".into(), "State".into()],
            records,
        };
        let mapping = RoleAssignment::from([
            (
                Role::Category,
                ColumnMapping {
                    header: "Group".into(),
                    label: "Category".into(),
                },
            ),
            (
                Role::Status,
                ColumnMapping {
                    header: "State".into(),
                    label: "Status".into(),
                },
            ),
        ]);
        (dataset, mapping)
    }

    fn ids(records: Vec<&Record>) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_no_criteria_returns_all() {
        let (dataset, mapping) = sample();
        let result = filter_records(&dataset, &mapping, &FilterCriteria::default());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_category_and_search() {
        let (dataset, mapping) = sample();
        let criteria = FilterCriteria {
            search: "GIT".to_string(),
            category: Some("Dev".to_string()),
            status: None,
        };
        assert_eq!(
            ids(filter_records(&dataset, &mapping, &criteria)),
            vec!["row-0", "row-2"]
        );
    }

    #[test]
    fn test_status_filter() {
        let (dataset, mapping) = sample();
        let criteria = FilterCriteria {
            status: Some("Done".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(
            ids(filter_records(&dataset, &mapping, &criteria)),
            vec!["row-0", "row-3"]
        );
    }

    #[test]
    fn test_unmapped_filter_is_ignored() {
        let (dataset, _) = sample();
        let criteria = FilterCriteria {
            category: Some("Dev".to_string()),
            ..FilterCriteria::default()
        };
        let result = filter_records(&dataset, &RoleAssignment::new(), &criteria);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_filter_options() {
        let (dataset, mapping) = sample();
        assert_eq!(
            filter_options(&dataset, &mapping, Role::Category),
            vec!["Dev", "Work"]
        );
        assert_eq!(
            filter_options(&dataset, &mapping, Role::Status),
            vec!["Active", "Done", "Planned"]
        );
        assert!(filter_options(&dataset, &mapping, Role::Title).is_empty());
    }
}
