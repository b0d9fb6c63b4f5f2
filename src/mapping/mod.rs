pub mod classifier;

use std::collections::BTreeSet;

use crate::models::{
    AppError, ColumnMapping, ColumnSample, ColumnSelection, ColumnSuggestion, Role, RoleAssignment,
};

pub use classifier::classify;

/// 各列の役割候補を自動推定する
///
/// # 引数
/// * `samples` - 列名とサンプル値
///
/// # 戻り値
/// 列ごとの役割候補（noneの列はラベル空）
pub fn suggest_roles(samples: &[ColumnSample]) -> Vec<ColumnSuggestion> {
    samples
        .iter()
        .map(|sample| {
            let role = classify(&sample.column, sample.preview.as_deref());
            let label = if role == Role::None {
                String::new()
            } else {
                role.default_label()
            };
            ColumnSuggestion {
                column: sample.column.clone(),
                role,
                label,
            }
        })
        .collect()
}

/// 複数の列に割り当てられている役割（none以外）を返す
pub fn find_duplicate_roles<'a, I>(roles: I) -> BTreeSet<Role>
where
    I: IntoIterator<Item = &'a Role>,
{
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for role in roles {
        if *role == Role::None {
            continue;
        }
        if !seen.insert(*role) {
            duplicates.insert(*role);
        }
    }
    duplicates
}

/// ユーザーが確定した選択から役割の割り当てを作る
///
/// 同じ役割の重複は上書きせずにエラーとして返す。
pub fn build_role_assignment(selections: &[ColumnSelection]) -> Result<RoleAssignment, AppError> {
    let duplicates = find_duplicate_roles(selections.iter().map(|selection| &selection.role));
    if !duplicates.is_empty() {
        return Err(AppError::DuplicateRoles(duplicates.into_iter().collect()));
    }

    let mut assignment = RoleAssignment::new();
    for selection in selections {
        if selection.role == Role::None {
            continue;
        }

        let label = selection
            .label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| selection.role.default_label());

        assignment.insert(
            selection.role,
            ColumnMapping {
                header: selection.column.clone(),
                label,
            },
        );
    }

    if assignment.is_empty() {
        return Err(AppError::EmptyMapping);
    }

    Ok(assignment)
}
