pub mod card;
pub mod filter;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::mapping::build_role_assignment;
use crate::models::{
    AppError, CardView, Cell, ColumnMapping, ColumnSelection, Dataset, FilterCriteria, ImportPreview,
    Record, Role, RoleAssignment,
};
use crate::parsers::{new_record_id, parse_vault};

pub use card::build_card_view;
pub use filter::{filter_options, filter_records};

/// 新規カード入力欄の並び順
pub const NEW_CARD_ROLES: [Role; 9] = [
    Role::Title,
    Role::Url,
    Role::Username,
    Role::Password,
    Role::Email,
    Role::Category,
    Role::Status,
    Role::Description,
    Role::Comment,
];

/// ダッシュボードの状態（表示中のデータ・役割の割り当て・ロック）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    dataset: Dataset,
    mapping: RoleAssignment,
    locked: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn mapping(&self) -> &RoleAssignment {
        &self.mapping
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.records.is_empty()
    }

    fn ensure_unlocked(&self) -> Result<(), AppError> {
        if self.locked {
            return Err(AppError::Locked);
        }
        Ok(())
    }

    /// インポート候補を確定し、ダッシュボードの内容を置き換える
    ///
    /// # 引数
    /// * `preview` - 読み込み済みのインポート候補
    /// * `selections` - ユーザーが確定した列の役割
    ///
    /// # 戻り値
    /// 取り込んだカード数
    pub fn commit_import(
        &mut self,
        preview: ImportPreview,
        selections: &[ColumnSelection],
    ) -> Result<usize, AppError> {
        self.ensure_unlocked()?;
        let mapping = build_role_assignment(selections)?;

        let mut dataset = preview.dataset;
        for record in dataset.records.iter_mut() {
            record.id = new_record_id();
        }

        self.dataset = dataset;
        self.mapping = mapping;

        let count = self.dataset.records.len();
        tracing::info!(cards = count, "カードを取り込みました");
        Ok(count)
    }

    /// .vaultファイルの内容でダッシュボードを置き換える
    pub fn load_vault(&mut self, content: &str) -> Result<usize, AppError> {
        self.ensure_unlocked()?;
        let (mapping, dataset) = parse_vault(content)?;

        self.dataset = dataset;
        self.mapping = mapping;

        let count = self.dataset.records.len();
        tracing::info!(cards = count, "vaultを読み込みました");
        Ok(count)
    }

    /// カードを1件追加する
    ///
    /// 割り当てのない役割に値が入力された場合は、役割名を列名として割り当てを作る。
    ///
    /// # 戻り値
    /// 追加したカードのID（入力がすべて空の場合は None）
    pub fn add_card(&mut self, inputs: &BTreeMap<Role, String>) -> Result<Option<String>, AppError> {
        self.ensure_unlocked()?;

        let mut values: HashMap<String, Cell> = HashMap::new();
        for role in NEW_CARD_ROLES {
            let Some(value) = inputs.get(&role) else {
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }

            let header = self
                .mapping
                .entry(role)
                .or_insert_with(|| ColumnMapping {
                    header: role.as_str().to_string(),
                    label: role.default_label(),
                })
                .header
                .clone();

            if !self.dataset.headers.contains(&header) {
                self.dataset.headers.push(header.clone());
            }
            values.insert(header, value.clone().into());
        }

        if values.is_empty() {
            return Ok(None);
        }

        let id = new_record_id();
        self.dataset.records.push(Record {
            id: id.clone(),
            values,
        });
        tracing::debug!(id = %id, "カードを追加しました");
        Ok(Some(id))
    }

    pub fn delete_card(&mut self, id: &str) -> Result<(), AppError> {
        self.ensure_unlocked()?;

        let position = self
            .dataset
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| AppError::CardNotFound(id.to_string()))?;

        self.dataset.records.remove(position);
        tracing::debug!(id = %id, "カードを削除しました");
        Ok(())
    }

    /// 編集ロックを切り替え、切り替え後の状態を返す
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }

    /// データと割り当てを破棄して初期状態に戻す
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.ensure_unlocked()?;
        *self = Self::default();
        tracing::info!("ダッシュボードを初期化しました");
        Ok(())
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Record> {
        filter_records(&self.dataset, &self.mapping, criteria)
    }

    pub fn filter_options(&self, role: Role) -> Vec<String> {
        filter_options(&self.dataset, &self.mapping, role)
    }

    pub fn card_views(&self, criteria: &FilterCriteria) -> Vec<CardView> {
        self.filter(criteria)
            .into_iter()
            .map(|record| build_card_view(record, &self.mapping))
            .collect()
    }
}
