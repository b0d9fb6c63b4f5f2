use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// スプレッドシートの1セル
///
/// JSONとの相互変換では文字列/数値/真偽値/nullとしてそのまま表現する
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Bool(bool),
    Number(f64),
    String(String),
    #[default]
    Empty,
}

/// セルのプリミティブ型（ヘッダー判定の型シグネチャに使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    String,
    Number,
    Boolean,
    Empty,
}

impl Cell {
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::String(_) => CellKind::String,
            Cell::Number(_) => CellKind::Number,
            Cell::Bool(_) => CellKind::Boolean,
            Cell::Empty => CellKind::Empty,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// 空セル、または空白のみの文字列
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 値として「有る」かどうか（空文字・0・false・空セルは無し扱い）
    pub fn is_truthy(&self) -> bool {
        match self {
            Cell::String(s) => !s.is_empty(),
            Cell::Number(n) => *n != 0.0 && !n.is_nan(),
            Cell::Bool(b) => *b,
            Cell::Empty => false,
        }
    }

    /// 表示用の文字列に変換
    pub fn display(&self) -> String {
        match self {
            Cell::String(s) => s.clone(),
            Cell::Number(f) => {
                if f.is_finite() && f.fract().abs() < f64::EPSILON {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
            Cell::Bool(b) => b.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::String(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::String(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

/// 行×列のセル（ヘッダー有無は未確定）
pub type RawGrid = Vec<Vec<Cell>>;

/// カードの項目役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    None,
    Title,
    Category,
    Status,
    Description,
    Username,
    Password,
    Url,
    Email,
    Comment,
}

impl Role {
    pub const ALL: [Role; 10] = [
        Role::None,
        Role::Title,
        Role::Category,
        Role::Status,
        Role::Description,
        Role::Username,
        Role::Password,
        Role::Url,
        Role::Email,
        Role::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::None => "none",
            Role::Title => "title",
            Role::Category => "category",
            Role::Status => "status",
            Role::Description => "description",
            Role::Username => "username",
            Role::Password => "password",
            Role::Url => "url",
            Role::Email => "email",
            Role::Comment => "comment",
        }
    }

    /// 役割選択肢の表示名
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::None => "Ignore",
            Role::Title => "Title (Large text)",
            Role::Category => "Category (Smaller text)",
            Role::Status => "Status (Label)",
            Role::Description => "Description (Body text)",
            Role::Username => "Username",
            Role::Password => "Password",
            Role::Url => "URL (Link)",
            Role::Email => "Email",
            Role::Comment => "Comment",
        }
    }

    /// カード上のラベル既定値（表示名の括弧より前）
    pub fn default_label(&self) -> String {
        self.display_name()
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    pub fn from_name(name: &str) -> Option<Role> {
        let normalized = name.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub header: String,
    pub label: String,
}

/// 役割 → 列の割り当て（1役割につき1列、noneは含まない）
pub type RoleAssignment = BTreeMap<Role, ColumnMapping>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub values: HashMap<String, Cell>,
}

impl Record {
    pub fn get(&self, header: &str) -> Option<&Cell> {
        self.values.get(header)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSample {
    pub column: String,
    pub preview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSuggestion {
    pub column: String,
    pub role: Role,
    pub label: String,
}

/// マッピング画面でユーザーが確定した列の役割
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSelection {
    pub column: String,
    pub role: Role,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    pub dataset: Dataset,
    pub has_headers: bool,
    pub samples: Vec<ColumnSample>,
    pub suggestions: Vec<ColumnSuggestion>,
    pub duplicate_roles: Vec<Role>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    #[default]
    Auto,
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportOptions {
    pub header_mode: HeaderMode,
    pub sheet_index: usize,
    pub delimiter: u8,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            header_mode: HeaderMode::Auto,
            sheet_index: 0,
            delimiter: b',',
        }
    }
}

/// 絞り込み条件（category/statusはNoneで「すべて」）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Done,
    InProgress,
    Problem,
    Planned,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardField {
    pub role: Role,
    pub label: String,
    pub value: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub favicon_url: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub status_tone: Option<StatusTone>,
    pub fields: Vec<CardField>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("CSVの解析に失敗しました: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excelファイルの読み込みに失敗しました: {0}")]
    Excel(String),

    #[error("JSONの解析に失敗しました: {0}")]
    Json(#[from] serde_json::Error),

    #[error("エクスポートに失敗しました: {0}")]
    Export(String),

    #[error("サポートされていないファイル形式です: {0}")]
    UnsupportedFormat(String),

    #[error("ファイル内にデータが見つかりませんでした。")]
    NoData,

    #[error("ファイル内の列を特定できませんでした。")]
    NoColumns,

    #[error("少なくとも1つの列に役割を割り当ててください。")]
    EmptyMapping,

    #[error("同じ役割が複数の列に割り当てられています: {}", join_roles(.0))]
    DuplicateRoles(Vec<Role>),

    #[error("無効な.vaultファイルです。")]
    InvalidVault,

    #[error("カードが見つかりません: {0}")]
    CardNotFound(String),

    #[error("ダッシュボードはロックされています。")]
    Locked,
}

fn join_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AppError", 1)?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
