//! スプレッドシートの列をカード項目に割り当てるダッシュボードのコア
//!
//! 列名とサンプル値からの役割推定、1行目がヘッダーかどうかの判定、
//! 取り込んだデータの絞り込み・カード表示・エクスポートを提供する。

pub mod dashboard;
pub mod exporters;
pub mod mapping;
pub mod matchers;
pub mod models;
pub mod parsers;
pub mod utils;

pub use dashboard::Dashboard;
pub use exporters::export_dashboard;
pub use mapping::{build_role_assignment, classify, find_duplicate_roles, suggest_roles};
pub use matchers::{is_email, is_likely_password, is_url};
pub use models::{AppError, Cell, ColumnMapping, ImportOptions, ImportPreview, Role, RoleAssignment};
pub use parsers::{build_import, parse_spreadsheet, parse_vault};
pub use utils::header::{detect_header, has_headers, HeaderReason, HeaderVerdict};
