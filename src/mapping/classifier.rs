use crate::matchers::helpers::contains_any;
use crate::matchers::{is_email, is_likely_password, is_url};
use crate::models::Role;
use crate::utils::header::normalize_header;

/// 列名とサンプル値から役割を推定する規則
pub struct RoleRule {
    pub role: Role,
    pub name_terms: &'static [&'static str],
    pub value_check: Option<fn(&str) -> bool>,
}

impl RoleRule {
    fn matches(&self, normalized_name: &str, preview: &str) -> bool {
        contains_any(normalized_name, self.name_terms)
            || self.value_check.is_some_and(|check| check(preview))
    }
}

/// 上から順に評価し、最初に一致した規則の役割を採用する。
/// "website" は title と url の両方にあるが、title が先に評価される。
pub const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        role: Role::Title,
        name_terms: &["title", "name", "header", "subject", "site", "website"],
        value_check: None,
    },
    RoleRule {
        role: Role::Url,
        name_terms: &["url", "link", "href", "website"],
        value_check: Some(is_url),
    },
    RoleRule {
        role: Role::Username,
        name_terms: &["user", "username", "login"],
        value_check: None,
    },
    RoleRule {
        role: Role::Password,
        name_terms: &["password", "pwd", "pass"],
        value_check: Some(is_likely_password),
    },
    RoleRule {
        role: Role::Category,
        name_terms: &["category", "group", "type"],
        value_check: None,
    },
    RoleRule {
        role: Role::Status,
        name_terms: &["status", "state"],
        value_check: None,
    },
    RoleRule {
        role: Role::Description,
        name_terms: &["description", "desc", "notes", "note", "details"],
        value_check: None,
    },
    RoleRule {
        role: Role::Email,
        name_terms: &["email", "e-mail"],
        value_check: Some(is_email),
    },
    RoleRule {
        role: Role::Comment,
        name_terms: &["comment", "remark"],
        value_check: None,
    },
];

/// 列名とサンプル値から役割を推定する
///
/// 列ごとに独立して判定するため、複数列が同じ役割になることがある。
pub fn classify(column_name: &str, preview: Option<&str>) -> Role {
    let normalized = normalize_header(column_name);
    let preview = preview.unwrap_or_default();

    ROLE_RULES
        .iter()
        .find(|rule| rule.matches(&normalized, preview))
        .map(|rule| rule.role)
        .unwrap_or(Role::None)
}
