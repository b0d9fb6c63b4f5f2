use crate::models::{CardField, CardView, Cell, Record, Role, RoleAssignment};
use crate::utils::text::{ensure_scheme, favicon_url, status_tone, PASSWORD_MASK};

const UNTITLED: &str = "No Title";

/// カード本文に並べる項目の順序
const FIELD_ORDER: [Role; 6] = [
    Role::Url,
    Role::Username,
    Role::Email,
    Role::Password,
    Role::Description,
    Role::Comment,
];

/// 役割の割り当てに従ってレコードをカード表示用に変換する
pub fn build_card_view(record: &Record, mapping: &RoleAssignment) -> CardView {
    let value_of = |role: Role| -> Option<String> {
        mapping
            .get(&role)
            .and_then(|column| record.get(&column.header))
            .filter(|cell| cell.is_truthy())
            .map(Cell::display)
    };

    let title = value_of(Role::Title).unwrap_or_else(|| UNTITLED.to_string());
    let status = value_of(Role::Status);
    let tone = status.as_deref().map(status_tone);
    let category = value_of(Role::Category);
    let favicon = value_of(Role::Url).and_then(|url| favicon_url(&url));

    let mut fields = Vec::new();
    for role in FIELD_ORDER {
        let (Some(column), Some(value)) = (mapping.get(&role), value_of(role)) else {
            continue;
        };

        let (value, link) = match role {
            Role::Url => {
                let link = ensure_scheme(&value);
                (value, Some(link))
            }
            Role::Password => (PASSWORD_MASK.to_string(), None),
            _ => (value, None),
        };

        fields.push(CardField {
            role,
            label: column.label.clone(),
            value,
            link,
        });
    }

    CardView {
        id: record.id.clone(),
        title,
        favicon_url: favicon,
        category,
        status,
        status_tone: tone,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColumnMapping, StatusTone};
    use std::collections::HashMap;

    fn mapping(entries: &[(Role, &str, &str)]) -> RoleAssignment {
        entries
            .iter()
            .map(|(role, header, label)| {
                (
                    *role,
                    ColumnMapping {
                        header: header.to_string(),
                        label: label.to_string(),
                    },
                )
            })
            .collect()
    }

    fn record(values: &[(&str, Cell)]) -> Record {
        Record {
            id: "row-1".to_string(),
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_card_view_fields() {
        let mapping = mapping(&[
            (Role::Title, "Site", "Title"),
            (Role::Url, "Link", "URL"),
            (Role::Password, "Secret", "Password"),
            (Role::Status, "State", "Status"),
            (Role::Comment, "Memo", "Memo"),
        ]);
        let record = record(&[
            ("Site", Cell::from("GitHub")),
            ("Link", Cell::from("github.com")),
            ("Secret", Cell::from("hunter22")),
            ("State", Cell::from("Done")),
            ("Memo", Cell::from("")),
        ]);

        let card = build_card_view(&record, &mapping);
        assert_eq!(card.title, "GitHub");
        assert_eq!(card.status.as_deref(), Some("Done"));
        assert_eq!(card.status_tone, Some(StatusTone::Done));
        assert_eq!(
            card.favicon_url.as_deref(),
            Some("https://www.google.com/s2/favicons?domain=github.com&sz=32")
        );

        let roles: Vec<Role> = card.fields.iter().map(|f| f.role).collect();
        assert_eq!(roles, vec![Role::Url, Role::Password]);
        assert_eq!(card.fields[0].link.as_deref(), Some("https://github.com"));
        assert_eq!(card.fields[1].value, PASSWORD_MASK);
    }

    #[test]
    fn test_card_without_title_mapping() {
        let mapping = mapping(&[(Role::Username, "Login", "Account")]);
        let record = record(&[("Login", Cell::from("octocat"))]);

        let card = build_card_view(&record, &mapping);
        assert_eq!(card.title, UNTITLED);
        assert_eq!(card.fields.len(), 1);
        assert_eq!(card.fields[0].label, "Account");
        assert!(card.status_tone.is_none());
        assert!(card.favicon_url.is_none());
    }
}
