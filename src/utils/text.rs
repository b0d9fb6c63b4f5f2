use url::Url;

use crate::models::StatusTone;

/// ステータス文字列を表示トーンに変換
pub fn status_tone(value: &str) -> StatusTone {
    let normalized = value.trim().to_lowercase();
    match normalized.as_str() {
        "completed" | "done" | "finished" => StatusTone::Done,
        "in progress" | "ongoing" | "active" => StatusTone::InProgress,
        "problem" | "error" | "failed" | "stuck" => StatusTone::Problem,
        "planned" | "todo" | "next" => StatusTone::Planned,
        _ => StatusTone::Neutral,
    }
}

/// スキームのないURLに https:// を補う
pub fn ensure_scheme(value: &str) -> String {
    if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://{}", value)
    }
}

/// URLのホスト名からファビコン取得用URLを組み立てる
pub fn favicon_url(value: &str) -> Option<String> {
    let parsed = Url::parse(&ensure_scheme(value)).ok()?;
    let host = parsed.host_str()?;
    Some(format!(
        "https://www.google.com/s2/favicons?domain={}&sz=32",
        host
    ))
}

/// パスワード表示用のマスク
pub const PASSWORD_MASK: &str = "••••••••";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tone() {
        assert_eq!(status_tone("Done"), StatusTone::Done);
        assert_eq!(status_tone(" in progress "), StatusTone::InProgress);
        assert_eq!(status_tone("STUCK"), StatusTone::Problem);
        assert_eq!(status_tone("todo"), StatusTone::Planned);
        assert_eq!(status_tone("archived"), StatusTone::Neutral);
    }

    #[test]
    fn test_ensure_scheme() {
        assert_eq!(ensure_scheme("example.com"), "https://example.com");
        assert_eq!(ensure_scheme("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_favicon_url() {
        assert_eq!(
            favicon_url("github.com/login").as_deref(),
            Some("https://www.google.com/s2/favicons?domain=github.com&sz=32")
        );
        assert_eq!(favicon_url("http://"), None);
    }
}
