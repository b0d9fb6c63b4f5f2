use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i-u)^(https?://)?",                                 // スキーム（ASCIIのみ大小無視）
        r"((([a-z0-9]([a-z0-9-]*[a-z0-9])*)\.)+[a-z]{2,}|",    // ドメイン名
        r"(([0-9]{1,3}\.){3}[0-9]{1,3}))",                      // またはIPv4
        r"(:[0-9]+)?(/[-a-z0-9%_.~+]*)*",                       // ポートとパス
        r"(\?[;&a-z0-9%_.~+=-]*)?",                             // クエリ
        r"(#[-a-z0-9_]*)?$",                                    // フラグメント
    ))
    .expect("URL pattern must compile")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))"#,
        r"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$",
    ))
    .expect("email pattern must compile")
});

/// URLらしい文字列かどうか（構文のみ、接続確認はしない）
pub fn is_url(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    URL_PATTERN.is_match(value)
}

pub fn is_email(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    EMAIL_PATTERN.is_match(value)
}

/// パスワードらしい文字列かどうか
///
/// 長さ（UTF-16単位）が6〜30で英字と数字を両方含むものを真とする簡易判定。
/// 数字のない長いパスフレーズなどは偽になる。
pub fn is_likely_password(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    let length = value.encode_utf16().count();
    (6..=30).contains(&length)
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_alphabetic())
}
