use chrono::{DateTime, Local, Utc};

fn local(millis: i64) -> Option<DateTime<Local>> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|d| d.with_timezone(&Local))
}

// "Mar 4, 2026"
pub fn short_date(millis: i64) -> String {
    local(millis)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

// "09:41"
pub fn clock_time(millis: i64) -> String {
    local(millis)
        .map(|d| d.format("%H:%M").to_string())
        .unwrap_or_default()
}

pub fn comment_count(count: usize) -> String {
    match count {
        0 => "No comments".to_string(),
        1 => "1 comment".to_string(),
        n => format!("{} comments", n),
    }
}
