use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime, Time,
};

const SECONDS_PER_DAY: i64 = 86_400;

/// Parses the timestamp formats the API emits.
///
/// Timestamps without an offset are taken as UTC.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<OffsetDateTime> {
    let s = s.trim();
    if let Ok(ts) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(ts);
    }
    let naive_t = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    let naive_space = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    if let Ok(ts) = PrimitiveDateTime::parse(s, naive_t)
        .or_else(|_| PrimitiveDateTime::parse(s, naive_space))
    {
        return Some(ts.assume_utc());
    }
    let dashed = format_description!("[year]-[month]-[day]");
    let slashed = format_description!("[year]/[month padding:none]/[day padding:none]");
    Date::parse(s, dashed)
        .or_else(|_| Date::parse(s, slashed))
        .ok()
        .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc())
}

/// Minute-granular age of a comment.
#[must_use]
pub fn relative_time(ts: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - ts;
    let minutes = elapsed.whole_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return ago(minutes, "minute");
    }
    let hours = elapsed.whole_hours();
    if hours < 24 {
        return ago(hours, "hour");
    }
    let days = elapsed.whole_days();
    if days < 7 {
        return ago(days, "day");
    }
    long_date(ts)
}

/// Formats the `created_at` value of a comment.
///
/// Unparseable input is shown as is.
#[must_use]
pub fn format_comment_date(created_at: &str, now: OffsetDateTime) -> String {
    parse_timestamp(created_at).map_or_else(|| created_at.to_string(), |ts| relative_time(ts, now))
}

/// Day-granular age, e.g. for article dates.
#[must_use]
pub fn format_date(date: &str, now: OffsetDateTime) -> String {
    let Some(ts) = parse_timestamp(date) else {
        return date.to_string();
    };
    let days = (now - ts).whole_seconds().div_euclid(SECONDS_PER_DAY);
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => ago(days, "day"),
        _ => short_date(ts),
    }
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

fn long_date(ts: OffsetDateTime) -> String {
    ts.format(format_description!(
        "[month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| ts.date().to_string())
}

fn short_date(ts: OffsetDateTime) -> String {
    ts.format(format_description!(
        "[month padding:none]/[day padding:none]/[year]"
    ))
    .unwrap_or_else(|_| ts.date().to_string())
}
