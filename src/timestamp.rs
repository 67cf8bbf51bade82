use chrono::{NaiveDateTime, Utc};

pub const FORMAT: &str = "%Y%m%dT%H%M%S";

/// Parses `YYYYMMDDThhmmss`. Anything unparsable becomes `NaiveDateTime::MIN`,
/// so it always sorts as long past.
pub fn parse_or_min(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, FORMAT).unwrap_or(NaiveDateTime::MIN)
}

/// Feed timestamps are zone-less and compared as UTC.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// `20210914T080000` -> `14.09 08:00`. Strings too short to slice are returned as-is.
pub fn display(raw: &str) -> String {
    let parts = (raw.get(4..6), raw.get(6..8), raw.get(9..11), raw.get(11..13));
    match parts {
        (Some(month), Some(day), Some(hour), Some(minute)) => {
            format!("{day}.{month} {hour}:{minute}")
        }
        _ => raw.to_string(),
    }
}
