use chrono::NaiveDate;
use devlog_core::entities::TimeEntry;
use devlog_core::enums::Mood;
use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Parse a mood for input. Case and `-`/`_` are normalized; only the closed
/// set is accepted.
pub fn parse_mood(raw: &str) -> anyhow::Result<Mood> {
    let mood = Mood::parse(&raw.trim().to_ascii_uppercase().replace('-', "_"));
    if !mood.is_recognized() {
        let allowed: Vec<&str> = Mood::ALL.iter().map(Mood::as_str).collect();
        anyhow::bail!("invalid mood '{raw}': expected one of {}", allowed.join(", "));
    }
    Ok(mood)
}

/// Parse a `task:HhMm` time entry, e.g. `api:2h30m`, `review:45m` or `docs:1h`.
pub fn parse_time_entry(raw: &str) -> anyhow::Result<TimeEntry> {
    let (task_id, duration) = raw
        .rsplit_once(':')
        .ok_or_else(|| anyhow::anyhow!("invalid time entry '{raw}': expected task:HhMm"))?;
    if task_id.trim().is_empty() {
        anyhow::bail!("invalid time entry '{raw}': task id is empty");
    }
    if duration.trim().is_empty() {
        anyhow::bail!("invalid time entry '{raw}': no duration");
    }

    let (hours, rest) = match duration.split_once('h') {
        Some((hours, rest)) => (hours, rest),
        None => ("0", duration),
    };
    let minutes = rest.strip_suffix('m').unwrap_or(rest);

    let number = |value: &str, unit: &str| -> anyhow::Result<u8> {
        if value.is_empty() {
            return Ok(0);
        }
        value
            .parse::<u8>()
            .map_err(|error| anyhow::anyhow!("invalid {unit} in time entry '{raw}': {error}"))
    };

    let entry = TimeEntry {
        task_id: task_id.trim().to_string(),
        hours: number(hours, "hours")?,
        minutes: number(minutes, "minutes")?,
    };
    entry.validate()?;
    Ok(entry)
}
