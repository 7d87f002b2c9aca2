//! Pre-write normalization for event fields.
//!
//! The write path calls these before persistence; each returns a canonical
//! value or a typed error that fails the write. No framework hooks are
//! involved, normalization is an explicit step in the service layer.

use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());
static TIME_12H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})\s*([AaPp][Mm])$").unwrap());
static TIME_24H: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

/// Normalization failure for a date or time field.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Invalid date provided: \"{0}\"")]
    InvalidDate(String),

    #[error("Invalid time provided: \"{0}\"")]
    InvalidTime(String),

    #[error("Unsupported time format: \"{0}\"")]
    UnsupportedTimeFormat(String),
}

/// Derive a URL-safe slug from an event title.
///
/// Lowercases, replaces runs of non-alphanumeric characters with a single
/// hyphen, and strips leading/trailing hyphens.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let hyphenated = NON_ALNUM_RUN.replace_all(&lowered, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Normalize a date string to canonical `YYYY-MM-DD`.
///
/// Accepts unpadded month/day components ("2026-3-18" becomes "2026-03-18").
pub fn normalize_date(date: &str) -> Result<String, NormalizeError> {
    let trimmed = date.trim();
    chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| NormalizeError::InvalidDate(date.to_string()))
}

/// Normalize a time string to zero-padded 24-hour `HH:MM`.
///
/// Accepts `H:MM`/`HH:MM` (24-hour) and `H:MM AM/PM` (12-hour, hours 1-12).
/// Out-of-range or unparseable input is an error.
pub fn normalize_time(time: &str) -> Result<String, NormalizeError> {
    let trimmed = time.trim();

    if let Some(caps) = TIME_12H.captures(trimmed) {
        let mut hour: u32 = caps[1]
            .parse()
            .map_err(|_| NormalizeError::InvalidTime(time.to_string()))?;
        let minute: u32 = caps[2]
            .parse()
            .map_err(|_| NormalizeError::InvalidTime(time.to_string()))?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(NormalizeError::InvalidTime(time.to_string()));
        }
        let meridian = caps[3].to_lowercase();
        if meridian == "pm" && hour != 12 {
            hour += 12;
        }
        if meridian == "am" && hour == 12 {
            hour = 0;
        }
        return Ok(format!("{:02}:{:02}", hour, minute));
    }

    if let Some(caps) = TIME_24H.captures(trimmed) {
        let hour: u32 = caps[1]
            .parse()
            .map_err(|_| NormalizeError::InvalidTime(time.to_string()))?;
        let minute: u32 = caps[2]
            .parse()
            .map_err(|_| NormalizeError::InvalidTime(time.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(NormalizeError::InvalidTime(time.to_string()));
        }
        return Ok(format!("{:02}:{:02}", hour, minute));
    }

    Err(NormalizeError::UnsupportedTimeFormat(time.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_replaces_punctuation_runs() {
        assert_eq!(slugify("My Cool Talk!!"), "my-cool-talk");
    }

    #[test]
    fn test_slugify_strips_edge_hyphens() {
        assert_eq!(slugify("  --Rust & Friends--  "), "rust-friends");
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(slugify("a   b---c"), "a-b-c");
    }

    #[test]
    fn test_normalize_date_pads_components() {
        assert_eq!(normalize_date("2026-3-18").unwrap(), "2026-03-18");
        assert_eq!(normalize_date("2026-03-18").unwrap(), "2026-03-18");
    }

    #[test]
    fn test_normalize_date_rejects_garbage() {
        assert!(normalize_date("next tuesday").is_err());
        assert!(normalize_date("2026-13-01").is_err());
    }

    #[test]
    fn test_normalize_time_12_hour() {
        assert_eq!(normalize_time("9:30 PM").unwrap(), "21:30");
        assert_eq!(normalize_time("09:30 pm").unwrap(), "21:30");
        assert_eq!(normalize_time("12:00 AM").unwrap(), "00:00");
        assert_eq!(normalize_time("12:15 PM").unwrap(), "12:15");
    }

    #[test]
    fn test_normalize_time_24_hour() {
        assert_eq!(normalize_time("9:30").unwrap(), "09:30");
        assert_eq!(normalize_time("18:05").unwrap(), "18:05");
        assert_eq!(normalize_time("0:00").unwrap(), "00:00");
    }

    #[test]
    fn test_normalize_time_rejects_out_of_range() {
        assert!(normalize_time("25:99").is_err());
        assert!(normalize_time("13:00 PM").is_err());
        assert!(normalize_time("10:75").is_err());
    }

    #[test]
    fn test_normalize_time_rejects_unsupported_formats() {
        assert!(normalize_time("noon").is_err());
        assert!(normalize_time("1830").is_err());
    }
}
