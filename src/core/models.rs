use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Requested summary length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPreset {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthPreset {
    /// Parses a request value; anything unrecognized falls back to `Medium`.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("short") => LengthPreset::Short,
            Some("long") => LengthPreset::Long,
            _ => LengthPreset::Medium,
        }
    }

    #[must_use]
    pub fn bounds(self) -> LengthBounds {
        match self {
            LengthPreset::Short => LengthBounds::new(15, 30),
            LengthPreset::Medium => LengthBounds::new(50, 100),
            LengthPreset::Long => LengthBounds::new(100, 180),
        }
    }
}

/// Minimum and maximum output length, in model tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min_length: u32,
    pub max_length: u32,
}

impl LengthBounds {
    #[must_use]
    pub const fn new(min_length: u32, max_length: u32) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Reliable,
    Creative,
}

impl Mode {
    /// Only the literal `"creative"` enables sampling.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("creative") => Mode::Creative,
            _ => Mode::Reliable,
        }
    }

    #[must_use]
    pub fn is_creative(self) -> bool {
        self == Mode::Creative
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub text: String,
    pub length: LengthPreset,
    pub mode: Mode,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub title: String,
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
    pub token_count: usize,
}

/// A persisted summarization attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub id: String,
    pub text: String,
    pub summary: String,
    pub title: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub success: bool,
    #[serde(default)]
    pub error: String,
}

impl SummaryRecord {
    #[must_use]
    pub fn succeeded(text: &str, summary: &str, title: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            summary: summary.to_string(),
            title: title.to_string(),
            created_at: Utc::now(),
            success: true,
            error: String::new(),
        }
    }

    #[must_use]
    pub fn failed(text: &str, title: &str, error: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            summary: String::new(),
            title: title.to_string(),
            created_at: Utc::now(),
            success: false,
            error: error.to_string(),
        }
    }
}

/// Second-precision UTC timestamps in `%Y-%m-%dT%H:%M:%SZ` form.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_length_preset_bounds() {
        assert_eq!(LengthPreset::Short.bounds(), LengthBounds::new(15, 30));
        assert_eq!(LengthPreset::Medium.bounds(), LengthBounds::new(50, 100));
        assert_eq!(LengthPreset::Long.bounds(), LengthBounds::new(100, 180));
    }

    #[test]
    fn test_unknown_length_defaults_to_medium() {
        assert_eq!(LengthPreset::parse(None), LengthPreset::Medium);
        assert_eq!(LengthPreset::parse(Some("huge")), LengthPreset::Medium);
        assert_eq!(LengthPreset::parse(Some("Short")), LengthPreset::Medium);
        assert_eq!(LengthPreset::parse(Some("short")), LengthPreset::Short);
        assert_eq!(LengthPreset::parse(Some("long")), LengthPreset::Long);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse(Some("creative")), Mode::Creative);
        assert_eq!(Mode::parse(Some("reliable")), Mode::Reliable);
        assert_eq!(Mode::parse(Some("wild")), Mode::Reliable);
        assert_eq!(Mode::parse(None), Mode::Reliable);
    }

    #[test]
    fn test_record_serializes_created_at_in_utc_seconds() {
        let mut record = SummaryRecord::succeeded("input", "summary", "title.");
        record.created_at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["createdAt"], "2024-03-09T14:05:07Z");
        assert_eq!(json["success"], true);
        assert_eq!(json["error"], "");

        let back: SummaryRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_failed_record_carries_error() {
        let record = SummaryRecord::failed("input", "Untitled Summary...", "model offline");
        assert!(!record.success);
        assert!(record.summary.is_empty());
        assert_eq!(record.error, "model offline");
        assert_ne!(record.id, SummaryRecord::failed("input", "t", "e").id);
    }
}
