use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::AppError;

/// The contribution categories that have their own leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaderboardType {
    RecordExampleAudio,
    VerifyExampleAudio,
    TranslateIgboSentence,
}

impl LeaderboardType {
    pub const ALL: [LeaderboardType; 3] = [
        LeaderboardType::RecordExampleAudio,
        LeaderboardType::VerifyExampleAudio,
        LeaderboardType::TranslateIgboSentence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardType::RecordExampleAudio => "RECORD_EXAMPLE_AUDIO",
            LeaderboardType::VerifyExampleAudio => "VERIFY_EXAMPLE_AUDIO",
            LeaderboardType::TranslateIgboSentence => "TRANSLATE_IGBO_SENTENCE",
        }
    }
}

impl fmt::Display for LeaderboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeaderboardType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::UnknownLeaderboardType(s.to_string()))
    }
}

/// Time windows a leaderboard is kept for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeRange {
    #[default]
    AllTime,
    Week,
    Month,
    IgboVoiceAthon,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::AllTime,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::IgboVoiceAthon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::AllTime => "ALL_TIME",
            TimeRange::Week => "WEEK",
            TimeRange::Month => "MONTH",
            TimeRange::IgboVoiceAthon => "IGBO_VOICE_ATHON",
        }
    }

    /// Returns the inclusive `[start, end]` window relative to `now`,
    /// or `None` for `AllTime`.
    pub fn date_bounds(&self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match self {
            TimeRange::AllTime => None,
            TimeRange::Week => Some((now - Duration::days(7), now)),
            TimeRange::Month => {
                let start = now
                    .checked_sub_months(Months::new(1))
                    .unwrap_or_else(|| now - Duration::days(30));
                Some((start, now))
            }
            TimeRange::IgboVoiceAthon => {
                let start = NaiveDate::from_ymd_opt(2023, 7, 24)?.and_hms_opt(0, 0, 0)?;
                let end = NaiveDate::from_ymd_opt(2023, 10, 24)?.and_hms_milli_opt(23, 59, 59, 999)?;
                Some((start.and_utc(), end.and_utc()))
            }
        }
    }

    /// Same as [`TimeRange::date_bounds`], as millisecond timestamps.
    pub fn millis_bounds(&self, now: DateTime<Utc>) -> Option<(i64, i64)> {
        self.date_bounds(now)
            .map(|(start, end)| (start.timestamp_millis(), end.timestamp_millis()))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::UnknownTimeRange(s.to_string()))
    }
}
