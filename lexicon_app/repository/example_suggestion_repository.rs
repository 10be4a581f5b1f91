use chrono::{DateTime, Utc};

use lexicon_ranking::models::example_suggestion::ExampleSuggestion;
use lexicon_types::{
    errors::ApplicationError,
    leaderboard::{LeaderboardType, TimeRange},
};

/// Which of a user's contributions make a suggestion eligible for counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionCondition {
    /// A pronunciation was recorded by this user.
    SpokenBy(String),
    /// A pronunciation was approved or denied by this user.
    ReviewedBy(String),
    /// The user interacted with the suggestion.
    TranslatedBy(String),
}

impl ContributionCondition {
    pub fn uid(&self) -> &str {
        match self {
            ContributionCondition::SpokenBy(uid)
            | ContributionCondition::ReviewedBy(uid)
            | ContributionCondition::TranslatedBy(uid) => uid,
        }
    }
}

/// Selects the example suggestions that count towards one leaderboard.
/// `date_range` bounds the suggestion's `updated_at`, inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionFilter {
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub condition: ContributionCondition,
}

impl ContributionFilter {
    pub fn new(
        leaderboard_type: LeaderboardType,
        time_range: TimeRange,
        uid: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let uid = uid.to_string();
        let condition = match leaderboard_type {
            LeaderboardType::RecordExampleAudio => ContributionCondition::SpokenBy(uid),
            LeaderboardType::VerifyExampleAudio => ContributionCondition::ReviewedBy(uid),
            LeaderboardType::TranslateIgboSentence => ContributionCondition::TranslatedBy(uid),
        };

        Self {
            date_range: time_range.date_bounds(now),
            condition,
        }
    }

    /// In-memory equivalent of the storage query.
    pub fn matches(&self, suggestion: &ExampleSuggestion) -> bool {
        if let Some((start, end)) = self.date_range {
            if suggestion.updated_at < start || suggestion.updated_at > end {
                return false;
            }
        }

        match &self.condition {
            ContributionCondition::SpokenBy(uid) => {
                suggestion.pronunciations.iter().any(|p| &p.speaker == uid)
            }
            ContributionCondition::ReviewedBy(uid) => {
                suggestion.pronunciations.iter().any(|p| p.is_reviewed_by(uid))
            }
            ContributionCondition::TranslatedBy(uid) => {
                suggestion.user_interactions.iter().any(|u| u == uid)
            }
        }
    }
}

#[async_trait::async_trait]
pub trait ExampleSuggestionRepository: Send + Sync {
    /// Returns the suggestions matching `filter`.
    async fn list_contributions(
        &self,
        filter: &ContributionFilter,
    ) -> Result<Vec<ExampleSuggestion>, ApplicationError>;

    /// Saves a suggestion (creates if new, updates if exists).
    async fn save(&self, suggestion: &ExampleSuggestion) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use lexicon_ranking::{
        models::example_suggestion::Pronunciation,
        test_utils::{ExampleSuggestionFactoryOptions, example_suggestion_factory},
    };

    #[test]
    fn test_filter_condition_follows_leaderboard_type() {
        let now = Utc::now();
        let filter = ContributionFilter::new(LeaderboardType::VerifyExampleAudio, TimeRange::AllTime, "uid", now);

        assert_eq!(filter.condition, ContributionCondition::ReviewedBy("uid".to_string()));
        assert_eq!(filter.date_range, None);
        assert_eq!(filter.condition.uid(), "uid");
    }

    #[test]
    fn test_filter_uses_time_range_bounds() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
        let filter = ContributionFilter::new(LeaderboardType::RecordExampleAudio, TimeRange::Week, "uid", now);

        assert_eq!(filter.date_range, Some((now - Duration::days(7), now)));
    }

    #[test]
    fn test_filter_matches_within_window_only() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
        let filter = ContributionFilter::new(LeaderboardType::RecordExampleAudio, TimeRange::Week, "uid", now);

        let mut suggestion = example_suggestion_factory(ExampleSuggestionFactoryOptions {
            pronunciations: Some(vec![Pronunciation {
                speaker: "uid".to_string(),
                ..Default::default()
            }]),
            ..Default::default()
        });

        suggestion.updated_at = now - Duration::days(2);
        assert!(filter.matches(&suggestion));

        suggestion.updated_at = now - Duration::days(8);
        assert!(!filter.matches(&suggestion));
    }

    #[test]
    fn test_filter_matches_translations_by_interaction() {
        let filter = ContributionFilter::new(
            LeaderboardType::TranslateIgboSentence,
            TimeRange::AllTime,
            "uid",
            Utc::now(),
        );

        let touched = example_suggestion_factory(ExampleSuggestionFactoryOptions {
            user_interactions: Some(vec!["uid".to_string()]),
            ..Default::default()
        });
        let untouched = example_suggestion_factory(Default::default());

        assert!(filter.matches(&touched));
        assert!(!filter.matches(&untouched));
    }
}
