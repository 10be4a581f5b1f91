use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An example sentence submitted for review, with its recorded audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSuggestion {
    pub id: Uuid,
    #[serde(default)]
    pub igbo: Option<String>,
    #[serde(default)]
    pub translations: Vec<String>,
    #[serde(default)]
    pub pronunciations: Vec<Pronunciation>,
    #[serde(default)]
    pub user_interactions: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl ExampleSuggestion {
    pub fn new(igbo: Option<String>, translations: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            igbo,
            translations,
            pronunciations: Vec::new(),
            user_interactions: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// True when both the Igbo text and its first translation are filled in.
    pub fn is_translated(&self) -> bool {
        let has_igbo = self.igbo.as_deref().is_some_and(|s| !s.is_empty());
        let has_translation = self
            .translations
            .first()
            .is_some_and(|s| !s.is_empty());

        has_igbo && has_translation
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pronunciation {
    #[serde(default)]
    pub audio: String,
    #[serde(default)]
    pub speaker: String,
    #[serde(default)]
    pub approvals: Vec<String>,
    #[serde(default)]
    pub denials: Vec<String>,
}

impl Pronunciation {
    pub fn is_reviewed_by(&self, uid: &str) -> bool {
        self.approvals.iter().any(|a| a == uid) || self.denials.iter().any(|d| d == uid)
    }
}
