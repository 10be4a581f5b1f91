use lexicon_types::leaderboard::LeaderboardType;

use crate::models::example_suggestion::ExampleSuggestion;

/// Counts the contributions `uid` made to `records` for the given leaderboard.
pub fn count_contributions(
    leaderboard_type: LeaderboardType,
    records: &[ExampleSuggestion],
    uid: &str,
) -> u32 {
    match leaderboard_type {
        LeaderboardType::RecordExampleAudio => count_record_example_audio(records, uid),
        LeaderboardType::VerifyExampleAudio => count_verify_example_audio(records, uid),
        LeaderboardType::TranslateIgboSentence => count_translate_igbo_sentence(records, uid),
    }
}

/// Pronunciations recorded by `uid`.
pub fn count_record_example_audio(records: &[ExampleSuggestion], uid: &str) -> u32 {
    records
        .iter()
        .flat_map(|r| &r.pronunciations)
        .filter(|p| p.speaker == uid)
        .count() as u32
}

/// Pronunciations approved or denied by `uid`. Each pronunciation counts once.
pub fn count_verify_example_audio(records: &[ExampleSuggestion], uid: &str) -> u32 {
    records
        .iter()
        .flat_map(|r| &r.pronunciations)
        .filter(|p| p.is_reviewed_by(uid))
        .count() as u32
}

/// Translated suggestions that `uid` interacted with.
pub fn count_translate_igbo_sentence(records: &[ExampleSuggestion], uid: &str) -> u32 {
    records
        .iter()
        .filter(|r| r.is_translated() && r.user_interactions.iter().any(|u| u == uid))
        .count() as u32
}
