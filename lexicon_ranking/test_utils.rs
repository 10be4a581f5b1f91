use rand::Rng;

use crate::{
    models::{
        example_suggestion::{ExampleSuggestion, Pronunciation},
        ranking::{Ranking, RankingUser},
    },
    ranking::sort_rankings,
};

#[derive(Default, Clone)]
pub struct RankingFactoryOptions<'a> {
    pub uid: Option<&'a str>,
    pub count: Option<u32>,
    pub position: Option<u32>,
}

#[derive(Default, Clone)]
pub struct ExampleSuggestionFactoryOptions {
    pub igbo: Option<String>,
    pub translations: Option<Vec<String>>,
    pub pronunciations: Option<Vec<Pronunciation>>,
    pub user_interactions: Option<Vec<String>>,
}

pub fn user_factory(uid: &str) -> RankingUser {
    RankingUser {
        uid: uid.to_string(),
        display_name: format!("User {uid}"),
        email: format!("{uid}@example.com"),
        photo_url: format!("https://images.example.com/{uid}.png"),
    }
}

pub fn ranking_factory(options: RankingFactoryOptions) -> Ranking {
    let default_uid = format!("user_{}", rand::thread_rng().r#gen::<u32>());
    let uid = options.uid.map_or(default_uid, |s| s.to_string());
    let mut ranking = Ranking::new(&user_factory(&uid), options.count.unwrap_or(0));
    ranking.position = options.position.unwrap_or(1);
    ranking
}

/// Builds `len` rankings with random counts, already sorted and positioned.
pub fn rankings_factory(len: usize) -> Vec<Ranking> {
    let mut rng = rand::thread_rng();
    let mut rankings: Vec<Ranking> = (0..len)
        .map(|i| {
            ranking_factory(RankingFactoryOptions {
                uid: Some(&format!("user_{i}")),
                count: Some(rng.gen_range(0..1_000)),
                position: Some(0),
            })
        })
        .collect();

    rankings.sort_by(|a, b| b.count.cmp(&a.count));
    for (index, ranking) in rankings.iter_mut().enumerate() {
        ranking.position = index as u32 + 1;
    }
    rankings
}

/// Ranks `users` one after the other, the way successive contributions would.
pub fn ranked_users(users: &[(&str, u32)]) -> Vec<Ranking> {
    users.iter().fold(Vec::new(), |rankings, (uid, count)| {
        sort_rankings(&rankings, &user_factory(uid), i64::from(*count))
    })
}

pub fn example_suggestion_factory(options: ExampleSuggestionFactoryOptions) -> ExampleSuggestion {
    let mut suggestion = ExampleSuggestion::new(
        Some(options.igbo.unwrap_or("Ụmụaka na-agba bọọlụ".to_string())),
        options
            .translations
            .unwrap_or(vec!["The children are playing football".to_string()]),
    );
    suggestion.pronunciations = options.pronunciations.unwrap_or_default();
    suggestion.user_interactions = options.user_interactions.unwrap_or_default();
    suggestion
}
