use serde::{Deserialize, Serialize};

/// One user's standing within a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    pub uid: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "photoURL")]
    pub photo_url: String,
    pub count: u32,
    pub position: u32,
}

impl Ranking {
    pub fn new(user: &RankingUser, count: u32) -> Self {
        Self {
            uid: user.uid.clone(),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            photo_url: user.photo_url.clone(),
            count,
            position: 0,
        }
    }

    /// Refreshes the identity fields and count from the user's latest data.
    pub fn update(&mut self, user: &RankingUser, count: u32) {
        self.display_name = user.display_name.clone();
        self.email = user.email.clone();
        self.photo_url = user.photo_url.clone();
        self.count = count;
    }
}

/// Identity of the user whose contribution is being ranked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingUser {
    pub uid: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "photoURL")]
    pub photo_url: String,
}
