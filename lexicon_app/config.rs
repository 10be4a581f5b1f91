use dotenvy::dotenv;
use std::env;

use lexicon_ranking::ranking::RANKINGS_PER_PAGE;

const MAX_PER_PAGE: u32 = 100;

pub struct Config {
    /// Maximum number of rankings stored in one leaderboard page.
    pub rankings_per_page: usize,
    /// Upper bound for `per_page` on leaderboard reads.
    pub max_per_page: u32,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let rankings_per_page = match env::var("LEXICON_RANKINGS_PER_PAGE") {
            Ok(val) => val.parse::<usize>().unwrap_or(RANKINGS_PER_PAGE).max(1),
            Err(_) => RANKINGS_PER_PAGE,
        };

        let max_per_page = match env::var("LEXICON_MAX_PER_PAGE") {
            Ok(val) => val.parse::<u32>().unwrap_or(MAX_PER_PAGE).max(1),
            Err(_) => MAX_PER_PAGE,
        };

        let http_port = match env::var("LEXICON_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        Self {
            rankings_per_page,
            max_per_page,
            http_port,
        }
    }
}
