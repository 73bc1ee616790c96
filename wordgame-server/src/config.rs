use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub leaderboard_limit: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("Invalid PORT"),
            leaderboard_limit: env::var("LEADERBOARD_LIMIT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid LEADERBOARD_LIMIT"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
