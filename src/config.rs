use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub fuzzy_threshold: f64,
}

impl Config {
    pub fn from_env() -> Self {
        let fuzzy_threshold = env::var("FUZZY_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(85.0);

        Self { fuzzy_threshold }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 85.0,
        }
    }
}
