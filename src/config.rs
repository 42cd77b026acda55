use std::time::Duration;

pub const DEFAULT_WOTD_URL: &str = "https://www.merriam-webster.com/word-of-the-day";
pub const DEFAULT_WORD_SELECTOR: &str = "h2.word-header-txt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Where to find the word and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub url: String,
    pub selector: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WOTD_URL.to_string(),
            selector: DEFAULT_WORD_SELECTOR.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Misses allowed before the player is hanged. Never above `MAX_WRONG_GUESSES`.
    pub max_wrong_guesses: u8,
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: MAX_WRONG_GUESSES,
            clear_screen: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.url, DEFAULT_WOTD_URL);
        assert_eq!(config.selector, "h2.word-header-txt");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_fetch_config_builders() {
        let config = FetchConfig::default()
            .with_url("http://127.0.0.1:1/")
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.url, "http://127.0.0.1:1/");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.selector, DEFAULT_WORD_SELECTOR);
    }

    #[test]
    fn test_game_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_wrong_guesses, 6);
        assert!(config.clear_screen);
    }
}
