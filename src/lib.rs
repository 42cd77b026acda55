// Library interface for wotd-hangman
// This allows integration tests to access internal modules

pub mod app;
pub mod cli;
pub mod config;
pub mod display;
pub mod fetcher;
pub mod game_state;
pub mod logging;

// Re-export commonly used items for easier testing
pub use app::{EXIT_FAILURE, EXIT_OK, run};
pub use config::{FetchConfig, GameConfig};
pub use fetcher::{FetchError, ParseError, Word, fetch_word, get_word_of_the_day, parse_word};
pub use game_state::{GameInterface, GuessResult, Outcome, Session, Status, play};
