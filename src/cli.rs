use crate::config::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_WORD_SELECTOR, DEFAULT_WOTD_URL, FetchConfig, GameConfig,
    MAX_WRONG_GUESSES,
};
use crate::fetcher::Word;
use crate::game_state::{GameInterface, GuessResult, Session};
use clap::Parser;
use crossterm::{cursor, execute, terminal};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Hangman against the Merriam-Webster Word of the Day
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Page to scrape the word from
    #[arg(long, default_value = DEFAULT_WOTD_URL)]
    pub url: String,

    /// CSS selector of the element holding the word
    #[arg(long, default_value = DEFAULT_WORD_SELECTOR)]
    pub selector: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Wrong guesses allowed before you are hanged
    #[arg(
        long = "max-wrong",
        default_value_t = MAX_WRONG_GUESSES,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_WRONG_GUESSES))
    )]
    pub max_wrong: u8,

    /// Do not clear the terminal between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            url: self.url.clone(),
            selector: self.selector.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            max_wrong_guesses: self.max_wrong,
            clear_screen: !self.no_clear,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub const PROMPT: &str = "Enter a letter: ";

pub fn feedback_message(result: GuessResult) -> String {
    match result {
        GuessResult::Invalid => "Invalid input. Please enter a single letter.".to_string(),
        GuessResult::AlreadyGuessed(_) => "You have already guessed that letter.".to_string(),
        GuessResult::Hit(c) => format!("Good guess! '{c}' is in the word."),
        GuessResult::Miss(c) => format!("Sorry, '{c}' is not in the word."),
        GuessResult::Finished => "The game is already over.".to_string(),
    }
}

pub fn victory_message(word: &Word) -> String {
    format!(
        "WELL DONE! You guessed the word: {}",
        word.as_str().to_uppercase()
    )
}

pub fn defeat_message(word: &Word) -> String {
    format!(
        "YOU'VE BEEN HANGED! The word was: {}",
        word.as_str().to_uppercase()
    )
}

/// Console implementation of the GameInterface trait.
/// Reads guesses line by line from `reader` and draws to `writer`.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W, clear_screen: bool) -> Self {
        Self {
            reader,
            writer,
            clear_screen,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn refresh(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(
                self.writer,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        Ok(())
    }

    fn display_board(&mut self, session: &Session) -> io::Result<()> {
        writeln!(self.writer, "{}", session.render())
    }

    fn display_feedback(&mut self, result: GuessResult) -> io::Result<()> {
        writeln!(self.writer, "{}", feedback_message(result))
    }

    fn display_victory(&mut self, word: &Word) -> io::Result<()> {
        writeln!(self.writer, "\n{}", victory_message(word))?;
        self.writer.flush()
    }

    fn display_defeat(&mut self, word: &Word) -> io::Result<()> {
        writeln!(self.writer, "\n{}", defeat_message(word))?;
        self.writer.flush()
    }

    fn read_guess(&mut self) -> io::Result<Option<String>> {
        write!(self.writer, "\n{PROMPT}")?;
        self.writer.flush()?;

        // Undecodable bytes become U+FFFD and are rejected as an invalid guess.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}
