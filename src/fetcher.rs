//! Word of the Day retrieval.
//!
//! One blocking GET against the configured page, then a single CSS selector
//! lookup for the element holding the word. Failures never escape as panics:
//! `fetch_word` returns a tagged `FetchError`, and `get_word_of_the_day`
//! flattens that into `None` plus a diagnostic line.

use crate::config::FetchConfig;
use log::{debug, info, warn};
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;
use thiserror::Error;

/// Lowercase, non-empty, purely alphabetic target word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Trims and lowercases `text`, rejecting anything that is not a single
    /// run of letters.
    pub fn new(text: &str) -> Result<Self, ParseError> {
        let word = text.trim().to_lowercase();
        if word.is_empty() {
            return Err(ParseError::Unexpected("word element was empty".to_string()));
        }
        if !word.chars().all(char::is_alphabetic) {
            return Err(ParseError::Unexpected(format!(
                "'{word}' contains non-alphabetic characters"
            )));
        }
        Ok(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Distinct letters of the word.
    pub fn letters(&self) -> BTreeSet<char> {
        self.0.chars().collect()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no element matches `{selector}`")]
    ElementNotFound { selector: String },

    #[error("{0}")]
    Unexpected(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FetchError {
    /// Short failure tag.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Request(_) => "fetch error",
            Self::Parse(ParseError::ElementNotFound { .. }) => "parse error: element not found",
            Self::Parse(ParseError::Unexpected(_)) => "parse error: unexpected",
        }
    }

    /// Line written to the player's error stream.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Request(err) => format!("Error: Could not fetch the URL: {err}"),
            Self::Parse(ParseError::ElementNotFound { selector }) => {
                format!("Error: Could not find the word on the page (looked for `{selector}`).")
            }
            Self::Parse(ParseError::Unexpected(detail)) => {
                format!("Error: An error occurred during parsing: {detail}")
            }
        }
    }
}

/// Locates `selector` in `html` and turns its text into a `Word`.
pub fn parse_word(html: &str, selector: &str) -> Result<Word, ParseError> {
    let parsed_selector = Selector::parse(selector)
        .map_err(|e| ParseError::Unexpected(format!("invalid selector `{selector}`: {e}")))?;

    let document = Html::parse_document(html);
    let element = document
        .select(&parsed_selector)
        .next()
        .ok_or_else(|| ParseError::ElementNotFound {
            selector: selector.to_string(),
        })?;

    let text: String = element.text().collect();
    debug!("matched `{selector}` with text {text:?}");
    Word::new(&text)
}

/// Single attempt, no retries. Non-2xx statuses count as transport failures.
pub fn fetch_word(config: &FetchConfig) -> Result<Word, FetchError> {
    info!("GET {} (timeout {:?})", config.url, config.timeout);
    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .build()?;

    let response = client.get(&config.url).send()?.error_for_status()?;
    debug!("{} responded {}", config.url, response.status());

    let body = response.text()?;
    let word = parse_word(&body, &config.selector)?;
    info!("word of the day has {} letters", word.as_str().chars().count());
    Ok(word)
}

/// Like `fetch_word`, but reports the failure to `err` and yields `None`.
pub fn get_word_of_the_day<W: Write>(config: &FetchConfig, err: &mut W) -> Option<Word> {
    match fetch_word(config) {
        Ok(word) => Some(word),
        Err(e) => {
            warn!("{}: {e}", e.reason());
            let _ = writeln!(err, "{}", e.diagnostic());
            None
        }
    }
}
