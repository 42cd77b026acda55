use crate::config::{GameConfig, MAX_WRONG_GUESSES};
use crate::display::{masked_word, render_state};
use crate::fetcher::Word;
use crate::{debug_log, info_log};
use std::collections::BTreeSet;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// How a call to `play` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    /// Input closed before the game was decided.
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Not exactly one letter.
    Invalid,
    AlreadyGuessed(char),
    Hit(char),
    Miss(char),
    /// The session is already won or lost. `play` stops reading before this
    /// can happen; it is only seen by callers driving a `Session` directly.
    Finished,
}

/// Seam between the rules and whatever talks to the player.
pub trait GameInterface {
    /// Wipe the previous turn before drawing the next one.
    fn refresh(&mut self) -> io::Result<()>;
    fn display_board(&mut self, session: &Session) -> io::Result<()>;
    fn display_feedback(&mut self, result: GuessResult) -> io::Result<()>;
    fn display_victory(&mut self, word: &Word) -> io::Result<()>;
    fn display_defeat(&mut self, word: &Word) -> io::Result<()>;
    /// `None` once input is exhausted.
    fn read_guess(&mut self) -> io::Result<Option<String>>;
}

/// One playthrough. Guessed and missed sets only ever grow.
#[derive(Debug, Clone)]
pub struct Session {
    word: Word,
    guessed: BTreeSet<char>,
    missed: BTreeSet<char>,
    wrong_guesses: usize,
    max_wrong_guesses: usize,
}

impl Session {
    pub fn new(word: Word, max_wrong_guesses: u8) -> Self {
        Self {
            word,
            guessed: BTreeSet::new(),
            missed: BTreeSet::new(),
            wrong_guesses: 0,
            max_wrong_guesses: usize::from(max_wrong_guesses.clamp(1, MAX_WRONG_GUESSES)),
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn missed(&self) -> &BTreeSet<char> {
        &self.missed
    }

    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    pub fn max_wrong_guesses(&self) -> usize {
        self.max_wrong_guesses
    }

    pub fn status(&self) -> Status {
        if self.word.letters().is_subset(&self.guessed) {
            Status::Won
        } else if self.wrong_guesses >= self.max_wrong_guesses {
            Status::Lost
        } else {
            Status::Playing
        }
    }

    /// Applies one line of player input. Once `status` is no longer
    /// `Playing` every call returns `GuessResult::Finished` and leaves the
    /// session untouched.
    pub fn guess(&mut self, input: &str) -> GuessResult {
        if self.status() != Status::Playing {
            return GuessResult::Finished;
        }
        let Some(letter) = parse_guess(input) else {
            return GuessResult::Invalid;
        };

        if self.guessed.contains(&letter) || self.missed.contains(&letter) {
            GuessResult::AlreadyGuessed(letter)
        } else if self.word.contains(letter) {
            self.guessed.insert(letter);
            GuessResult::Hit(letter)
        } else {
            self.missed.insert(letter);
            self.wrong_guesses += 1;
            GuessResult::Miss(letter)
        }
    }

    pub fn masked_word(&self) -> String {
        masked_word(self.word.as_str(), &self.guessed)
    }

    pub fn render(&self) -> String {
        render_state(
            self.wrong_guesses,
            self.max_wrong_guesses,
            &self.masked_word(),
            &self.missed,
        )
    }
}

/// Trimmed, lowercased input if it is a single letter.
pub fn parse_guess(input: &str) -> Option<char> {
    let normalized = input.trim().to_lowercase();
    let mut chars = normalized.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}

pub fn play<I: GameInterface>(
    word: Word,
    config: &GameConfig,
    interface: &mut I,
) -> io::Result<Outcome> {
    let mut session = Session::new(word, config.max_wrong_guesses);
    let mut last_result = None;

    loop {
        interface.refresh()?;
        interface.display_board(&session)?;
        if let Some(result) = last_result.take() {
            interface.display_feedback(result)?;
        }

        match session.status() {
            Status::Won => {
                info_log!("won with {} wrong guesses", session.wrong_guesses());
                interface.display_victory(session.word())?;
                return Ok(Outcome::Win);
            }
            Status::Lost => {
                info_log!("lost, word was {}", session.word());
                interface.display_defeat(session.word())?;
                return Ok(Outcome::Loss);
            }
            Status::Playing => {}
        }

        let Some(input) = interface.read_guess()? else {
            info_log!("input closed mid-game");
            return Ok(Outcome::Abandoned);
        };

        let result = session.guess(&input);
        debug_log!("guess {:?} -> {:?}", input.trim(), result);
        last_result = Some(result);
    }
}
