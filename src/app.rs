use crate::config::{FetchConfig, GameConfig};
use crate::fetcher::get_word_of_the_day;
use crate::game_state::{GameInterface, Outcome, play};
use chrono::Local;
use log::{error, info, warn};
use std::io::Write;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Status lines are best effort: a closed stdout or stderr must not change
/// the exit code, so failures are only logged.
fn write_line<W: Write>(w: &mut W, line: &str) {
    if let Err(e) = writeln!(w, "{line}").and_then(|()| w.flush()) {
        warn!("could not write status line: {e}");
    }
}

pub fn fetch_banner() -> String {
    format!(
        "Fetching the Word of the Day for {}...",
        Local::now().format("%A, %B %-d, %Y")
    )
}

/// Fetches the word once and plays a single game with it.
/// Returns the process exit code.
pub fn run<I: GameInterface, O: Write, E: Write>(
    fetch: &FetchConfig,
    game: &GameConfig,
    interface: &mut I,
    out: &mut O,
    err: &mut E,
) -> u8 {
    write_line(out, &fetch_banner());

    let Some(word) = get_word_of_the_day(fetch, err) else {
        write_line(err, "Could not start the game without a word.");
        return EXIT_FAILURE;
    };

    match play(word, game, interface) {
        Ok(outcome) => {
            info!("game finished: {outcome:?}");
            if outcome == Outcome::Abandoned {
                write_line(out, "\nInput closed. Goodbye.");
            }
            EXIT_OK
        }
        Err(e) => {
            error!("console I/O failed: {e}");
            write_line(err, &format!("Error: console I/O failed: {e}"));
            EXIT_FAILURE
        }
    }
}
