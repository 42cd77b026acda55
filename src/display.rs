use std::collections::BTreeSet;

pub const MASK: char = '_';

/// Gallows drawings, indexed by wrong guess count.
pub const HANGMAN_STAGES: [&str; 7] = [
    "  +---+
  |   |
      |
      |
      |
      |
=========",
    "  +---+
  |   |
  O   |
      |
      |
      |
=========",
    "  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
 /    |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
 / \\  |
      |
=========",
];

/// Drawing for `wrong` misses, clamped to the last stage.
pub fn stage(wrong: usize) -> &'static str {
    HANGMAN_STAGES[wrong.min(HANGMAN_STAGES.len() - 1)]
}

/// Space-separated word with unguessed letters masked, e.g. `c _ t`.
pub fn masked_word(word: &str, guessed: &BTreeSet<char>) -> String {
    word.chars()
        .map(|c| if guessed.contains(&c) { c } else { MASK })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn missed_letters(missed: &BTreeSet<char>) -> String {
    if missed.is_empty() {
        return "none".to_string();
    }
    missed
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Multi-line board shown at the top of every turn.
pub fn render_state(
    wrong: usize,
    max_wrong: usize,
    masked: &str,
    missed: &BTreeSet<char>,
) -> String {
    format!(
        "{}\n\nWord: {masked}\nMissed letters: {}\nWrong guesses: {wrong}/{max_wrong}\n",
        stage(wrong),
        missed_letters(missed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(letters: &str) -> BTreeSet<char> {
        letters.chars().collect()
    }

    #[test]
    fn test_every_stage_is_distinct() {
        let unique: BTreeSet<&str> = HANGMAN_STAGES.iter().copied().collect();
        assert_eq!(unique.len(), HANGMAN_STAGES.len());
    }

    #[test]
    fn test_stage_clamps() {
        assert_eq!(stage(0), HANGMAN_STAGES[0]);
        assert_eq!(stage(6), HANGMAN_STAGES[6]);
        assert_eq!(stage(42), HANGMAN_STAGES[6]);
    }

    #[test]
    fn test_masked_word() {
        assert_eq!(masked_word("cat", &set("")), "_ _ _");
        assert_eq!(masked_word("cat", &set("ct")), "c _ t");
        assert_eq!(masked_word("test", &set("t")), "t _ _ t");
        assert_eq!(masked_word("cat", &set("cat")), "c a t");
    }

    #[test]
    fn test_missed_letters_sorted() {
        assert_eq!(missed_letters(&set("")), "none");
        assert_eq!(missed_letters(&set("zba")), "a, b, z");
    }

    #[test]
    fn test_render_state() {
        let board = render_state(2, 6, "c _ t", &set("xq"));
        assert!(board.starts_with(HANGMAN_STAGES[2]));
        assert!(board.contains("Word: c _ t"));
        assert!(board.contains("Missed letters: q, x"));
        assert!(board.contains("Wrong guesses: 2/6"));
    }
}
