// Game-wide constants shared by the core and the front-ends.

/// Number of letters in the secret word and in every accepted guess.
pub const WORD_SIZE: usize = 5;

/// Accepted guesses allowed before the game is lost.
pub const MAX_GUESSES: usize = 6;

pub const VICTORY_MESSAGE: &str = "You won!";
pub const DEFEAT_MESSAGE: &str = "Better luck next time!";
