// Library interface for wordle-game
// The binary and the integration tests both build on these modules.

pub mod cli;
pub mod evaluator;
pub mod game_state;
pub mod logging;
pub mod sanitizer;
pub mod settings;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use evaluator::{Feedback, LetterFeedback, SecretWord, evaluate};
pub use game_state::{
    Game, GameInterface, GameState, GameStatus, Rejection, Turn, UserAction, game_loop,
};
pub use sanitizer::{Guess, sanitize};
pub use settings::{DEFEAT_MESSAGE, MAX_GUESSES, VICTORY_MESSAGE, WORD_SIZE};
pub use validator::{Diagnostics, LogDiagnostics, Violation, validate, validate_secret_word};
pub use wordbank::{Dictionary, WordBank, load_wordbank_from_file, load_wordbank_from_str};
