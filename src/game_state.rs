use crate::evaluator::{Feedback, SecretWord, evaluate};
use crate::sanitizer::{Guess, sanitize};
use crate::settings::{DEFEAT_MESSAGE, MAX_GUESSES, VICTORY_MESSAGE, WORD_SIZE};
use crate::validator::{Diagnostics, LogDiagnostics, Violation, validate_secret_word};
use crate::wordbank::Dictionary;
use crate::{debug_log, info_log};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One accepted guess and the feedback it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Guess,
    pub feedback: Feedback,
}

/// Snapshot of a game. Each accepted guess produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Turn>,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }

    /// Message to show once the game has ended; `None` while it is still running.
    pub fn end_message(&self) -> Option<&'static str> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(VICTORY_MESSAGE),
            GameStatus::Lost => Some(DEFEAT_MESSAGE),
        }
    }

    fn with_turn(&self, turn: Turn) -> Self {
        let mut history = self.history.clone();
        let won = turn.feedback.is_win();
        history.push(turn);
        let status = if won {
            GameStatus::Won
        } else if history.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        Self { history, status }
    }
}

/// Why a submission was not accepted. The state it was made against is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is already over")]
    GameOver,
    #[error("guess must be exactly {expected} letters (got {len})", expected = WORD_SIZE)]
    Incomplete { len: usize },
    #[error("{0} is not in the word list")]
    UnknownWord(String),
}

/// Rules for one secret word over one dictionary.
///
/// `Game` never changes after construction; every session keeps its own
/// [`GameState`] and passes it to [`Game::submit_guess`].
#[derive(Debug, Clone)]
pub struct Game<D> {
    secret: SecretWord,
    dictionary: D,
    violations: Vec<Violation>,
}

impl<D: Dictionary> Game<D> {
    /// Start a game, logging a warning if the secret word looks misconfigured.
    pub fn new(secret: &str, dictionary: D) -> Self {
        Self::with_diagnostics(secret, dictionary, &LogDiagnostics)
    }

    pub fn with_diagnostics(secret: &str, dictionary: D, diagnostics: &impl Diagnostics) -> Self {
        let violations = validate_secret_word(secret, &dictionary, diagnostics);
        info_log!(
            "Game::new() - secret configured with {} violation(s)",
            violations.len()
        );
        Self {
            secret: SecretWord::new(secret),
            dictionary,
            violations,
        }
    }

    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Problems found with the secret word when the game was created.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Live input normalization, for front-ends that echo keystrokes.
    pub fn sanitize_input(&self, raw: &str) -> Guess {
        sanitize(raw)
    }

    /// Apply one raw submission to `state`.
    ///
    /// Returns the next state, or the reason the submission was refused.
    pub fn submit_guess(&self, state: &GameState, raw: &str) -> Result<GameState, Rejection> {
        if state.is_over() {
            debug_log!("submit_guess() - rejected, status is {:?}", state.status);
            return Err(Rejection::GameOver);
        }

        let guess = sanitize(raw);
        if !guess.is_complete() {
            debug_log!("submit_guess() - rejected incomplete guess '{}'", guess);
            return Err(Rejection::Incomplete { len: guess.len() });
        }
        if !self.dictionary.contains(guess.as_str()) {
            debug_log!("submit_guess() - rejected unknown word '{}'", guess);
            return Err(Rejection::UnknownWord(guess.to_string()));
        }

        let feedback = evaluate(&self.secret, &guess).ok_or(Rejection::Incomplete {
            len: guess.len(),
        })?;
        let next = state.with_turn(Turn { guess, feedback });
        info_log!(
            "submit_guess() - turn {} scored {}, status {:?}",
            next.history.len(),
            feedback,
            next.status
        );
        Ok(next)
    }
}

/// What the player asked for on their last input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// A front-end the session loop can drive.
pub trait GameInterface {
    fn display_new_game(&mut self, state: &GameState);
    /// `None` means the input was unusable and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_turn(&mut self, state: &GameState);
    fn display_rejection(&mut self, rejection: &Rejection);
    fn display_game_over(&mut self, state: &GameState, secret: &SecretWord);
    fn display_exit_message(&mut self);
}

/// Run an interactive session until the player exits.
///
/// Returns the state of the game that was in play at exit.
pub fn game_loop<D: Dictionary, I: GameInterface + ?Sized>(
    game: &Game<D>,
    interface: &mut I,
) -> GameState {
    let mut state = GameState::new();
    interface.display_new_game(&state);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                return state;
            }
            UserAction::NewGame => {
                state = GameState::new();
                info_log!("game_loop() - new game started");
                interface.display_new_game(&state);
            }
            UserAction::Guess(raw) => match game.submit_guess(&state, &raw) {
                Ok(next) => {
                    state = next;
                    interface.display_turn(&state);
                    if state.is_over() {
                        interface.display_game_over(&state, game.secret());
                    }
                }
                Err(rejection) => interface.display_rejection(&rejection),
            },
        }
    }
}
