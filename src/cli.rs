use crate::evaluator::SecretWord;
use crate::game_state::{GameInterface, GameState, Rejection, Turn, UserAction};
use crate::info_log;
use crate::settings::{MAX_GUESSES, WORD_SIZE};
use clap::Parser;
use std::io::BufRead;

/// Wordle CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Secret word to play against instead of the word of the day
    #[arg(short = 's', long = "secret")]
    pub secret: Option<String>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!(
        "\nEnter your guess ({WORD_SIZE} letters), 'next' for a new game, or 'exit' to quit:"
    );
    let mut input = String::new();
    match reader.read_line(&mut input) {
        // End of input ends the session.
        Ok(0) | Err(_) => return Some(UserAction::Exit),
        Ok(_) => {}
    }
    let input = input.trim();

    match input.to_uppercase().as_str() {
        "EXIT" => Some(UserAction::Exit),
        "NEXT" => Some(UserAction::NewGame),
        "" => None,
        _ => Some(UserAction::Guess(input.to_string())),
    }
}

pub fn format_turn(turn: &Turn) -> String {
    let letters: String = turn
        .guess
        .as_str()
        .chars()
        .flat_map(|c| [c, ' '])
        .collect();
    format!("{} {}", letters.trim_end(), turn.feedback)
}

pub fn display_board(state: &GameState) {
    for turn in state.history() {
        println!("{}", format_turn(turn));
    }
    println!(
        "({} of {MAX_GUESSES} guesses left)",
        state.guesses_remaining()
    );
}

pub fn display_new_game(state: &GameState) {
    println!(
        "New game started. Guess the {WORD_SIZE}-letter word in {} tries.",
        state.guesses_remaining()
    );
}

pub fn display_rejection(rejection: &Rejection) {
    println!("Guess not accepted: {rejection}.");
}

pub fn display_game_over(state: &GameState, secret: &SecretWord) {
    if let Some(message) = state.end_message() {
        println!("{message}");
    }
    println!("The word was {secret}. Type 'next' to play again or 'exit' to quit.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_new_game(&mut self, state: &GameState) {
        display_new_game(state);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        let action = read_action(&mut self.reader);
        info_log!("CliInterface::read_action() - {:?}", action);
        action
    }

    fn display_turn(&mut self, state: &GameState) {
        display_board(state);
    }

    fn display_rejection(&mut self, rejection: &Rejection) {
        display_rejection(rejection);
    }

    fn display_game_over(&mut self, state: &GameState, secret: &SecretWord) {
        display_game_over(state, secret);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
