//! TUI (Terminal User Interface) module for Wordle
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiInterface`: renders the board and turns key presses into [`UserAction`]s.
//!   All game rules stay in the core; this module only echoes what it is told.
//!
//! # State Machine
//! - `EnteringGuess` → (game ends) → `GameOver` → (N) → back to `EnteringGuess`

use crate::evaluator::{LetterFeedback, SecretWord};
use crate::game_state::{GameInterface, GameState, GameStatus, Rejection, Turn, UserAction};
use crate::sanitizer::sanitize;
use crate::settings::{MAX_GUESSES, WORD_SIZE};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const ROW_SPACING: u16 = 2;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, PartialEq, Debug)]
enum TileState {
    Empty,
    Entered,
    Scored(LetterFeedback),
}

impl TileState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::Scored(LetterFeedback::Correct) => (Color::Green, Color::Black),
            Self::Scored(LetterFeedback::Almost) => (Color::Yellow, Color::Black),
            Self::Scored(LetterFeedback::Incorrect) => (Color::Gray, Color::White),
        }
    }
}

#[derive(Debug)]
struct BoardRow {
    letters: [char; WORD_SIZE],
    states: [TileState; WORD_SIZE],
}

impl BoardRow {
    fn empty() -> Self {
        Self {
            letters: [' '; WORD_SIZE],
            states: [TileState::Empty; WORD_SIZE],
        }
    }

    fn from_input(input: &str) -> Self {
        let mut row = Self::empty();
        for (i, ch) in input.chars().enumerate().take(WORD_SIZE) {
            row.letters[i] = ch;
            row.states[i] = TileState::Entered;
        }
        row
    }

    fn from_turn(turn: &Turn) -> Self {
        let mut row = Self::from_input(turn.guess.as_str());
        for (i, feedback) in turn.feedback.iter().enumerate() {
            row.states[i] = TileState::Scored(feedback);
        }
        row
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringGuess,
    /// Game has ended - outcome stored in interface.message
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    board: &'a GameState,
    current_input: &'a str,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: GameState,
    current_input: String,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let terminal = match Self::setup_terminal() {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                return Err(e);
            }
        };
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            board: GameState::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            board: &self.board,
            current_input: &self.current_input,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn update_status(&mut self) {
        self.status = format!(
            "{} of {MAX_GUESSES} guesses left",
            self.board.guesses_remaining()
        );
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Board
                Constraint::Min(4),     // Messages
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        let message_style = Self::message_style(ctx.board);
        Self::render_info(f, chunks[2], ctx.message, message_style, ctx.error_message);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut rows: Vec<BoardRow> = ctx
            .board
            .history()
            .iter()
            .map(BoardRow::from_turn)
            .collect();
        if ctx.state == TuiState::EnteringGuess && rows.len() < MAX_GUESSES {
            rows.push(BoardRow::from_input(ctx.current_input));
        }
        while rows.len() < MAX_GUESSES {
            rows.push(BoardRow::empty());
        }

        for (index, row) in rows.iter().enumerate() {
            Self::render_row(f, row, index, inner);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_row(f: &mut Frame, row: &BoardRow, row_index: usize, area: Rect) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_SIZE {
            let (bg_color, fg_color) = row.states[i].colors();
            let letter = row.letters[i];
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    /// Victory text stands out; everything else uses the plain message colour.
    fn message_style(board: &GameState) -> Style {
        if board.status() == GameStatus::Won {
            SUCCESS_STYLE
        } else {
            MESSAGE_STYLE
        }
    }

    fn render_info(
        f: &mut Frame,
        area: Rect,
        message: &str,
        message_style: Style,
        error_message: &str,
    ) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, message_style)]));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => {
                "Type your guess | ENTER: Submit | BACKSPACE: Delete | ESC: Quit"
            }
            TuiState::GameOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(match self.state {
                TuiState::EnteringGuess => self.handle_guess_input(key),
                TuiState::GameOver => Self::handle_game_over_input(key),
            }),
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Enter => {
                info_log!(
                    "handle_guess_input() - Enter pressed with '{}'",
                    self.current_input
                );
                Some(UserAction::Guess(self.current_input.clone()))
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                self.error_message.clear();
                None
            }
            KeyCode::Char(c) if Self::has_modifier_keys(&key) => {
                debug_log!("handle_guess_input() - Ignoring '{}' with modifier", c);
                None
            }
            KeyCode::Char(c) => {
                // Re-sanitize the whole line so the echo always matches what gets submitted.
                let mut raw = self.current_input.clone();
                raw.push(c);
                self.current_input = sanitize(&raw).to_string();
                if c.is_ascii_alphabetic() {
                    self.error_message.clear();
                } else {
                    self.error_message =
                        format!("Only letters are allowed! ('{c}' is not a letter)");
                }
                None
            }
            _ => None,
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl GameInterface for TuiInterface {
    fn display_new_game(&mut self, state: &GameState) {
        self.board = state.clone();
        self.current_input.clear();
        self.state = TuiState::EnteringGuess;
        self.message = format!("Guess the {WORD_SIZE}-letter word!");
        self.error_message.clear();
        self.update_status();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_turn(&mut self, state: &GameState) {
        self.board = state.clone();
        self.current_input.clear();
        self.error_message.clear();
        self.update_status();
        self.draw_or_log();
    }

    fn display_rejection(&mut self, rejection: &Rejection) {
        // Keep the input so the player can correct it.
        self.error_message = rejection.to_string();
        self.draw_or_log();
    }

    fn display_game_over(&mut self, state: &GameState, secret: &SecretWord) {
        self.state = TuiState::GameOver;
        let outcome = state.end_message().unwrap_or_default();
        self.message = format!("{outcome} The word was {secret}.");
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
