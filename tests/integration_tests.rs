// Integration tests for the wordle-game crate
// These tests drive the public API the way the binary does

use std::io::Cursor;
use wordle_game::cli::CliInterface;
use wordle_game::wordbank::EMBEDDED_WORDBANK;
use wordle_game::*;

fn embedded_game(secret: &str) -> Game<WordBank> {
    Game::new(secret, load_wordbank_from_str(EMBEDDED_WORDBANK))
}

#[test]
fn test_cli_session_win() {
    let game = embedded_game("TESTS");
    let mut interface = CliInterface::new(Cursor::new("crane\ntests\n"));

    let state = game_loop(&game, &mut interface);

    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.history().len(), 2);
    assert_eq!(state.end_message(), Some(VICTORY_MESSAGE));
}

#[test]
fn test_cli_session_loss() {
    let game = embedded_game("TESTS");
    let input = "crane\nslate\nworld\nwrong\nraise\nstare\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let state = game_loop(&game, &mut interface);

    assert_eq!(state.status(), GameStatus::Lost);
    assert_eq!(state.history().len(), MAX_GUESSES);
    assert_eq!(state.end_message(), Some(DEFEAT_MESSAGE));
}

#[test]
fn test_cli_session_rejections_do_not_count() {
    let game = embedded_game("WORLD");
    // Too short, not a word, digits only, then a real guess.
    let input = "fly\nqwert\n12345\n\nwrong\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let state = game_loop(&game, &mut interface);

    assert_eq!(state.history().len(), 1);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(
        state.history()[0].feedback.0,
        [
            LetterFeedback::Correct,
            LetterFeedback::Almost,
            LetterFeedback::Almost,
            LetterFeedback::Incorrect,
            LetterFeedback::Incorrect,
        ]
    );
}

#[test]
fn test_cli_session_guesses_after_win_are_ignored() {
    let game = embedded_game("TESTS");
    let mut interface = CliInterface::new(Cursor::new("tests\ncrane\nslate\n"));

    let state = game_loop(&game, &mut interface);

    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_cli_session_new_game_starts_over() {
    let game = embedded_game("TESTS");
    let mut interface = CliInterface::new(Cursor::new("tests\nnext\ncrane\n"));

    let state = game_loop(&game, &mut interface);

    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.history()[0].guess.as_str(), "CRANE");
}

#[test]
fn test_noisy_input_is_sanitized_before_submission() {
    let game = embedded_game("TESTS");
    let state = game
        .submit_guess(&GameState::new(), "  t-e-s-t-s!!  ")
        .unwrap();
    assert_eq!(state.status(), GameStatus::Won);
}

#[test]
fn test_secret_word_validation_scenarios() {
    let bank = load_wordbank_from_str(EMBEDDED_WORDBANK);

    let fly = validate("FLY", &bank);
    assert!(fly.contains(&Violation::Length { actual: 3 }));

    assert!(validate("tests", &bank).contains(&Violation::Case));
    assert_eq!(validate("QWERT", &bank), [Violation::UnknownWord]);
    assert!(validate("TESTS", &bank).is_empty());
}

#[test]
fn test_every_embedded_word_is_a_valid_secret() {
    let bank = load_wordbank_from_str(EMBEDDED_WORDBANK);
    for word in bank.words() {
        assert!(validate(word, &bank).is_empty(), "{word} failed validation");
    }
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("wordle_game_custom_wordbank.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "grape").unwrap();
        writeln!(file, "lemon").unwrap();
        writeln!(file, "melon").unwrap();
        writeln!(file, "peach").unwrap();
    }

    let bank = load_wordbank_from_file(&path).unwrap();
    assert_eq!(bank.len(), 5);

    // Only words from this file are accepted now.
    let game = Game::new("MELON", bank);
    let mut interface = CliInterface::new(Cursor::new("crane\nlemon\nmelon\n"));
    let state = game_loop(&game, &mut interface);

    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.history().len(), 2);
    assert_eq!(
        state.history()[0].feedback.0,
        [
            LetterFeedback::Almost,
            LetterFeedback::Correct,
            LetterFeedback::Almost,
            LetterFeedback::Correct,
            LetterFeedback::Correct,
        ]
    );

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_misconfigured_secret_warns_but_plays() {
    use std::cell::Cell;

    struct CountingDiagnostics(Cell<usize>);

    impl Diagnostics for CountingDiagnostics {
        fn warn(&self, _message: &str) {
            self.0.set(self.0.get() + 1);
        }
    }

    let sink = CountingDiagnostics(Cell::new(0));
    let game = Game::with_diagnostics("tests", load_wordbank_from_str(EMBEDDED_WORDBANK), &sink);
    assert_eq!(sink.0.get(), 1);
    assert_eq!(game.violations(), [Violation::Case]);

    let state = game.submit_guess(&GameState::new(), "TESTS").unwrap();
    assert_eq!(state.status(), GameStatus::Won);
}

#[test]
fn test_games_are_independent() {
    let game = embedded_game("WORLD");
    let alice = game.submit_guess(&GameState::new(), "world").unwrap();
    let bob = game.submit_guess(&GameState::new(), "wrong").unwrap();

    assert_eq!(alice.status(), GameStatus::Won);
    assert_eq!(bob.status(), GameStatus::InProgress);
    assert_eq!(bob.guesses_remaining(), MAX_GUESSES - 1);
}
