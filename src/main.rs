use chrono::Local;
use std::io;
use std::process;
use wordle_game::cli::{CliInterface, parse_cli};
use wordle_game::logging::init_logging;
use wordle_game::tui::TuiInterface;
use wordle_game::wordbank::{
    EMBEDDED_WORDBANK, WordBank, load_wordbank_from_file, load_wordbank_from_str,
    user_wordbank_path,
};
use wordle_game::{Game, game_loop};

fn load_wordbank(explicit_path: Option<&str>) -> io::Result<WordBank> {
    if let Some(path) = explicit_path {
        return load_wordbank_from_file(path);
    }
    if let Some(path) = user_wordbank_path()
        && path.is_file()
    {
        match load_wordbank_from_file(&path) {
            Ok(words) => {
                log::info!("Loaded user word list from {}", path.display());
                return Ok(words);
            }
            Err(e) => log::warn!(
                "Ignoring unreadable word list at {}: {e}",
                path.display()
            ),
        }
    }
    Ok(load_wordbank_from_str(EMBEDDED_WORDBANK))
}

fn main() {
    let cli = parse_cli();
    init_logging();

    let wordbank = match load_wordbank(cli.wordbank_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            eprintln!(
                "Failed to load word bank from '{}': {e}",
                cli.wordbank_path.as_deref().unwrap_or_default()
            );
            process::exit(1);
        }
    };
    if wordbank.is_empty() {
        eprintln!("The word bank contains no five-letter words.");
        process::exit(1);
    }
    log::debug!("Loaded {} words.", wordbank.len());

    let secret = match cli.secret.clone() {
        Some(secret) => secret,
        None => match wordbank.word_of_the_day(Local::now().date_naive()) {
            Some(word) => word.to_string(),
            None => {
                eprintln!("Could not pick a word of the day.");
                process::exit(1);
            }
        },
    };

    let game = Game::new(&secret, wordbank);

    if cli.tui {
        match TuiInterface::new() {
            Ok(mut tui) => {
                game_loop(&game, &mut tui);
                return;
            }
            Err(e) => log::warn!("Terminal UI unavailable ({e}); falling back to line mode"),
        }
    }

    let mut interface = CliInterface::new(io::stdin().lock());
    game_loop(&game, &mut interface);
}
