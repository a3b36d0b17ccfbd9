//! Binary Words - terminal front end.

#![warn(missing_docs)]

mod cli;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use binary_words::{
    App, Catalog, Choice, PLAY_HELP, PlayInput, Preferences, SPECTATOR_HELP, SpectatorInput,
    SpectatorRound, compute_pools, render_round, render_snapshot,
};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_PREFS_FILE: &str = "binary_words.toml";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let prefs_path = cli
        .prefs
        .clone()
        .or_else(|| std::env::var_os("BINARY_WORDS_PREFS").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_FILE));

    let mut catalog = Catalog::builtin();
    if let Some(path) = &cli.word_lists {
        catalog.load_word_lists(path)?;
    }

    match cli.command {
        Command::Lists => run_lists(&catalog),
        Command::Filter {
            list,
            sequence,
            choices,
        } => run_filter(&catalog, &list, &sequence, &choices),
        Command::Play { export_dir } => run_play(catalog, &prefs_path, &export_dir),
        Command::Spectators => run_spectators(catalog, &prefs_path),
    }
}

/// Print the catalog
#[instrument(skip(catalog))]
fn run_lists(catalog: &Catalog) -> Result<()> {
    println!("Word lists:");
    for list in catalog.word_lists() {
        println!("  {:<20} {} ({} words)", list.id(), list.name(), list.len());
    }
    println!("Letter sequences:");
    for seq in catalog.sequences() {
        println!("  {:<20} {} [{}]", seq.id(), seq.name(), seq.letters());
    }
    Ok(())
}

/// One-shot engine call
#[instrument(skip(catalog))]
fn run_filter(catalog: &Catalog, list: &str, sequence: &str, choices: &str) -> Result<()> {
    let list = catalog.word_list(list)?;
    let letters = catalog.sequence(sequence)?.letters();
    let history = Choice::parse_sequence(choices)?;

    let pools = compute_pools(list.words(), &history, letters)?;
    println!("Left Pattern ({}): {}", pools.left().len(), pools.left().join(", "));
    println!("Right Pattern ({}): {}", pools.right().len(), pools.right().join(", "));
    Ok(())
}

/// Interactive single-spectator session
#[instrument(skip(catalog))]
fn run_play(catalog: Catalog, prefs_path: &Path, export_dir: &Path) -> Result<()> {
    let preferences = Preferences::load_or_default(prefs_path)?;
    let mut app = App::new(catalog, preferences);
    info!("Starting interactive session");

    println!("{}\n", PLAY_HELP);
    println!("{}", render_snapshot(&app.session().snapshot(), *app.perform_mode()));

    for line in prompt_lines() {
        let input = match line.parse::<PlayInput>() {
            Ok(input) => input,
            Err(e) => {
                println!("! {}", e);
                continue;
            }
        };

        let outcome = match input {
            PlayInput::Choose(choice) => app.apply_choice(choice).map_err(anyhow::Error::from),
            PlayInput::Reset => Ok(app.reset()),
            PlayInput::List(id) => app.select_word_list(&id).map_err(anyhow::Error::from),
            PlayInput::Sequence(id) => app.select_sequence(&id).map_err(anyhow::Error::from),
            PlayInput::Custom(letters) => app
                .set_custom_sequence(&letters)
                .map_err(anyhow::Error::from),
            PlayInput::Perform => {
                app.toggle_perform_mode();
                Ok(app.session().snapshot())
            }
            PlayInput::Export => {
                match app.export(export_dir) {
                    Ok(path) => println!("Exported to {}", path.display()),
                    Err(e) => println!("! {}", e),
                }
                continue;
            }
            PlayInput::Help => {
                println!("{}", PLAY_HELP);
                continue;
            }
            PlayInput::Quit => break,
        };

        match outcome {
            Ok(snapshot) => println!("{}", render_snapshot(&snapshot, *app.perform_mode())),
            Err(e) => println!("! {}", e),
        }
    }

    save_preferences(app.preferences(), prefs_path);
    Ok(())
}

/// Interactive two-spectator round
#[instrument(skip(catalog))]
fn run_spectators(catalog: Catalog, prefs_path: &Path) -> Result<()> {
    let preferences = Preferences::load_or_default(prefs_path)?;
    let mut app = App::new(catalog, preferences);
    let mut round = SpectatorRound::new();
    info!("Starting two-spectator round");

    println!("{}\n", SPECTATOR_HELP);
    println!("{}", render_snapshot(&app.session().snapshot(), false));

    for line in prompt_lines() {
        let outcome = match line.parse::<SpectatorInput>() {
            Ok(SpectatorInput::Choose(spectator, choice)) => {
                round.choose(app.session_mut(), spectator, choice)
            }
            Ok(SpectatorInput::Reset) => Ok(round.reset(app.session_mut())),
            Ok(SpectatorInput::Help) => {
                println!("{}", SPECTATOR_HELP);
                continue;
            }
            Ok(SpectatorInput::Quit) => break,
            Err(e) => {
                println!("! {}", e);
                continue;
            }
        };

        match outcome {
            Ok(snapshot) => {
                println!("{}", render_round(&round));
                println!("{}", render_snapshot(&snapshot, false));
            }
            Err(e) => println!("! {}", e),
        }
    }

    save_preferences(app.preferences(), prefs_path);
    Ok(())
}

/// Writes preferences on exit; a failure is logged, not fatal.
#[instrument(skip(preferences))]
fn save_preferences(preferences: &Preferences, path: &Path) {
    match preferences.save(path) {
        Ok(()) => info!("Preferences saved"),
        Err(e) => warn!(error = %e, "Could not save preferences"),
    }
}

/// Reads stdin line by line, printing a prompt before each read.
fn prompt_lines() -> impl Iterator<Item = String> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    std::iter::from_fn(move || {
        print!("> ");
        stdout.flush().ok()?;
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    })
}
