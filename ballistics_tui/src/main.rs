//! ballistics_tui - Interactive TUI for comparing ammunition against armor
//!
//! Usage: `ballistics_tui [catalog.json] [--model damage_model.toml]`

mod app;
mod simulation;
mod ui;

use app::App;
use ballistics_core::{default_damage_model, load_damage_model, Catalog, CatalogError, ConfigError};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");
const LOG_FILE: &str = "ballistics_tui.log";

#[derive(Error, Debug)]
enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("usage: ballistics_tui [catalog.json] [--model damage_model.toml]")]
    Usage,
}

#[derive(Debug, Default)]
struct Args {
    catalog: Option<PathBuf>,
    model: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, AppError> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--model" => parsed.model = Some(args.next().ok_or(AppError::Usage)?.into()),
            "-h" | "--help" => return Err(AppError::Usage),
            _ if parsed.catalog.is_none() => parsed.catalog = Some(PathBuf::from(&arg)),
            _ => return Err(AppError::Usage),
        }
    }
    Ok(parsed)
}

/// Log to a file; the terminal belongs to the UI
fn init_logging() -> io::Result<()> {
    let file = File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), AppError> {
    let args = parse_args(std::env::args().skip(1))?;
    init_logging()?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::from_json_str(BUNDLED_CATALOG)?,
    };
    let model = match &args.model {
        Some(path) => load_damage_model(path)?,
        None => default_damage_model(),
    };
    tracing::info!(
        ammo = catalog.ammo.len(),
        armor = catalog.armor.len(),
        custom_model = args.model.is_some(),
        "starting"
    );

    let mut app = App::new(catalog, model)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "terminal loop failed");
    }
    result.map_err(AppError::from)
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Ok(()),
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char('1'), _) => app.set_tab(0),
            (KeyCode::Char('2'), _) => app.set_tab(1),
            (KeyCode::Char('3'), _) => app.set_tab(2),
            (KeyCode::Char('4'), _) => app.set_tab(3),
            (KeyCode::Char('5'), _) => app.set_tab(4),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
            (KeyCode::Char('a'), _) => app.cycle_armor(),
            (KeyCode::Char('z'), _) => app.cycle_zone(),
            (KeyCode::Char('e'), _) => app.toggle_equipped(),
            (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => app.raise_fire_rate(),
            (KeyCode::Char('-'), _) => app.lower_fire_rate(),
            (KeyCode::Char(']'), _) => app.steepen_angle(),
            (KeyCode::Char('['), _) => app.flatten_angle(),
            (KeyCode::Char('s'), _) => app.run_sample(),
            (KeyCode::Char('?'), _) => app.toggle_help(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, AppError> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&[]).unwrap();
        assert!(parsed.catalog.is_none() && parsed.model.is_none());

        let parsed = args(&["mine.json", "--model", "tuned.toml"]).unwrap();
        assert_eq!(parsed.catalog, Some(PathBuf::from("mine.json")));
        assert_eq!(parsed.model, Some(PathBuf::from("tuned.toml")));
    }

    #[test]
    fn test_parse_args_rejects_extra() {
        assert!(matches!(args(&["a.json", "b.json"]), Err(AppError::Usage)));
        assert!(matches!(args(&["--model"]), Err(AppError::Usage)));
    }
}
