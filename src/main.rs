mod app;
mod browser;
mod components;
mod config;
mod error;
mod event;
mod fs;
mod handler;
mod theme;
mod tui;
mod ui;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::event::{self as term_event, Event as CrosstermEvent, KeyCode, KeyEventKind};
use crossterm::terminal;

use crate::app::App;
use crate::config::{AppConfig, ThemeConfig};
use crate::error::{AppError, Result};
use crate::event::{Event, EventReader};
use crate::fs::operations;
use crate::tui::{install_panic_hook, Tui};

/// A terminal playlist-builder TUI.
#[derive(Parser, Debug)]
#[command(name = "playlist_picker_tui", version, about)]
struct Cli {
    /// Directory to start browsing from (defaults to the current directory)
    path: Option<PathBuf>,

    /// Target playlist directory (skips the startup prompt)
    #[arg(long)]
    target: Option<PathBuf>,

    /// Explicit config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme scheme override: dark, light or custom
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cli_overrides = AppConfig {
        theme: ThemeConfig {
            scheme: cli.theme.clone(),
            custom: None,
        },
        ..Default::default()
    };
    let config = AppConfig::load(cli.config.as_deref(), Some(&cli_overrides));

    let start = cli
        .path
        .clone()
        .or_else(|| config.general.default_path.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let start_dir = start
        .canonicalize()
        .map_err(|_| AppError::InvalidPath(format!("{} does not exist", start.display())))?;

    let target_dir = match resolve_target_dir(&cli, &config)? {
        Some(dir) => dir,
        // The user declined to create the playlist directory.
        None => return Ok(()),
    };

    let theme_colors = theme::resolve_theme(&config.theme);

    install_panic_hook();
    let mut tui = Tui::new()?;
    let mut app = App::new(start_dir, target_dir, theme_colors);
    let mut events = EventReader::new();

    // Listing and playlist membership are re-read from disk on every
    // iteration; the view is never stale against external changes.
    loop {
        app.refresh();
        tui.terminal_mut().draw(|frame| ui::render(&mut app, frame))?;

        match events.next()? {
            Event::Key(key) => handler::handle_key_event(&mut app, key),
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    tui.restore()?;
    Ok(())
}

/// Resolve the playlist directory from CLI, config, or an interactive
/// prompt, creating it (after confirmation) when missing.
///
/// Returns `None` when the user declines creation — a clean exit, not an
/// error.
fn resolve_target_dir(cli: &Cli, config: &AppConfig) -> Result<Option<PathBuf>> {
    let target = match cli
        .target
        .clone()
        .or_else(|| config.general.target_dir.clone().map(PathBuf::from))
    {
        Some(t) => t,
        None => prompt_target_dir()?,
    };

    if !target.exists() {
        if !confirm_create(&target)? {
            return Ok(None);
        }
        operations::create_target_dir(&target)?;
    }
    if !target.is_dir() {
        return Err(AppError::InvalidPath(format!(
            "path is not a directory: {}",
            target.display()
        )));
    }
    Ok(Some(target))
}

/// Ask for the playlist directory path: line input on the normal screen,
/// before the TUI takes over the terminal.
fn prompt_target_dir() -> Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter target playlist directory: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidPath(
            "no target directory given".to_string(),
        ));
    }
    Ok(PathBuf::from(trimmed))
}

/// Single-key y/n confirmation; any other key keeps asking.
fn confirm_create(path: &Path) -> Result<bool> {
    let mut stdout = io::stdout();
    write!(
        stdout,
        "Directory '{}' does not exist. Create it? (y/n): ",
        path.display()
    )?;
    stdout.flush()?;

    terminal::enable_raw_mode()?;
    let answer = read_yes_no();
    terminal::disable_raw_mode()?;
    writeln!(stdout)?;
    answer
}

fn read_yes_no() -> Result<bool> {
    loop {
        if let CrosstermEvent::Key(key) = term_event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
                KeyCode::Char('n') | KeyCode::Char('N') => return Ok(false),
                _ => {}
            }
        }
    }
}
