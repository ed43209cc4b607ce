//! Program wiring: own the terminal, size the screen, run, release

use std::io::stdout;

use anyhow::{Context, Result};
use ratatui::backend::CrosstermBackend;

use crate::config::MenuConfig;
use crate::echo::KeyEcho;
use crate::geometry::{GeometrySource, TerminalSize};
use crate::input::TerminalInput;
use crate::logging;
use crate::menu::MenuController;
use crate::screen::{Emphasis, TerminalScreen, TerminalSession};

/// Run a menu program, using `preset` unless a menu file overrides it
pub fn run_menu(preset: MenuConfig) -> Result<()> {
    logging::init()?;
    let config = MenuConfig::load(preset)?;

    let _session = TerminalSession::acquire()?;
    let geometry = config
        .geometry
        .source()
        .dimensions()
        .context("Failed to determine screen size")?;
    log::info!("Screen is {}x{}", geometry.columns, geometry.rows);

    let mut screen = TerminalScreen::new(CrosstermBackend::new(stdout()), config.emphasis)?;
    let mut controller = MenuController::new(config, geometry)?;
    controller.run(&mut screen, &mut TerminalInput)
}

/// Run the key echo program
pub fn run_key_echo() -> Result<()> {
    logging::init()?;

    let _session = TerminalSession::acquire()?;
    let geometry = TerminalSize
        .dimensions()
        .context("Failed to determine screen size")?;

    let mut screen = TerminalScreen::new(CrosstermBackend::new(stdout()), Emphasis::Bold)?;
    KeyEcho::new(geometry).run(&mut screen, &mut TerminalInput)
}
