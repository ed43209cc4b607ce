//! Keyboard input

use std::fmt;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A single decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    Confirm,
    /// Printable character; menus treat it like any other unbound key
    Char(char),
    Other,
}

impl InputEvent {
    pub fn from_key(key: KeyEvent) -> Self {
        // Raw mode delivers Ctrl+<letter> as the bare letter plus a modifier
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return InputEvent::Other;
        }

        match key.code {
            KeyCode::Up => InputEvent::MoveUp,
            KeyCode::Down => InputEvent::MoveDown,
            KeyCode::Enter => InputEvent::Confirm,
            KeyCode::Char(c) => InputEvent::Char(c),
            _ => InputEvent::Other,
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::MoveUp => write!(f, "Up"),
            InputEvent::MoveDown => write!(f, "Down"),
            InputEvent::Confirm => write!(f, "Enter"),
            InputEvent::Char(c) => write!(f, "{}", c),
            InputEvent::Other => write!(f, "?"),
        }
    }
}

/// Blocking source of input events
pub trait InputSource {
    fn read_event(&mut self) -> Result<InputEvent>;
}

/// Reads key presses from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn read_event(&mut self) -> Result<InputEvent> {
        loop {
            // Resize, mouse and key-release events never reach the caller
            if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
                if key.kind == KeyEventKind::Press {
                    return Ok(InputEvent::from_key(key));
                }
            }
        }
    }
}
