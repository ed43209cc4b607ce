//! Screen output and terminal ownership

use std::io::stdout;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::layout::RenderLine;

/// Visual attribute used for emphasized text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    Reverse,
    Bold,
}

impl Emphasis {
    fn style(self) -> Style {
        match self {
            Emphasis::Reverse => Style::default().add_modifier(Modifier::REVERSED),
            Emphasis::Bold => Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

/// Frame-oriented text output.
///
/// A frame is built with `clear` followed by any number of `draw_text` calls
/// and becomes visible on `flush`.
pub trait Screen {
    fn clear(&mut self) -> Result<()>;

    fn draw_text(&mut self, row: i32, column: i32, text: &str, emphasized: bool) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    fn draw_line(&mut self, line: &RenderLine) -> Result<()> {
        self.draw_text(line.row, line.column, &line.text, line.emphasized)
    }
}

/// Screen backed by a ratatui backend.
///
/// Frames are diffed against the previous one and only changed cells are
/// written. Cursor visibility is left to [`TerminalSession`].
pub struct TerminalScreen<B: Backend> {
    backend: B,
    previous: Buffer,
    emphasis: Emphasis,
    pending: Vec<RenderLine>,
}

impl<B: Backend> TerminalScreen<B> {
    pub fn new(mut backend: B, emphasis: Emphasis) -> Result<Self> {
        let area = backend_area(&backend)?;
        backend.clear().context("Failed to clear terminal")?;

        Ok(Self {
            backend,
            previous: Buffer::empty(area),
            emphasis,
            pending: Vec::new(),
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

fn backend_area(backend: &impl Backend) -> Result<Rect> {
    let size = backend.size().context("Failed to query terminal size")?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

impl<B: Backend> Screen for TerminalScreen<B> {
    fn clear(&mut self) -> Result<()> {
        self.pending.clear();
        Ok(())
    }

    fn draw_text(&mut self, row: i32, column: i32, text: &str, emphasized: bool) -> Result<()> {
        self.pending.push(RenderLine {
            row,
            column,
            text: text.to_string(),
            emphasized,
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let area = backend_area(&self.backend)?;
        if area != self.previous.area {
            // Size changed: repaint everything
            self.backend.clear().context("Failed to clear terminal")?;
            self.previous = Buffer::empty(area);
        }

        let emphasis = self.emphasis.style();
        let mut current = Buffer::empty(area);
        for line in &self.pending {
            let style = if line.emphasized {
                emphasis
            } else {
                Style::default()
            };
            put_line(&mut current, area, line, style);
        }

        let updates = self.previous.diff(&current);
        self.backend
            .draw(updates.into_iter())
            .context("Failed to draw frame")?;
        self.backend.flush().context("Failed to flush frame")?;
        self.previous = current;

        Ok(())
    }
}

/// Write a line into the buffer, clipping whatever falls outside `area`
fn put_line(buf: &mut Buffer, area: Rect, line: &RenderLine, style: Style) {
    let Ok(y) = u16::try_from(line.row) else {
        return;
    };
    if y >= area.height {
        return;
    }

    let mut column = line.column;
    let mut text = line.text.as_str();
    while column < 0 {
        let Some(c) = text.chars().next() else {
            return;
        };
        column += c.width().unwrap_or(0) as i32;
        text = &text[c.len_utf8()..];
    }

    let Ok(x) = u16::try_from(column) else {
        return;
    };
    if x >= area.width {
        return;
    }

    buf.set_stringn(
        area.x + x,
        area.y + y,
        text,
        usize::from(area.width - x),
        style,
    );
}

/// Exclusive ownership of the controlling terminal.
///
/// Acquiring switches to raw mode (no echo, no line buffering), the alternate
/// screen and a hidden cursor. Dropping restores all three.
#[derive(Debug)]
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let session = Self { _private: () };

        stdout()
            .execute(EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        stdout().execute(Hide).context("Failed to hide cursor")?;

        log::debug!("Terminal acquired");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = out.execute(Show);
        let _ = out.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
        log::debug!("Terminal released");
    }
}
