//! Key echo: print every key press until `q`

use std::collections::VecDeque;

use anyhow::Result;

use crate::input::{InputEvent, InputSource};
use crate::layout::{RenderLine, ScreenGeometry};
use crate::screen::Screen;

/// Key that ends the echo loop
pub const QUIT_KEY: char = 'q';

pub struct KeyEcho {
    history: VecDeque<String>,
    geometry: ScreenGeometry,
}

impl KeyEcho {
    pub fn new(geometry: ScreenGeometry) -> Self {
        Self {
            history: VecDeque::new(),
            geometry,
        }
    }

    /// Record a key press. Returns `false` for the quit key.
    pub fn record(&mut self, event: InputEvent) -> bool {
        if event == InputEvent::Char(QUIT_KEY) {
            return false;
        }

        self.history.push_back(format!("You pressed: {}", event));
        // Oldest lines scroll off the top
        while self.history.len() > usize::from(self.geometry.rows) {
            self.history.pop_front();
        }
        true
    }

    pub fn frame_lines(&self) -> Vec<RenderLine> {
        self.history
            .iter()
            .enumerate()
            .map(|(row, text)| RenderLine {
                row: row as i32,
                column: 0,
                text: text.clone(),
                emphasized: true,
            })
            .collect()
    }

    fn render(&self, screen: &mut impl Screen) -> Result<()> {
        screen.clear()?;
        for line in self.frame_lines() {
            screen.draw_line(&line)?;
        }
        screen.flush()
    }

    pub fn run(&mut self, screen: &mut impl Screen, input: &mut impl InputSource) -> Result<()> {
        self.render(screen)?;
        loop {
            let event = input.read_event()?;
            if !self.record(event) {
                log::info!("Quit key pressed");
                return Ok(());
            }
            self.render(screen)?;
        }
    }
}
