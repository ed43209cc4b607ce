//! Test doubles for screens and input

use std::collections::VecDeque;

use anyhow::Result;

use crate::input::{InputEvent, InputSource};
use crate::layout::RenderLine;
use crate::screen::Screen;

/// Records every flushed frame
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pending: Vec<RenderLine>,
    pub frames: Vec<Vec<RenderLine>>,
}

impl Screen for RecordingScreen {
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
        self.frames.push(self.pending.clone());
        Ok(())
    }
}

/// Replays a fixed list of events, then fails
#[derive(Debug)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn read_event(&mut self) -> Result<InputEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Scripted input exhausted"))
    }
}
