//! Arrow-key menu selection
//!
//! A [`MenuController`] alternates between browsing the option list and
//! showing a detail screen for the confirmed option, until the exit option
//! is confirmed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::MenuConfig;
use crate::input::{InputEvent, InputSource};
use crate::layout::{middle_row, RenderLine, ScreenGeometry};
use crate::screen::Screen;

/// Rows above the first option: title, gap, hint, gap
const HEADER_LINES: usize = 4;

/// What happens when moving past either end of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPolicy {
    #[default]
    Wrap,
    Clamp,
}

/// Option list plus the highlighted position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    options: Vec<String>,
    highlight: usize,
}

impl MenuState {
    /// Returns `None` for an empty option list
    pub fn new(options: Vec<String>) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        Some(Self {
            options,
            highlight: 0,
        })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    pub fn move_up(&mut self, policy: NavigationPolicy) {
        let last = self.options.len() - 1;
        self.highlight = match (self.highlight, policy) {
            (0, NavigationPolicy::Wrap) => last,
            (0, NavigationPolicy::Clamp) => 0,
            (current, _) => current - 1,
        };
    }

    pub fn move_down(&mut self, policy: NavigationPolicy) {
        let last = self.options.len() - 1;
        self.highlight = match policy {
            _ if self.highlight < last => self.highlight + 1,
            NavigationPolicy::Wrap => 0,
            NavigationPolicy::Clamp => last,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Browsing,
    ShowingDetail(usize),
    Terminated,
}

pub struct MenuController {
    config: MenuConfig,
    menu: MenuState,
    exit_index: usize,
    geometry: ScreenGeometry,
    state: ControllerState,
}

impl MenuController {
    pub fn new(config: MenuConfig, geometry: ScreenGeometry) -> Result<Self> {
        if let Err(errors) = config.validate() {
            anyhow::bail!("Invalid menu: {}", errors.join("; "));
        }
        let exit_index = config.exit_index().context("Menu has no exit option")?;
        let labels = config.options.iter().map(|o| o.label.clone()).collect();
        let menu = MenuState::new(labels).context("Menu has no options")?;

        Ok(Self {
            config,
            menu,
            exit_index,
            geometry,
            state: ControllerState::Browsing,
        })
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Apply one input event and return the resulting state
    pub fn handle_event(&mut self, event: InputEvent) -> ControllerState {
        self.state = match self.state {
            ControllerState::Browsing => match event {
                InputEvent::MoveUp => {
                    self.menu.move_up(self.config.navigation);
                    ControllerState::Browsing
                }
                InputEvent::MoveDown => {
                    self.menu.move_down(self.config.navigation);
                    ControllerState::Browsing
                }
                InputEvent::Confirm if self.menu.highlight() == self.exit_index => {
                    ControllerState::Terminated
                }
                InputEvent::Confirm => ControllerState::ShowingDetail(self.menu.highlight()),
                InputEvent::Char(_) | InputEvent::Other => ControllerState::Browsing,
            },
            ControllerState::ShowingDetail(_) => ControllerState::Browsing,
            ControllerState::Terminated => ControllerState::Terminated,
        };
        self.state
    }

    /// Lines making up the browsing frame
    pub fn frame_lines(&self) -> Vec<RenderLine> {
        let options = self.menu.options();
        let top = middle_row(self.config.block_lines(), self.geometry.rows);

        let mut lines = vec![
            RenderLine::centered(top, self.config.title.as_str(), self.geometry),
            RenderLine::centered(top + 2, self.config.hint.as_str(), self.geometry),
        ];
        lines.extend(options.iter().enumerate().map(|(i, label)| {
            RenderLine::centered(top + (HEADER_LINES + i) as i32, label.as_str(), self.geometry)
                .emphasized(i == self.menu.highlight())
        }));
        lines
    }

    /// Lines making up the detail screen for option `index`
    pub fn detail_lines(&self, index: usize) -> Vec<RenderLine> {
        let Some(option) = self.config.options.get(index) else {
            return Vec::new();
        };

        // heading, gap, details, gap, prompt
        let total = option.details.len() + 4;
        let top = middle_row(total, self.geometry.rows);

        let mut lines = vec![RenderLine::centered(top, option.heading(), self.geometry)];
        lines.extend(option.details.iter().enumerate().map(|(i, detail)| {
            RenderLine::centered(top + 2 + i as i32, detail.as_str(), self.geometry)
        }));
        lines.push(RenderLine::centered(
            top + total as i32 - 1,
            self.config.prompt.as_str(),
            self.geometry,
        ));
        lines
    }

    pub fn render(&self, screen: &mut impl Screen) -> Result<()> {
        draw_frame(screen, &self.frame_lines())
    }

    /// Show the detail screen for `index` and wait for one key
    fn show_detail(
        &mut self,
        index: usize,
        screen: &mut impl Screen,
        input: &mut impl InputSource,
    ) -> Result<()> {
        log::debug!("Showing detail for option {}", index);
        draw_frame(screen, &self.detail_lines(index))?;
        let event = input.read_event()?;
        self.handle_event(event);
        Ok(())
    }

    /// Run until the exit option is confirmed
    pub fn run(&mut self, screen: &mut impl Screen, input: &mut impl InputSource) -> Result<()> {
        loop {
            match self.state {
                ControllerState::Browsing => {
                    self.render(screen)?;
                    let event = input.read_event()?;
                    self.handle_event(event);
                }
                ControllerState::ShowingDetail(index) => {
                    self.show_detail(index, screen, input)?;
                }
                ControllerState::Terminated => {
                    log::info!("Exit selected");
                    return Ok(());
                }
            }
        }
    }
}

fn draw_frame(screen: &mut impl Screen, lines: &[RenderLine]) -> Result<()> {
    screen.clear()?;
    for line in lines {
        screen.draw_line(line)?;
    }
    screen.flush()
}
