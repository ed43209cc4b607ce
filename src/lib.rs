//! tui-demos - terminal demo programs
//!
//! A key echo loop and arrow-key menu selectors drawn with ratatui on top of
//! crossterm. Menus are plain configuration ([`MenuConfig`]) driven by a
//! single [`MenuController`].

pub mod app;
pub mod config;
pub mod echo;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod logging;
pub mod menu;
pub mod screen;

#[cfg(test)]
mod testing;

pub use config::{MenuConfig, MenuOption};
pub use geometry::{GeometryError, GeometryKind, GeometrySource};
pub use input::{InputEvent, InputSource};
pub use layout::{RenderLine, ScreenGeometry};
pub use menu::{ControllerState, MenuController, MenuState, NavigationPolicy};
pub use screen::{Emphasis, Screen, TerminalScreen, TerminalSession};
