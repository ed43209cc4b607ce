//! tmux-menu - the main menu, sized to the hosting tmux pane

use anyhow::Result;
use tui_demos::MenuConfig;

fn main() -> Result<()> {
    tui_demos::app::run_menu(MenuConfig::tmux_menu())
}
