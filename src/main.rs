//! main-menu - centered arrow-key menu sized to the terminal

use anyhow::Result;
use tui_demos::MenuConfig;

fn main() -> Result<()> {
    tui_demos::app::run_menu(MenuConfig::main_menu())
}
