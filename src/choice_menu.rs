//! choice-menu - pick an animal; Goose quits

use anyhow::Result;
use tui_demos::MenuConfig;

fn main() -> Result<()> {
    tui_demos::app::run_menu(MenuConfig::choices())
}
