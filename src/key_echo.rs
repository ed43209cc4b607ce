//! key-echo - show every key pressed until `q`

use anyhow::Result;

fn main() -> Result<()> {
    tui_demos::app::run_key_echo()
}
