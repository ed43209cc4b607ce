//! Log setup
//!
//! The screen belongs to the UI, so log records go to a file or nowhere.

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};

/// Environment variable naming the log file
pub const LOG_FILE_ENV: &str = "TUI_DEMOS_LOG";

/// Send log records to the file named by `TUI_DEMOS_LOG`, filtered by `RUST_LOG`
pub fn init() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.to_string_lossy()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| writeln!(buf, "[tui-demos] {}: {}", record.level(), record.args()))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
