//! Terminal size discovery

use std::io;
use std::process::Command;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::ScreenGeometry;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("failed to query terminal size: {0}")]
    Terminal(#[source] io::Error),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} {format} exited with {status}")]
    Status {
        program: String,
        format: String,
        status: std::process::ExitStatus,
    },

    #[error("unexpected output for {format}: {output:?}")]
    Malformed { format: String, output: String },
}

/// Anything that can report the rows and columns available for drawing
pub trait GeometrySource {
    fn dimensions(&self) -> Result<ScreenGeometry, GeometryError>;
}

/// Size as reported by the terminal driver
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSize;

impl GeometrySource for TerminalSize {
    fn dimensions(&self) -> Result<ScreenGeometry, GeometryError> {
        let (columns, rows) = crossterm::terminal::size().map_err(GeometryError::Terminal)?;
        Ok(ScreenGeometry::new(rows, columns))
    }
}

/// Size of the tmux pane hosting this process
#[derive(Debug, Clone)]
pub struct TmuxPane {
    program: String,
}

impl Default for TmuxPane {
    fn default() -> Self {
        Self {
            program: "tmux".to_string(),
        }
    }
}

impl TmuxPane {
    /// Use a different tmux executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn query(&self, format: &str) -> Result<u16, GeometryError> {
        let output = Command::new(&self.program)
            .args(["display-message", "-p", format])
            .output()
            .map_err(|source| GeometryError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GeometryError::Status {
                program: self.program.clone(),
                format: format.to_string(),
                status: output.status,
            });
        }

        parse_dimension(format, &String::from_utf8_lossy(&output.stdout))
    }
}

impl GeometrySource for TmuxPane {
    fn dimensions(&self) -> Result<ScreenGeometry, GeometryError> {
        let rows = self.query("#{pane_height}")?;
        let columns = self.query("#{pane_width}")?;
        Ok(ScreenGeometry::new(rows, columns))
    }
}

/// Parse one positive dimension printed by `display-message -p`
fn parse_dimension(format: &str, output: &str) -> Result<u16, GeometryError> {
    let malformed = || GeometryError::Malformed {
        format: format.to_string(),
        output: output.to_string(),
    };

    match output.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(malformed()),
        Ok(value) => Ok(value),
    }
}

/// Try `primary`, and use `fallback` if it fails
#[derive(Debug, Clone)]
pub struct WithFallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> WithFallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: GeometrySource, F: GeometrySource> GeometrySource for WithFallback<P, F> {
    fn dimensions(&self) -> Result<ScreenGeometry, GeometryError> {
        match self.primary.dimensions() {
            Ok(geometry) => Ok(geometry),
            Err(e) => {
                log::warn!("Geometry query failed ({}), falling back", e);
                self.fallback.dimensions()
            }
        }
    }
}

/// Which geometry source a menu uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    #[default]
    Terminal,
    Tmux,
}

impl GeometryKind {
    pub fn source(self) -> Box<dyn GeometrySource> {
        match self {
            GeometryKind::Terminal => Box::new(TerminalSize),
            GeometryKind::Tmux => Box::new(WithFallback::new(TmuxPane::default(), TerminalSize)),
        }
    }
}
