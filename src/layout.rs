//! Screen geometry and centering helpers

use unicode_width::UnicodeWidthStr;

/// Terminal extent used for laying out a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    pub rows: u16,
    pub columns: u16,
}

impl ScreenGeometry {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }
}

/// A single line of text placed on screen for one frame.
///
/// Coordinates are signed: content larger than the screen yields negative
/// positions, which renderers clip instead of rejecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    pub row: i32,
    pub column: i32,
    pub text: String,
    pub emphasized: bool,
}

impl RenderLine {
    /// Line centered horizontally on `row`
    pub fn centered(row: i32, text: impl Into<String>, geometry: ScreenGeometry) -> Self {
        let text = text.into();
        Self {
            row,
            column: center_column(&text, geometry.columns),
            text,
            emphasized: false,
        }
    }

    pub fn emphasized(mut self, emphasized: bool) -> Self {
        self.emphasized = emphasized;
        self
    }
}

/// Column at which `text` starts when centered across `columns`
pub fn center_column(text: &str, columns: u16) -> i32 {
    (i32::from(columns) - text.width() as i32) / 2
}

/// Top row of a block of `num_lines` lines centered vertically across `rows`
pub fn middle_row(num_lines: usize, rows: u16) -> i32 {
    (i32::from(rows) - num_lines as i32) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_welcome_on_standard_terminal() {
        assert_eq!(center_column("Welcome", 80), 36);
    }

    #[test]
    fn middle_row_truncates() {
        assert_eq!(middle_row(8, 24), 8);
        assert_eq!(middle_row(7, 24), 8);
        assert_eq!(middle_row(7, 25), 9);
    }

    #[test]
    fn oversized_content_goes_negative() {
        // Integer division truncates toward zero.
        assert_eq!(center_column("Use Arrow Keys to Navigate, Enter to Select", 10), -16);
        assert_eq!(middle_row(8, 3), -2);
        assert_eq!(middle_row(8, 7), 0);
    }

    #[test]
    fn centered_line_uses_geometry_width() {
        let line = RenderLine::centered(3, "Exit", ScreenGeometry::new(24, 80));
        assert_eq!(line.row, 3);
        assert_eq!(line.column, 38);
        assert!(!line.emphasized);
        assert!(line.emphasized(true).emphasized);
    }
}
