//! Menu configuration

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::geometry::GeometryKind;
use crate::menu::NavigationPolicy;
use crate::screen::Emphasis;

/// Environment variable naming a TOML file that replaces the built-in menu
pub const MENU_FILE_ENV: &str = "TUI_DEMOS_MENU";

/// One selectable menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    /// Text shown in the menu
    pub label: String,

    /// First line of the detail screen, defaults to "<label> Selected"
    #[serde(default)]
    pub heading: Option<String>,

    /// Lines shown under the heading on the detail screen
    #[serde(default)]
    pub details: Vec<String>,

    /// Confirming this entry ends the program
    #[serde(default)]
    pub exit: bool,
}

impl MenuOption {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            heading: None,
            details: Vec::new(),
            exit: false,
        }
    }

    pub fn exit(label: &str) -> Self {
        Self {
            exit: true,
            ..Self::new(label)
        }
    }

    pub fn heading(&self) -> String {
        self.heading
            .clone()
            .unwrap_or_else(|| format!("{} Selected", self.label))
    }
}

/// Complete description of a menu program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_hint")]
    pub hint: String,

    /// Last line of every detail screen
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub navigation: NavigationPolicy,

    #[serde(default)]
    pub emphasis: Emphasis,

    #[serde(default)]
    pub geometry: GeometryKind,

    /// Height used to center the main menu, defaults to 2 + option count
    #[serde(default)]
    pub block_lines: Option<usize>,

    pub options: Vec<MenuOption>,
}

fn default_title() -> String {
    "Welcome to the Terminal Interface".to_string()
}

fn default_hint() -> String {
    "Use Arrow Keys to Navigate, Enter to Select".to_string()
}

fn default_prompt() -> String {
    "Press any key to return to main menu.".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::main_menu()
    }
}

impl MenuConfig {
    /// Three sub-option screens and an exit entry
    pub fn main_menu() -> Self {
        let sub_options: Vec<String> = (1..=3)
            .map(|n| format!("Sub-option {}: Hello World", n))
            .collect();

        let mut options: Vec<MenuOption> = (1..=3)
            .map(|n| MenuOption {
                label: format!("Option {}: Sub-options", n),
                heading: Some(format!("Option {} Selected", n)),
                details: sub_options.clone(),
                exit: false,
            })
            .collect();
        options.push(MenuOption::exit("Exit"));

        Self {
            title: default_title(),
            hint: default_hint(),
            prompt: default_prompt(),
            navigation: NavigationPolicy::default(),
            emphasis: Emphasis::Reverse,
            geometry: GeometryKind::Terminal,
            block_lines: None,
            options,
        }
    }

    /// The main menu sized to the hosting tmux pane
    pub fn tmux_menu() -> Self {
        Self {
            geometry: GeometryKind::Tmux,
            ..Self::main_menu()
        }
    }

    /// Four-animal chooser where the last animal quits
    pub fn choices() -> Self {
        let mut options: Vec<MenuOption> = ["Monkey", "Donkey", "Stupid"]
            .into_iter()
            .map(|label| MenuOption {
                heading: Some(format!("You chose: {}", label)),
                ..MenuOption::new(label)
            })
            .collect();
        options.push(MenuOption::exit("Goose"));

        Self {
            title: "Pick an animal".to_string(),
            hint: "Up/Down to move, Enter to choose, Goose quits".to_string(),
            prompt: "Press any key to choose again.".to_string(),
            navigation: NavigationPolicy::Wrap,
            emphasis: Emphasis::Bold,
            geometry: GeometryKind::Terminal,
            block_lines: None,
            options,
        }
    }

    /// Load a menu from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid menu file: {}", path.display()))
    }

    /// Parse a menu from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse menu")?;
        if let Err(errors) = config.validate() {
            anyhow::bail!("{}", errors.join("; "));
        }
        Ok(config)
    }

    /// Use the file named by `TUI_DEMOS_MENU` if set, otherwise `preset`
    pub fn load(preset: Self) -> Result<Self> {
        let path = std::env::var_os(MENU_FILE_ENV);
        Self::load_from(path.as_deref().map(Path::new), preset)
    }

    fn load_from(path: Option<&Path>, preset: Self) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                log::info!("Loaded menu from {}", path.display());
                Ok(config)
            }
            None => {
                log::info!("Using built-in menu");
                Ok(preset)
            }
        }
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.options.is_empty() {
            errors.push("Menu has no options".to_string());
        }

        match self.options.iter().filter(|o| o.exit).count() {
            0 => errors.push("Menu has no exit option".to_string()),
            1 => {}
            n => errors.push(format!("Menu has {} exit options, expected one", n)),
        }

        for (i, option) in self.options.iter().enumerate() {
            if option.label.trim().is_empty() {
                errors.push(format!("Option {} has an empty label", i + 1));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Rows the main menu occupies for vertical centering
    pub fn block_lines(&self) -> usize {
        self.block_lines.unwrap_or(self.options.len() + 2)
    }

    /// Index of the entry that ends the program
    pub fn exit_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn presets_are_valid() {
        for config in [
            MenuConfig::main_menu(),
            MenuConfig::tmux_menu(),
            MenuConfig::choices(),
        ] {
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn main_menu_matches_demo() {
        let config = MenuConfig::main_menu();
        let labels: Vec<&str> = config.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Option 1: Sub-options",
                "Option 2: Sub-options",
                "Option 3: Sub-options",
                "Exit"
            ]
        );
        assert_eq!(config.exit_index(), Some(3));
        assert_eq!(config.options[1].heading(), "Option 2 Selected");
        assert_eq!(config.options[0].details.len(), 3);
        assert_eq!(MenuConfig::tmux_menu().geometry, GeometryKind::Tmux);
    }

    #[test]
    fn block_height_defaults_to_options_plus_two() -> Result<()> {
        assert_eq!(MenuConfig::main_menu().block_lines(), 6);

        let toml = "block_lines = 10\n[[options]]\nlabel = \"Exit\"\nexit = true\n";
        assert_eq!(MenuConfig::from_str(toml)?.block_lines(), 10);
        Ok(())
    }

    #[test]
    fn choices_quit_on_goose() {
        let config = MenuConfig::choices();
        assert_eq!(config.exit_index(), Some(3));
        assert_eq!(config.options[3].label, "Goose");
        assert_eq!(config.emphasis, Emphasis::Bold);
    }

    #[test]
    fn parses_minimal_toml_with_defaults() -> Result<()> {
        let toml = r#"
[[options]]
label = "Coffee"

[[options]]
label = "Quit"
exit = true
"#;
        let config = MenuConfig::from_str(toml)?;
        assert_eq!(config.title, "Welcome to the Terminal Interface");
        assert_eq!(config.navigation, NavigationPolicy::Wrap);
        assert_eq!(config.emphasis, Emphasis::Reverse);
        assert_eq!(config.geometry, GeometryKind::Terminal);
        assert_eq!(config.options[0].heading(), "Coffee Selected");
        assert_eq!(config.exit_index(), Some(1));
        Ok(())
    }

    #[test]
    fn parses_policy_and_style_names() -> Result<()> {
        let toml = r#"
navigation = "clamp"
emphasis = "bold"
geometry = "tmux"

[[options]]
label = "Exit"
exit = true
"#;
        let config = MenuConfig::from_str(toml)?;
        assert_eq!(config.navigation, NavigationPolicy::Clamp);
        assert_eq!(config.emphasis, Emphasis::Bold);
        assert_eq!(config.geometry, GeometryKind::Tmux);
        assert_eq!(config.block_lines(), 3);
        Ok(())
    }

    #[test]
    fn validation_reports_every_problem() {
        let config = MenuConfig {
            options: vec![MenuOption::new(" "), MenuOption::new("Tea")],
            ..MenuConfig::main_menu()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);

        let config = MenuConfig {
            options: vec![MenuOption::exit("a"), MenuOption::exit("b")],
            ..MenuConfig::main_menu()
        };
        assert!(config.validate().is_err());

        let config = MenuConfig {
            options: Vec::new(),
            ..MenuConfig::main_menu()
        };
        assert_eq!(config.validate().unwrap_err().len(), 2);
    }

    #[test]
    fn rejects_menu_without_exit() {
        let err = MenuConfig::from_str("[[options]]\nlabel = \"Stuck\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("no exit option"));
    }

    #[test]
    fn loads_file_or_falls_back_to_preset() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "title = \"From disk\"\n[[options]]\nlabel = \"Bye\"\nexit = true")?;

        let config = MenuConfig::load_from(Some(file.path()), MenuConfig::choices())?;
        assert_eq!(config.title, "From disk");

        let config = MenuConfig::load_from(None, MenuConfig::choices())?;
        assert_eq!(config, MenuConfig::choices());

        let missing = file.path().with_extension("missing");
        assert!(MenuConfig::load_from(Some(&missing), MenuConfig::choices()).is_err());
        Ok(())
    }
}
