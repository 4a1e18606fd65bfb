//! Interactive mode - pick an app when no subcommand was given

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use shared::StockroomConfig;

use crate::commands::{InventoryCommand, TasksCommand};

/// Entries of the app picker, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    Inventory,
    Tasks,
    Quit,
}

impl App {
    pub const ALL: [App; 3] = [App::Inventory, App::Tasks, App::Quit];

    pub fn label(self) -> &'static str {
        match self {
            App::Inventory => "Inventory manager",
            App::Tasks => "Task tracker",
            App::Quit => "Quit",
        }
    }

    /// Map a picker index back to its entry
    pub fn from_index(index: usize) -> Option<App> {
        Self::ALL.get(index).copied()
    }
}

/// App picker shown on a terminal
pub struct InteractiveCli {
    config: StockroomConfig,
}

impl InteractiveCli {
    pub fn new(config: StockroomConfig) -> Self {
        Self { config }
    }

    /// Show the picker, then run the chosen app
    pub fn run(&mut self) -> anyhow::Result<()> {
        if !Term::stdout().is_term() {
            anyhow::bail!("no command given; run `stockroom --help` for usage");
        }

        let labels: Vec<&str> = App::ALL.iter().map(|app| app.label()).collect();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Open which app?")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        self.open(picked.and_then(App::from_index).unwrap_or(App::Quit))
    }

    fn open(&self, app: App) -> anyhow::Result<()> {
        match app {
            App::Inventory => InventoryCommand { file: None }.run(&self.config),
            App::Tasks => TasksCommand { file: None }.run(&self.config),
            App::Quit => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(App::from_index(0), Some(App::Inventory));
        assert_eq!(App::from_index(1), Some(App::Tasks));
        assert_eq!(App::from_index(2), Some(App::Quit));
        assert_eq!(App::from_index(3), None);
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: Vec<_> = App::ALL.iter().map(|app| app.label()).collect();
        assert_eq!(labels, vec!["Inventory manager", "Task tracker", "Quit"]);
    }

    #[test]
    fn test_open_quit_does_nothing() {
        let cli = InteractiveCli::new(StockroomConfig::default());
        assert!(cli.open(App::Quit).is_ok());
    }
}
