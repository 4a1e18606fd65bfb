//! stockroom tasks command

use clap::Args;
use shared::StockroomConfig;
use std::io;
use std::path::PathBuf;
use stockroom_adapter::JsonFileRepository;
use tracing::info;

use crate::menu::{run_menu, Prompter, TaskMenu};

#[derive(Debug, Args)]
pub struct TasksCommand {
    /// Task file to use instead of the configured one
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl TasksCommand {
    /// Store file this command will open
    pub fn store_path(&self, config: &StockroomConfig) -> PathBuf {
        self.file.clone().unwrap_or_else(|| config.tasks_file.clone())
    }

    pub fn run(&self, config: &StockroomConfig) -> anyhow::Result<()> {
        let path = self.store_path(config);
        info!(path = %path.display(), "opening task tracker");

        let mut menu = TaskMenu::new(JsonFileRepository::new(path));
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
        run_menu(&mut menu, &mut prompter)
    }
}
