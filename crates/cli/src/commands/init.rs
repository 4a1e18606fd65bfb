//! stockroom init command

use clap::Args;
use shared::{StockroomConfig, DEFAULT_CONFIG_FILE};
use std::path::{Path, PathBuf};
use stockroom_adapter::JsonFileRepository;
use stockroom_domain::{Product, RecordRepository, Task};
use tracing::debug;

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite existing config and store files
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        println!("Initializing Stockroom in {:?}", self.directory);

        let written = self.initialize()?;
        for path in &written {
            println!("  created {}", path.display());
        }

        println!("✓ Stockroom initialized");
        Ok(())
    }

    /// Write the config and empty stores. Returns the files written.
    pub fn initialize(&self) -> shared::Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.directory)?;
        let mut written = Vec::new();

        let config = StockroomConfig::default();
        let config_path = self.directory.join(DEFAULT_CONFIG_FILE);
        if self.should_write(&config_path) {
            config.save(&config_path)?;
            written.push(config_path);
        }

        let inventory_path = self.directory.join(&config.inventory_file);
        if self.should_write(&inventory_path) {
            JsonFileRepository::<Product>::new(&inventory_path).save(&[])?;
            written.push(inventory_path);
        }

        let tasks_path = self.directory.join(&config.tasks_file);
        if self.should_write(&tasks_path) {
            JsonFileRepository::<Task>::new(&tasks_path).save(&[])?;
            written.push(tasks_path);
        }

        Ok(written)
    }

    fn should_write(&self, path: &Path) -> bool {
        if path.exists() && !self.force {
            debug!(path = %path.display(), "already exists, keeping it");
            return false;
        }
        true
    }
}
