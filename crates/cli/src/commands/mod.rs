//! CLI Commands

pub mod init;
pub mod inventory;
pub mod tasks;

pub use init::InitCommand;
pub use inventory::InventoryCommand;
pub use tasks::TasksCommand;
