//! Stockroom CLI - menus and commands behind the `stockroom` binary

pub mod commands;
pub mod interactive;
pub mod menu;
