pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use command::Command;
pub use config::{Config, ConfigField, Workspace};
pub use error::{Error, Result};
pub use models::*;
pub use store::{open_store, RemoteStore, SqliteStore, TaskStore};
