//! Task storage backends.

pub mod local;
pub mod remote;

pub use local::SqliteStore;
pub use remote::RemoteStore;

use crate::config::{Config, Workspace};
use crate::error::Result;
use crate::models::Task;

/// Operations every backend provides. `close`, `delete` and `update` return the
/// number of affected rows; an unknown id is not an error.
pub trait TaskStore {
    fn initialize(&self) -> Result<()>;
    fn create(&self, description: &str) -> Result<Task>;
    fn list(&self) -> Result<Vec<Task>>;
    fn update(&self, id: i64, description: &str) -> Result<usize>;
    fn close(&self, id: i64) -> Result<usize>;
    fn delete(&self, id: i64) -> Result<usize>;
}

/// Picks the backend named by the configuration.
pub fn open_store(config: &Config, workspace: &Workspace) -> Box<dyn TaskStore> {
    if config.is_local() {
        Box::new(SqliteStore::new(workspace.db_path()))
    } else {
        Box::new(RemoteStore::new(config.url.clone(), config.user.clone()))
    }
}
