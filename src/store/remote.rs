use log::info;

use super::TaskStore;
use crate::error::{Error, Result};
use crate::models::Task;

/// Placeholder for a "What You Doin" server. It carries the configured
/// endpoint and identity but speaks no protocol yet, so task operations fail.
pub struct RemoteStore {
    url: Option<String>,
    user: Option<String>,
}

impl RemoteStore {
    pub fn new(url: Option<String>, user: Option<String>) -> Self {
        Self { url, user }
    }

    fn endpoint(&self) -> String {
        self.url.clone().unwrap_or_else(|| "no url set".to_string())
    }

    fn unsupported<T>(&self, intent: &str) -> Result<T> {
        info!(
            "Remote DB {}: {} (user: {})",
            self.endpoint(),
            intent,
            self.user.as_deref().unwrap_or("anonymous")
        );
        Err(Error::RemoteUnsupported(self.endpoint()))
    }
}

impl TaskStore for RemoteStore {
    fn initialize(&self) -> Result<()> {
        info!("Remote DB {}: nothing to initialize", self.endpoint());
        Ok(())
    }

    fn create(&self, description: &str) -> Result<Task> {
        self.unsupported(&format!("create \"{description}\""))
    }

    fn list(&self) -> Result<Vec<Task>> {
        self.unsupported("list")
    }

    fn update(&self, id: i64, description: &str) -> Result<usize> {
        self.unsupported(&format!("update #{id} to \"{description}\""))
    }

    fn close(&self, id: i64) -> Result<usize> {
        self.unsupported(&format!("close #{id}"))
    }

    fn delete(&self, id: i64) -> Result<usize> {
        self.unsupported(&format!("delete #{id}"))
    }
}
