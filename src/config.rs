//! Persisted settings and the directory they live in.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILE: &str = ".conf.json";
pub const DB_FILE: &str = ".WYD.db";

/// Directory holding the configuration document and the local database.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The current working directory.
    pub fn current() -> Self {
        Self::new(".")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join(DB_FILE)
    }
}

/// The configuration document. Every field is optional; unknown keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single field assignment performed by `wyd set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigField {
    Url(String),
    User(String),
    Local,
    Dev,
}

impl ConfigField {
    /// Message logged once the field has been written.
    pub fn confirmation(&self) -> String {
        match self {
            ConfigField::Url(url) => format!("Url set to: {url}"),
            ConfigField::User(user) => format!("User set to: {user}"),
            ConfigField::Local => "Installation set to local".to_string(),
            ConfigField::Dev => "Installation set to dev".to_string(),
        }
    }
}

impl Config {
    /// Reads the document at `path`. `Ok(None)` means the tool is not configured.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(Some(config))
    }

    /// Rewrites the whole document.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let raw = serde_json::to_string(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Reads the existing document (or starts empty), assigns one field and writes it back.
    pub fn set_field<P: AsRef<Path>>(path: P, field: &ConfigField) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::load(path)?.unwrap_or_default();
        config.apply(field);
        config.save(path)?;
        Ok(config)
    }

    pub fn apply(&mut self, field: &ConfigField) {
        match field {
            ConfigField::Url(url) => self.url = Some(url.clone()),
            ConfigField::User(user) => self.user = Some(user.clone()),
            ConfigField::Local => self.local = Some(true),
            ConfigField::Dev => self.dev = Some(true),
        }
    }

    pub fn is_local(&self) -> bool {
        self.local.unwrap_or(false)
    }

    pub fn is_dev(&self) -> bool {
        self.dev.unwrap_or(false)
    }
}
