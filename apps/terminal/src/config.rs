//! Application configuration from the environment.

use anyhow::{bail, Result};
use lingo_core::Category;
use std::path::PathBuf;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the persisted user state.
    pub data_dir: PathBuf,
    /// Play the words of this lesson.
    pub lesson: Option<String>,
    /// Play the words of this category (ignored when a lesson is set).
    pub category: Option<Category>,
}

fn default_data_dir() -> PathBuf {
    // Platform data directory, or the working directory when there is none.
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lingo")
}

impl AppConfig {
    /// Read `LINGO_DATA_DIR`, `LINGO_LESSON` and `LINGO_CATEGORY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = non_empty("LINGO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let category = match non_empty("LINGO_CATEGORY") {
            Some(name) => match Category::from_str(name.trim()) {
                Some(category) => Some(category),
                None => bail!("unknown category in LINGO_CATEGORY: {}", name),
            },
            None => None,
        };

        Ok(Self {
            data_dir,
            lesson: non_empty("LINGO_LESSON"),
            category,
        })
    }
}
