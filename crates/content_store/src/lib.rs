use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use shared::domain::{NewsId, NewsItem};
use thiserror::Error;

mod fixture;

/// Read port over the news records. Order of [`NewsSource::news`] is display order.
pub trait NewsSource: Send + Sync {
    fn news(&self) -> &[NewsItem];

    fn find(&self, id: NewsId) -> Option<&NewsItem> {
        self.news().iter().find(|item| item.id == id)
    }

    fn contains(&self, id: NewsId) -> bool {
        self.find(id).is_some()
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read news file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid json news file '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid toml news file '{path}': {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("unsupported news file format '{path}' (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
    #[error("news file '{path}' contains no records")]
    Empty { path: PathBuf },
    #[error("news file '{path}' repeats id {id}")]
    DuplicateId { path: PathBuf, id: i64 },
}

/// Hardcoded records compiled into the binary.
#[derive(Debug, Clone)]
pub struct StaticNewsStore {
    items: Vec<NewsItem>,
}

impl StaticNewsStore {
    pub fn bundled() -> Self {
        Self {
            items: fixture::bundled_news(),
        }
    }

    pub fn from_items(items: Vec<NewsItem>) -> Self {
        Self { items }
    }
}

impl NewsSource for StaticNewsStore {
    fn news(&self) -> &[NewsItem] {
        &self.items
    }
}

/// Records read once from a `.json` array or a `.toml` file with `[[news]]` tables.
#[derive(Debug, Clone)]
pub struct FileNewsStore {
    path: PathBuf,
    items: Vec<NewsItem>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlFixture {
    news: Vec<NewsItem>,
}

impl FileNewsStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        let items = parse_news(&path, &raw)?;
        validate(&path, &items)?;
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NewsSource for FileNewsStore {
    fn news(&self) -> &[NewsItem] {
        &self.items
    }
}

fn parse_news(path: &Path, raw: &str) -> Result<Vec<NewsItem>, ContentError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => serde_json::from_str(raw).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Some("toml") => toml::from_str::<TomlFixture>(raw)
            .map(|fixture| fixture.news)
            .map_err(|source| ContentError::Toml {
                path: path.to_path_buf(),
                source,
            }),
        _ => Err(ContentError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn validate(path: &Path, items: &[NewsItem]) -> Result<(), ContentError> {
    if items.is_empty() {
        return Err(ContentError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(ContentError::DuplicateId {
                path: path.to_path_buf(),
                id: item.id.0,
            });
        }
    }
    Ok(())
}

pub fn export_json(source: &dyn NewsSource) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(source.news())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
