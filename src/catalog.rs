use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Deserialize;

/// Aggregate category holding every record in file order.
pub const ALL: &str = "all";
/// Marker category that never holds videos.
pub const BEST: &str = "best";
/// Menu entries that never name a catalog category.
pub const HOME: &str = "home";
pub const HISTORY: &str = "history";

const ALL_DISPLAY_NAME: &str = "All Videos";
const BEST_DISPLAY_NAME: &str = "Best Of";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file at {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate video id {0:?}")]
    DuplicateId(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub url: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct FileCatalog {
    #[serde(default)]
    categories: Vec<RawCategory>,
    #[serde(default)]
    videos: Vec<VideoRecord>,
}

#[derive(Deserialize)]
struct RawCategory {
    id: String,
    #[serde(default)]
    name: Option<String>,
}

/// Read-only video catalog grouped by category.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    by_category: HashMap<String, Vec<VideoRecord>>,
    display_names: HashMap<String, String>,
    declared: Vec<CategoryEntry>,
}

static EMBEDDED: Lazy<Arc<Catalog>> = Lazy::new(|| {
    const RAW: &str = include_str!("../assets/catalog.yaml");
    match Catalog::from_yaml(RAW) {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            tracing::error!(error = %err, "embedded catalog is invalid");
            Arc::new(Catalog::default())
        }
    }
});

impl Catalog {
    pub fn embedded() -> Arc<Catalog> {
        Arc::clone(&EMBEDDED)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&data)
    }

    pub fn from_yaml(data: &str) -> Result<Self, CatalogError> {
        let parsed: FileCatalog = serde_yaml::from_str(data)?;
        Self::from_parts(parsed.categories, parsed.videos)
    }

    fn from_parts(
        categories: Vec<RawCategory>,
        videos: Vec<VideoRecord>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for video in &videos {
            if !seen.insert(video.id.as_str()) {
                return Err(CatalogError::DuplicateId(video.id.clone()));
            }
        }

        let mut display_names = HashMap::new();
        display_names.insert(ALL.to_string(), ALL_DISPLAY_NAME.to_string());
        display_names.insert(BEST.to_string(), BEST_DISPLAY_NAME.to_string());

        let mut declared = Vec::new();
        for raw in categories {
            let id = raw.id.trim().to_string();
            if id.is_empty() {
                continue;
            }
            let name = raw
                .name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| id.clone());
            if id == HOME || id == HISTORY {
                tracing::warn!(category = %id, "ignoring reserved category id");
                continue;
            }
            display_names.insert(id.clone(), name.clone());
            if id != ALL && id != BEST && !declared.iter().any(|c: &CategoryEntry| c.id == id) {
                declared.push(CategoryEntry { id, name });
            }
        }

        let mut by_category: HashMap<String, Vec<VideoRecord>> = HashMap::new();
        for video in &videos {
            if video.category != ALL {
                by_category
                    .entry(video.category.clone())
                    .or_default()
                    .push(video.clone());
            }
        }
        by_category.insert(ALL.to_string(), videos);

        Ok(Self {
            by_category,
            display_names,
            declared,
        })
    }

    /// Records for `category` in navigation order; empty when unknown.
    /// `"best"` never yields records.
    pub fn videos(&self, category: &str) -> &[VideoRecord] {
        if category == BEST {
            return &[];
        }
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: &str) -> bool {
        category == BEST || self.by_category.contains_key(category)
    }

    pub fn display_name<'a>(&'a self, category: &'a str) -> &'a str {
        self.display_names
            .get(category)
            .map(String::as_str)
            .unwrap_or(category)
    }

    /// Declared categories in file order, excluding the reserved ones.
    pub fn categories(&self) -> &[CategoryEntry] {
        &self.declared
    }

    pub fn len(&self) -> usize {
        self.videos(ALL).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
