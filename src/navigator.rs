use std::sync::Arc;

use crate::catalog::{self, Catalog, VideoRecord};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no videos available in {0}")]
    EmptyCollection(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Tracks the active category and the current video within it.
pub struct Navigator {
    catalog: Arc<Catalog>,
    active_category: String,
    active_index: usize,
}

impl Navigator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            active_category: catalog::ALL.to_string(),
            active_index: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn videos(&self) -> &[VideoRecord] {
        self.catalog.videos(&self.active_category)
    }

    /// Unknown names and `"best"` select an empty list.
    pub fn select_category(&mut self, name: &str) {
        self.active_category = name.to_string();
        self.active_index = 0;
        if !self.catalog.contains(name) {
            tracing::debug!(category = name, "selected unknown category");
        } else if self.videos().is_empty() {
            tracing::debug!(category = name, "selected category has no videos");
        }
    }

    pub fn current_video(&self) -> Option<&VideoRecord> {
        self.videos().get(self.active_index)
    }

    pub fn advance(&mut self, direction: Direction) -> Result<usize, NavigationError> {
        let len = self.videos().len();
        if len == 0 {
            return Err(self.empty());
        }
        let len = len as isize;
        let next = (self.active_index as isize + direction.step()).rem_euclid(len);
        self.active_index = next as usize;
        Ok(self.active_index)
    }

    pub fn jump_to(&mut self, index: usize) -> Result<usize, NavigationError> {
        let len = self.videos().len();
        if len == 0 {
            return Err(self.empty());
        }
        self.active_index = index.min(len - 1);
        Ok(self.active_index)
    }

    /// One-based position and total, when a current video exists.
    pub fn position(&self) -> Option<(usize, usize)> {
        let len = self.videos().len();
        (len > 0).then(|| (self.active_index + 1, len))
    }

    pub fn counter_text(&self) -> String {
        match self.position() {
            Some((index, len)) => format!("{index} / {len}"),
            None => "0 / 0".to_string(),
        }
    }

    fn empty(&self) -> NavigationError {
        NavigationError::EmptyCollection(self.active_category.clone())
    }
}
