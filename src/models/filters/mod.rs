//! Category visibility filters.
//!
//! Filters only affect how cells are encoded; summaries always describe the
//! underlying data.

use serde::{Deserialize, Serialize};

use super::change_event::Category;

/// Which categories are currently visible in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryFilters {
    pub add: bool,
    pub change: bool,
    pub delete: bool,
}

impl Default for CategoryFilters {
    fn default() -> Self {
        Self::all()
    }
}

impl CategoryFilters {
    /// Every category visible.
    pub const fn all() -> Self {
        Self {
            add: true,
            change: true,
            delete: true,
        }
    }

    /// Every category hidden.
    pub const fn none() -> Self {
        Self {
            add: false,
            change: false,
            delete: false,
        }
    }

    pub fn is_visible(&self, category: Category) -> bool {
        match category {
            Category::Add => self.add,
            Category::Change => self.change,
            Category::Delete => self.delete,
        }
    }

    /// Return a copy with one category's visibility replaced.
    pub fn with(mut self, category: Category, visible: bool) -> Self {
        match category {
            Category::Add => self.add = visible,
            Category::Change => self.change = visible,
            Category::Delete => self.delete = visible,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_everything() {
        let filters = CategoryFilters::default();
        for category in Category::ALL {
            assert!(filters.is_visible(category));
        }
    }

    #[test]
    fn test_with_toggles_single_category() {
        let filters = CategoryFilters::all().with(Category::Add, false);
        assert!(!filters.is_visible(Category::Add));
        assert!(filters.is_visible(Category::Change));
        assert!(filters.is_visible(Category::Delete));

        let filters = CategoryFilters::none().with(Category::Delete, true);
        assert_eq!(
            filters,
            CategoryFilters {
                add: false,
                change: false,
                delete: true
            }
        );
    }
}
