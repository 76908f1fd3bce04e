use crate::domain::labels::Labels;
use crate::domain::model::CategoryFilter;

/// One entry of the category filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: CategoryFilter,
    pub label: String,
    pub active: bool,
}

/// Current selection of the article listing. Starts at "all"; every
/// selection replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    selected: CategoryFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selected: CategoryFilter) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> CategoryFilter {
        self.selected
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        if self.selected != filter {
            tracing::debug!(from = self.selected.slug(), to = filter.slug(), "Category filter changed");
        }
        self.selected = filter;
    }

    pub fn options(&self, labels: &Labels) -> Vec<FilterOption> {
        CategoryFilter::options()
            .map(|filter| FilterOption {
                filter,
                label: labels.filter(filter).to_string(),
                active: filter == self.selected,
            })
            .collect()
    }
}
