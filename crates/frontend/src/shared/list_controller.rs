//! Generalized list-view state: free-text filter plus pagination.
//!
//! Every list screen instantiates `ListState` over its entity and supplies a
//! `Searchable` impl for its display fields. The filter is a case-insensitive
//! substring scan, applied on every keystroke (no debounce); changing the
//! query or the page size always returns to the first page.

/// Types whose list rows can be matched against a free-text query.
pub trait Searchable {
    /// `query` arrives trimmed and lowercased, and is never empty.
    fn matches(&self, query: &str) -> bool;
}

/// Case-insensitive containment helper for `Searchable` impls.
pub fn contains_ci(text: &str, query_lower: &str) -> bool {
    text.to_lowercase().contains(query_lower)
}

#[derive(Clone, Debug)]
pub struct ListState<T> {
    /// Visible slice of the filtered collection for the current page.
    pub items: Vec<T>,
    pub search_query: String,
    /// 0-based; rendered 1-based by the pagination controls.
    pub page: usize,
    pub page_size: usize,
    /// Count of the filtered collection, not of the full one.
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            page: 0,
            page_size: 10,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl<T: Clone + Searchable> ListState<T> {
    /// Recompute the visible slice from the full collection snapshot.
    pub fn rebuild(&mut self, source: &[T]) {
        let query = self.search_query.trim().to_lowercase();
        let filtered: Vec<T> = source
            .iter()
            .filter(|item| query.is_empty() || item.matches(&query))
            .cloned()
            .collect();

        self.total_count = filtered.len();
        self.total_pages = if filtered.is_empty() {
            1
        } else {
            (filtered.len() + self.page_size - 1) / self.page_size
        };
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }

        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(filtered.len());
        self.items = filtered.get(start..end).unwrap_or(&[]).to_vec();
    }

    pub fn set_query(&mut self, query: String) {
        self.search_query = query;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    /// Out-of-range pages are clamped by the next `rebuild`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
    }

    impl Row {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
            }
        }
    }

    impl Searchable for Row {
        fn matches(&self, query: &str) -> bool {
            contains_ci(&self.name, query)
        }
    }

    fn rows(names: &[&str]) -> Vec<Row> {
        names.iter().map(|n| Row::new(n)).collect()
    }

    #[test]
    fn empty_query_returns_everything() {
        let source = rows(&["Ana", "Bea", "Carla"]);
        let mut state = ListState::<Row>::default();
        state.rebuild(&source);
        assert_eq!(state.total_count, 3);
        assert_eq!(state.items, source);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let source = rows(&["Ana", "Bea", "Carla", "Pedro"]);
        let mut state = ListState::<Row>::default();
        state.set_query("A".to_string());
        state.rebuild(&source);
        // "a" is contained in Ana, Bea and Carla; Pedro has none.
        assert_eq!(state.total_count, 3);
    }

    #[test]
    fn pages_concatenate_to_filtered_in_order() {
        let source = rows(&["Ana", "Bea", "Carla"]);
        let mut state = ListState::<Row>::default();
        state.set_query("a".to_string());
        state.set_page_size(2);
        state.rebuild(&source);
        assert_eq!(state.total_pages, 2);

        let mut collected = Vec::new();
        for page in 0..state.total_pages {
            state.set_page(page);
            state.rebuild(&source);
            collected.extend(state.items.clone());
        }
        assert_eq!(collected, source);
    }

    #[test]
    fn total_pages_is_ceiling_of_count_over_size() {
        let source = rows(&["a", "b", "c", "d", "e"]);
        let mut state = ListState::<Row>::default();
        state.set_page_size(2);
        state.rebuild(&source);
        assert_eq!(state.total_pages, 3);

        state.set_page_size(5);
        state.rebuild(&source);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn query_change_resets_page() {
        let mut state = ListState::<Row>::default();
        state.page = 4;
        state.set_query("x".to_string());
        assert_eq!(state.page, 0);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = ListState::<Row>::default();
        state.page = 4;
        state.set_page_size(25);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn out_of_range_page_is_clamped_on_rebuild() {
        let source = rows(&["a", "b", "c"]);
        let mut state = ListState::<Row>::default();
        state.set_page_size(2);
        state.set_page(9);
        state.rebuild(&source);
        assert_eq!(state.page, 1);
        assert_eq!(state.items, rows(&["c"]));
    }

    #[test]
    fn empty_collection_keeps_one_page() {
        let source: Vec<Row> = Vec::new();
        let mut state = ListState::<Row>::default();
        state.rebuild(&source);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 0);
        assert!(state.items.is_empty());
    }
}
