//! Client-side pagination and sorting over a fetched record set.
//!
//! [`TablePager`] owns one record set plus its [`PagerState`] and answers the
//! question "what should currently be visible". Every operation that changes state
//! returns the resulting [`PageView`], so hosts re-render from the return value
//! instead of tracking mutations.

mod sort;
mod window;

pub use sort::{SortDirection, SortKey, stable_sort_by_key};
pub use window::{clamp_page, page_window, total_pages};

use crate::record::{FieldAccess, Record};

/// Page size used when a host does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Active sort: field name and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Derived pager state.
///
/// `1 <= current_page <= total_pages` holds after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub sort: Option<SortSpec>,
}

impl PagerState {
    fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_pages: 1,
            sort: None,
        }
    }
}

/// Snapshot of the visible window, borrowed from the pager.
#[derive(Debug)]
pub struct PageView<'a, R> {
    pub records: &'a [R],
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub sort: Option<&'a SortSpec>,
}

impl<R> PageView<'_, R> {
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page == self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Zero-based position of the first visible record in the full set.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}

/// Windowed, sortable view over one record set.
#[derive(Debug, Clone)]
pub struct TablePager<R = Record> {
    records: Vec<R>,
    state: PagerState,
}

impl<R> Default for TablePager<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> TablePager<R> {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates an empty pager.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn with_page_size(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be at least 1");
        Self {
            records: Vec::new(),
            state: PagerState::new(page_size),
        }
    }

    /// Replaces the record set, returns to page 1 and clears any sort.
    pub fn load(&mut self, records: Vec<R>) -> PageView<'_, R> {
        self.records = records;
        self.state.current_page = 1;
        self.state.sort = None;
        self.recompute();
        self.view()
    }

    /// Records for the current page.
    pub fn visible_page(&self) -> &[R] {
        let range = page_window(
            self.records.len(),
            self.state.page_size,
            self.state.current_page,
        );
        &self.records[range]
    }

    pub fn view(&self) -> PageView<'_, R> {
        PageView {
            records: self.visible_page(),
            page: self.state.current_page,
            total_pages: self.state.total_pages,
            page_size: self.state.page_size,
            total_records: self.records.len(),
            sort: self.state.sort.as_ref(),
        }
    }

    /// Moves to `page`, clamped into `1..=total_pages`.
    pub fn go_to(&mut self, page: i64) -> PageView<'_, R> {
        self.state.current_page = clamp_page(page, self.state.total_pages);
        self.view()
    }

    pub fn next(&mut self) -> PageView<'_, R> {
        if !self.is_last_page() {
            self.state.current_page += 1;
        }
        self.view()
    }

    pub fn previous(&mut self) -> PageView<'_, R> {
        if !self.is_first_page() {
            self.state.current_page -= 1;
        }
        self.view()
    }

    pub fn first(&mut self) -> PageView<'_, R> {
        self.state.current_page = 1;
        self.view()
    }

    pub fn last(&mut self) -> PageView<'_, R> {
        self.state.current_page = self.state.total_pages;
        self.view()
    }

    /// Changes the page size and clamps the current page into the new range.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn set_page_size(&mut self, page_size: usize) -> PageView<'_, R> {
        assert!(page_size > 0, "page size must be at least 1");
        self.state.page_size = page_size;
        self.recompute();
        self.view()
    }

    pub fn is_first_page(&self) -> bool {
        self.state.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.state.current_page == self.state.total_pages
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.state.sort.as_ref()
    }

    /// All records in current order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn recompute(&mut self) {
        self.state.total_pages = total_pages(self.records.len(), self.state.page_size);
        self.state.current_page = self
            .state
            .current_page
            .clamp(1, self.state.total_pages);
    }
}

impl<R: FieldAccess> TablePager<R> {
    /// Reorders the full record set by `key` and returns to page 1.
    ///
    /// The sort is stable and starts from the current ordering, so ties keep the
    /// order left by any earlier sort.
    pub fn sort_by(&mut self, key: &str, direction: SortDirection) -> PageView<'_, R> {
        stable_sort_by_key(&mut self.records, direction, |record| record.sort_key(key));
        self.state.sort = Some(SortSpec {
            key: key.to_string(),
            direction,
        });
        self.state.current_page = 1;
        self.recompute();
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<Record> {
        names
            .iter()
            .map(|name| Record::new().with("Name", *name))
            .collect()
    }

    fn numbered(count: usize) -> Vec<Record> {
        (0..count).map(|i| Record::new().with("Id", i)).collect()
    }

    fn names(records: &[Record]) -> Vec<String> {
        records.iter().map(|r| r.display("Name")).collect()
    }

    #[test]
    fn test_total_pages_after_load() {
        for count in [0, 1, 9, 10, 11, 25, 100] {
            for size in [1, 3, 10] {
                let mut pager = TablePager::with_page_size(size);
                pager.load(numbered(count));
                assert_eq!(pager.total_pages(), count.div_ceil(size).max(1));
                assert_eq!(pager.current_page(), 1);
            }
        }
    }

    #[test]
    fn test_window_lengths() {
        let count = 23;
        let size = 5;
        let mut pager = TablePager::with_page_size(size);
        pager.load(numbered(count));

        for page in 1..=pager.total_pages() {
            let len = pager.go_to(page as i64).records.len();
            assert_eq!(len, size.min(count - (page - 1) * size));
            assert!(len > 0);
        }
    }

    #[test]
    fn test_go_to_clamps() {
        let mut pager = TablePager::new();
        pager.load(numbered(25));

        for page in [-100, -1, 0, 1, 2, 3, 4, 1000, i64::MIN, i64::MAX] {
            let current = pager.go_to(page).page;
            assert!((1..=3).contains(&current), "page {page} -> {current}");
        }
        assert_eq!(pager.go_to(-1).page, 1);
        assert_eq!(pager.go_to(99).page, 3);
    }

    #[test]
    fn test_next_previous_boundaries() {
        let mut pager = TablePager::new();
        pager.load(numbered(15));

        assert!(pager.is_first_page());
        assert_eq!(pager.previous().page, 1);

        assert_eq!(pager.next().page, 2);
        assert!(pager.is_last_page());
        assert_eq!(pager.next().page, 2);

        assert_eq!(pager.first().page, 1);
        assert_eq!(pager.last().page, 2);
    }

    #[test]
    fn test_first_page_in_original_order() {
        let records = numbered(25);
        let mut pager = TablePager::new();
        let view = pager.load(records.clone());
        assert_eq!(view.records, &records[..10]);
        assert_eq!(pager.visible_page(), &records[..10]);
    }

    #[test]
    fn test_sort_scenario() {
        let mut pager = TablePager::new();
        pager.load(named(&["B", "A", "C"]));

        let view = pager.sort_by("Name", SortDirection::Ascending);
        assert_eq!(names(view.records), vec!["A", "B", "C"]);

        let view = pager.sort_by("Name", SortDirection::Descending);
        assert_eq!(names(view.records), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_descending_reverses_without_ties() {
        let mut pager = TablePager::with_page_size(100);
        pager.load(named(&["m", "c", "x", "a", "q"]));

        let ascending = names(pager.sort_by("Name", SortDirection::Ascending).records);
        let mut descending = names(pager.sort_by("Name", SortDirection::Descending).records);
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_sort_is_stable_across_passes() {
        let records = vec![
            Record::new().with("Status", "Open").with("Name", "a"),
            Record::new().with("Status", "Paid").with("Name", "b"),
            Record::new().with("Status", "Open").with("Name", "c"),
            Record::new().with("Status", "Paid").with("Name", "d"),
        ];
        let mut pager = TablePager::new();
        pager.load(records);

        let view = pager.sort_by("Status", SortDirection::Ascending);
        assert_eq!(names(view.records), vec!["a", "c", "b", "d"]);

        let view = pager.sort_by("Status", SortDirection::Descending);
        assert_eq!(names(view.records), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_missing_values_as_empty() {
        let records = vec![
            Record::new().with("Name", "x").with("City", "Oslo"),
            Record::new().with("Name", "y"),
            Record::new().with("Name", "z").with("City", ""),
            Record::new().with("Name", "w").with("City", "Bergen"),
        ];
        let mut pager = TablePager::new();
        pager.load(records);

        let view = pager.sort_by("City", SortDirection::Ascending);
        assert_eq!(view.total_records, 4);
        assert_eq!(names(view.records), vec!["y", "z", "w", "x"]);
    }

    #[test]
    fn test_sort_resets_page() {
        let mut pager = TablePager::new();
        pager.load(numbered(30));
        pager.go_to(3);

        let view = pager.sort_by("Id", SortDirection::Descending);
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.records[0].display("Id"), "29");
    }

    #[test]
    fn test_sort_persists_across_navigation_and_resets_on_load() {
        let mut pager = TablePager::with_page_size(2);
        pager.load(named(&["d", "b", "c", "a"]));
        pager.sort_by("Name", SortDirection::Ascending);

        let view = pager.next();
        assert_eq!(names(view.records), vec!["c", "d"]);
        assert!(view.sort.is_some());

        let view = pager.load(named(&["d", "b"]));
        assert!(view.sort.is_none());
        assert_eq!(names(view.records), vec!["d", "b"]);
    }

    #[test]
    fn test_empty_load() {
        let mut pager: TablePager = TablePager::new();
        let view = pager.load(Vec::new());
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 1);
        assert!(view.is_first_page());
        assert!(view.is_last_page());
        assert!(pager.visible_page().is_empty());
        assert_eq!(pager.next().page, 1);
    }

    #[test]
    fn test_set_page_size_clamps_current_page() {
        let mut pager = TablePager::new();
        pager.load(numbered(25));
        pager.go_to(3);

        let view = pager.set_page_size(20);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page, 2);
        assert_eq!(view.records.len(), 5);
        assert_eq!(view.offset(), 20);
    }

    #[test]
    fn test_set_page_size_keeps_sort() {
        let mut pager = TablePager::new();
        pager.load(named(&["b", "a"]));
        pager.sort_by("Name", SortDirection::Ascending);
        let view = pager.set_page_size(1);
        assert_eq!(names(view.records), vec!["a"]);
        assert_eq!(view.sort.map(|s| s.key.as_str()), Some("Name"));
    }

    #[test]
    fn test_state_snapshot() {
        let mut pager = TablePager::with_page_size(4);
        pager.load(numbered(10));
        pager.sort_by("Id", SortDirection::Descending);
        pager.last();

        assert_eq!(
            pager.state(),
            &PagerState {
                current_page: 3,
                page_size: 4,
                total_pages: 3,
                sort: Some(SortSpec {
                    key: "Id".to_string(),
                    direction: SortDirection::Descending,
                }),
            }
        );
    }

    #[test]
    #[should_panic(expected = "page size must be at least 1")]
    fn test_zero_page_size_panics() {
        let mut pager: TablePager = TablePager::new();
        pager.set_page_size(0);
    }
}
