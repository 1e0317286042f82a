pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of an ambiguous match list. The paginator holds no state;
/// the caller owns the cursor and passes it in on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub items: &'a [String],
    pub has_previous: bool,
    pub has_next: bool,
}

/// Slice `matches` into its `index`-th page of `page_size` items,
/// clipped to bounds. An index past the last page yields an empty
/// slice rather than an error.
pub fn page<'a>(matches: &'a [String], index: usize, page_size: usize) -> PageView<'a> {
    let start = index.saturating_mul(page_size).min(matches.len());
    let end = start.saturating_add(page_size).min(matches.len());

    PageView {
        items: &matches[start..end],
        has_previous: index > 0,
        has_next: index
            .saturating_add(1)
            .saturating_mul(page_size)
            < matches.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("werkwoord{i:02}")).collect()
    }

    #[test]
    fn first_page_of_twenty_five() {
        let list = matches(25);
        let view = page(&list, 0, DEFAULT_PAGE_SIZE);

        assert_eq!(view.items.len(), 10);
        assert_eq!(view.items[0], "werkwoord00");
        assert!(!view.has_previous);
        assert!(view.has_next);
    }

    #[test]
    fn last_partial_page_of_twenty_five() {
        let list = matches(25);
        let view = page(&list, 2, DEFAULT_PAGE_SIZE);

        assert_eq!(view.items.len(), 5);
        assert_eq!(view.items[0], "werkwoord20");
        assert!(view.has_previous);
        assert!(!view.has_next);
    }

    #[test]
    fn index_past_the_end_yields_an_empty_page() {
        let list = matches(25);
        let view = page(&list, 5, DEFAULT_PAGE_SIZE);

        assert!(view.items.is_empty());
        assert!(view.has_previous);
        assert!(!view.has_next);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let list = matches(20);
        let view = page(&list, 1, DEFAULT_PAGE_SIZE);

        assert_eq!(view.items.len(), 10);
        assert!(!view.has_next);
    }

    #[test]
    fn empty_list_pages_to_nothing() {
        let list = matches(0);
        let view = page(&list, 0, DEFAULT_PAGE_SIZE);

        assert!(view.items.is_empty());
        assert!(!view.has_previous);
        assert!(!view.has_next);
    }

    #[test]
    fn huge_index_does_not_overflow() {
        let list = matches(3);
        let view = page(&list, usize::MAX, DEFAULT_PAGE_SIZE);

        assert!(view.items.is_empty());
        assert!(view.has_previous);
        assert!(!view.has_next);
    }
}
