use serde::Serialize;

/// Computes the page-link window rendered beside a paginated table:
/// `Some(n)` entries are page links, `None` marks an elided gap.
fn page_window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of a derived collection together with its counts.
///
/// `total_items` and `total_pages` describe the whole filtered set, not just
/// the slice in `items`; `total_pages == 0` implies `items` is empty.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_items: usize, total_pages: usize) -> Self {
        let page = if current_page == 0 { 1 } else { current_page };

        let pages = page_window(total_pages, page, 2, 2, 4, 2);

        Self {
            items,
            page,
            total_items,
            total_pages,
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_has_no_window() {
        let paginated: Paginated<i64> = Paginated::new(vec![], 1, 0, 0);
        assert!(paginated.items.is_empty());
        assert!(paginated.pages.is_empty());
    }

    #[test]
    fn short_window_lists_every_page() {
        let paginated: Paginated<i64> = Paginated::new(vec![], 2, 25, 3);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn long_window_elides_the_middle() {
        let paginated: Paginated<i64> = Paginated::new(vec![], 10, 200, 20);
        let pages = paginated.pages;
        assert_eq!(&pages[..2], &[Some(1), Some(2)]);
        assert_eq!(pages[2], None);
        assert!(pages.contains(&Some(10)));
        assert_eq!(&pages[pages.len() - 2..], &[Some(19), Some(20)]);
    }

    #[test]
    fn page_zero_is_treated_as_first() {
        let paginated: Paginated<i64> = Paginated::new(vec![], 0, 5, 1);
        assert_eq!(paginated.page, 1);
    }
}
