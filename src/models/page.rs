//! In-memory page over a fully loaded collection

/// A bounded slice of a larger ordered collection plus its total count and
/// slice coordinates. Derived per request, never persisted or cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index this slice was computed for.
    pub page: usize,
    pub per_page: usize,
    /// Size of the unpaged collection, regardless of the slice bounds.
    pub total_elements: usize,
}

impl<T> Page<T> {
    /// Slice `[page * per_page, page * per_page + per_page)` out of the full
    /// collection, clipped to its bounds. A start offset at or past the end
    /// yields an empty page; `total_elements` always reflects the unpaged
    /// collection size. Content keeps the collection's ordering.
    pub fn from_collection(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let total_elements = items.len();
        let start = page.saturating_mul(per_page);

        let content = if start >= total_elements {
            Vec::new()
        } else {
            items.into_iter().skip(start).take(per_page).collect()
        };

        Self {
            content,
            page,
            per_page,
            total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Book {}", i)).collect()
    }

    #[test]
    fn middle_page_slices_in_order() {
        let page = Page::from_collection(numbered(10), 1, 3);

        assert_eq!(page.content, vec!["Book 4", "Book 5", "Book 6"]);
        assert_eq!(page.total_elements, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 3);
    }

    #[test]
    fn offset_past_end_yields_empty_page_with_full_total() {
        let page = Page::from_collection(numbered(5), 3, 5);

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 5);
    }

    #[test]
    fn last_page_is_clipped_to_remaining_items() {
        let page = Page::from_collection(numbered(10), 3, 3);

        assert_eq!(page.content, vec!["Book 10"]);
        assert_eq!(page.total_elements, 10);
    }

    #[test]
    fn first_page_of_empty_collection() {
        let page = Page::<String>::from_collection(Vec::new(), 0, 20);

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
    }

    #[test]
    fn zero_page_size_keeps_total() {
        let page = Page::from_collection(numbered(4), 0, 0);

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 4);
    }

    #[test]
    fn content_len_matches_clipped_window_for_all_indexes() {
        let total = 10;
        let per_page = 3;
        for index in 0..6 {
            let page = Page::from_collection(numbered(total), index, per_page);
            let expected = per_page.min(total.saturating_sub(index * per_page));
            assert_eq!(page.content.len(), expected, "page index {}", index);
            assert_eq!(page.total_elements, total);
        }
    }
}
