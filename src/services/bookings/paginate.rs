use serde::Serialize;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Keeps a 1-indexed page number inside `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slices page `page` (1-indexed) out of `items`. Pages outside
/// `[1, total_pages]` come back empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_pages = total_pages(items.len(), page_size);
    let slice = if page == 0 || page > total_pages {
        &[][..]
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_items: items.len(),
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_three_items() {
        let items: Vec<u32> = (1..=23).collect();
        let last = paginate(&items, 3, PAGE_SIZE);
        assert_eq!(last.total_pages, 3);
        assert_eq!(last.items, vec![21, 22, 23]);
        assert_eq!(paginate(&items, 1, PAGE_SIZE).items.len(), 10);
    }

    #[test]
    fn test_pages_concatenate_to_input() {
        let items: Vec<u32> = (0..47).collect();
        let pages = total_pages(items.len(), PAGE_SIZE);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            let chunk = paginate(&items, page, PAGE_SIZE);
            assert!(chunk.items.len() <= PAGE_SIZE);
            rebuilt.extend(chunk.items);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate::<u32>(&[], 1, PAGE_SIZE);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..5).collect();
        assert!(paginate(&items, 0, PAGE_SIZE).items.is_empty());
        assert!(paginate(&items, 2, PAGE_SIZE).items.is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
