//! In-memory pagination
//!
//! Pages are 1-indexed. [`paginate`] borrows the window
//! `[(page - 1) * limit, (page - 1) * limit + limit)` clipped to the input;
//! pages past the end are empty.

use serde::{Deserialize, Serialize};

use crate::errors::{WebError, WebResult};

/// Borrow one page of `items`
pub fn paginate<T>(items: &[T], page: usize, limit: usize) -> WebResult<&[T]> {
    validate(page, limit)?;

    let start = (page - 1).saturating_mul(limit);
    if start >= items.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(limit).min(items.len());
    Ok(&items[start..end])
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number (1-based)
    pub page: usize,
    /// Number of items per page
    pub limit: usize,
    /// Total number of items
    pub total: usize,
    /// Total number of pages
    pub pages: usize,
    /// Whether there are more pages
    pub has_next: bool,
    /// Whether there are previous pages
    pub has_prev: bool,
    /// Offset of first item
    pub offset: usize,
}

impl PageMeta {
    pub fn new(total: usize, page: usize, limit: usize) -> WebResult<Self> {
        validate(page, limit)?;

        let pages = total.div_ceil(limit);
        Ok(Self {
            page,
            limit,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
            offset: (page - 1).saturating_mul(limit),
        })
    }
}

/// One page of owned items plus its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Copy one page of `items` out together with its metadata
pub fn paginate_owned<T: Clone>(items: &[T], page: usize, limit: usize) -> WebResult<Page<T>> {
    let window = paginate(items, page, limit)?;
    Ok(Page {
        items: window.to_vec(),
        meta: PageMeta::new(items.len(), page, limit)?,
    })
}

fn validate(page: usize, limit: usize) -> WebResult<()> {
    if page == 0 {
        return Err(WebError::invalid_argument("page", "must be a positive integer"));
    }
    if limit == 0 {
        return Err(WebError::invalid_argument("limit", "must be a positive integer"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn one_to_ten() -> Vec<u32> {
        (1..=10).collect()
    }

    #[test]
    fn test_windows() {
        let items = one_to_ten();
        assert_eq!(paginate(&items, 1, 3).unwrap(), &[1, 2, 3]);
        assert_eq!(paginate(&items, 2, 3).unwrap(), &[4, 5, 6]);
        assert_eq!(paginate(&items, 4, 3).unwrap(), &[10]);
        assert!(paginate(&items, 5, 3).unwrap().is_empty());
    }

    #[test]
    fn test_non_positive_arguments_are_rejected() {
        let items = one_to_ten();
        assert_eq!(paginate(&items, 0, 3).unwrap_err().argument(), "page");
        assert_eq!(paginate(&items, 1, 0).unwrap_err().argument(), "limit");
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(&items, 1, 5).unwrap().is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items = one_to_ten();
        let page = paginate(&items, usize::MAX, usize::MAX).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_page_meta() {
        let meta = PageMeta::new(10, 2, 3).unwrap();
        assert_eq!(
            meta,
            PageMeta {
                page: 2,
                limit: 3,
                total: 10,
                pages: 4,
                has_next: true,
                has_prev: true,
                offset: 3,
            }
        );

        let last = PageMeta::new(10, 4, 3).unwrap();
        assert!(!last.has_next);

        let empty = PageMeta::new(0, 1, 25).unwrap();
        assert_eq!(empty.pages, 0);
        assert!(!empty.has_next);
        assert!(!empty.has_prev);
    }

    #[test]
    fn test_paginate_owned() {
        let items = one_to_ten();
        let page = paginate_owned(&items, 2, 4).unwrap();
        assert_eq!(page.items, vec![5, 6, 7, 8]);
        assert_eq!(page.meta.pages, 3);
        // Input is untouched
        assert_eq!(items, one_to_ten());
    }

    proptest! {
        #[test]
        fn page_never_exceeds_limit(
            items in prop::collection::vec(any::<i32>(), 0..200),
            page in 1usize..50,
            limit in 1usize..50,
        ) {
            let window = paginate(&items, page, limit).unwrap();
            prop_assert!(window.len() <= limit);
        }

        #[test]
        fn pages_reassemble_the_input(
            items in prop::collection::vec(any::<i32>(), 0..200),
            limit in 1usize..50,
        ) {
            let pages = items.len().div_ceil(limit);
            let mut rebuilt = Vec::with_capacity(items.len());
            for page in 1..=pages {
                let window = paginate(&items, page, limit).unwrap();
                rebuilt.extend_from_slice(window);
            }
            prop_assert_eq!(rebuilt, items.clone());
            prop_assert!(paginate(&items, pages + 1, limit).unwrap().is_empty());
        }
    }
}
