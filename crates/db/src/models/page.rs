//! Page envelope for paginated listings.

use serde::Serialize;

/// A single page of results.
///
/// Field names follow the envelope the frontend already consumes:
/// `current_page`, `data`, `per_page`, `total`, `last_page`.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub current_page: i64,
    pub data: Vec<T>,
    pub per_page: i64,
    pub total: i64,
    pub last_page: i64,
}

impl<T: Serialize> Page<T> {
    /// Assemble a page from the fetched rows and the total row count.
    pub fn new(data: Vec<T>, current_page: i64, per_page: i64, total: i64) -> Self {
        let last_page = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        Page {
            current_page,
            data,
            per_page,
            total,
            last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 1, 10, 21);
        assert_eq!(page.last_page, 3);
    }

    #[test]
    fn test_empty_result_is_one_page() {
        let page: Page<i64> = Page::new(vec![], 1, 10, 0);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_exact_multiple() {
        let page: Page<i64> = Page::new(vec![], 2, 10, 20);
        assert_eq!(page.last_page, 2);
    }
}
