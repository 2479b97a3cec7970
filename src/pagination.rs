//! Pagination Window
//!
//! Pure calculation of which page markers to show around the current
//! page. Rendering lives in `components::pagination_bar`.

/// One slot in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u32),
    /// Non-interactive placeholder for a skipped page range.
    Ellipsis,
}

/// Bounded view of the page range around the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub markers: Vec<PageMarker>,
    /// First/previous controls disabled.
    pub at_first: bool,
    /// Next/last controls disabled.
    pub at_last: bool,
}

/// Compute the visible page window for a 1-indexed `current_page` out
/// of `total_pages`.
///
/// With five or more pages the window always holds seven markers:
/// the first five pages plus `… total` near the start, `1 …` plus the
/// neighbors of the current page plus `… total` in the middle, and
/// `1 …` plus the last five pages near the end. Below five pages every
/// page fits, so the window is simply all of them.
pub fn page_window(current_page: u32, total_pages: u32) -> PageWindow {
    let markers = if total_pages < 5 {
        (1..=total_pages).map(PageMarker::Page).collect()
    } else if current_page <= 3 {
        vec![
            PageMarker::Page(1),
            PageMarker::Page(2),
            PageMarker::Page(3),
            PageMarker::Page(4),
            PageMarker::Page(5),
            PageMarker::Ellipsis,
            PageMarker::Page(total_pages),
        ]
    } else if current_page < total_pages - 2 {
        vec![
            PageMarker::Page(1),
            PageMarker::Ellipsis,
            PageMarker::Page(current_page - 1),
            PageMarker::Page(current_page),
            PageMarker::Page(current_page + 1),
            PageMarker::Ellipsis,
            PageMarker::Page(total_pages),
        ]
    } else {
        vec![
            PageMarker::Page(1),
            PageMarker::Ellipsis,
            PageMarker::Page(total_pages - 4),
            PageMarker::Page(total_pages - 3),
            PageMarker::Page(total_pages - 2),
            PageMarker::Page(total_pages - 1),
            PageMarker::Page(total_pages),
        ]
    };

    PageWindow {
        markers,
        at_first: current_page == 1,
        at_last: current_page == total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(window: &PageWindow) -> Vec<Option<u32>> {
        window
            .markers
            .iter()
            .map(|m| match m {
                PageMarker::Page(n) => Some(*n),
                PageMarker::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_window_near_start() {
        // Pages 1 through 3 all see the same leading window.
        for current in 1..=3 {
            let window = page_window(current, 10);
            assert_eq!(
                pages(&window),
                vec![
                    Some(1),
                    Some(2),
                    Some(3),
                    Some(4),
                    Some(5),
                    None,
                    Some(10)
                ],
                "current_page={}",
                current
            );
        }
    }

    #[test]
    fn test_window_in_middle() {
        let window = page_window(6, 10);
        assert_eq!(
            pages(&window),
            vec![Some(1), None, Some(5), Some(6), Some(7), None, Some(10)]
        );
    }

    #[test]
    fn test_window_near_end() {
        for current in 8..=10 {
            let window = page_window(current, 10);
            assert_eq!(
                pages(&window),
                vec![
                    Some(1),
                    None,
                    Some(6),
                    Some(7),
                    Some(8),
                    Some(9),
                    Some(10)
                ],
                "current_page={}",
                current
            );
        }
    }

    #[test]
    fn test_first_and_last_flags() {
        let window = page_window(1, 10);
        assert!(window.at_first);
        assert!(!window.at_last);

        let window = page_window(10, 10);
        assert!(!window.at_first);
        assert!(window.at_last);

        let window = page_window(5, 10);
        assert!(!window.at_first);
        assert!(!window.at_last);
    }

    #[test]
    fn test_single_page_disables_everything() {
        let window = page_window(1, 1);
        assert_eq!(pages(&window), vec![Some(1)]);
        assert!(window.at_first);
        assert!(window.at_last);
    }

    #[test]
    fn test_small_totals_do_not_overrun() {
        // Fewer than five pages: just list them, no ellipsis and no
        // markers past the last page.
        assert_eq!(pages(&page_window(2, 4)), vec![Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(pages(&page_window(1, 2)), vec![Some(1), Some(2)]);
        assert!(page_window(1, 0).markers.is_empty());
    }

    #[test]
    fn test_exactly_five_pages_keeps_literal_window() {
        // At the five-page boundary the leading window still carries
        // the trailing ellipsis and total marker.
        let window = page_window(2, 5);
        assert_eq!(
            pages(&window),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(5)]
        );
    }

    #[test]
    fn test_middle_case_boundaries() {
        // current_page = 4 is the first middle-case page...
        let window = page_window(4, 10);
        assert_eq!(
            pages(&window),
            vec![Some(1), None, Some(3), Some(4), Some(5), None, Some(10)]
        );

        // ...and current_page = total_pages - 3 is the last.
        let window = page_window(7, 10);
        assert_eq!(
            pages(&window),
            vec![Some(1), None, Some(6), Some(7), Some(8), None, Some(10)]
        );
    }
}
