//! Page-window computation for pagination controls.
//!
//! Given the current page, the total page count, and a sibling count, this
//! module computes the ordered sequence of markers (page numbers and ellipsis
//! placeholders) a pagination control should render, plus the enabled state
//! of the first/prev/next/last controls. The computation is pure and owns no
//! state; the caller owns the current page and reacts to navigation.

/// Default number of page numbers shown on each side of the current page.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// Which side of the current page an ellipsis sits on.
///
/// Both ellipses can appear in the same window, so the side tag gives each
/// one a stable identity for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EllipsisSide {
    Left,
    Right,
}

impl EllipsisSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            EllipsisSide::Left => "left",
            EllipsisSide::Right => "right",
        }
    }
}

/// One rendered unit in a pagination control: a clickable page number or a
/// non-interactive ellipsis placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    Page(usize),
    Ellipsis(EllipsisSide),
}

impl PageMarker {
    /// The page number, if this marker is one.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageMarker::Page(page) => Some(*page),
            PageMarker::Ellipsis(_) => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageMarker::Ellipsis(_))
    }
}

/// Computed pagination window: the markers to render plus the clamped
/// current/total pages the navigation flags derive from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub markers: Vec<PageMarker>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageWindow {
    pub fn first_enabled(&self) -> bool {
        self.current_page > 1
    }

    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn last_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Compute the pagination window for `current_page` of `total_pages` with
/// `sibling_count` page numbers on each side of the current page.
///
/// Out-of-range inputs are clamped: `total_pages` is raised to at least 1
/// and `current_page` is clamped into `[1, total_pages]`. Pages 1 and
/// `total_pages` are always part of the result, the current page is never
/// hidden behind an ellipsis, and an ellipsis only stands in for at least
/// one omitted page.
pub fn page_window(current_page: usize, total_pages: usize, sibling_count: usize) -> PageWindow {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    PageWindow {
        markers: compute_markers(current, total, sibling_count),
        current_page: current,
        total_pages: total,
    }
}

fn compute_markers(current: usize, total: usize, siblings: usize) -> Vec<PageMarker> {
    // The sibling window plus the two anchors covers every page: list them
    // all, no ellipsis.
    if total <= 2 * siblings + 3 {
        return page_run(1, total);
    }

    let left = current.saturating_sub(siblings).max(1);
    let right = (current + siblings).min(total);

    let show_left = left > 2;
    let show_right = right < total - 1;

    match (show_left, show_right) {
        (false, false) => page_run(1, total),
        (false, true) => {
            // At least pages 1-3 stay visible even when the window is narrow.
            let end = right.max(3);
            if end + 1 >= total {
                return page_run(1, total);
            }
            let mut markers = page_run(1, end);
            markers.push(PageMarker::Ellipsis(EllipsisSide::Right));
            markers.push(PageMarker::Page(total));
            markers
        }
        (true, false) => {
            // At least the last 3 pages stay visible, mirroring the above.
            let start = left.min(total - 2);
            if start <= 2 {
                return page_run(1, total);
            }
            let mut markers = vec![PageMarker::Page(1), PageMarker::Ellipsis(EllipsisSide::Left)];
            markers.extend(page_run(start, total));
            markers
        }
        (true, true) => {
            let mut markers = vec![PageMarker::Page(1), PageMarker::Ellipsis(EllipsisSide::Left)];
            markers.extend(page_run(left, right));
            markers.push(PageMarker::Ellipsis(EllipsisSide::Right));
            markers.push(PageMarker::Page(total));
            markers
        }
    }
}

fn page_run(from: usize, to: usize) -> Vec<PageMarker> {
    (from..=to).map(PageMarker::Page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers(current: usize, total: usize, siblings: usize) -> Vec<PageMarker> {
        page_window(current, total, siblings).markers
    }

    fn numbers(window: &[PageMarker]) -> Vec<usize> {
        window.iter().filter_map(PageMarker::page).collect()
    }

    #[test]
    fn test_single_page() {
        let window = page_window(1, 1, 1);

        assert_eq!(window.markers, vec![PageMarker::Page(1)]);
        assert!(!window.first_enabled());
        assert!(!window.prev_enabled());
        assert!(!window.next_enabled());
        assert!(!window.last_enabled());
    }

    #[test]
    fn test_middle_page_shows_both_ellipses() {
        assert_eq!(
            markers(5, 20, 1),
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis(EllipsisSide::Left),
                PageMarker::Page(4),
                PageMarker::Page(5),
                PageMarker::Page(6),
                PageMarker::Ellipsis(EllipsisSide::Right),
                PageMarker::Page(20),
            ]
        );

        let window = page_window(5, 20, 1);
        assert!(window.first_enabled());
        assert!(window.prev_enabled());
        assert!(window.next_enabled());
        assert!(window.last_enabled());
    }

    #[test]
    fn test_first_page_shows_right_ellipsis_only() {
        assert_eq!(
            markers(1, 20, 1),
            vec![
                PageMarker::Page(1),
                PageMarker::Page(2),
                PageMarker::Page(3),
                PageMarker::Ellipsis(EllipsisSide::Right),
                PageMarker::Page(20),
            ]
        );

        let window = page_window(1, 20, 1);
        assert!(!window.first_enabled());
        assert!(!window.prev_enabled());
        assert!(window.next_enabled());
        assert!(window.last_enabled());
    }

    #[test]
    fn test_last_page_shows_left_ellipsis_only() {
        assert_eq!(
            markers(20, 20, 1),
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis(EllipsisSide::Left),
                PageMarker::Page(18),
                PageMarker::Page(19),
                PageMarker::Page(20),
            ]
        );

        let window = page_window(20, 20, 1);
        assert!(window.first_enabled());
        assert!(window.prev_enabled());
        assert!(!window.next_enabled());
        assert!(!window.last_enabled());
    }

    #[test]
    fn test_wide_window_lists_every_page() {
        // Window plus anchors covers all 10 pages, so no ellipsis appears
        // even though the current page sits at the far edge.
        assert_eq!(markers(10, 10, 5), page_run(1, 10));
    }

    #[test]
    fn test_small_total_lists_every_page() {
        assert_eq!(markers(3, 4, 1), page_run(1, 4));
    }

    #[test]
    fn test_zero_siblings_keeps_current_visible() {
        assert_eq!(
            markers(6, 12, 0),
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis(EllipsisSide::Left),
                PageMarker::Page(6),
                PageMarker::Ellipsis(EllipsisSide::Right),
                PageMarker::Page(12),
            ]
        );
    }

    #[test]
    fn test_no_ellipsis_adjacent_to_anchor() {
        // current=2 leaves no room on the left; the left ellipsis must not
        // appear between 1 and 2.
        let window = markers(2, 20, 1);
        assert_eq!(
            window,
            vec![
                PageMarker::Page(1),
                PageMarker::Page(2),
                PageMarker::Page(3),
                PageMarker::Ellipsis(EllipsisSide::Right),
                PageMarker::Page(20),
            ]
        );
    }

    #[test]
    fn test_narrow_window_near_small_total_degenerates_to_full_listing() {
        // The floor of 3 would leave only page 4 hidden-but-adjacent; the
        // window degenerates to the full listing instead of emitting an
        // ellipsis that stands for no gap.
        assert_eq!(markers(1, 4, 0), page_run(1, 4));
        assert_eq!(markers(4, 4, 0), page_run(1, 4));
    }

    #[test]
    fn test_current_page_clamped_into_range() {
        assert_eq!(page_window(0, 10, 1), page_window(1, 10, 1));
        assert_eq!(page_window(99, 10, 1), page_window(10, 10, 1));
    }

    #[test]
    fn test_total_pages_clamped_to_at_least_one() {
        let window = page_window(5, 0, 1);

        assert_eq!(window.total_pages, 1);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.markers, vec![PageMarker::Page(1)]);
    }

    #[test]
    fn test_anchors_always_present() {
        for total in 2..=40 {
            for current in 1..=total {
                for siblings in 0..=4 {
                    let pages = numbers(&markers(current, total, siblings));
                    assert_eq!(pages.first(), Some(&1), "({current}, {total}, {siblings})");
                    assert_eq!(
                        pages.last(),
                        Some(&total),
                        "({current}, {total}, {siblings})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_current_page_always_visible() {
        for total in 1..=40 {
            for current in 1..=total {
                for siblings in 0..=4 {
                    let pages = numbers(&markers(current, total, siblings));
                    assert!(
                        pages.contains(&current),
                        "current page hidden for ({current}, {total}, {siblings})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_numeric_markers_strictly_increasing() {
        for total in 1..=40 {
            for current in 1..=total {
                for siblings in 0..=4 {
                    let pages = numbers(&markers(current, total, siblings));
                    assert!(
                        pages.windows(2).all(|pair| pair[0] < pair[1]),
                        "not strictly increasing for ({current}, {total}, {siblings}): {pages:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_ellipsis_only_across_real_gaps() {
        for total in 1..=40 {
            for current in 1..=total {
                for siblings in 0..=4 {
                    let window = markers(current, total, siblings);
                    for (i, marker) in window.iter().enumerate() {
                        if marker.is_ellipsis() {
                            let before = window[i - 1].page().unwrap();
                            let after = window[i + 1].page().unwrap();
                            assert!(
                                after - before >= 2,
                                "spurious ellipsis between {before} and {after} \
                                 for ({current}, {total}, {siblings})"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_ellipsis_sides_relative_to_current() {
        for total in 1..=40 {
            for current in 1..=total {
                for siblings in 0..=4 {
                    let window = markers(current, total, siblings);
                    let current_at = window
                        .iter()
                        .position(|m| m.page() == Some(current))
                        .unwrap();
                    for (i, marker) in window.iter().enumerate() {
                        match marker {
                            PageMarker::Ellipsis(EllipsisSide::Left) => assert!(i < current_at),
                            PageMarker::Ellipsis(EllipsisSide::Right) => assert!(i > current_at),
                            PageMarker::Page(_) => {}
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_enablement_matches_position() {
        for total in 1..=20 {
            for current in 1..=total {
                let window = page_window(current, total, 1);

                assert_eq!(window.first_enabled(), current != 1);
                assert_eq!(window.prev_enabled(), current != 1);
                assert_eq!(window.next_enabled(), current != total);
                assert_eq!(window.last_enabled(), current != total);
            }
        }
    }
}
