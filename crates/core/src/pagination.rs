//! Page-number pagination constants and helpers.
//!
//! The image listing API paginates with `page`/`limit` query parameters
//! rather than raw offsets, so the clamping and offset math live here where
//! both the repository layer and the handlers can share them.

// ---------------------------------------------------------------------------
// Defaults and bounds
// ---------------------------------------------------------------------------

/// Default page number when the client sends none (pages are 1-based).
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Maximum number of records per page.
pub const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Clamping helpers
// ---------------------------------------------------------------------------

/// Clamp a user-provided page number to valid bounds (>= 1).
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(DEFAULT_PAGE).max(1)
}

/// Clamp a user-provided page size to valid bounds (1..=MAX_PAGE_SIZE).
pub fn clamp_page_size(page_size: Option<i64>) -> i64 {
    page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .max(1)
        .min(MAX_PAGE_SIZE)
}

/// Row offset for a 1-based page number.
///
/// Inputs are re-clamped so the result can never go negative, even when a
/// caller bypasses [`clamp_page`] / [`clamp_page_size`]. The multiplication
/// saturates, so an absurd page number yields `i64::MAX` (an offset past
/// every row) instead of overflowing.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(page_size.max(1))
}

/// Total number of pages needed to hold `total` records.
///
/// Integer ceiling of `total / page_size`; zero records means zero pages.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    let size = page_size.max(1);
    (total + size - 1) / size
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp_page ----------------------------------------------------------

    #[test]
    fn page_uses_default_when_none() {
        assert_eq!(clamp_page(None), 1);
    }

    #[test]
    fn page_floors_at_one() {
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-7)), 1);
    }

    #[test]
    fn page_passes_through_valid_value() {
        assert_eq!(clamp_page(Some(3)), 3);
    }

    // -- clamp_page_size -----------------------------------------------------

    #[test]
    fn page_size_uses_default_when_none() {
        assert_eq!(clamp_page_size(None), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_size_respects_max() {
        assert_eq!(clamp_page_size(Some(500)), MAX_PAGE_SIZE);
    }

    #[test]
    fn page_size_floors_at_one() {
        assert_eq!(clamp_page_size(Some(0)), 1);
        assert_eq!(clamp_page_size(Some(-12)), 1);
    }

    #[test]
    fn page_size_passes_through_valid_value() {
        assert_eq!(clamp_page_size(Some(50)), 50);
    }

    // -- page_offset ---------------------------------------------------------

    #[test]
    fn offset_is_zero_for_first_page() {
        assert_eq!(page_offset(1, 12), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(page_offset(2, 12), 12);
        assert_eq!(page_offset(4, 25), 75);
    }

    #[test]
    fn offset_never_goes_negative() {
        assert_eq!(page_offset(0, 12), 0);
        assert_eq!(page_offset(-3, 12), 0);
    }

    #[test]
    fn offset_saturates_for_huge_page_numbers() {
        assert_eq!(page_offset(i64::MAX, 12), i64::MAX);
        assert_eq!(page_offset(clamp_page(Some(i64::MAX)), DEFAULT_PAGE_SIZE), i64::MAX);
    }

    // -- total_pages ---------------------------------------------------------

    #[test]
    fn total_pages_is_zero_for_no_records() {
        assert_eq!(total_pages(0, 12), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(15, 12), 2);
        assert_eq!(total_pages(13, 12), 2);
    }

    #[test]
    fn total_pages_exact_multiple() {
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(12, 12), 1);
    }

    #[test]
    fn total_pages_single_partial_page() {
        assert_eq!(total_pages(5, 12), 1);
    }

    #[test]
    fn total_pages_survives_degenerate_size() {
        // A page size below 1 is treated as 1 rather than dividing by zero.
        assert_eq!(total_pages(5, 0), 5);
    }
}
