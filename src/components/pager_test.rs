use super::*;

// =============================================================
// page_count
// =============================================================

#[test]
fn page_count_rounds_up_and_floors_at_one() {
    assert_eq!(page_count(0, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(5, 0), 5);
}

// =============================================================
// page_slice
// =============================================================

#[test]
fn page_slice_returns_requested_window() {
    let items: Vec<u32> = (1..=25).collect();
    assert_eq!(page_slice(&items, 1, 10), (1..=10).collect::<Vec<_>>());
    assert_eq!(page_slice(&items, 3, 10), vec![21, 22, 23, 24, 25]);
}

#[test]
fn page_slice_past_end_is_empty() {
    let items = [1, 2, 3];
    assert!(page_slice(&items, 2, 10).is_empty());
    assert!(page_slice::<u8>(&[], 1, 10).is_empty());
}

#[test]
fn page_slice_treats_page_zero_as_first() {
    assert_eq!(page_slice(&[1, 2, 3], 0, 2), vec![1, 2]);
}
