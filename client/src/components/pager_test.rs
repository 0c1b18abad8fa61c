use super::*;

#[test]
fn single_page_hides_buttons() {
    assert!(page_window(1, 0).is_empty());
    assert!(page_window(1, 1).is_empty());
}

#[test]
fn small_page_counts_show_all_pages() {
    assert_eq!(page_window(1, 3), vec![1, 2, 3]);
    assert_eq!(page_window(3, 3), vec![1, 2, 3]);
}

#[test]
fn window_centers_on_current_page() {
    assert_eq!(page_window(5, 9), vec![3, 4, 5, 6, 7]);
}

#[test]
fn window_clamps_at_range_edges() {
    assert_eq!(page_window(1, 9), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(9, 9), vec![5, 6, 7, 8, 9]);
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(page_window(99, 4), vec![1, 2, 3, 4]);
    assert_eq!(page_window(0, 4), vec![1, 2, 3, 4]);
}
