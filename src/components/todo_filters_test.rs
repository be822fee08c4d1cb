use super::*;

#[test]
fn filter_labels_are_distinct() {
    assert_eq!(filter_label(Filter::All), "All");
    assert_eq!(filter_label(Filter::Active), "Active");
    assert_eq!(filter_label(Filter::Completed), "Completed");
}

#[test]
fn default_filter_is_all() {
    assert_eq!(Filter::default(), Filter::All);
}
