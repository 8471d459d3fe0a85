use super::*;

#[test]
fn default_page_is_validation() {
    assert_eq!(Page::default(), Page::Validation);
    assert_eq!(Page::default().to_string(), "Validation");
}

#[test]
fn nav_order_starts_with_validation() {
    assert_eq!(Page::ALL[0], Page::Validation);
    assert_eq!(Page::ALL.len(), 3);
}

#[test]
fn page_variants_are_distinct() {
    for (i, a) in Page::ALL.iter().enumerate() {
        for (j, b) in Page::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
