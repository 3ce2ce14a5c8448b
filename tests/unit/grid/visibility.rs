use super::*;

fn entry(id: u32, ratio: f64) -> IntersectionEntry {
    IntersectionEntry {
        target: ElementId(id),
        ratio,
    }
}

#[test]
fn latest_report_wins() {
    let mut t = VisibilityTracker::new();
    let changes = t.apply(&[entry(1, 0.4), entry(2, 0.0)]);
    assert_eq!(changes, vec![(ElementId(1), true), (ElementId(2), false)]);
    assert!(t.is_visible(ElementId(1)));
    assert!(!t.is_visible(ElementId(2)));

    t.apply(&[entry(1, 0.0), entry(2, 1.0)]);
    assert!(!t.is_visible(ElementId(1)));
    assert!(t.is_visible(ElementId(2)));
    assert_eq!(t.len(), 1);
}

#[test]
fn zero_ratio_is_not_visible() {
    let mut t = VisibilityTracker::new();
    t.apply(&[entry(5, 0.0)]);
    assert!(t.is_empty());
}
