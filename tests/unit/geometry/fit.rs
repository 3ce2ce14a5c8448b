use super::*;

#[test]
fn center_zoom_matches_reference_numbers() {
    let t = ImageTransform::center_zoom(
        Size::new(1200.0, 800.0),
        Rect::from_origin_size((100.0, 200.0), (200.0, 160.0)),
        0.7,
    );
    assert_eq!(t.scale, 3.5);
    assert_eq!(t.x, 400.0);
    assert_eq!(t.y, 120.0);
}

#[test]
fn dock_moves_centers_together() {
    let slot = Rect::from_origin_size((1000.0, 700.0), (40.0, 50.0));
    let image = Rect::from_origin_size((100.0, 100.0), (200.0, 250.0));
    let t = ImageTransform::dock(slot, 50.0, image);
    assert_eq!(t.scale, 0.2);
    assert_eq!(t.x, 1020.0 - 200.0);
    assert_eq!(t.y, 725.0 - 225.0);
}

#[test]
fn zero_height_images_are_not_finite() {
    let t = ImageTransform::center_zoom(
        Size::new(100.0, 100.0),
        Rect::from_origin_size((0.0, 0.0), (10.0, 0.0)),
        0.7,
    );
    assert!(!t.is_finite());
    assert!(ImageTransform::IDENTITY.is_finite());
}
