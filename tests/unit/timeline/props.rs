use super::*;

#[test]
fn scale_sets_both_axes() {
    let p = Props::new().scale(2.0);
    assert_eq!(p.scale_x, Some(2.0));
    assert_eq!(p.scale_y, Some(2.0));
}

#[test]
fn merge_keeps_untouched_fields() {
    let mut p = Props::new().opacity(1.0).scale(3.5);
    p.merge(&Props::new().scale_y(1.0).will_change(""));
    assert_eq!(p.opacity, Some(1.0));
    assert_eq!(p.scale_x, Some(3.5));
    assert_eq!(p.scale_y, Some(1.0));
    assert_eq!(p.will_change.as_deref(), Some(""));
}

#[test]
fn image_transform_becomes_scale_and_px_translation() {
    let p = Props::image(ImageTransform {
        scale: 3.5,
        x: 400.0,
        y: 120.0,
    });
    assert_eq!(p.x, Some(Length::Px(400.0)));
    assert_eq!(p.y, Some(Length::Px(120.0)));
    assert_eq!(p.scale_x, Some(3.5));
}

#[test]
fn empty_props_serialize_to_empty_object() {
    assert!(Props::new().is_empty());
    assert_eq!(serde_json::to_string(&Props::new()).unwrap(), "{}");
    let json = serde_json::to_value(Props::new().y_percent(-100.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "y": { "percent": -100.0 } }));
}
