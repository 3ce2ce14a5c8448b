use super::*;

#[test]
fn none_and_empty_have_nothing_to_undo() {
    assert_eq!(CssTransform::parse("none").unwrap(), CssTransform::None);
    assert_eq!(CssTransform::parse("  ").unwrap(), CssTransform::None);
    assert_eq!(CssTransform::parse("none").unwrap().scale_translate(), None);
}

#[test]
fn matrix_2d_reads_diagonal_and_translation() {
    let t = CssTransform::parse("matrix(0.9, 0, 0, 0.8, 10, 5)").unwrap();
    assert_eq!(
        t.scale_translate(),
        Some(ScaleTranslate {
            sx: 0.9,
            sy: 0.8,
            dx: 10.0,
            dy: 5.0
        })
    );
}

#[test]
fn matrix_3d_reads_indices_0_5_12_13() {
    let t = CssTransform::parse(
        "matrix3d(2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 1, 0, -4, 7, 0, 1)",
    )
    .unwrap();
    assert_eq!(
        t.scale_translate(),
        Some(ScaleTranslate {
            sx: 2.0,
            sy: 3.0,
            dx: -4.0,
            dy: 7.0
        })
    );
}

#[test]
fn other_functions_are_kept_but_not_decomposed() {
    let t = CssTransform::parse("rotate(45deg)").unwrap();
    assert!(matches!(t, CssTransform::Other(_)));
    assert_eq!(t.scale_translate(), None);
}

#[test]
fn malformed_matrices_are_rejected() {
    assert!(CssTransform::parse("matrix(1, 0, 0, 1, 0)").is_err());
    assert!(CssTransform::parse("matrix(1, 0, 0, 1, 0, 0, 9)").is_err());
    assert!(CssTransform::parse("matrix(1, 0, 0, x, 0, 0)").is_err());
}

#[test]
fn origin_accepts_px_and_unitless() {
    assert_eq!(
        TransformOrigin::parse("50px 25px").unwrap(),
        TransformOrigin(Point::new(50.0, 25.0))
    );
    assert_eq!(
        TransformOrigin::parse("0 0").unwrap(),
        TransformOrigin(Point::new(0.0, 0.0))
    );
    assert_eq!(
        TransformOrigin::parse("12px 8px 0px").unwrap(),
        TransformOrigin(Point::new(12.0, 8.0))
    );
}

#[test]
fn single_origin_value_applies_to_both_axes() {
    assert_eq!(
        TransformOrigin::parse("30px").unwrap(),
        TransformOrigin(Point::new(30.0, 30.0))
    );
}

#[test]
fn origin_keywords_are_rejected() {
    assert!(TransformOrigin::parse("center").is_err());
    assert!(TransformOrigin::parse("").is_err());
}
