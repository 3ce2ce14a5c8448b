use super::*;
use crate::page::Page;

#[test]
fn demo_markup_numbers_tiles_in_document_order() {
    let page = demo_fixture(7, 6, Size::new(1200.0, 800.0)).build();
    let outers = page.query_all(None, ".column__item-imgwrap");
    assert_eq!(outers.len(), 7);
    for (k, outer) in outers.iter().enumerate() {
        assert_eq!(page.data(*outer, "pos"), Some((k + 1).to_string()));
    }
    assert_eq!(page.query_all(None, ".column").len(), 3);
    assert_eq!(page.query_all(None, ".content__item").len(), 7);
    assert_eq!(page.query_all(None, ".content__nav-item").len(), 6);
    assert!(page.query(None, ".button-back").is_some());
}

#[test]
fn tiles_have_image_inner_and_caption() {
    let page = demo_fixture(3, 4, Size::new(1200.0, 800.0)).build();
    for tile in page.query_all(None, ".column__item") {
        assert!(page.query(Some(tile), ".column__item-img").is_some());
        assert!(page.query(Some(tile), "figcaption").is_some());
        assert!(page.bounding_rect(tile).height() > 0.0);
    }
}

#[test]
fn fixtures_round_trip_through_json() {
    let fixture = demo_fixture(2, 2, Size::new(640.0, 480.0));
    let json = serde_json::to_string(&fixture).unwrap();
    let back = PageFixture::from_json_str(&json).unwrap();
    assert_eq!(back.build().len(), fixture.build().len());
}

#[test]
fn invalid_viewports_are_rejected() {
    let err = PageFixture::from_json_str(r#"{"viewport":{"width":0.0,"height":10.0}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("viewport"));
}

#[test]
fn tags_default_to_div() {
    let fixture = PageFixture::from_json_str(
        r#"{"viewport":{"width":10.0,"height":10.0},"body":[{"classes":["a"]}]}"#,
    )
    .unwrap();
    let page = fixture.build();
    assert!(page.query(None, "div.a").is_some());
}
