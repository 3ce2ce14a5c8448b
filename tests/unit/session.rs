use super::*;
use crate::page::demo_fixture;

fn session(items: usize) -> HeadlessSession {
    let page = demo_fixture(items, 6, Size::new(1200.0, 800.0)).build();
    HeadlessSession::new(page, GridConfig::default(), 3).unwrap()
}

#[test]
fn scripts_parse_from_json() {
    let script = Script::from_json_str(
        r#"{ "seed": 9, "steps": [
            { "op": "click", "item": 1 },
            { "op": "advance", "secs": 0.5 },
            { "op": "settle" },
            { "op": "back" },
            { "op": "set_scrolling", "scrolling": true },
            { "op": "resize", "width": 800, "height": 600 }
        ] }"#,
    )
    .unwrap();
    assert_eq!(script.seed, 9);
    assert_eq!(script.steps[0], ScriptStep::Click { item: 1 });
    assert_eq!(
        script.steps[5],
        ScriptStep::Resize {
            width: 800.0,
            height: 600.0
        }
    );
}

#[test]
fn run_records_state_after_every_step() {
    let mut s = session(3);
    let script = Script {
        seed: 0,
        steps: vec![
            ScriptStep::Click { item: 1 },
            ScriptStep::Settle,
            ScriptStep::Back,
            ScriptStep::Settle,
        ],
    };
    let records = s.run(&script).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].outcome, Some(Outcome::Applied));
    assert_eq!(records[0].view, View::Content { item: 1 });
    assert!(records[0].animating);
    assert!(!records[0].scroll_active);
    assert!(!records[1].animating);
    assert!(records[1].body_classes.contains(&"view-content".to_owned()));
    assert_eq!(records[2].view, View::Grid);
    assert!(records[2].scroll_active);
    assert!(!records[3].animating);
    assert!(!records[3].body_classes.contains(&"oh".to_owned()));

    let json = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(json["step"]["op"], "click");
    assert_eq!(json["view"]["view"], "content");
}

#[test]
fn scrolling_moves_tiles_and_updates_visibility() {
    let mut s = session(9);
    let before = s.grid().visible_items();
    assert_eq!(s.scroll_by(900.0).unwrap(), Outcome::Applied);
    assert_eq!(s.grid().last_scroll_offset(), 900.0);
    let after = s.grid().visible_items();
    assert_ne!(before, after);
}

#[test]
fn scrolling_is_ignored_while_content_is_shown() {
    let mut s = session(3);
    s.dispatch(GridEvent::ItemClick(0)).unwrap();
    assert_eq!(s.scroll_by(100.0).unwrap(), Outcome::Ignored);
    assert_eq!(s.grid().last_scroll_offset(), 0.0);
}

#[test]
fn invalid_resize_is_rejected() {
    let mut s = session(3);
    let err = s
        .step(&ScriptStep::Resize {
            width: 0.0,
            height: 10.0,
        })
        .unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
}
