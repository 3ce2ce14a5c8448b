use super::*;

fn defaults() -> TimelineDefaults {
    TimelineDefaults {
        duration: 1.4,
        ease: Ease::ExpoInOut,
    }
}

#[test]
fn positions_parse_label_offsets() {
    assert_eq!(Position::parse("0.5").unwrap(), Position::at(0.5));
    assert_eq!(Position::parse("start").unwrap(), Position::label("start"));
    assert_eq!(
        Position::parse("start+=0.2").unwrap(),
        Position::label_offset("start", 0.2)
    );
    assert_eq!(
        Position::parse("start-=0.1").unwrap(),
        Position::label_offset("start", -0.1)
    );
    assert!(Position::parse("").is_err());
    assert!(Position::parse("+=0.2").is_err());
    assert!(Position::parse("start+=x").is_err());
}

#[test]
fn labels_resolve_through_earlier_labels() {
    let mut tl = Timeline::new(TimelineKind::Open, defaults());
    tl.label("start", Position::at(0.0))
        .label("showContent", Position::label_offset("start", 0.2));
    assert_eq!(tl.label_time("start").unwrap(), 0.0);
    assert_eq!(tl.label_time("showContent").unwrap(), 0.2);
    assert_eq!(
        tl.resolve(&Position::label_offset("showContent", 0.1))
            .unwrap(),
        0.2 + 0.1
    );
    assert!(tl.label_time("missing").is_err());
}

#[test]
fn forward_label_references_are_rejected() {
    let mut tl = Timeline::new(TimelineKind::Close, defaults());
    tl.label("a", Position::label("b")).label("b", Position::at(1.0));
    assert!(tl.label_time("a").is_err());
}

#[test]
fn delays_scale_with_target_index() {
    assert_eq!(Delay::Fixed(0.06).for_index(5), 0.06);
    assert_eq!(Delay::PerTarget(0.03).for_index(0), 0.0);
    assert_eq!(Delay::PerTarget(-0.5).for_index(2), -1.0);
}

#[test]
fn steps_for_filters_by_target() {
    let mut tl = Timeline::new(TimelineKind::HoverIn, defaults());
    tl.step(Step::to(
        vec![ElementId(1)],
        Props::new().scale(0.9),
        Position::at(0.0),
    ))
    .step(Step::to(
        vec![ElementId(2)],
        Props::new().scale(1.2),
        Position::at(0.0),
    ));
    assert_eq!(tl.steps_for(ElementId(2)).count(), 1);
    assert_eq!(tl.steps_for(ElementId(3)).count(), 0);
}

#[test]
fn ease_names_match_serialized_form() {
    for ease in [Ease::Expo, Ease::ExpoInOut, Ease::Power4, Ease::Power4In] {
        let json = serde_json::to_value(ease).unwrap();
        assert_eq!(json, serde_json::Value::String(ease.name().to_owned()));
    }
}

#[test]
fn timelines_serialize_to_json() {
    let mut tl = Timeline::new(
        TimelineKind::Open,
        TimelineDefaults {
            duration: 2.0,
            ease: Ease::Expo,
        },
    );
    tl.label("start", Position::at(0.0))
        .step(Step::call(
            Action::add_class(ElementId(1), "oh"),
            Position::label("start"),
        ))
        .on_complete(Action::set(vec![ElementId(4)], Props::new().opacity(0.0)));
    let json = serde_json::to_value(&tl).unwrap();
    assert_eq!(json["kind"], "open");
    assert_eq!(json["steps"][0]["kind"]["call"]["action"]["kind"], "add_class");
    let back: Timeline = serde_json::from_value(json).unwrap();
    assert_eq!(back, tl);
}
