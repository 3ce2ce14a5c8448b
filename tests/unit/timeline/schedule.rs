use super::*;
use crate::foundation::math::approx_eq;
use crate::timeline::step::{Delay, Position, Step, TimelineDefaults, TimelineKind};

fn timeline() -> Timeline {
    let mut tl = Timeline::new(
        TimelineKind::Open,
        TimelineDefaults {
            duration: 1.0,
            ease: Ease::ExpoInOut,
        },
    );
    tl.label("start", Position::at(0.0))
        .label("later", Position::label_offset("start", 0.5));
    tl
}

#[test]
fn per_target_delays_stagger_starts() {
    let mut tl = timeline();
    tl.step(
        Step::to(
            vec![ElementId(1), ElementId(2), ElementId(3)],
            Props::new().opacity(1.0),
            Position::label("later"),
        )
        .delay(Delay::PerTarget(0.25)),
    );
    let s = tl.schedule().unwrap();
    let starts: Vec<f64> = s.tweens.iter().map(|t| t.start).collect();
    assert_eq!(starts, vec![0.5, 0.75, 1.0]);
    assert_eq!(s.duration, 2.0);
}

#[test]
fn negative_delays_start_pre_progressed_and_finish_in_reverse_order() {
    let mut tl = timeline();
    tl.step(
        Step::to(
            vec![ElementId(1), ElementId(2), ElementId(3)],
            Props::new().scale(1.0),
            Position::label("start"),
        )
        .duration(1.4)
        .delay(Delay::PerTarget(-0.03)),
    );
    let s = tl.schedule().unwrap();
    assert!(s.tweens.iter().all(|t| t.start == 0.0));
    let ends: Vec<f64> = s.tweens.iter().map(|t| t.end).collect();
    assert!(approx_eq(ends[0], 1.4, 1e-12));
    assert!(approx_eq(ends[1], 1.37, 1e-12));
    assert!(approx_eq(ends[2], 1.34, 1e-12));
    assert!(approx_eq(s.duration, 1.4, 1e-12));
}

#[test]
fn delays_longer_than_the_tween_collapse_to_an_instant_at_zero() {
    let mut tl = timeline();
    tl.step(
        Step::to(vec![ElementId(4)], Props::new().opacity(0.0), Position::at(0.0))
            .duration(0.5)
            .delay(Delay::Fixed(-1.0)),
    );
    let s = tl.schedule().unwrap();
    assert_eq!((s.tweens[0].start, s.tweens[0].end), (0.0, 0.0));
}

#[test]
fn sets_and_calls_are_instant() {
    let mut tl = timeline();
    tl.step(Step::set(
        vec![ElementId(9)],
        Props::new().z_index(100),
        Position::label("start"),
    ))
    .step(Step::call(
        Action::add_class(ElementId(1), "view-content"),
        Position::label("later"),
    ));
    let s = tl.schedule().unwrap();
    assert_eq!(s.tweens[0].start, s.tweens[0].end);
    assert_eq!(s.actions.len(), 1);
    assert_eq!(s.actions[0].at, 0.5);
    assert_eq!(s.duration, 0.5);
}

#[test]
fn step_completion_fires_after_last_target() {
    let mut tl = timeline();
    tl.step(
        Step::to(
            vec![ElementId(1), ElementId(2)],
            Props::new().opacity(0.0),
            Position::label_offset("start", 0.1),
        )
        .delay(Delay::PerTarget(0.2))
        .duration(0.5)
        .then(Action::remove_class(ElementId(1), "oh")),
    );
    let s = tl.schedule().unwrap();
    assert_eq!(s.actions.len(), 1);
    assert!(approx_eq(s.actions[0].at, 0.1 + 0.2 + 0.5, 1e-12));
}

#[test]
fn from_to_keeps_start_values_and_eases_override() {
    let mut tl = timeline();
    tl.step(
        Step::from_to(
            vec![ElementId(4)],
            Props::new().y_percent(-100.0),
            Props::new().y_percent(0.0),
            Position::label("start"),
        )
        .ease(Ease::Power4In),
    );
    let s = tl.schedule().unwrap();
    let t = s.tweens_for(ElementId(4)).next().unwrap();
    assert_eq!(t.from, Some(Props::new().y_percent(-100.0)));
    assert_eq!(t.ease, Ease::Power4In);
}

#[test]
fn unknown_labels_and_bad_durations_fail() {
    let mut tl = timeline();
    tl.step(Step::to(
        vec![ElementId(1)],
        Props::new(),
        Position::label("nope"),
    ));
    assert!(tl.schedule().is_err());

    let mut tl = timeline();
    tl.step(
        Step::to(vec![ElementId(1)], Props::new(), Position::at(0.0)).duration(-1.0),
    );
    assert!(tl.schedule().is_err());
}
