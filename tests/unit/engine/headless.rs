use super::*;
use crate::timeline::{Action, Ease, Position, Step, TimelineDefaults, TimelineKind};

fn timeline() -> Timeline {
    let mut tl = Timeline::new(
        TimelineKind::Open,
        TimelineDefaults {
            duration: 1.0,
            ease: Ease::ExpoInOut,
        },
    );
    tl.label("start", Position::at(0.0));
    tl.step(
        Step::to(
            vec![ElementId(3)],
            Props::new().opacity(0.0),
            Position::label("start"),
        )
        .then(Action::add_class(ElementId(9), "done")),
    );
    tl
}

#[test]
fn signals_follow_the_virtual_clock() {
    let mut tw = HeadlessTweener::new(7);
    let id = tw.play(&timeline()).unwrap();

    let first = tw.advance(0.5);
    assert_eq!(first, vec![TweenSignal::Started { timeline: id }]);
    assert!(tw.values(ElementId(3)).is_none());

    let second = tw.advance(0.5);
    assert_eq!(
        second,
        vec![
            TweenSignal::Action {
                timeline: id,
                action: Action::add_class(ElementId(9), "done"),
            },
            TweenSignal::Completed { timeline: id },
        ]
    );
    assert_eq!(tw.values(ElementId(3)).and_then(|p| p.opacity), Some(0.0));
    assert!(tw.is_idle());
}

#[test]
fn finish_all_completes_every_running_timeline() {
    let mut tw = HeadlessTweener::default();
    let a = tw.play(&timeline()).unwrap();
    let b = tw.play(&timeline()).unwrap();
    assert_ne!(a, b);
    assert_eq!(tw.running(), vec![a, b]);

    let signals = tw.finish_all();
    let completed: Vec<TimelineId> = signals
        .iter()
        .filter(|s| matches!(s, TweenSignal::Completed { .. }))
        .map(TweenSignal::timeline)
        .collect();
    assert_eq!(completed, vec![a, b]);
    assert!(tw.is_idle());
    assert_eq!(tw.played().len(), 2);
}

#[test]
fn killed_tweens_keep_current_values() {
    let mut tw = HeadlessTweener::default();
    tw.set(&[ElementId(3)], &Props::new().opacity(1.0));
    tw.play(&timeline()).unwrap();
    tw.advance(0.1);
    tw.kill_tweens_of(&[ElementId(3)]);
    tw.finish_all();
    assert_eq!(tw.values(ElementId(3)).and_then(|p| p.opacity), Some(1.0));
    assert_eq!(tw.killed(), &[ElementId(3)]);
}

#[test]
fn random_is_seeded_and_bounded() {
    let mut a = HeadlessTweener::new(42);
    let mut b = HeadlessTweener::new(42);
    for _ in 0..32 {
        let v = a.random(100.0, 300.0);
        assert!((100.0..300.0).contains(&v));
        assert_eq!(v, b.random(100.0, 300.0));
    }
}

#[test]
fn from_values_are_written_when_the_step_starts() {
    let mut tl = timeline();
    tl.steps.clear();
    tl.step(
        Step::from_to(
            vec![ElementId(4)],
            Props::new().y_percent(100.0),
            Props::new().y_percent(0.0),
            Position::at(0.5),
        )
        .duration(1.0),
    );
    let mut tw = HeadlessTweener::default();
    tw.play(&tl).unwrap();
    tw.advance(0.6);
    assert_eq!(
        tw.values(ElementId(4)).and_then(|p| p.y),
        Some(crate::timeline::Length::Percent(100.0))
    );
    tw.finish_all();
    assert_eq!(
        tw.values(ElementId(4)).and_then(|p| p.y),
        Some(crate::timeline::Length::Percent(0.0))
    );
}

#[test]
fn invalid_timeline_is_rejected_on_play() {
    let mut tl = timeline();
    tl.step(Step::to(vec![ElementId(1)], Props::new(), Position::label("nowhere")));
    let mut tw = HeadlessTweener::default();
    assert!(tw.play(&tl).is_err());
    assert!(tw.is_idle());
}
