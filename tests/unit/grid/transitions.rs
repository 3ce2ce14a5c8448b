use super::*;
use crate::foundation::math::approx_eq;
use crate::timeline::{Ease, Length, StepKind};

fn el(n: u32) -> ElementId {
    ElementId(n)
}

fn plan(docked: usize, nav_slots: usize) -> TransitionPlan {
    TransitionPlan {
        item: 0,
        raised: vec![el(1), el(2)],
        outer: el(3),
        inner: Some(el(4)),
        caption: Some(el(5)),
        zoom: ImageTransform {
            scale: 3.5,
            x: 400.0,
            y: 120.0,
        },
        docked: (0..docked)
            .map(|i| Docked {
                item: i + 1,
                outer: el(100 + i as u32),
                caption: Some(el(200 + i as u32)),
                transform: ImageTransform {
                    scale: 0.2,
                    x: -10.0 * i as f64,
                    y: 300.0,
                },
            })
            .collect(),
        remaining: vec![(9, el(90))],
        nav_items: (0..nav_slots).map(|i| el(300 + i as u32)).collect(),
        nav_offset: 150.0,
        heading_top: Some(el(10)),
        heading_bottom: Some(el(11)),
        body: el(12),
        back: Some(el(13)),
        nav: Some(el(14)),
        panel: el(15),
        title: Some(el(16)),
        text: Some(el(17)),
    }
}

fn cfg() -> (TransitionConfig, Classes) {
    (TransitionConfig::default(), Classes::default())
}

#[test]
fn open_zooms_target_and_docks_visible_items_with_stagger() {
    let (cfg, classes) = cfg();
    let p = plan(3, 6);
    let tl = open_timeline(&p, &cfg, &classes);
    assert_eq!(tl.kind, TimelineKind::Open);
    assert_eq!(tl.defaults.duration, 1.4);
    assert_eq!(tl.defaults.ease, Ease::ExpoInOut);

    let s = tl.schedule().unwrap();
    let zoom = s.tweens_for(el(3)).find(|t| t.props.scale_x.is_some()).unwrap();
    assert_eq!(zoom.props, Props::image(p.zoom));
    assert_eq!(zoom.start, 0.0);

    for i in 0..3u32 {
        let t = s.tweens_for(el(100 + i)).find(|t| t.props.scale_x.is_some()).unwrap();
        assert!(approx_eq(t.start, 0.03 * i as f64, 1e-12));
        assert_eq!(t.props.scale_x, Some(0.2));
        let c = s.tweens_for(el(200 + i)).next().unwrap();
        assert_eq!(c.props.opacity, Some(0.0));
        assert_eq!(c.ease, Ease::Expo);
    }
}

#[test]
fn open_reveals_nav_slots_after_the_reserved_one() {
    let (cfg, classes) = cfg();
    let p = plan(2, 6);
    let s = open_timeline(&p, &cfg, &classes).schedule().unwrap();
    let revealed: Vec<ElementId> = s
        .tweens
        .iter()
        .filter(|t| t.props.opacity == Some(1.0) && t.props.y == Some(Length::Percent(0.0)))
        .filter(|t| p.nav_items.contains(&t.target))
        .map(|t| t.target)
        .collect();
    assert_eq!(revealed, vec![el(303), el(304), el(305)]);
    let first = s.tweens_for(el(303)).next().unwrap();
    assert!(approx_eq(first.start, 0.2, 1e-12));
    let last = s.tweens_for(el(305)).next().unwrap();
    assert!(approx_eq(last.start, 0.2 + 0.06, 1e-12));
}

#[test]
fn open_hides_nav_at_start_and_marks_content_at_show_content() {
    let (cfg, classes) = cfg();
    let p = plan(1, 4);
    let s = open_timeline(&p, &cfg, &classes).schedule().unwrap();
    let hide = s
        .actions
        .iter()
        .find(|a| matches!(&a.action, Action::Set { targets, .. } if targets.len() == 4))
        .unwrap();
    assert_eq!(hide.at, 0.0);
    let Action::Set { props, .. } = &hide.action else {
        unreachable!()
    };
    assert_eq!(props.y, Some(Length::Percent(150.0)));
    assert_eq!(props.opacity, Some(0.0));

    for class in ["content__item--current", "view-content"] {
        let a = s
            .actions
            .iter()
            .find(|a| matches!(&a.action, Action::AddClass { class: c, .. } if c == class))
            .unwrap();
        assert!(approx_eq(a.at, 0.2, 1e-12));
    }
}

#[test]
fn open_hooks_raise_overflow_and_hide_remaining() {
    let (cfg, classes) = cfg();
    let tl = open_timeline(&plan(0, 2), &cfg, &classes);
    assert_eq!(tl.on_start, vec![Action::add_class(el(12), "oh")]);
    assert_eq!(
        tl.on_complete,
        vec![Action::set(vec![el(90)], Props::new().opacity(0.0))]
    );
    let heading = tl.steps_for(el(11)).next().unwrap();
    assert_eq!(tl.resolve(&heading.at).unwrap(), 0.05);
    let title = tl.steps_for(el(16)).next().unwrap();
    assert!(matches!(&title.kind, StepKind::FromTo { from } if from.scale_y == Some(3.0)));
}

#[test]
fn close_restores_everything_and_leaves_content_after_nav_hides() {
    let (cfg, classes) = cfg();
    let p = plan(2, 6);
    let tl = close_timeline(&p, &cfg, &classes);
    assert_eq!(tl.kind, TimelineKind::Close);
    assert_eq!(
        tl.on_start,
        vec![
            Action::set(vec![el(90)], Props::new().opacity(1.0)),
            Action::remove_class(el(12), "oh"),
        ]
    );
    assert!(tl.on_complete.is_empty());

    let s = tl.schedule().unwrap();
    let spans: Vec<(f64, f64)> = [el(3), el(100), el(101)]
        .into_iter()
        .map(|outer| {
            let t = s.tweens_for(outer).find(|t| t.props.scale_x.is_some()).unwrap();
            assert_eq!(t.props, Props::image(ImageTransform::IDENTITY));
            (t.start, t.end)
        })
        .collect();
    assert!(spans.iter().all(|&(start, _)| start == 0.0));
    assert!(approx_eq(spans[0].1, 1.4, 1e-12));
    // Docked images return reverse-staggered: later slots land first.
    assert!(approx_eq(spans[1].1, 1.4, 1e-12));
    assert!(approx_eq(spans[2].1, 1.37, 1e-12));

    let nav_ends: Vec<f64> = [el(303), el(304), el(305)]
        .into_iter()
        .map(|slot| s.tweens_for(slot).next().unwrap().end)
        .collect();
    assert!(approx_eq(nav_ends[0], 1.4, 1e-12));
    assert!(approx_eq(nav_ends[1], 1.37, 1e-12));
    assert!(approx_eq(nav_ends[2], 1.34, 1e-12));
    let leave = s
        .actions
        .iter()
        .find(|a| matches!(&a.action, Action::RemoveClass { class, .. } if class == "view-content"))
        .unwrap();
    assert!(approx_eq(leave.at, 1.4, 1e-12));

    let captions: Vec<ElementId> = s
        .tweens
        .iter()
        .filter(|t| t.ease == Ease::Power4In)
        .map(|t| t.target)
        .collect();
    assert_eq!(captions, vec![el(200), el(201), el(5)]);
    let reset_z = s
        .actions
        .iter()
        .find(|a| matches!(&a.action, Action::Set { props, .. } if props.z_index == Some(1)))
        .unwrap();
    assert!(approx_eq(reset_z.at, 1.4, 1e-12));
}

#[test]
fn close_without_unused_slots_still_leaves_content() {
    let (cfg, classes) = cfg();
    let p = plan(3, 3);
    assert!(p.unused_nav(1).is_empty());
    let s = close_timeline(&p, &cfg, &classes).schedule().unwrap();
    let removed = s
        .actions
        .iter()
        .filter(|a| matches!(&a.action, Action::RemoveClass { .. }))
        .count();
    assert_eq!(removed, 2);
}

#[test]
fn hover_timelines_scale_layers_and_clear_will_change() {
    let cfg = HoverConfig::default();
    let tl = hover_in(el(3), Some(el(4)), &cfg);
    assert_eq!(tl.kind, TimelineKind::HoverIn);
    assert_eq!(tl.defaults.ease, Ease::Expo);
    let s = tl.schedule().unwrap();
    let outer = s.tweens_for(el(3)).find(|t| t.props.scale_x.is_some()).unwrap();
    assert_eq!((outer.props.scale_x, outer.props.scale_y), (Some(0.88), Some(0.95)));
    let inner = s.tweens_for(el(4)).find(|t| t.props.scale_x.is_some()).unwrap();
    assert_eq!((inner.props.scale_x, inner.props.scale_y), (Some(1.7), Some(1.2)));
    assert_eq!(inner.ease, Ease::Power4);
    assert_eq!(
        tl.on_complete,
        vec![Action::set(vec![el(3), el(4)], Props::new().will_change(""))]
    );

    let out = hover_out(el(3), None, &cfg);
    let s = out.schedule().unwrap();
    let t = s.tweens_for(el(3)).find(|t| t.props.scale_x.is_some()).unwrap();
    assert_eq!((t.props.scale_x, t.props.scale_y), (Some(1.0), Some(1.0)));
}
