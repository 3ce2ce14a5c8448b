//! Contracts of the two external engines and their headless stand-ins.

pub(crate) mod headless;
pub(crate) mod scroll;
pub(crate) mod tween;

pub use headless::HeadlessTweener;
pub use scroll::{
    DeviceScroll, HeadlessScroll, ScrollCall, ScrollEngine, ScrollEvent, ScrollOptions, ScrollTo,
};
pub use tween::{TweenSignal, Tweener};
