use crate::foundation::core::ElementId;
use crate::foundation::error::{GridError, GridResult};
use crate::timeline::props::Props;

/// Named easing curves understood by the tween engine. The curves themselves belong to the
/// engine; only the names travel with a timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Exponential ease-out.
    #[serde(rename = "expo")]
    Expo,
    /// Exponential ease-in/out.
    #[serde(rename = "expo.inOut")]
    ExpoInOut,
    /// Quartic-power ease-out.
    #[serde(rename = "power4")]
    Power4,
    /// Quartic-power ease-in.
    #[serde(rename = "power4.in")]
    Power4In,
}

impl Ease {
    /// Engine-facing name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Expo => "expo",
            Self::ExpoInOut => "expo.inOut",
            Self::Power4 => "power4",
            Self::Power4In => "power4.in",
        }
    }
}

/// Where a step or label sits on its timeline: an optional label plus an offset in seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// Anchor label; `None` anchors at time 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Seconds after the anchor.
    #[serde(default)]
    pub offset: f64,
}

impl Position {
    /// Absolute time in seconds.
    pub fn at(offset: f64) -> Self {
        Self {
            label: None,
            offset,
        }
    }

    /// Exactly at `label`.
    pub fn label(name: &str) -> Self {
        Self::label_offset(name, 0.0)
    }

    /// `offset` seconds after `label`.
    pub fn label_offset(name: &str, offset: f64) -> Self {
        Self {
            label: Some(name.to_owned()),
            offset,
        }
    }

    /// Parse `"1.5"`, `"start"`, `"start+=0.2"` or `"start-=0.1"`.
    pub fn parse(raw: &str) -> GridResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(GridError::validation("timeline position must be non-empty"));
        }
        if let Ok(v) = raw.parse::<f64>() {
            return Ok(Self::at(v));
        }
        let (name, offset) = if let Some((name, off)) = raw.split_once("+=") {
            (name, parse_offset(off)?)
        } else if let Some((name, off)) = raw.split_once("-=") {
            (name, -parse_offset(off)?)
        } else {
            (raw, 0.0)
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(GridError::validation(format!(
                "timeline position '{raw}' has no label"
            )));
        }
        Ok(Self::label_offset(name, offset))
    }
}

fn parse_offset(raw: &str) -> GridResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| GridError::validation(format!("invalid position offset '{raw}'")))
}

/// Extra start offset of a step, per target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delay {
    /// Same delay for every target.
    Fixed(f64),
    /// `step * i` for the `i`-th target; negative steps reverse the order of arrival.
    PerTarget(f64),
}

impl Default for Delay {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

impl Delay {
    /// Delay in seconds for the target at `index`.
    pub fn for_index(self, index: usize) -> f64 {
        match self {
            Self::Fixed(v) => v,
            Self::PerTarget(step) => step * index as f64,
        }
    }
}

/// A side effect fired at a point of a timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Add a class to an element.
    AddClass {
        /// Element to modify.
        target: ElementId,
        /// Class name.
        class: String,
    },
    /// Remove a class from an element.
    RemoveClass {
        /// Element to modify.
        target: ElementId,
        /// Class name.
        class: String,
    },
    /// Immediately set properties, bypassing tweening.
    Set {
        /// Elements to modify.
        targets: Vec<ElementId>,
        /// Properties to write.
        props: Props,
    },
}

impl Action {
    /// [`Action::AddClass`].
    pub fn add_class(target: ElementId, class: &str) -> Self {
        Self::AddClass {
            target,
            class: class.to_owned(),
        }
    }

    /// [`Action::RemoveClass`].
    pub fn remove_class(target: ElementId, class: &str) -> Self {
        Self::RemoveClass {
            target,
            class: class.to_owned(),
        }
    }

    /// [`Action::Set`].
    pub fn set(targets: Vec<ElementId>, props: Props) -> Self {
        Self::Set { targets, props }
    }
}

/// What a step does with its targets.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Tween from the current values to `props`.
    To,
    /// Tween from `from` (applied at step start) to `props`.
    FromTo {
        /// Values written when the step starts.
        from: Props,
    },
    /// Write `props` instantly at the step's position.
    Set,
    /// Fire an action at the step's position.
    Call {
        /// The action.
        action: Action,
    },
}

/// One declarative step of a [`Timeline`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Step behavior.
    pub kind: StepKind,
    /// Elements animated by this step.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<ElementId>,
    /// End values.
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub props: Props,
    /// Anchor on the timeline.
    pub at: Position,
    /// Per-target start offset.
    #[serde(default)]
    pub delay: Delay,
    /// Overrides the timeline's default ease.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
    /// Overrides the timeline's default duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Fired once every target of this step has finished.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_complete: Vec<Action>,
}

impl Step {
    fn new(kind: StepKind, targets: Vec<ElementId>, props: Props, at: Position) -> Self {
        Self {
            kind,
            targets,
            props,
            at,
            delay: Delay::default(),
            ease: None,
            duration: None,
            on_complete: Vec::new(),
        }
    }

    /// Tween `targets` to `props`.
    pub fn to(targets: Vec<ElementId>, props: Props, at: Position) -> Self {
        Self::new(StepKind::To, targets, props, at)
    }

    /// Tween `targets` from `from` to `props`.
    pub fn from_to(targets: Vec<ElementId>, from: Props, props: Props, at: Position) -> Self {
        Self::new(StepKind::FromTo { from }, targets, props, at)
    }

    /// Write `props` on `targets` instantly.
    pub fn set(targets: Vec<ElementId>, props: Props, at: Position) -> Self {
        Self::new(StepKind::Set, targets, props, at)
    }

    /// Fire `action` at `at`.
    pub fn call(action: Action, at: Position) -> Self {
        Self::new(StepKind::Call { action }, Vec::new(), Props::new(), at)
    }

    /// Set the per-target delay.
    pub fn delay(mut self, delay: Delay) -> Self {
        self.delay = delay;
        self
    }

    /// Override the ease.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    /// Override the duration.
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = Some(secs);
        self
    }

    /// Append a completion action.
    pub fn then(mut self, action: Action) -> Self {
        self.on_complete.push(action);
        self
    }

    /// Whether the step writes to `el`.
    pub fn targets_element(&self, el: ElementId) -> bool {
        self.targets.contains(&el)
    }
}

/// Which choreography a timeline implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    /// Grid to content.
    Open,
    /// Content to grid.
    Close,
    /// Pointer entered a tile.
    HoverIn,
    /// Pointer left a tile.
    HoverOut,
}

impl TimelineKind {
    /// `true` for the two view transitions.
    pub fn is_transition(self) -> bool {
        matches!(self, Self::Open | Self::Close)
    }
}

/// Duration and ease applied to steps that do not override them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineDefaults {
    /// Seconds.
    pub duration: f64,
    /// Default ease.
    pub ease: Ease,
}

/// A named position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
    /// Where the label sits; may reference earlier labels.
    pub at: Position,
}

/// Declarative timeline handed to a [`Tweener`](crate::Tweener).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Choreography this timeline implements.
    pub kind: TimelineKind,
    /// Step defaults.
    pub defaults: TimelineDefaults,
    /// Labels in declaration order.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Steps in declaration order.
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Fired when the timeline starts playing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_start: Vec<Action>,
    /// Fired when the last step has finished.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_complete: Vec<Action>,
}

impl Timeline {
    /// Empty timeline.
    pub fn new(kind: TimelineKind, defaults: TimelineDefaults) -> Self {
        Self {
            kind,
            defaults,
            labels: Vec::new(),
            steps: Vec::new(),
            on_start: Vec::new(),
            on_complete: Vec::new(),
        }
    }

    /// Declare a label.
    pub fn label(&mut self, name: &str, at: Position) -> &mut Self {
        self.labels.push(Label {
            name: name.to_owned(),
            at,
        });
        self
    }

    /// Append a step.
    pub fn step(&mut self, step: Step) -> &mut Self {
        self.steps.push(step);
        self
    }

    /// Append a start hook.
    pub fn on_start(&mut self, action: Action) -> &mut Self {
        self.on_start.push(action);
        self
    }

    /// Append a completion hook.
    pub fn on_complete(&mut self, action: Action) -> &mut Self {
        self.on_complete.push(action);
        self
    }

    /// Resolved time of `name` in seconds. Labels may only reference labels declared before
    /// them.
    pub fn label_time(&self, name: &str) -> GridResult<f64> {
        let idx = self
            .labels
            .iter()
            .position(|l| l.name == name)
            .ok_or_else(|| GridError::validation(format!("unknown timeline label '{name}'")))?;
        let label = &self.labels[idx];
        match &label.at.label {
            None => Ok(label.at.offset),
            Some(anchor) => {
                if !self.labels[..idx].iter().any(|l| &l.name == anchor) {
                    return Err(GridError::validation(format!(
                        "label '{name}' is anchored to undeclared label '{anchor}'"
                    )));
                }
                Ok(self.label_time(anchor)? + label.at.offset)
            }
        }
    }

    /// Resolved time of a position in seconds.
    pub fn resolve(&self, at: &Position) -> GridResult<f64> {
        match &at.label {
            None => Ok(at.offset),
            Some(name) => Ok(self.label_time(name)? + at.offset),
        }
    }

    /// Steps that write to `el`.
    pub fn steps_for(&self, el: ElementId) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter().filter(move |s| s.targets_element(el))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/step.rs"]
mod tests;
