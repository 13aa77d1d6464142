//! Payload types carried by view attributes.
//!
//! The enums deserialize from their snake_case names so they can be declared
//! in stylesheets; `Radius` and `LayoutPriority` also accept plain numbers and
//! are parsed by the stylesheet loader.

use serde::Deserialize;

/// How a view's corners are rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radius {
    /// Half of the view's shorter side, producing a pill or circle.
    Rounded,
    Fixed(f32),
}

impl Radius {
    /// Resolves to a corner radius for a view of the given size.
    ///
    /// An unknown size resolves `Rounded` to zero.
    pub fn resolve(self, width: Option<f32>, height: Option<f32>) -> f32 {
        match self {
            Radius::Fixed(radius) => radius,
            Radius::Rounded => match (width, height) {
                (Some(w), Some(h)) => w.min(h) / 2.0,
                (Some(side), None) | (None, Some(side)) => side / 2.0,
                (None, None) => 0.0,
            },
        }
    }
}

/// Priority used for content hugging and compression resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutPriority {
    Low,
    High,
    Required,
    Custom(f32),
}

impl LayoutPriority {
    pub fn value(self) -> f32 {
        match self {
            LayoutPriority::Low => 250.0,
            LayoutPriority::High => 750.0,
            LayoutPriority::Required => 1000.0,
            LayoutPriority::Custom(value) => value,
        }
    }
}

/// Letter case transformation applied to displayed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCase {
    #[default]
    Unchanged,
    Upper,
    Lower,
    /// First letter of every word upper-cased, the rest lower-cased.
    Capitalized,
}

impl TextCase {
    pub fn apply(self, text: &str) -> String {
        match self {
            TextCase::Unchanged => text.to_string(),
            TextCase::Upper => text.to_uppercase(),
            TextCase::Lower => text.to_lowercase(),
            TextCase::Capitalized => {
                let mut out = String::with_capacity(text.len());
                let mut at_word_start = true;
                for c in text.chars() {
                    if c.is_whitespace() {
                        at_word_start = true;
                        out.push(c);
                    } else if at_word_start {
                        at_word_start = false;
                        out.extend(c.to_uppercase());
                    } else {
                        out.extend(c.to_lowercase());
                    }
                }
                out
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlStateKind {
    #[default]
    Normal,
    Highlighted,
    Disabled,
    Selected,
}

/// Presentation of a control in one of its states.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ControlState {
    #[serde(default)]
    pub state: ControlStateKind,
    #[serde(default)]
    pub title: Option<String>,
}

impl ControlState {
    pub fn titled(state: ControlStateKind, title: impl Into<String>) -> Self {
        Self {
            state,
            title: Some(title.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlEvent {
    #[default]
    TouchUpInside,
    ValueChanged,
    EditingChanged,
}

/// A named action dispatched by a control on an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Actor {
    pub action: String,
    #[serde(default)]
    pub event: ControlEvent,
}

impl Actor {
    pub fn new(action: impl Into<String>, event: ControlEvent) -> Self {
        Self {
            action: action.into(),
            event,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    #[default]
    Fill,
    FillEqually,
    FillProportionally,
    EqualSpacing,
    EqualCentering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Fill,
    Leading,
    Center,
    Trailing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_resolve() {
        assert_eq!(Radius::Fixed(3.0).resolve(None, None), 3.0);
        assert_eq!(Radius::Rounded.resolve(Some(40.0), Some(20.0)), 10.0);
        assert_eq!(Radius::Rounded.resolve(Some(8.0), None), 4.0);
        assert_eq!(Radius::Rounded.resolve(None, None), 0.0);
    }

    #[test]
    fn test_layout_priority_values() {
        assert_eq!(LayoutPriority::Low.value(), 250.0);
        assert_eq!(LayoutPriority::Required.value(), 1000.0);
        assert_eq!(LayoutPriority::Custom(600.0).value(), 600.0);
    }

    #[test]
    fn test_text_case_apply() {
        assert_eq!(TextCase::Upper.apply("Hello"), "HELLO");
        assert_eq!(TextCase::Lower.apply("Hello"), "hello");
        assert_eq!(TextCase::Unchanged.apply("hElLo"), "hElLo");
        assert_eq!(TextCase::Capitalized.apply("hello  wORLD"), "Hello  World");
    }

    #[test]
    fn test_actor_event_defaults_to_touch_up_inside() {
        let actor: Actor = serde_yaml::from_str("action: submit").unwrap();
        assert_eq!(actor, Actor::new("submit", ControlEvent::TouchUpInside));
    }
}
