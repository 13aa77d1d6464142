//! Composable, mergeable styles for terminal widgets.
//!
//! Composer describes how a widget looks as an ordered list of typed
//! attributes. Styles merge by attribute identity, so a base style can be
//! refined by more specific ones without repeating itself, and a style can be
//! installed onto any widget that supports it.
//!
//! # Concepts
//!
//! - [`Attribute`]: a typed configuration fact. Its [`stripped`](Attribute::stripped)
//!   key identifies it regardless of value, so `BackgroundColor(Red)` and
//!   `BackgroundColor(Blue)` conflict.
//! - [`Attributed`]: an ordered container of one attribute kind. Merging
//!   keeps one attribute per key; the *master* side wins conflicts and the
//!   *slave* side fills in what the master lacks.
//! - [`CustomStyle`]: a nested style of another kind carried in a designated
//!   slot. Two nested styles of the same kind merge recursively instead of
//!   replacing each other.
//! - [`Install`] and [`Styleable`]: applying a style to a widget. Each
//!   attribute is applied when the widget has the matching capability and
//!   ignored otherwise.
//! - [`AdaptiveStyle`]: a base style with light and dark overrides.
//! - [`Stylesheet`]: named styles loaded from YAML, with inheritance.
//!
//! # Example
//!
//! ```rust
//! use composer::widget::Label;
//! use composer::{view_style, Attributed, Install, TextAlignment, TextCase, ViewAttributeKey};
//! use console::Color;
//!
//! let base = view_style![
//!     BackgroundColor(Color::Blue),
//!     TextColor(Color::White),
//!     TextAlignment(TextAlignment::Center),
//! ];
//! let emphasis = view_style![TextColor(Color::Yellow), Case(TextCase::Upper)];
//!
//! // `emphasis` wins where both declare an attribute.
//! let style = emphasis.merge_slave(&base);
//! assert_eq!(style.len(), 4);
//! assert_eq!(style.value::<Color>(ViewAttributeKey::TextColor), Some(&Color::Yellow));
//!
//! let mut label = Label::new();
//! style.install(&mut label).unwrap();
//! assert_eq!(label.view.background_color, Some(Color::Blue));
//! ```
//!
//! # Logging
//!
//! Merges and installs emit [`tracing`] events at `trace` and `debug` level.
//! No subscriber is installed by the library.

mod apply;
mod attributed;
pub mod stylesheet;
mod theme;
mod view;
pub mod widget;

pub use apply::{
    ApplyError, Control, ControlStateHolder, ImageHolder, Install, Styleable, TextHolder,
};
pub use attributed::{
    filter_stripped, merge, merge_all, recursive_merge, strip_all, AnyAttributed, Attribute,
    AttributeError, Attributed, CustomStyle, MergeOptional, Stripped,
};
pub use stylesheet::{Stylesheet, StylesheetError};
pub use theme::{detect_color_mode, set_color_mode_detector, AdaptiveStyle, ColorMode};
pub use view::{
    Actor, Alignment, AttributeVecExt, Axis, ControlEvent, ControlState, ControlStateKind,
    Distribution, LayoutPriority, Radius, TextAlignment, TextCase, ViewAttribute,
    ViewAttributeKey, ViewStyle,
};
