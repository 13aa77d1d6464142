//! Widget models that styles install onto.
//!
//! These are plain in-memory widgets, each implementing
//! [`Styleable`](crate::Styleable) with the capabilities it supports:
//!
//! | Widget | Capabilities |
//! |--------|--------------|
//! | [`View`] | view |
//! | [`Label`] | view, text |
//! | [`Button`] | view, text, control, control states |
//! | [`ImageView`] | view, image |
//! | [`StackView`] | view, stack |
//! | [`ScrollView`] | view, scroll |
//!
//! Text widgets render to a terminal string with [`Label::render`].

mod container;
mod text;
mod util;
mod view;

pub use container::{ImageView, ScrollView, StackView};
pub use text::{Button, Label, OutputMode, TextProps};
pub use util::{fit_to_width, truncate_to_width};
pub use view::{AxisPriorities, View};
