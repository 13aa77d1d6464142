//! View attributes and styles.
//!
//! This module provides the concrete attribute kind used to style widgets:
//!
//! - [`ViewAttribute`]: background, corners, sizing, text, image, control and
//!   stack attributes, plus a [`Custom`](ViewAttribute::Custom) slot for
//!   nested styles of other kinds
//! - [`ViewAttributeKey`]: the value-erased identity of each attribute
//! - [`ViewStyle`]: the container, installable on any [`Styleable`](crate::Styleable)
//! - payload types such as [`Radius`], [`LayoutPriority`] and [`TextCase`]

mod attribute;
mod install;
mod style;
mod types;

pub use attribute::{ViewAttribute, ViewAttributeKey};
pub use style::{AttributeVecExt, ViewStyle};
pub use types::{
    Actor, Alignment, Axis, ControlEvent, ControlState, ControlStateKind, Distribution,
    LayoutPriority, Radius, TextAlignment, TextCase,
};
