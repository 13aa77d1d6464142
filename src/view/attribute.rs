//! The view attribute kind.

use std::any::Any;

use console::Color;
use strum::{Display, EnumDiscriminants, EnumIter, EnumString, IntoStaticStr};

use super::types::{
    Actor, Alignment, Axis, ControlState, Distribution, LayoutPriority, Radius, TextAlignment,
    TextCase,
};
use crate::attributed::{Attribute, CustomStyle};

/// A single styling fact about a view.
///
/// The value-erased identity of each variant is its [`ViewAttributeKey`],
/// whose string form is the snake_case variant name (`background_color`,
/// `corner_radius`, ...).
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(
    name(ViewAttributeKey),
    derive(Hash, Display, EnumString, EnumIter, IntoStaticStr),
    strum(serialize_all = "snake_case")
)]
pub enum ViewAttribute {
    /// A nested style of another kind, merged recursively.
    Custom(CustomStyle),

    // View
    BackgroundColor(Color),
    CornerRadius(f32),
    /// Corner rounding relative to the view size; independent of `CornerRadius`.
    Radius(Radius),
    VerticalHugging(LayoutPriority),
    VerticalCompression(LayoutPriority),
    HorizontalHugging(LayoutPriority),
    HorizontalCompression(LayoutPriority),
    Height(f32),
    Width(f32),

    // Text holders
    Text(String),
    TextColor(Color),
    Case(TextCase),
    TextAlignment(TextAlignment),

    // Image holders
    Image(String),

    // Scroll views
    IsScrollEnabled(bool),

    // Control state holders
    States(Vec<ControlState>),

    // Controls
    Target(Actor),

    // Stack views
    Axis(Axis),
    Distribution(Distribution),
    Alignment(Alignment),
    Spacing(f32),
    Margin(f32),
    /// Names of the child widgets, in arrangement order.
    ArrangedSubviews(Vec<String>),
}

impl Attribute for ViewAttribute {
    type Stripped = ViewAttributeKey;

    fn stripped(&self) -> ViewAttributeKey {
        self.into()
    }

    fn payload(&self) -> &dyn Any {
        match self {
            ViewAttribute::Custom(style) => style,
            ViewAttribute::BackgroundColor(color) | ViewAttribute::TextColor(color) => color,
            ViewAttribute::CornerRadius(value)
            | ViewAttribute::Height(value)
            | ViewAttribute::Width(value)
            | ViewAttribute::Spacing(value)
            | ViewAttribute::Margin(value) => value,
            ViewAttribute::Radius(radius) => radius,
            ViewAttribute::VerticalHugging(priority)
            | ViewAttribute::VerticalCompression(priority)
            | ViewAttribute::HorizontalHugging(priority)
            | ViewAttribute::HorizontalCompression(priority) => priority,
            ViewAttribute::Text(text) | ViewAttribute::Image(text) => text,
            ViewAttribute::Case(case) => case,
            ViewAttribute::TextAlignment(alignment) => alignment,
            ViewAttribute::IsScrollEnabled(enabled) => enabled,
            ViewAttribute::States(states) => states,
            ViewAttribute::Target(actor) => actor,
            ViewAttribute::Axis(axis) => axis,
            ViewAttribute::Distribution(distribution) => distribution,
            ViewAttribute::Alignment(alignment) => alignment,
            ViewAttribute::ArrangedSubviews(names) => names,
        }
    }

    fn custom_key() -> Option<ViewAttributeKey> {
        Some(ViewAttributeKey::Custom)
    }

    fn from_custom(style: CustomStyle) -> Option<Self> {
        Some(ViewAttribute::Custom(style))
    }
}
