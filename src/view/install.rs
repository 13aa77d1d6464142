//! Installing view styles onto widgets.
//!
//! Each capability of the target gets its own applier, which walks the style
//! and handles only the attributes it understands. Attributes no applier
//! recognizes are ignored.

use super::attribute::{ViewAttribute, ViewAttributeKey};
use super::style::ViewStyle;
use super::types::{Axis, Radius};
use crate::apply::{
    ApplyError, Control, ControlStateHolder, ImageHolder, Install, Styleable, TextHolder,
};
use crate::attributed::{Attributed, CustomStyle};
use crate::widget::{ScrollView, StackView, View};

impl Install for ViewStyle {
    /// Applies the style, then any nested custom style, to `target`.
    /// `Radius` is resolved last, once the nested style has set its size.
    ///
    /// Text, image, control, state, stack and scroll attributes only take
    /// effect on targets with that capability.
    fn install(&self, target: &mut dyn Styleable) -> Result<(), ApplyError> {
        if target.as_view().is_none() {
            tracing::debug!(widget = target.target_name(), "install on non-view target");
            return Err(ApplyError::UnsupportedTarget {
                style: "ViewStyle",
                target: target.target_name(),
            });
        }

        if let Some(control) = target.as_control() {
            apply_control(self, control);
        }
        if let Some(text_holder) = target.as_text_holder() {
            apply_text(self, text_holder);
        }
        if let Some(image_holder) = target.as_image_holder() {
            apply_image(self, image_holder);
        }
        if let Some(stack_view) = target.as_stack_view() {
            apply_stack(self, stack_view);
        }
        if let Some(scroll_view) = target.as_scroll_view() {
            apply_scroll(self, scroll_view);
        }
        if let Some(state_holder) = target.as_control_state_holder() {
            apply_states(self, state_holder);
        }
        if let Some(view) = target.as_view() {
            apply_view(self, view);
        }

        if let Some(custom) = self.value::<CustomStyle>(ViewAttributeKey::Custom) {
            custom.install(target)?;
        }

        // After the nested style, which may set the size `Radius` resolves against.
        if let Some(view) = target.as_view() {
            apply_radius(self, view);
        }
        Ok(())
    }
}

fn apply_view(style: &ViewStyle, view: &mut View) {
    for attribute in style {
        match attribute {
            ViewAttribute::BackgroundColor(color) => view.background_color = Some(*color),
            ViewAttribute::CornerRadius(radius) => view.set_corner_radius(*radius),
            ViewAttribute::VerticalHugging(priority) => {
                view.set_hugging_priority(priority.value(), Axis::Vertical)
            }
            ViewAttribute::VerticalCompression(priority) => {
                view.set_compression_resistance(priority.value(), Axis::Vertical)
            }
            ViewAttribute::HorizontalHugging(priority) => {
                view.set_hugging_priority(priority.value(), Axis::Horizontal)
            }
            ViewAttribute::HorizontalCompression(priority) => {
                view.set_compression_resistance(priority.value(), Axis::Horizontal)
            }
            ViewAttribute::Width(width) => view.width = Some(*width),
            ViewAttribute::Height(height) => view.height = Some(*height),
            _ => {}
        }
    }
}

/// Overrides `CornerRadius`, resolved against the final size of the view.
fn apply_radius(style: &ViewStyle, view: &mut View) {
    if let Some(radius) = style.value::<Radius>(ViewAttributeKey::Radius) {
        view.set_corner_radius(radius.resolve(view.width, view.height));
    }
}

fn apply_control(style: &ViewStyle, control: &mut dyn Control) {
    for attribute in style {
        if let ViewAttribute::Target(actor) = attribute {
            control.add_target(actor);
        }
    }
}

fn apply_text(style: &ViewStyle, text_holder: &mut dyn TextHolder) {
    for attribute in style {
        match attribute {
            ViewAttribute::Text(text) => text_holder.set_text(text),
            ViewAttribute::TextColor(color) => text_holder.set_text_color(*color),
            ViewAttribute::Case(case) => text_holder.set_case(*case),
            ViewAttribute::TextAlignment(alignment) => text_holder.set_text_alignment(*alignment),
            _ => {}
        }
    }
}

fn apply_image(style: &ViewStyle, image_holder: &mut dyn ImageHolder) {
    for attribute in style {
        if let ViewAttribute::Image(image) = attribute {
            image_holder.set_image(image);
        }
    }
}

fn apply_stack(style: &ViewStyle, stack_view: &mut StackView) {
    for attribute in style {
        match attribute {
            ViewAttribute::Axis(axis) => stack_view.axis = *axis,
            ViewAttribute::Distribution(distribution) => stack_view.distribution = *distribution,
            ViewAttribute::Alignment(alignment) => stack_view.alignment = *alignment,
            ViewAttribute::Spacing(spacing) => stack_view.spacing = *spacing,
            ViewAttribute::Margin(margin) => stack_view.set_uniform_margin(*margin),
            ViewAttribute::ArrangedSubviews(names) => {
                for name in names {
                    stack_view.add_arranged_subview(name);
                }
            }
            _ => {}
        }
    }
}

fn apply_scroll(style: &ViewStyle, scroll_view: &mut ScrollView) {
    for attribute in style {
        if let ViewAttribute::IsScrollEnabled(enabled) = attribute {
            scroll_view.is_scroll_enabled = *enabled;
        }
    }
}

fn apply_states(style: &ViewStyle, state_holder: &mut dyn ControlStateHolder) {
    for attribute in style {
        if let ViewAttribute::States(states) = attribute {
            state_holder.set_control_states(states);
        }
    }
}
