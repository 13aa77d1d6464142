//! Image, stack and scroll widgets.

use super::view::View;
use crate::apply::{ImageHolder, Styleable};
use crate::view::{Alignment, Axis, Distribution};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageView {
    pub view: View,
    /// Name of the displayed image asset.
    pub image: Option<String>,
}

impl ImageView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageHolder for ImageView {
    fn set_image(&mut self, image: &str) {
        self.image = Some(image.to_string());
    }
}

impl Styleable for ImageView {
    fn as_view(&mut self) -> Option<&mut View> {
        Some(&mut self.view)
    }

    fn as_image_holder(&mut self) -> Option<&mut dyn ImageHolder> {
        Some(self)
    }
}

/// Arranges children along an axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackView {
    pub view: View,
    pub axis: Axis,
    pub distribution: Distribution,
    pub alignment: Alignment,
    pub spacing: f32,
    /// Insets on every edge, when margins are set.
    pub layout_margin: Option<f32>,
    pub is_layout_margins_relative_arrangement: bool,
    arranged_subviews: Vec<String>,
}

impl StackView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_uniform_margin(&mut self, margin: f32) {
        self.layout_margin = Some(margin);
        self.is_layout_margins_relative_arrangement = true;
    }

    /// Appends a child by name; a child already arranged keeps its place.
    pub fn add_arranged_subview(&mut self, name: &str) {
        if !self.arranged_subviews.iter().any(|child| child == name) {
            self.arranged_subviews.push(name.to_string());
        }
    }

    pub fn arranged_subviews(&self) -> &[String] {
        &self.arranged_subviews
    }
}

impl Styleable for StackView {
    fn as_view(&mut self) -> Option<&mut View> {
        Some(&mut self.view)
    }

    fn as_stack_view(&mut self) -> Option<&mut StackView> {
        Some(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollView {
    pub view: View,
    pub is_scroll_enabled: bool,
}

impl ScrollView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self {
            view: View::default(),
            is_scroll_enabled: true,
        }
    }
}

impl Styleable for ScrollView {
    fn as_view(&mut self) -> Option<&mut View> {
        Some(&mut self.view)
    }

    fn as_scroll_view(&mut self) -> Option<&mut ScrollView> {
        Some(self)
    }
}
