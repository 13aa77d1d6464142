//! Properties shared by every widget.

use console::Color;

use crate::apply::Styleable;
use crate::view::Axis;

/// Content hugging or compression resistance priority per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisPriorities {
    pub horizontal: Option<f32>,
    pub vertical: Option<f32>,
}

impl AxisPriorities {
    fn set(&mut self, priority: f32, axis: Axis) {
        match axis {
            Axis::Horizontal => self.horizontal = Some(priority),
            Axis::Vertical => self.vertical = Some(priority),
        }
    }
}

/// The base styleable surface: background, corners, size and priorities.
///
/// A bare `View` is itself a valid target; the richer widgets embed one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View {
    pub background_color: Option<Color>,
    pub corner_radius: f32,
    /// Clip content to the rounded corners; on whenever the radius is positive.
    pub masks_to_bounds: bool,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub hugging: AxisPriorities,
    pub compression_resistance: AxisPriorities,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
        self.masks_to_bounds = radius > 0.0;
    }

    pub fn set_hugging_priority(&mut self, priority: f32, axis: Axis) {
        self.hugging.set(priority, axis);
    }

    pub fn set_compression_resistance(&mut self, priority: f32, axis: Axis) {
        self.compression_resistance.set(priority, axis);
    }
}

impl Styleable for View {
    fn as_view(&mut self) -> Option<&mut View> {
        Some(self)
    }
}
