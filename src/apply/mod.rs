//! Installing merged styles onto targets.
//!
//! A target exposes what it can do through [`Styleable`]: every target is a
//! view, and may additionally hold text, an image, control targets, control
//! states, or stack/scroll properties. An [`Install`] implementation walks a
//! finished container and sets one property per attribute it recognizes,
//! skipping attributes (and capabilities) it does not know about.
//!
//! Installing only assigns properties, so applying the same style twice leaves
//! the target as applying it once.

mod error;

pub use error::ApplyError;

use console::Color;

use crate::view::{Actor, ControlState, TextAlignment, TextCase};
use crate::widget::{ScrollView, StackView, View};

/// A container that can be applied to a target.
pub trait Install {
    /// Applies every recognized attribute to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::UnsupportedTarget`] when the target lacks the
    /// base capability this style needs.
    fn install(&self, target: &mut dyn Styleable) -> Result<(), ApplyError>;
}

/// Anything a style can be installed on.
///
/// Only [`as_view`](Styleable::as_view) is required; the other capabilities
/// default to absent.
pub trait Styleable {
    /// The base view properties, or `None` if this target is not a view.
    fn as_view(&mut self) -> Option<&mut View>;

    fn as_text_holder(&mut self) -> Option<&mut dyn TextHolder> {
        None
    }

    fn as_image_holder(&mut self) -> Option<&mut dyn ImageHolder> {
        None
    }

    fn as_control(&mut self) -> Option<&mut dyn Control> {
        None
    }

    fn as_control_state_holder(&mut self) -> Option<&mut dyn ControlStateHolder> {
        None
    }

    fn as_stack_view(&mut self) -> Option<&mut StackView> {
        None
    }

    fn as_scroll_view(&mut self) -> Option<&mut ScrollView> {
        None
    }

    /// Name of the concrete target type, for error reporting.
    fn target_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A target that displays text.
pub trait TextHolder {
    fn set_text(&mut self, text: &str);
    fn set_text_color(&mut self, color: Color);
    fn set_case(&mut self, case: TextCase);
    fn set_text_alignment(&mut self, alignment: TextAlignment);
}

/// A target that displays an image.
pub trait ImageHolder {
    fn set_image(&mut self, image: &str);
}

/// A target that dispatches actions.
pub trait Control {
    /// Registers `actor`; registering the same actor again has no effect.
    fn add_target(&mut self, actor: &Actor);
}

/// A target with per-state presentation.
pub trait ControlStateHolder {
    fn set_control_states(&mut self, states: &[ControlState]);
}
