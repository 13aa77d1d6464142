//! Adaptive styles that respond to system color mode.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use crate::attributed::Attributed;
use crate::view::ViewStyle;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A style with light and dark variants layered over a shared base.
///
/// The variant for the active mode is merged over the base, so it overrides
/// the base only where it sets the same attribute.
///
/// # Example
///
/// ```rust
/// use composer::{view_style, AdaptiveStyle, Attributed, ColorMode, ViewAttributeKey};
/// use console::Color;
///
/// let style = AdaptiveStyle::new(view_style![CornerRadius(4.0), TextColor(Color::Black)])
///     .with_dark(view_style![TextColor(Color::White)]);
///
/// let dark = style.resolve_for(ColorMode::Dark);
/// assert_eq!(dark.value::<Color>(ViewAttributeKey::TextColor), Some(&Color::White));
/// assert_eq!(dark.value::<f32>(ViewAttributeKey::CornerRadius), Some(&4.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdaptiveStyle {
    base: ViewStyle,
    light: ViewStyle,
    dark: ViewStyle,
}

impl AdaptiveStyle {
    /// Creates an adaptive style with no mode-specific overrides.
    pub fn new(base: ViewStyle) -> Self {
        Self {
            base,
            light: ViewStyle::empty(),
            dark: ViewStyle::empty(),
        }
    }

    pub fn with_light(mut self, light: ViewStyle) -> Self {
        self.light = light;
        self
    }

    pub fn with_dark(mut self, dark: ViewStyle) -> Self {
        self.dark = dark;
        self
    }

    pub fn base(&self) -> &ViewStyle {
        &self.base
    }

    pub fn light(&self) -> &ViewStyle {
        &self.light
    }

    pub fn dark(&self) -> &ViewStyle {
        &self.dark
    }

    /// Resolves to the style for the current color mode.
    pub fn resolve(&self) -> ViewStyle {
        self.resolve_for(detect_color_mode())
    }

    /// Resolves to the style for `mode`.
    pub fn resolve_for(&self, mode: ColorMode) -> ViewStyle {
        let variant = match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        };
        variant.recursive_merge(&self.base)
    }

    /// Merges component-wise: base with base, light with light, dark with dark.
    pub fn merge_slave(&self, slave: &AdaptiveStyle) -> AdaptiveStyle {
        AdaptiveStyle {
            base: self.base.recursive_merge(&slave.base),
            light: self.light.recursive_merge(&slave.light),
            dark: self.dark.recursive_merge(&slave.dark),
        }
    }
}

impl From<ViewStyle> for AdaptiveStyle {
    fn from(base: ViewStyle) -> Self {
        Self::new(base)
    }
}

type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

pub fn detect_color_mode() -> ColorMode {
    let detector = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_color_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}
