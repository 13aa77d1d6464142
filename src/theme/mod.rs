//! Light/dark adaptive styles.
//!
//! This module provides:
//!
//! - [`AdaptiveStyle`]: a base style with light and dark overrides
//! - [`ColorMode`]: light or dark color mode enum
//! - [`set_color_mode_detector`]: override OS detection (tests, forced modes)

mod adaptive;

pub use adaptive::{detect_color_mode, set_color_mode_detector, AdaptiveStyle, ColorMode};
