//! YAML stylesheets of named, inheritable styles.
//!
//! A stylesheet maps style names to attribute definitions:
//!
//! ```yaml
//! base:
//!   background_color: blue
//!   corner_radius: 4
//!
//! title:
//!   extends: base
//!   text_color: white
//!   text_alignment: center
//!   dark:
//!     text_color: yellow
//! ```
//!
//! # Attributes
//!
//! Keys are [`ViewAttributeKey`](crate::ViewAttributeKey) names in snake_case.
//! Colors are ANSI names (`red`, `cyan`, ...) or a 256-color palette index.
//! Enum payloads use their snake_case variant names, and `radius` accepts
//! `rounded` or a number. Declaration order is preserved. The `custom`
//! attribute cannot be declared in YAML.
//!
//! # Inheritance
//!
//! `extends` names one base style or a list of them. A style is resolved by
//! merging its own attributes over its bases: the style's attributes win, and
//! earlier bases win over later ones. The `light` and `dark` blocks are merged
//! the same way, producing an [`AdaptiveStyle`](crate::AdaptiveStyle).
//!
//! Dangling bases and inheritance cycles are reported when a style is
//! resolved; [`Stylesheet::validate`] checks every style up front.

mod error;
mod parse;

pub use error::StylesheetError;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::theme::AdaptiveStyle;
use parse::{parse_document, StyleDefinition};

/// A parsed stylesheet.
///
/// # Example
///
/// ```rust
/// use composer::{Attributed, ColorMode, Stylesheet, ViewAttributeKey};
/// use console::Color;
///
/// let sheet = Stylesheet::from_yaml(r#"
/// base:
///   background_color: blue
///   text_color: white
/// warning:
///   extends: base
///   background_color: yellow
/// "#).unwrap();
///
/// let warning = sheet.get("warning").unwrap().resolve_for(ColorMode::Light);
/// assert_eq!(warning.value::<Color>(ViewAttributeKey::BackgroundColor), Some(&Color::Yellow));
/// assert_eq!(warning.value::<Color>(ViewAttributeKey::TextColor), Some(&Color::White));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    definitions: HashMap<String, StyleDefinition>,
    /// Style names in declaration order.
    order: Vec<String>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a stylesheet from YAML source.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::Parse`] for malformed documents,
    /// [`StylesheetError::UnknownAttribute`] for keys that name no attribute,
    /// and [`StylesheetError::InvalidValue`] for values of the wrong shape.
    pub fn from_yaml(source: &str) -> Result<Self, StylesheetError> {
        let mut stylesheet = Self::new();
        for (name, definition) in parse_document(source)? {
            stylesheet.insert(name, definition);
        }
        tracing::debug!(styles = stylesheet.len(), "parsed stylesheet");
        Ok(stylesheet)
    }

    /// Reads and parses a stylesheet file.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::Read`] if the file cannot be read, or any
    /// error from [`from_yaml`](Stylesheet::from_yaml).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| StylesheetError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&source)
    }

    /// Adds the styles of `other`, replacing styles with the same name.
    pub fn extend(&mut self, other: Stylesheet) {
        let Stylesheet {
            mut definitions,
            order,
        } = other;
        for name in order {
            if let Some(definition) = definitions.remove(&name) {
                self.insert(name, definition);
            }
        }
    }

    fn insert(&mut self, name: String, definition: StyleDefinition) {
        if self.definitions.insert(name.clone(), definition).is_none() {
            self.order.push(name);
        }
    }

    /// Style names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves a style and everything it extends.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::NotFound`] for unknown names,
    /// [`StylesheetError::UnresolvedBase`] when a style extends an unknown
    /// style, and [`StylesheetError::CycleDetected`] for circular inheritance.
    pub fn get(&self, name: &str) -> Result<AdaptiveStyle, StylesheetError> {
        if !self.contains(name) {
            return Err(StylesheetError::NotFound {
                name: name.to_string(),
            });
        }
        self.resolve(name, &mut Vec::new())
    }

    /// Checks that every style resolves.
    ///
    /// # Errors
    ///
    /// Returns the first resolution error, in declaration order.
    pub fn validate(&self) -> Result<(), StylesheetError> {
        for name in &self.order {
            self.resolve(name, &mut Vec::new())?;
        }
        Ok(())
    }

    fn resolve(&self, name: &str, path: &mut Vec<String>) -> Result<AdaptiveStyle, StylesheetError> {
        if let Some(start) = path.iter().position(|visited| visited == name) {
            let mut cycle = path[start..].to_vec();
            cycle.push(name.to_string());
            return Err(StylesheetError::CycleDetected { path: cycle });
        }

        let definition = self
            .definitions
            .get(name)
            .ok_or_else(|| StylesheetError::NotFound {
                name: name.to_string(),
            })?;

        path.push(name.to_string());
        let mut resolved = AdaptiveStyle::new(definition.base.clone())
            .with_light(definition.light.clone())
            .with_dark(definition.dark.clone());

        for base in &definition.extends {
            if !self.contains(base) {
                return Err(StylesheetError::UnresolvedBase {
                    from: name.to_string(),
                    to: base.clone(),
                });
            }
            resolved = resolved.merge_slave(&self.resolve(base, path)?);
        }
        path.pop();

        tracing::debug!(style = name, bases = definition.extends.len(), "resolved style");
        Ok(resolved)
    }
}
