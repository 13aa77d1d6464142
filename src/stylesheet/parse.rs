//! Converting YAML style definitions into view attributes.

use std::str::FromStr;

use console::Color;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::error::StylesheetError;
use crate::view::{LayoutPriority, Radius, ViewAttribute, ViewAttributeKey, ViewStyle};

/// Keys of a definition that are not attributes.
const EXTENDS_KEY: &str = "extends";
const LIGHT_KEY: &str = "light";
const DARK_KEY: &str = "dark";

/// One named style as declared in a stylesheet, before inheritance.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct StyleDefinition {
    pub extends: Vec<String>,
    pub base: ViewStyle,
    pub light: ViewStyle,
    pub dark: ViewStyle,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Extends {
    One(String),
    Many(Vec<String>),
}

/// Parses a whole stylesheet document, preserving declaration order.
pub(crate) fn parse_document(
    source: &str,
) -> Result<Vec<(String, StyleDefinition)>, StylesheetError> {
    let document: Value = serde_yaml::from_str(source).map_err(|e| StylesheetError::Parse {
        message: e.to_string(),
    })?;

    let entries = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(entries) => entries,
        _ => {
            return Err(StylesheetError::Parse {
                message: "stylesheet must be a mapping of style names".to_string(),
            })
        }
    };

    entries
        .into_iter()
        .map(|(name, body)| {
            let name = key_name(&name)?;
            let definition = parse_definition(&name, &body)?;
            Ok((name, definition))
        })
        .collect()
}

fn parse_definition(name: &str, body: &Value) -> Result<StyleDefinition, StylesheetError> {
    let body = match body {
        Value::Null => return Ok(StyleDefinition::default()),
        Value::Mapping(body) => body,
        _ => {
            return Err(StylesheetError::Parse {
                message: format!("style '{}' must be a mapping of attributes", name),
            })
        }
    };

    let mut definition = StyleDefinition::default();
    let mut attributes = Mapping::new();

    for (key, value) in body {
        match key_name(key)?.as_str() {
            EXTENDS_KEY => {
                let extends: Extends = serde_yaml::from_value(value.clone()).map_err(|e| {
                    StylesheetError::InvalidValue {
                        style: name.to_string(),
                        attribute: EXTENDS_KEY.to_string(),
                        message: e.to_string(),
                    }
                })?;
                definition.extends = match extends {
                    Extends::One(base) => vec![base],
                    Extends::Many(bases) => bases,
                };
            }
            LIGHT_KEY => definition.light = parse_mode(name, LIGHT_KEY, value)?,
            DARK_KEY => definition.dark = parse_mode(name, DARK_KEY, value)?,
            _ => {
                attributes.insert(key.clone(), value.clone());
            }
        }
    }

    definition.base = parse_attributes(name, &attributes)?;
    Ok(definition)
}

fn parse_mode(name: &str, mode: &str, value: &Value) -> Result<ViewStyle, StylesheetError> {
    let style = format!("{}.{}", name, mode);
    match value {
        Value::Null => Ok(ViewStyle::default()),
        Value::Mapping(attributes) => parse_attributes(&style, attributes),
        _ => Err(StylesheetError::Parse {
            message: format!("'{}' must be a mapping of attributes", style),
        }),
    }
}

/// Parses a mapping of attribute names to values, in declaration order.
pub(crate) fn parse_attributes(
    style: &str,
    attributes: &Mapping,
) -> Result<ViewStyle, StylesheetError> {
    attributes
        .iter()
        .map(|(key, value)| {
            let attribute = key_name(key)?;
            let key = ViewAttributeKey::from_str(&attribute).map_err(|_| {
                StylesheetError::UnknownAttribute {
                    style: style.to_string(),
                    attribute: attribute.clone(),
                }
            })?;
            parse_attribute(key, value).map_err(|message| StylesheetError::InvalidValue {
                style: style.to_string(),
                attribute,
                message,
            })
        })
        .collect()
}

/// Converts one YAML value into the attribute for `key`.
pub(crate) fn parse_attribute(
    key: ViewAttributeKey,
    value: &Value,
) -> Result<ViewAttribute, String> {
    Ok(match key {
        ViewAttributeKey::Custom => {
            return Err("custom attributes cannot be declared in a stylesheet".to_string())
        }
        ViewAttributeKey::BackgroundColor => ViewAttribute::BackgroundColor(parse_color(value)?),
        ViewAttributeKey::CornerRadius => ViewAttribute::CornerRadius(de(value)?),
        ViewAttributeKey::Radius => ViewAttribute::Radius(parse_radius(value)?),
        ViewAttributeKey::VerticalHugging => {
            ViewAttribute::VerticalHugging(parse_priority(value)?)
        }
        ViewAttributeKey::VerticalCompression => {
            ViewAttribute::VerticalCompression(parse_priority(value)?)
        }
        ViewAttributeKey::HorizontalHugging => {
            ViewAttribute::HorizontalHugging(parse_priority(value)?)
        }
        ViewAttributeKey::HorizontalCompression => {
            ViewAttribute::HorizontalCompression(parse_priority(value)?)
        }
        ViewAttributeKey::Height => ViewAttribute::Height(de(value)?),
        ViewAttributeKey::Width => ViewAttribute::Width(de(value)?),
        ViewAttributeKey::Text => ViewAttribute::Text(de(value)?),
        ViewAttributeKey::TextColor => ViewAttribute::TextColor(parse_color(value)?),
        ViewAttributeKey::Case => ViewAttribute::Case(de(value)?),
        ViewAttributeKey::TextAlignment => ViewAttribute::TextAlignment(de(value)?),
        ViewAttributeKey::Image => ViewAttribute::Image(de(value)?),
        ViewAttributeKey::IsScrollEnabled => ViewAttribute::IsScrollEnabled(de(value)?),
        ViewAttributeKey::States => ViewAttribute::States(de(value)?),
        ViewAttributeKey::Target => ViewAttribute::Target(de(value)?),
        ViewAttributeKey::Axis => ViewAttribute::Axis(de(value)?),
        ViewAttributeKey::Distribution => ViewAttribute::Distribution(de(value)?),
        ViewAttributeKey::Alignment => ViewAttribute::Alignment(de(value)?),
        ViewAttributeKey::Spacing => ViewAttribute::Spacing(de(value)?),
        ViewAttributeKey::Margin => ViewAttribute::Margin(de(value)?),
        ViewAttributeKey::ArrangedSubviews => ViewAttribute::ArrangedSubviews(de(value)?),
    })
}

/// Parses a color: an ANSI color name, or a 256-color palette index.
pub(crate) fn parse_color(value: &Value) -> Result<Color, String> {
    match value {
        Value::String(name) => match name.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            other => Err(format!("unknown color '{}'", other)),
        },
        Value::Number(number) => number
            .as_u64()
            .and_then(|index| u8::try_from(index).ok())
            .map(Color::Color256)
            .ok_or_else(|| format!("color index {} is not in 0..=255", number)),
        _ => Err("expected a color name or palette index".to_string()),
    }
}

/// `rounded`, or a fixed radius.
fn parse_radius(value: &Value) -> Result<Radius, String> {
    match value {
        Value::String(name) if name == "rounded" => Ok(Radius::Rounded),
        Value::Number(_) => de(value).map(Radius::Fixed),
        _ => Err("expected 'rounded' or a number".to_string()),
    }
}

/// `low`, `high`, `required`, or a custom priority value.
fn parse_priority(value: &Value) -> Result<LayoutPriority, String> {
    match value {
        Value::String(name) => match name.as_str() {
            "low" => Ok(LayoutPriority::Low),
            "high" => Ok(LayoutPriority::High),
            "required" => Ok(LayoutPriority::Required),
            other => Err(format!("unknown layout priority '{}'", other)),
        },
        Value::Number(_) => de(value).map(LayoutPriority::Custom),
        _ => Err("expected a priority name or number".to_string()),
    }
}

fn de<T: DeserializeOwned>(value: &Value) -> Result<T, String> {
    serde_yaml::from_value(value.clone()).map_err(|e| e.to_string())
}

fn key_name(key: &Value) -> Result<String, StylesheetError> {
    match key {
        Value::String(name) => Ok(name.clone()),
        other => Err(StylesheetError::Parse {
            message: format!("expected a string key, found {:?}", other),
        }),
    }
}
