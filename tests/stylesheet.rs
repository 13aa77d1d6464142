//! Loading stylesheets from YAML and applying the resolved styles.

use std::fs;

use composer::widget::{Button, Label, OutputMode};
use composer::{
    set_color_mode_detector, Actor, Attributed, ColorMode, ControlEvent, ControlStateKind, Install,
    Radius, Stylesheet, StylesheetError, TextAlignment, ViewAttributeKey,
};
use console::Color;
use serial_test::serial;
use tempfile::TempDir;

const APP: &str = r#"
surface:
  background_color: 236
  corner_radius: 1
  light:
    background_color: white

heading:
  extends: surface
  text_color: cyan
  case: upper
  text_alignment: center
  width: 12
  dark:
    text_color: yellow

primary_button:
  extends: [heading, surface]
  radius: rounded
  height: 4
  target:
    action: submit
  states:
    - state: disabled
      title: Wait
"#;

#[test]
fn test_load_resolve_and_install() {
    let sheet = Stylesheet::from_yaml(APP).unwrap();
    sheet.validate().unwrap();

    let heading = sheet.get("heading").unwrap().resolve_for(ColorMode::Dark);
    let mut label = Label::new();
    heading.install(&mut label).unwrap();
    label.text.text = "menu".to_string();

    assert_eq!(label.view.background_color, Some(Color::Color256(236)));
    assert_eq!(label.text.text_color, Some(Color::Yellow));
    assert_eq!(label.text.alignment, TextAlignment::Center);
    assert_eq!(label.render(OutputMode::Text), "    MENU    ");
}

#[test]
fn test_light_override_inherited_through_extends() {
    let sheet = Stylesheet::from_yaml(APP).unwrap();
    let heading = sheet.get("heading").unwrap();

    assert_eq!(
        heading
            .resolve_for(ColorMode::Light)
            .value::<Color>(ViewAttributeKey::BackgroundColor),
        Some(&Color::White)
    );
    assert_eq!(
        heading
            .resolve_for(ColorMode::Dark)
            .value::<Color>(ViewAttributeKey::BackgroundColor),
        Some(&Color::Color256(236))
    );
}

#[test]
fn test_control_attributes_from_yaml() {
    let sheet = Stylesheet::from_yaml(APP).unwrap();
    let style = sheet.get("primary_button").unwrap().resolve_for(ColorMode::Light);
    assert_eq!(
        style.value::<Radius>(ViewAttributeKey::Radius),
        Some(&Radius::Rounded)
    );

    let mut button = Button::new();
    style.install(&mut button).unwrap();

    assert_eq!(button.targets(), &[Actor::new("submit", ControlEvent::TouchUpInside)]);
    assert_eq!(button.title(ControlStateKind::Disabled), "Wait");
    assert_eq!(button.view.corner_radius, 2.0);
}

#[test]
#[serial]
fn test_resolve_uses_color_mode_detector() {
    let sheet = Stylesheet::from_yaml(APP).unwrap();
    let heading = sheet.get("heading").unwrap();

    set_color_mode_detector(|| ColorMode::Dark);
    assert_eq!(heading.resolve(), heading.resolve_for(ColorMode::Dark));

    set_color_mode_detector(|| ColorMode::Light);
    assert_eq!(heading.resolve(), heading.resolve_for(ColorMode::Light));
}

#[test]
fn test_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.yaml");
    fs::write(&path, APP).unwrap();

    let sheet = Stylesheet::from_path(&path).unwrap();
    assert_eq!(
        sheet.names().collect::<Vec<_>>(),
        vec!["surface", "heading", "primary_button"]
    );
}

#[test]
fn test_from_path_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.yaml");

    match Stylesheet::from_path(&path) {
        Err(StylesheetError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_invalid_documents() {
    assert!(matches!(
        Stylesheet::from_yaml("title: [unclosed"),
        Err(StylesheetError::Parse { .. })
    ));
    assert_eq!(
        Stylesheet::from_yaml("title:\n  font_size: 3\n").unwrap_err(),
        StylesheetError::UnknownAttribute {
            style: "title".to_string(),
            attribute: "font_size".to_string(),
        }
    );
    assert!(matches!(
        Stylesheet::from_yaml("title:\n  dark:\n    text_color: mauve\n"),
        Err(StylesheetError::InvalidValue { style, attribute, .. })
            if style == "title.dark" && attribute == "text_color"
    ));
    assert!(matches!(
        Stylesheet::from_yaml("title:\n  width: wide\n"),
        Err(StylesheetError::InvalidValue { .. })
    ));
}

#[test]
fn test_self_extension_is_a_cycle() {
    let sheet = Stylesheet::from_yaml("loop:\n  extends: loop\n  spacing: 1\n").unwrap();
    assert_eq!(
        sheet.get("loop"),
        Err(StylesheetError::CycleDetected {
            path: vec!["loop".to_string(), "loop".to_string()],
        })
    );
}

#[test]
fn test_empty_document() {
    let sheet = Stylesheet::from_yaml("").unwrap();
    assert!(sheet.is_empty());
    assert!(sheet.validate().is_ok());
}
