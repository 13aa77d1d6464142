//! Nested custom styles of user-defined attribute kinds.

use std::any::Any;

use composer::widget::Label;
use composer::{
    attributed, ApplyError, Attribute, Attributed, CustomStyle, Install, Styleable, ViewAttribute,
    ViewAttributeKey, ViewStyle,
};
use console::Color;
use strum::EnumDiscriminants;

/// Attributes of a badge drawn next to a label.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(BadgeKey), derive(Hash))]
enum BadgeAttribute {
    Custom(CustomStyle),
    Symbol(String),
    Tint(Color),
}

impl Attribute for BadgeAttribute {
    type Stripped = BadgeKey;

    fn stripped(&self) -> BadgeKey {
        self.into()
    }

    fn payload(&self) -> &dyn Any {
        match self {
            BadgeAttribute::Custom(style) => style,
            BadgeAttribute::Symbol(symbol) => symbol,
            BadgeAttribute::Tint(color) => color,
        }
    }

    fn custom_key() -> Option<BadgeKey> {
        Some(BadgeKey::Custom)
    }

    fn from_custom(style: CustomStyle) -> Option<Self> {
        Some(BadgeAttribute::Custom(style))
    }
}

attributed! {
    struct BadgeStyle(BadgeAttribute);
}

impl Install for BadgeStyle {
    fn install(&self, target: &mut dyn Styleable) -> Result<(), ApplyError> {
        if let Some(text_holder) = target.as_text_holder() {
            for attribute in self {
                match attribute {
                    BadgeAttribute::Symbol(symbol) => text_holder.set_text(symbol),
                    BadgeAttribute::Tint(color) => text_holder.set_text_color(*color),
                    BadgeAttribute::Custom(_) => {}
                }
            }
        }
        match self.value::<CustomStyle>(BadgeKey::Custom) {
            Some(custom) => custom.install(target),
            None => Ok(()),
        }
    }
}

/// A third level, nested inside badges. Has no custom slot of its own.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(GlowKey), derive(Hash))]
enum GlowAttribute {
    Radius(f32),
    Pulse(bool),
}

impl Attribute for GlowAttribute {
    type Stripped = GlowKey;

    fn stripped(&self) -> GlowKey {
        self.into()
    }

    fn payload(&self) -> &dyn Any {
        match self {
            GlowAttribute::Radius(radius) => radius,
            GlowAttribute::Pulse(pulse) => pulse,
        }
    }
}

attributed! {
    struct GlowStyle(GlowAttribute);
}

impl Install for GlowStyle {
    fn install(&self, target: &mut dyn Styleable) -> Result<(), ApplyError> {
        if let (Some(view), Some(radius)) = (target.as_view(), self.value::<f32>(GlowKey::Radius))
        {
            view.set_corner_radius(*radius);
        }
        Ok(())
    }
}

fn view_with_badge(badge: Vec<BadgeAttribute>, rest: Vec<ViewAttribute>) -> ViewStyle {
    let mut attributes = vec![ViewAttribute::Custom(CustomStyle::new(BadgeStyle::from(badge)))];
    attributes.extend(rest);
    ViewStyle::from(attributes)
}

fn nested_badge(style: &ViewStyle) -> &BadgeStyle {
    style
        .value::<CustomStyle>(ViewAttributeKey::Custom)
        .and_then(CustomStyle::downcast_ref::<BadgeStyle>)
        .expect("badge style")
}

#[test]
fn test_plain_merge_keeps_master_custom_wholesale() {
    let master = view_with_badge(vec![BadgeAttribute::Symbol("*".into())], vec![]);
    let slave = view_with_badge(vec![BadgeAttribute::Tint(Color::Red)], vec![]);

    let merged = master.merge_slave(&slave);
    assert_eq!(
        nested_badge(&merged).attributes(),
        &[BadgeAttribute::Symbol("*".into())]
    );
}

#[test]
fn test_recursive_merge_merges_nested_styles() {
    let master = view_with_badge(
        vec![BadgeAttribute::Symbol("*".into())],
        vec![ViewAttribute::TextColor(Color::White)],
    );
    let slave = view_with_badge(
        vec![
            BadgeAttribute::Symbol("+".into()),
            BadgeAttribute::Tint(Color::Red),
        ],
        vec![
            ViewAttribute::TextColor(Color::Black),
            ViewAttribute::Spacing(1.0),
        ],
    );

    let merged = master.recursive_merge(&slave);

    assert_eq!(
        merged.stripped(),
        vec![
            ViewAttributeKey::Custom,
            ViewAttributeKey::TextColor,
            ViewAttributeKey::Spacing,
        ]
    );
    assert_eq!(
        merged.value::<Color>(ViewAttributeKey::TextColor),
        Some(&Color::White)
    );
    assert_eq!(
        nested_badge(&merged).attributes(),
        &[
            BadgeAttribute::Symbol("*".into()),
            BadgeAttribute::Tint(Color::Red),
        ]
    );
}

#[test]
fn test_recursive_merge_with_one_sided_custom_is_plain_merge() {
    let master = view_with_badge(vec![BadgeAttribute::Symbol("*".into())], vec![]);
    let slave = ViewStyle::from(vec![ViewAttribute::Spacing(2.0)]);

    assert_eq!(master.recursive_merge(&slave), master.merge_slave(&slave));
    assert_eq!(slave.recursive_merge(&master), slave.merge_slave(&master));
}

#[test]
fn test_recursive_merge_through_three_levels() {
    let glow = |attributes: Vec<GlowAttribute>| {
        BadgeAttribute::Custom(CustomStyle::new(GlowStyle::from(attributes)))
    };
    let master = view_with_badge(vec![glow(vec![GlowAttribute::Radius(2.0)])], vec![]);
    let slave = view_with_badge(
        vec![
            glow(vec![GlowAttribute::Radius(8.0), GlowAttribute::Pulse(true)]),
            BadgeAttribute::Symbol("!".into()),
        ],
        vec![],
    );

    let merged = master.recursive_merge(&slave);
    let badge = nested_badge(&merged);
    assert_eq!(badge.value::<String>(BadgeKey::Symbol), Some(&"!".to_string()));

    let glow = badge
        .value::<CustomStyle>(BadgeKey::Custom)
        .and_then(CustomStyle::downcast_ref::<GlowStyle>)
        .expect("glow style");
    assert_eq!(
        glow.attributes(),
        &[GlowAttribute::Radius(2.0), GlowAttribute::Pulse(true)]
    );
}

#[test]
fn test_recursive_merge_of_different_kinds_keeps_master() {
    let master = view_with_badge(vec![BadgeAttribute::Symbol("*".into())], vec![]);
    let slave = ViewStyle::from(vec![ViewAttribute::Custom(CustomStyle::new(
        GlowStyle::from(GlowAttribute::Pulse(true)),
    ))]);

    let merged = master.recursive_merge(&slave);
    assert_eq!(merged, master.merge_slave(&slave));
    assert_eq!(nested_badge(&merged).len(), 1);
}

#[test]
fn test_install_applies_nested_styles_after_outer() {
    let glow = BadgeAttribute::Custom(CustomStyle::new(GlowStyle::from(
        GlowAttribute::Radius(3.0),
    )));
    let style = view_with_badge(
        vec![BadgeAttribute::Symbol("NEW".into()), glow],
        vec![
            ViewAttribute::Text("old".into()),
            ViewAttribute::CornerRadius(1.0),
        ],
    );

    let mut label = Label::new();
    style.install(&mut label).unwrap();

    assert_eq!(label.text.text, "NEW");
    assert_eq!(label.view.corner_radius, 3.0);
}

#[test]
fn test_custom_style_reports_kind() {
    let custom = CustomStyle::new(BadgeStyle::from(BadgeAttribute::Tint(Color::Cyan)));
    assert!(custom.kind_name().contains("BadgeStyle"));
    assert!(custom.downcast_ref::<GlowStyle>().is_none());
}

/// Annotations carried alongside a style but never installed.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(NoteKey), derive(Hash))]
enum NoteAttribute {
    Author(String),
    Revision(u32),
}

impl Attribute for NoteAttribute {
    type Stripped = NoteKey;

    fn stripped(&self) -> NoteKey {
        self.into()
    }

    fn payload(&self) -> &dyn Any {
        match self {
            NoteAttribute::Author(author) => author,
            NoteAttribute::Revision(revision) => revision,
        }
    }
}

attributed! {
    struct NoteStyle(NoteAttribute);
}

fn view_with_notes(notes: Vec<NoteAttribute>) -> ViewStyle {
    ViewStyle::from(vec![
        ViewAttribute::Custom(CustomStyle::passive(NoteStyle::from(notes))),
        ViewAttribute::Spacing(1.0),
    ])
}

#[test]
fn test_passive_custom_style_merges_recursively() {
    let master = view_with_notes(vec![NoteAttribute::Revision(2)]);
    let slave = view_with_notes(vec![
        NoteAttribute::Author("ops".into()),
        NoteAttribute::Revision(1),
    ]);

    let merged = master.recursive_merge(&slave);
    let custom = merged
        .value::<CustomStyle>(ViewAttributeKey::Custom)
        .expect("custom style");
    assert!(!custom.is_installable());
    assert_eq!(
        custom.downcast_ref::<NoteStyle>().map(NoteStyle::attributes),
        Some(&[NoteAttribute::Revision(2), NoteAttribute::Author("ops".into())][..])
    );
}

#[test]
fn test_passive_custom_style_is_skipped_on_install() {
    let mut stack = composer::widget::StackView::new();
    view_with_notes(vec![NoteAttribute::Revision(3)])
        .install(&mut stack)
        .unwrap();
    assert_eq!(stack.spacing, 1.0);
}

#[test]
fn test_merged_custom_style_stays_installable() {
    let master = CustomStyle::new(GlowStyle::from(GlowAttribute::Radius(1.0)));
    let slave = CustomStyle::new(GlowStyle::from(GlowAttribute::Pulse(true)));
    let merged = master.merge_slave(&slave);
    assert!(merged.is_installable());
    assert_eq!(merged.len(), 2);
}
