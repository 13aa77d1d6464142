//! Text-displaying widgets: labels and buttons.

use console::{Color, Style};

use super::util::fit_to_width;
use super::view::View;
use crate::apply::{Control, ControlStateHolder, Styleable, TextHolder};
use crate::view::{Actor, ControlEvent, ControlState, ControlStateKind, TextAlignment, TextCase};

/// How rendered text is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Styled when the terminal supports colors.
    #[default]
    Auto,
    /// Always styled with ANSI codes.
    Term,
    /// Plain text, no ANSI codes.
    Text,
}

/// Text presentation shared by labels and buttons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextProps {
    pub text: String,
    pub text_color: Option<Color>,
    pub case: TextCase,
    pub alignment: TextAlignment,
}

impl TextProps {
    fn render(&self, view: &View, mode: OutputMode) -> String {
        let text = self.case.apply(&self.text);
        let text = match view.width {
            Some(width) => fit_to_width(&text, columns(width), self.alignment),
            None => text,
        };

        let mut style = Style::new();
        if let Some(color) = self.text_color {
            style = style.fg(color);
        }
        if let Some(color) = view.background_color {
            style = style.bg(color);
        }

        match mode {
            OutputMode::Text => text,
            OutputMode::Term => style.force_styling(true).apply_to(text).to_string(),
            OutputMode::Auto => style.apply_to(text).to_string(),
        }
    }
}

impl TextHolder for TextProps {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = Some(color);
    }

    fn set_case(&mut self, case: TextCase) {
        self.case = case;
    }

    fn set_text_alignment(&mut self, alignment: TextAlignment) {
        self.alignment = alignment;
    }
}

fn columns(width: f32) -> usize {
    width.max(0.0).round() as usize
}

/// A single line of styled text.
///
/// # Example
///
/// ```rust
/// use composer::widget::{Label, OutputMode};
/// use composer::{view_style, Install, TextAlignment, TextCase};
///
/// let mut label = Label::new();
/// view_style![
///     Text("ready".to_string()),
///     Case(TextCase::Upper),
///     TextAlignment(TextAlignment::Center),
///     Width(9.0),
/// ]
/// .install(&mut label)
/// .unwrap();
///
/// assert_eq!(label.render(OutputMode::Text), "  READY  ");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    pub view: View,
    pub text: TextProps,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the text with its case applied, fitted to the view width when
    /// one is set, colored with the text and background colors.
    pub fn render(&self, mode: OutputMode) -> String {
        self.text.render(&self.view, mode)
    }
}

impl Styleable for Label {
    fn as_view(&mut self) -> Option<&mut View> {
        Some(&mut self.view)
    }

    fn as_text_holder(&mut self) -> Option<&mut dyn TextHolder> {
        Some(&mut self.text)
    }
}

/// A tappable control with a title, actions and per-state titles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Button {
    pub view: View,
    pub text: TextProps,
    targets: Vec<Actor>,
    states: Vec<ControlState>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targets(&self) -> &[Actor] {
        &self.targets
    }

    pub fn states(&self) -> &[ControlState] {
        &self.states
    }

    /// Title shown in `state`, falling back to the plain text.
    pub fn title(&self, state: ControlStateKind) -> &str {
        self.states
            .iter()
            .find(|s| s.state == state)
            .and_then(|s| s.title.as_deref())
            .unwrap_or(&self.text.text)
    }

    /// Names of the actions registered for `event`, in registration order.
    pub fn actions_for(&self, event: ControlEvent) -> Vec<&str> {
        self.targets
            .iter()
            .filter(|actor| actor.event == event)
            .map(|actor| actor.action.as_str())
            .collect()
    }

    pub fn render(&self, mode: OutputMode) -> String {
        self.text.render(&self.view, mode)
    }
}

impl Control for Button {
    fn add_target(&mut self, actor: &Actor) {
        if !self.targets.contains(actor) {
            self.targets.push(actor.clone());
        }
    }
}

impl ControlStateHolder for Button {
    fn set_control_states(&mut self, states: &[ControlState]) {
        self.states = states.to_vec();
    }
}

impl Styleable for Button {
    fn as_view(&mut self) -> Option<&mut View> {
        Some(&mut self.view)
    }

    fn as_text_holder(&mut self) -> Option<&mut dyn TextHolder> {
        Some(&mut self.text)
    }

    fn as_control(&mut self) -> Option<&mut dyn Control> {
        Some(self)
    }

    fn as_control_state_holder(&mut self) -> Option<&mut dyn ControlStateHolder> {
        Some(self)
    }
}
