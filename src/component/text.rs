use crossterm::style::{Color, Stylize, style};

use super::{Component, Renderable};
use crate::text::expand_tabs;

/// Column multiple that tab characters in [`Text`] expand to.
const TAB_WIDTH: usize = 4;

/// Literal text content, optionally coloured.
///
/// Tabs are expanded to spaces on render so the output measures the same as
/// what a terminal draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
    foreground: Option<Color>,
    background: Option<Color>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            foreground: None,
            background: None,
        }
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Renderable for Text {
    fn render(&self) -> String {
        let content = expand_tabs(&self.content, TAB_WIDTH);
        if self.foreground.is_none() && self.background.is_none() {
            return content;
        }

        // Style line by line so clipping a single line never leaks colour.
        content
            .split('\n')
            .map(|line| {
                let mut styled = style(line);
                if let Some(fg) = self.foreground {
                    styled = styled.with(fg);
                }
                if let Some(bg) = self.background {
                    styled = styled.on(bg);
                }
                styled.to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Text> for Component {
    fn from(text: Text) -> Self {
        Component::fixed(text)
    }
}

impl From<&str> for Component {
    fn from(content: &str) -> Self {
        Component::fixed(Text::new(content))
    }
}

impl From<String> for Component {
    fn from(content: String) -> Self {
        Component::fixed(Text::new(content))
    }
}
