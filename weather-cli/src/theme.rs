use colored::{Color, ColoredString, Colorize};

/// Screen colors, handed to the presenter instead of living in global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub header: Option<Color>,
    pub text: Option<Color>,
    pub error: Option<Color>,
    pub banner: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Some(Color::BrightWhite),
            text: Some(Color::Cyan),
            error: Some(Color::Red),
            banner: Some(Color::Yellow),
        }
    }
}

impl Theme {
    pub fn plain() -> Self {
        Self { header: None, text: None, error: None, banner: None }
    }

    pub fn header(&self, s: &str) -> ColoredString {
        paint(s, self.header).bold()
    }

    pub fn text(&self, s: &str) -> ColoredString {
        paint(s, self.text)
    }

    pub fn error(&self, s: &str) -> ColoredString {
        paint(s, self.error)
    }

    pub fn banner(&self, s: &str) -> ColoredString {
        paint(s, self.banner)
    }
}

fn paint(s: &str, color: Option<Color>) -> ColoredString {
    match color {
        Some(c) => s.color(c),
        None => s.normal(),
    }
}
