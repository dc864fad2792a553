//! Display styles and the theme-aware style map
//!
//! Maps token categories to terminal display attributes. The map is a pure
//! lookup: it holds no state and may be called from any number of threads.

use crate::tokens::TokenType;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Text display attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Active color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a theme from its name (CLI flag, config value)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Resolve the display style for a token category under a theme
///
/// Total over both themes: every category, including `Default`, has an
/// entry. Switching theme never changes span boundaries, only the styles
/// resolved here.
pub fn style_for(token: TokenType, theme: Theme) -> Style {
    match theme {
        Theme::Dark => match token {
            TokenType::Keyword => Style::fg(Color::BrightBlue).with_bold(),
            TokenType::Builtin => Style::fg(Color::Cyan),
            TokenType::String => Style::fg(Color::Green),
            TokenType::Number => Style::fg(Color::BrightGreen),
            TokenType::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenType::Decorator => Style::fg(Color::BrightYellow),
            TokenType::Preprocessor => Style::fg(Color::BrightMagenta),
            TokenType::Operator => Style::fg(Color::BrightWhite),
            TokenType::Function => Style::fg(Color::Yellow),
            TokenType::ClassName => Style::fg(Color::BrightCyan),
            TokenType::Tag => Style::fg(Color::BrightBlue),
            TokenType::Attribute => Style::fg(Color::BrightCyan),
            TokenType::Property => Style::fg(Color::BrightCyan),
            TokenType::Identifier => Style::default(),
            TokenType::Default => Style::default(),
        },
        Theme::Light => match token {
            TokenType::Keyword => Style::fg(Color::Blue).with_bold(),
            TokenType::Builtin => Style::fg(Color::Cyan),
            TokenType::String => Style::fg(Color::Green),
            TokenType::Number => Style::fg(Color::Magenta),
            TokenType::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenType::Decorator => Style::fg(Color::Yellow),
            TokenType::Preprocessor => Style::fg(Color::Magenta),
            TokenType::Operator => Style::fg(Color::Black),
            TokenType::Function => Style::fg(Color::Yellow),
            TokenType::ClassName => Style::fg(Color::Cyan).with_bold(),
            TokenType::Tag => Style::fg(Color::Blue),
            TokenType::Attribute => Style::fg(Color::Cyan),
            TokenType::Property => Style::fg(Color::Cyan),
            TokenType::Identifier => Style::default(),
            TokenType::Default => Style::default(),
        },
    }
}
