use std::fmt;

use crate::style::{StyleName, Styler};

/// Glyph that opens every example invocation.
pub const PROMPT_GLYPH: &str = "⯈";

/// Semantic role of a piece of help text. Each role has exactly one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Command,
    Argument,
    Option,
    Heading,
    Emphasis,
    Prompt,
}

impl TokenClass {
    pub fn style_name(&self) -> StyleName {
        match self {
            TokenClass::Command => StyleName::Green,
            TokenClass::Argument => StyleName::Cyan,
            TokenClass::Option => StyleName::Yellow,
            TokenClass::Heading => StyleName::Underline,
            TokenClass::Emphasis => StyleName::Italic,
            TokenClass::Prompt => StyleName::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    class: TokenClass,
}

impl Token {
    /// Applies the class-specific text transform.
    pub fn new(text: &str, class: TokenClass) -> Self {
        let text = match class {
            TokenClass::Option => format!("--{text}"),
            TokenClass::Prompt => PROMPT_GLYPH.to_string(),
            _ => text.to_string(),
        };
        Self { text, class }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn class(&self) -> TokenClass {
        self.class
    }

    pub fn render(&self, styler: &dyn Styler) -> StyledText {
        StyledText(styler.style(&self.text, self.class.style_name()))
    }
}

/// Token text wrapped in its class's style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText(String);

impl StyledText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StyledText> for String {
    fn from(value: StyledText) -> Self {
        value.0
    }
}

/// Label builders bound to one styler.
#[derive(Clone, Copy)]
pub struct Labels<'a> {
    styler: &'a dyn Styler,
}

impl<'a> Labels<'a> {
    pub fn new(styler: &'a dyn Styler) -> Self {
        Self { styler }
    }

    fn token(&self, text: &str, class: TokenClass) -> StyledText {
        Token::new(text, class).render(self.styler)
    }

    pub fn command(&self, name: &str) -> StyledText {
        self.token(name, TokenClass::Command)
    }

    pub fn argument(&self, name: &str) -> StyledText {
        self.token(name, TokenClass::Argument)
    }

    /// `option("port")` styles `--port`.
    pub fn option(&self, name: &str) -> StyledText {
        self.token(name, TokenClass::Option)
    }

    pub fn heading(&self, title: &str) -> StyledText {
        self.token(title, TokenClass::Heading)
    }

    pub fn emphasised(&self, text: &str) -> StyledText {
        self.token(text, TokenClass::Emphasis)
    }

    pub fn prompt(&self) -> StyledText {
        self.token(PROMPT_GLYPH, TokenClass::Prompt)
    }

    // The program name and the closing line carry a style but no token class.
    pub fn program(&self, name: &str) -> StyledText {
        StyledText(self.styler.style(name, StyleName::Bold))
    }

    pub fn footer(&self, text: &str) -> StyledText {
        StyledText(self.styler.style(text, StyleName::Italic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{AnsiStyler, PlainStyler, TaggedStyler, strip_ansi};

    #[test]
    fn test_command_is_green() {
        let labels = Labels::new(&AnsiStyler);
        assert_eq!(labels.command("local").as_str(), "\x1b[32mlocal\x1b[0m");
    }

    #[test]
    fn test_option_prefix() {
        let labels = Labels::new(&AnsiStyler);
        let port = labels.option("port");
        assert_eq!(port.as_str(), "\x1b[33m--port\x1b[0m");
        assert_eq!(strip_ansi(port.as_str()), "--port");
        assert_eq!(Labels::new(&PlainStyler).option("host=").as_str(), "--host=");
    }

    #[test]
    fn test_class_styles() {
        let labels = Labels::new(&TaggedStyler);
        assert_eq!(labels.argument("site").as_str(), "<cyan>site</cyan>");
        assert_eq!(
            labels.heading("Usage:").as_str(),
            "<underline>Usage:</underline>"
        );
        assert_eq!(
            labels.emphasised("rsync").as_str(),
            "<italic>rsync</italic>"
        );
        assert_eq!(labels.prompt().as_str(), "<blue>⯈</blue>");
        assert_eq!(
            labels.program("web-server").as_str(),
            "<bold>web-server</bold>"
        );
    }

    #[test]
    fn test_prompt_ignores_input() {
        let token = Token::new("anything", TokenClass::Prompt);
        assert_eq!(token.text(), PROMPT_GLYPH);
        assert_eq!(token.class(), TokenClass::Prompt);
    }

    #[test]
    fn test_builders_are_pure() {
        let labels = Labels::new(&AnsiStyler);
        assert_eq!(labels.command("sync"), labels.command("sync"));
        assert_eq!(labels.option("exit-on-sync"), labels.option("exit-on-sync"));
        assert_eq!(labels.prompt(), labels.prompt());
    }

    #[test]
    fn test_every_class_has_a_style() {
        let classes = [
            (TokenClass::Command, StyleName::Green),
            (TokenClass::Argument, StyleName::Cyan),
            (TokenClass::Option, StyleName::Yellow),
            (TokenClass::Heading, StyleName::Underline),
            (TokenClass::Emphasis, StyleName::Italic),
            (TokenClass::Prompt, StyleName::Blue),
        ];
        for (class, style) in classes {
            assert_eq!(class.style_name(), style);
        }
    }
}
