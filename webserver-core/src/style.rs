use std::{fmt, str::FromStr};

use crate::{Error, style_error};

/// Escape sequence that clears every active colour and attribute.
pub const RESET: &str = "\x1b[0m";

/// The closed set of colours and text attributes the help screen uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    Green,
    Yellow,
    Cyan,
    Blue,
    Bold,
    Italic,
    Underline,
}

impl StyleName {
    pub const ALL: [StyleName; 7] = [
        StyleName::Green,
        StyleName::Yellow,
        StyleName::Cyan,
        StyleName::Blue,
        StyleName::Bold,
        StyleName::Italic,
        StyleName::Underline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleName::Green => "green",
            StyleName::Yellow => "yellow",
            StyleName::Cyan => "cyan",
            StyleName::Blue => "blue",
            StyleName::Bold => "bold",
            StyleName::Italic => "italic",
            StyleName::Underline => "underline",
        }
    }

    /// SGR activation sequence for this style.
    pub fn activation(&self) -> &'static str {
        match self {
            StyleName::Green => "\x1b[32m",
            StyleName::Yellow => "\x1b[33m",
            StyleName::Blue => "\x1b[34m",
            StyleName::Cyan => "\x1b[36m",
            StyleName::Bold => "\x1b[1m",
            StyleName::Italic => "\x1b[3m",
            StyleName::Underline => "\x1b[4m",
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// The help screen only names styles through the enum. This is the single
// entry point for a textual name and rejects anything outside `ALL`.
impl FromStr for StyleName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .map_or_else(|| style_error!(s), Ok)
    }
}

/// Wraps text so that a consumer renders it in a given style.
///
/// Implementations never alter the wrapped text, they only surround it.
pub trait Styler {
    fn style(&self, text: &str, name: StyleName) -> String;
}

/// Styles text with ANSI escape sequences for a colour terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn style(&self, text: &str, name: StyleName) -> String {
        format!("{}{text}{RESET}", name.activation())
    }
}

/// Leaves text untouched, for pipes and files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn style(&self, text: &str, _name: StyleName) -> String {
        text.to_string()
    }
}

/// Marks spans with `<name>...</name>` tags instead of escape sequences.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaggedStyler;

impl Styler for TaggedStyler {
    fn style(&self, text: &str, name: StyleName) -> String {
        format!("<{name}>{text}</{name}>")
    }
}

/// Removes every SGR escape sequence (`ESC [ ... m`) from `text`.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // parameters run up to the final byte
            for p in chars.by_ref() {
                if p == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}
