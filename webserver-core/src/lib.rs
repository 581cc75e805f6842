/*!
 * # libwebserver - Help Screen for the Indie Web Server CLI
 *
 * Builds the colourised `web-server help` screen and writes it out:
 * - Semantic labels (commands, arguments, options, headings, emphasis, prompts)
 * - One fixed style per label class
 * - Tab-aligned label/description columns
 * - Swappable styling (ANSI, plain text, tagged spans)
 *
 * ## Core Modules
 *
 * ### Styling (`style`)
 * - `StyleName`: The closed set of colours and attributes
 * - `Styler`: Wraps text in a style, with `AnsiStyler`, `PlainStyler`
 *   and `TaggedStyler` variants
 *
 * ### Labels (`label`)
 * - `TokenClass`: Semantic role of a piece of text
 * - `Labels`: `command`, `argument`, `option`, `heading`, `emphasised`, `prompt`
 *
 * ### Assembly (`usage`)
 * - `assemble()`: Composes the sections into one `UsageDocument`
 * - `VersionProvider`: Source of the version banner
 *
 * ### Output (`render`)
 * - `Renderer`: Writes the document, then hands over to an `Exit`
 *
 * ## Example Usage
 *
 * ```rust
 * # use libwebserver::{Labels, PlainStyler, assemble};
 * let labels = Labels::new(&PlainStyler);
 * let document = assemble(&labels, &"Web Server v1.2.3");
 * assert!(document.as_str().contains("Usage:"));
 * ```
 */

pub mod error;
pub mod label;
pub mod render;
pub mod style;
pub mod usage;

use std::io::Write;

// Make common types available at the crate root
pub use error::*;
pub use label::*;
pub use render::*;
pub use style::*;
pub use usage::*;

/// Assembles the help screen with `styler` and renders it to `out`.
pub fn help<W: Write, E: Exit>(
    styler: &dyn Styler,
    version: &dyn VersionProvider,
    out: W,
    exit: E,
) -> Result<E::Outcome, Error> {
    let labels = Labels::new(styler);
    let document = assemble(&labels, version);
    Renderer::new(out, exit).render(&document)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordExit;

    impl Exit for RecordExit {
        type Outcome = i32;

        fn exit(self, status: i32) -> i32 {
            status
        }
    }

    #[test]
    fn test_help_ansi() {
        let mut out = Vec::new();
        let status = help(&AnsiStyler, &"Web Server v1.2.3", &mut out, RecordExit).unwrap();
        assert_eq!(status, 0);

        let written = String::from_utf8(out).unwrap();
        assert!(written.ends_with("\x1b[0m\n"));
        assert!(written.contains("\x1b[32mlocal\x1b[0m"));
        assert!(written.contains("\x1b[33m--port\x1b[0m"));
        assert!(written.contains("\x1b[4mExamples:\x1b[0m"));
    }

    #[test]
    fn test_help_tagged() {
        let mut out = Vec::new();
        help(&TaggedStyler, &"Web Server v1.2.3", &mut out, RecordExit).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(!written.contains('\x1b'));
        assert!(written.contains("<green>status</green>"));
        assert!(written.contains("<blue>⯈</blue> web-server"));
    }
}
