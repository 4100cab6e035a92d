//! Constructors for segment outputs.
//!
//! This module provides:
//! - One-line constructors for empty, error, text and raw Pango outputs
//! - The [`text!`](crate::text) macro for formatted text
//! - Handlebars-backed render functions that compile once and render many
//!
//! # Example
//!
//! ```ignore
//! let clock = outputs::pango_template("<b>{{time}}</b> {{zone}}");
//!
//! // Every refresh
//! let output = clock.render(&json!({"time": "12:30", "zone": "UTC"}));
//! ```

mod template;

use std::fmt;

use crate::bar::{Markup, Output};

pub use template::{
    pango_template, text_template, try_pango_template, try_text_template, TemplateFn,
    TemplateOptions,
};

/// Build an empty output, which hides the segment
pub fn empty() -> Output {
    Output::default()
}

/// Build an urgent output describing an error
pub fn error(e: impl fmt::Display) -> Output {
    Output {
        text: e.to_string(),
        short_text: "Error".to_string(),
        urgent: true,
        ..Default::default()
    }
}

/// Build a plain text output. The text is used as is.
pub fn text(text: impl Into<String>) -> Output {
    Output {
        text: text.into(),
        ..Default::default()
    }
}

/// Build an output from existing Pango markup.
///
/// No escaping is performed; the caller guarantees `markup` is well formed.
pub fn pango_unsafe(markup: impl Into<String>) -> Output {
    Output {
        text: markup.into(),
        markup: Markup::Pango,
        ..Default::default()
    }
}

/// Build a plain text output, optionally formatting it.
///
/// With a single argument the text is taken literally, so braces are not
/// treated as format placeholders. With more arguments it behaves like
/// [`format!`].
///
/// ```ignore
/// assert_eq!(text!("{literal} 100%").text, "{literal} 100%");
/// assert_eq!(text!("count: {}", 5).text, "count: 5");
/// ```
#[macro_export]
macro_rules! text {
    ($text:expr $(,)?) => {
        $crate::outputs::text($text)
    };
    ($fmt:literal, $($arg:tt)+) => {
        $crate::outputs::text(::std::format!($fmt, $($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let output = empty();
        assert_eq!(output.text, "");
        assert_eq!(output.short_text, "");
        assert_eq!(output.markup, Markup::None);
        assert!(!output.urgent);
    }

    #[test]
    fn test_error() {
        let output = error("boom");
        assert_eq!(output.text, "boom");
        assert_eq!(output.short_text, "Error");
        assert_eq!(output.markup, Markup::None);
        assert!(output.urgent);
    }

    #[test]
    fn test_error_from_std_error() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no battery");
        let output = error(&err);
        assert_eq!(output.text, "no battery");
        assert!(output.urgent);
    }

    #[test]
    fn test_text_literal() {
        let output = text("50% {done}");
        assert_eq!(output.text, "50% {done}");
        assert!(output.short_text.is_empty());
        assert_eq!(output.markup, Markup::None);
        assert!(!output.urgent);
    }

    #[test]
    fn test_text_macro_literal() {
        assert_eq!(crate::text!("hello").text, "hello");
        assert_eq!(crate::text!("100% {not a placeholder}").text, "100% {not a placeholder}");
    }

    #[test]
    fn test_text_macro_formats_arguments() {
        assert_eq!(crate::text!("count: {}", 5).text, "count: 5");
        assert_eq!(crate::text!("{:>3}%", 7).text, "  7%");

        let name = "eth0";
        assert_eq!(crate::text!("{} {}", name, "up").text, "eth0 up");
        assert_eq!(crate::text!("{name} up").text, "{name} up");
    }

    #[test]
    fn test_pango_unsafe() {
        let output = pango_unsafe("<b>x</b>");
        assert_eq!(output.text, "<b>x</b>");
        assert_eq!(output.markup, Markup::Pango);
        assert!(!output.urgent);
    }
}
