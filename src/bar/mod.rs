//! Segment output model shared with the bar.
//!
//! The field names follow the i3bar block protocol so an [`Output`] can be
//! handed to the bar as JSON without further mapping.

use serde::{Deserialize, Serialize};

/// Markup language of an output's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    /// Plain text, displayed literally
    #[default]
    None,
    /// Pango markup, interpreted by the bar
    Pango,
}

/// Display payload for one bar segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Output {
    /// Text shown in the segment
    #[serde(rename = "full_text", default)]
    pub text: String,

    /// Shorter text used when the bar runs out of space
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short_text: String,

    /// How the bar should interpret `text`
    #[serde(default)]
    pub markup: Markup,

    /// Ask the bar to draw attention to this segment
    #[serde(default, skip_serializing_if = "is_false")]
    pub urgent: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Output {
    /// True when there is nothing to display, which hides the segment
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.short_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_empty() {
        let output = Output::default();
        assert!(output.is_empty());
        assert_eq!(output.markup, Markup::None);
        assert!(!output.urgent);
    }

    #[test]
    fn test_serialize_uses_block_field_names() {
        let output = Output {
            text: "<b>cpu</b>".to_string(),
            short_text: "Error".to_string(),
            markup: Markup::Pango,
            urgent: true,
        };

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "full_text": "<b>cpu</b>",
                "short_text": "Error",
                "markup": "pango",
                "urgent": true
            })
        );
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let output = Output {
            text: "plain".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value, json!({"full_text": "plain", "markup": "none"}));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let output: Output = serde_json::from_value(json!({"full_text": "mem"})).unwrap();
        assert_eq!(output.text, "mem");
        assert!(output.short_text.is_empty());
        assert_eq!(output.markup, Markup::None);
        assert!(!output.urgent);
    }
}
