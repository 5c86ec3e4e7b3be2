//! Renderable content blocks.
//!
//! Blocks are authored once in the deck document and never transformed at
//! runtime; renderers only lay them out.

use serde::{Deserialize, Serialize};

/// Emphasis applied to callouts and comparison columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

/// One titled panel inside a [`ContentBlock::Columns`] block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    #[serde(default)]
    pub tone: Option<Tone>,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

/// A single piece of slide content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Quote {
        text: String,
        #[serde(default)]
        attribution: Option<String>,
    },
    Bullets {
        items: Vec<String>,
    },
    /// Illustrative snippet; shown verbatim, never executed
    Code {
        #[serde(default)]
        language: Option<String>,
        lines: Vec<String>,
    },
    Table {
        headers: Vec<String>,
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },
    Callout {
        #[serde(default)]
        tone: Tone,
        text: String,
    },
    /// Static asset served by the host at `path`
    Image {
        path: String,
        alt: String,
    },
    Columns {
        columns: Vec<Column>,
    },
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        ContentBlock::Heading { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::Bullets {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Image paths referenced by this block and any nested column blocks.
    pub fn image_paths(&self) -> Vec<&str> {
        match self {
            ContentBlock::Image { path, .. } => vec![path.as_str()],
            ContentBlock::Columns { columns } => columns
                .iter()
                .flat_map(|c| c.blocks.iter())
                .flat_map(|b| b.image_paths())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Column {
    pub fn new(title: impl Into<String>, blocks: Vec<ContentBlock>) -> Self {
        Self {
            title: title.into(),
            tone: None,
            blocks,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_paths_include_nested_columns() {
        let block = ContentBlock::Columns {
            columns: vec![
                Column::new(
                    "Left",
                    vec![ContentBlock::Image {
                        path: "assets/a.png".into(),
                        alt: "a".into(),
                    }],
                ),
                Column::new("Right", vec![ContentBlock::paragraph("text")]),
            ],
        };
        assert_eq!(block.image_paths(), vec!["assets/a.png"]);
    }

    #[test]
    fn test_tone_defaults_to_info() {
        assert_eq!(Tone::default(), Tone::Info);
    }
}
