//! Deck and slide records.
//!
//! A [`Deck`] is validated once when it is built and is immutable afterwards:
//! there is no API to insert, remove or reorder slides.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::content::ContentBlock;
use crate::error::DeckError;

/// Fixed chrome shown around every slide.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckMeta {
    /// Header banner title
    pub title: String,
    /// Line shown under the banner title
    pub tagline: Option<String>,
    /// Footer text (bottom right)
    pub footer: Option<String>,
}

impl DeckMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// One screen of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            content: Vec::new(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn block(mut self, block: ContentBlock) -> Self {
        self.content.push(block);
        self
    }
}

/// Serialized shape of a deck, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckDocument {
    #[serde(default)]
    pub meta: DeckMeta,
    pub slides: Vec<Slide>,
}

/// Non-empty, ordered sequence of slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DeckDocument", into = "DeckDocument")]
pub struct Deck {
    meta: DeckMeta,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(meta: DeckMeta, slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        if let Some(index) = slides.iter().position(|s| s.title.trim().is_empty()) {
            return Err(DeckError::UntitledSlide { index });
        }
        Ok(Self { meta, slides })
    }

    pub fn meta(&self) -> &DeckMeta {
        &self.meta
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> NonZeroUsize {
        // Construction rejects empty decks
        NonZeroUsize::new(self.slides.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Titles in deck order, for outlines.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.slides.iter().map(|s| s.title.as_str())
    }
}

impl TryFrom<DeckDocument> for Deck {
    type Error = DeckError;

    fn try_from(doc: DeckDocument) -> Result<Self, Self::Error> {
        Deck::new(doc.meta, doc.slides)
    }
}

impl From<Deck> for DeckDocument {
    fn from(deck: Deck) -> Self {
        DeckDocument {
            meta: deck.meta,
            slides: deck.slides,
        }
    }
}
