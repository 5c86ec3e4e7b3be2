//! Deck loading.
//!
//! The built-in deck is a YAML document compiled into the binary. Native
//! builds can replace it with a file given on the command line. Either way the
//! deck is parsed and validated once at startup.

#[cfg(feature = "native")]
use std::path::Path;

use acedeck_core::{Deck, DeckError, deck::DeckDocument};

/// The ACE paper walkthrough shipped with the application.
const BUILTIN_DECK: &str = include_str!("../../decks/ace.yaml");

/// Relative path of the framework figure the built-in deck references.
pub const FRAMEWORK_IMAGE: &str = "assets/ace_framework.png";

#[derive(Debug)]
pub enum DeckLoadError {
    Io(String),
    Parse(String),
    Invalid(DeckError),
}

impl std::fmt::Display for DeckLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckLoadError::Io(msg) => write!(f, "IO error: {}", msg),
            DeckLoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
            DeckLoadError::Invalid(err) => write!(f, "Invalid deck: {}", err),
        }
    }
}

impl std::error::Error for DeckLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckLoadError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DeckError> for DeckLoadError {
    fn from(err: DeckError) -> Self {
        DeckLoadError::Invalid(err)
    }
}

/// Parse and validate a YAML deck document.
pub fn parse_deck(yaml: &str) -> Result<Deck, DeckLoadError> {
    let doc: DeckDocument =
        serde_saphyr::from_str(yaml).map_err(|e| DeckLoadError::Parse(e.to_string()))?;
    Ok(Deck::try_from(doc)?)
}

pub fn builtin_deck() -> Result<Deck, DeckLoadError> {
    parse_deck(BUILTIN_DECK)
}

#[cfg(feature = "native")]
pub fn load_deck(path: &Path) -> Result<Deck, DeckLoadError> {
    let yaml = std::fs::read_to_string(path)
        .map_err(|e| DeckLoadError::Io(format!("{}: {}", path.display(), e)))?;
    let deck = parse_deck(&yaml)?;
    tracing::info!(path = %path.display(), slides = deck.len().get(), "Loaded deck");
    Ok(deck)
}
