use std::fmt;

/// Errors raised while assembling a deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// A deck must contain at least one slide
    Empty,
    /// Slide titles are required and may not be blank
    UntitledSlide { index: usize },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Empty => write!(f, "deck contains no slides"),
            DeckError::UntitledSlide { index } => {
                write!(f, "slide {} has no title", index + 1)
            }
        }
    }
}

impl std::error::Error for DeckError {}
