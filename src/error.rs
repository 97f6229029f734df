/// Error types for deck generation.
use thiserror::Error;

/// Result type for deck generation.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Error types for deck generation.
#[derive(Error, Debug)]
pub enum DeckError {
    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A slide could not be rendered
    #[error("slide {index} ({title:?}): {source}")]
    Slide {
        /// 1-based position of the slide in the deck
        index: usize,
        title: String,
        source: Box<DeckError>,
    },
}

impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::Zip(err.to_string())
    }
}

impl DeckError {
    /// Wrap this error with the slide it occurred on.
    pub(crate) fn for_slide(self, index: usize, title: &str) -> Self {
        DeckError::Slide {
            index,
            title: title.to_string(),
            source: Box::new(self),
        }
    }
}
