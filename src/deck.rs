//! Slide deck model and builder.
//!
//! A deck is an ordered table of [`SlideSpec`] records, fixed at authoring
//! time. [`DeckBuilder`] renders the table slide-by-slide into an OOXML
//! package and writes it to disk.

use crate::error::{DeckError, Result};
use crate::pptx;
use std::io::Write;
use std::path::Path;

/// Layout template for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Title slide: centered title plus a subtitle placeholder.
    Title,
    /// Title plus a body content placeholder.
    TitleAndBody,
    /// Title only; body text is rendered into a free-form text box.
    TitleOnly,
}

impl SlideLayout {
    /// 1-based index of the backing `slideLayoutN.xml` part.
    pub(crate) fn part_index(self) -> usize {
        match self {
            SlideLayout::Title => 1,
            SlideLayout::TitleAndBody => 2,
            SlideLayout::TitleOnly => 3,
        }
    }
}

/// One slide: fixed title and body text plus the layout that renders them.
///
/// `body` may contain embedded line breaks; each line becomes one paragraph
/// in the rendered placeholder or text box.
#[derive(Debug, Clone, Copy)]
pub struct SlideSpec {
    pub title: &'static str,
    pub body: &'static str,
    pub layout: SlideLayout,
}

/// Builds a .pptx deck from an ordered slide table.
#[derive(Debug)]
pub struct DeckBuilder {
    /// Slide width in EMUs (914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl DeckBuilder {
    /// Create a builder with the default slide size.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slide_width: 9_144_000,
            slide_height: 6_858_000,
        }
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Serialize the deck package to bytes.
    pub fn to_bytes(&self, slides: &[SlideSpec]) -> Result<Vec<u8>> {
        pptx::package::package_bytes(self, slides)
    }

    /// Build the deck and write it to `path`.
    ///
    /// The package is assembled fully in memory and persisted through a
    /// temporary file in the destination directory, so a failed run never
    /// leaves a partial or corrupt deck at `path`.
    pub fn build<P: AsRef<Path>>(&self, path: P, slides: &[SlideSpec]) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes(slides)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.persist(path).map_err(|e| DeckError::Io(e.error))?;

        Ok(())
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}
