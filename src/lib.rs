//! domdeck - builds the Gestão DOM project slide decks
//!
//! This crate generates the two static "Gestão DOM" presentations as
//! PresentationML (.pptx) packages. All slide content is embedded as
//! declarative tables; a single rendering loop turns a table into a
//! complete, PowerPoint-openable file.
//!
//! # Example
//!
//! ```no_run
//! use domdeck::{content, DeckBuilder};
//!
//! # fn main() -> domdeck::Result<()> {
//! let builder = DeckBuilder::new();
//! builder.build(content::PROJETO_PATH, content::PROJETO)?;
//! # Ok(())
//! # }
//! ```
//!
//! The two binaries (`cria_apresentacao` and `cria_apresentacao_estrategica`)
//! each build one deck into the working directory and take no arguments.

pub mod content;
pub mod deck;
pub mod error;
pub mod pptx;
pub mod units;

pub use deck::{DeckBuilder, SlideLayout, SlideSpec};
pub use error::{DeckError, Result};
