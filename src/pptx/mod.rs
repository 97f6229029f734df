//! PresentationML (.pptx) generation.
//!
//! Slide and presentation parts are generated by direct string building;
//! master, layout, theme and property parts are static resources. The
//! package module assembles everything into a ZIP archive.

pub(crate) mod package;
pub(crate) mod pres;
pub(crate) mod slide;
pub(crate) mod template;
pub(crate) mod xml;
