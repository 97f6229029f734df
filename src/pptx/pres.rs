/// Presentation part XML generation.
use crate::deck::DeckBuilder;
use crate::error::{DeckError, Result};
use std::fmt::Write as FmtWrite;

/// Generate `ppt/presentation.xml`.
///
/// Slide relationship IDs start at rId2; rId1 is the slide master. Slide IDs
/// start at 256 per the PresentationML minimum for `p:sldId`.
pub(crate) fn presentation_xml(builder: &DeckBuilder, slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

    xml.push_str("<p:sldMasterIdLst>");
    xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
    xml.push_str("</p:sldMasterIdLst>");

    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for index in 0..slide_count {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                256 + index,
                2 + index
            )
            .map_err(|e| DeckError::Xml(e.to_string()))?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        builder.slide_width(),
        builder.slide_height()
    )
    .map_err(|e| DeckError::Xml(e.to_string()))?;

    xml.push_str("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>");
    xml.push_str("</p:presentation>");

    Ok(xml)
}
