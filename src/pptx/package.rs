//! OPC package assembly.
//!
//! Writes every part of the .pptx package into a deflate-compressed ZIP
//! archive, together with the `[Content_Types].xml` manifest and the
//! relationship parts that wire the package together.

use crate::deck::{DeckBuilder, SlideSpec};
use crate::error::{DeckError, Result};
use crate::pptx::{pres, slide, template};
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

// Relationship types.
const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_APP_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_PRES_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
const REL_VIEW_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
const REL_TABLE_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";

// Content types.
const CT_RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";
const CT_XML: &str = "application/xml";
const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_PRES_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
const CT_VIEW_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
const CT_TABLE_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
const CT_CORE_PROPS: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_APP_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// One entry in a `.rels` part.
struct Relationship<'a> {
    id: String,
    rel_type: &'a str,
    target: String,
}

impl<'a> Relationship<'a> {
    fn new(id: impl Into<String>, rel_type: &'a str, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rel_type,
            target: target.into(),
        }
    }
}

/// Serialize a relationship part.
fn rels_xml(rels: &[Relationship<'_>]) -> Result<String> {
    let mut xml = String::with_capacity(256 + rels.len() * 128);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for rel in rels {
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.id, rel.rel_type, rel.target
        )
        .map_err(|e| DeckError::Xml(e.to_string()))?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// The `[Content_Types].xml` manifest, built up as parts are added.
struct ContentTypes {
    defaults: Vec<(&'static str, &'static str)>,
    overrides: Vec<(String, &'static str)>,
}

impl ContentTypes {
    fn new() -> Self {
        Self {
            defaults: vec![("rels", CT_RELS), ("xml", CT_XML)],
            overrides: Vec::new(),
        }
    }

    fn add_override(&mut self, part_name: impl Into<String>, content_type: &'static str) {
        self.overrides.push((part_name.into(), content_type));
    }

    fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512 + self.overrides.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        for (ext, ct) in &self.defaults {
            write!(xml, r#"<Default Extension="{}" ContentType="{}"/>"#, ext, ct)
                .map_err(|e| DeckError::Xml(e.to_string()))?;
        }
        for (part, ct) in &self.overrides {
            write!(xml, r#"<Override PartName="{}" ContentType="{}"/>"#, part, ct)
                .map_err(|e| DeckError::Xml(e.to_string()))?;
        }
        xml.push_str("</Types>");
        Ok(xml)
    }
}

/// ZIP-backed package writer.
struct PkgWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl PkgWriter {
    fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn write(&mut self, name: &str, data: &[u8]) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip.start_file(name, options)?;
        self.zip.write_all(data)?;
        Ok(())
    }

    fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Assemble the complete .pptx package for the given slides.
pub(crate) fn package_bytes(builder: &DeckBuilder, slides: &[SlideSpec]) -> Result<Vec<u8>> {
    let layouts = template::slide_layouts();

    // Generate every slide part up front so a bad slide fails the build
    // before any bytes are committed.
    let mut slide_parts = Vec::with_capacity(slides.len());
    for (index, spec) in slides.iter().enumerate() {
        let xml = slide::slide_xml(spec).map_err(|e| e.for_slide(index + 1, spec.title))?;
        slide_parts.push(xml);
    }

    let mut content_types = ContentTypes::new();
    content_types.add_override("/ppt/presentation.xml", CT_PRESENTATION);
    content_types.add_override("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER);
    for n in 1..=layouts.len() {
        content_types.add_override(
            format!("/ppt/slideLayouts/slideLayout{}.xml", n),
            CT_SLIDE_LAYOUT,
        );
    }
    content_types.add_override("/ppt/theme/theme1.xml", CT_THEME);
    content_types.add_override("/ppt/presProps.xml", CT_PRES_PROPS);
    content_types.add_override("/ppt/viewProps.xml", CT_VIEW_PROPS);
    content_types.add_override("/ppt/tableStyles.xml", CT_TABLE_STYLES);
    for n in 1..=slides.len() {
        content_types.add_override(format!("/ppt/slides/slide{}.xml", n), CT_SLIDE);
    }
    content_types.add_override("/docProps/core.xml", CT_CORE_PROPS);
    content_types.add_override("/docProps/app.xml", CT_APP_PROPS);

    let mut pkg = PkgWriter::new();
    pkg.write("[Content_Types].xml", content_types.to_xml()?.as_bytes())?;

    // Package-level relationships.
    let package_rels = [
        Relationship::new("rId1", REL_OFFICE_DOCUMENT, "ppt/presentation.xml"),
        Relationship::new("rId2", REL_CORE_PROPS, "docProps/core.xml"),
        Relationship::new("rId3", REL_APP_PROPS, "docProps/app.xml"),
    ];
    pkg.write("_rels/.rels", rels_xml(&package_rels)?.as_bytes())?;

    // Presentation part and its relationships. rId1 is the master, slides
    // follow from rId2, and the property parts take the IDs after the slides.
    pkg.write(
        "ppt/presentation.xml",
        pres::presentation_xml(builder, slides.len())?.as_bytes(),
    )?;
    let mut pres_rels = Vec::with_capacity(slides.len() + 5);
    pres_rels.push(Relationship::new(
        "rId1",
        REL_SLIDE_MASTER,
        "slideMasters/slideMaster1.xml",
    ));
    for n in 1..=slides.len() {
        pres_rels.push(Relationship::new(
            format!("rId{}", n + 1),
            REL_SLIDE,
            format!("slides/slide{}.xml", n),
        ));
    }
    let tail = slides.len() + 2;
    pres_rels.push(Relationship::new(
        format!("rId{}", tail),
        REL_PRES_PROPS,
        "presProps.xml",
    ));
    pres_rels.push(Relationship::new(
        format!("rId{}", tail + 1),
        REL_VIEW_PROPS,
        "viewProps.xml",
    ));
    pres_rels.push(Relationship::new(
        format!("rId{}", tail + 2),
        REL_THEME,
        "theme/theme1.xml",
    ));
    pres_rels.push(Relationship::new(
        format!("rId{}", tail + 3),
        REL_TABLE_STYLES,
        "tableStyles.xml",
    ));
    pkg.write(
        "ppt/_rels/presentation.xml.rels",
        rels_xml(&pres_rels)?.as_bytes(),
    )?;

    // Slide master, layouts, theme and presentation-level property parts.
    pkg.write(
        "ppt/slideMasters/slideMaster1.xml",
        template::slide_master_xml().as_bytes(),
    )?;
    let mut master_rels = Vec::with_capacity(layouts.len() + 1);
    for n in 1..=layouts.len() {
        master_rels.push(Relationship::new(
            format!("rId{}", n),
            REL_SLIDE_LAYOUT,
            format!("../slideLayouts/slideLayout{}.xml", n),
        ));
    }
    master_rels.push(Relationship::new(
        format!("rId{}", layouts.len() + 1),
        REL_THEME,
        "../theme/theme1.xml",
    ));
    pkg.write(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        rels_xml(&master_rels)?.as_bytes(),
    )?;

    for (n, layout_xml) in layouts.iter().enumerate() {
        pkg.write(
            &format!("ppt/slideLayouts/slideLayout{}.xml", n + 1),
            layout_xml.as_bytes(),
        )?;
        let layout_rels = [Relationship::new(
            "rId1",
            REL_SLIDE_MASTER,
            "../slideMasters/slideMaster1.xml",
        )];
        pkg.write(
            &format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", n + 1),
            rels_xml(&layout_rels)?.as_bytes(),
        )?;
    }

    pkg.write("ppt/theme/theme1.xml", template::theme_xml().as_bytes())?;
    pkg.write("ppt/presProps.xml", template::pres_props_xml().as_bytes())?;
    pkg.write("ppt/viewProps.xml", template::view_props_xml().as_bytes())?;
    pkg.write(
        "ppt/tableStyles.xml",
        template::table_styles_xml().as_bytes(),
    )?;

    // Slides.
    for (index, (spec, xml)) in slides.iter().zip(&slide_parts).enumerate() {
        let n = index + 1;
        pkg.write(&format!("ppt/slides/slide{}.xml", n), xml.as_bytes())?;
        let slide_rels = [Relationship::new(
            "rId1",
            REL_SLIDE_LAYOUT,
            format!("../slideLayouts/slideLayout{}.xml", spec.layout.part_index()),
        )];
        pkg.write(
            &format!("ppt/slides/_rels/slide{}.xml.rels", n),
            rels_xml(&slide_rels)?.as_bytes(),
        )?;
    }

    // Document properties.
    pkg.write("docProps/core.xml", template::core_props_xml().as_bytes())?;
    pkg.write("docProps/app.xml", template::app_props_xml().as_bytes())?;

    pkg.finish_to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SlideLayout;

    #[test]
    fn test_rels_xml() {
        let rels = [Relationship::new("rId1", REL_SLIDE, "slides/slide1.xml")];
        let xml = rels_xml(&rels).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0""#));
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="slides/slide1.xml""#));
    }

    #[test]
    fn test_content_types_manifest() {
        let mut ct = ContentTypes::new();
        ct.add_override("/ppt/slides/slide1.xml", CT_SLIDE);
        let xml = ct.to_xml().unwrap();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Default Extension="xml""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
    }

    #[test]
    fn test_package_has_all_parts() {
        let builder = DeckBuilder::new();
        let slides = [SlideSpec {
            title: "T",
            body: "B",
            layout: SlideLayout::Title,
        }];
        let bytes = package_bytes(&builder, &slides).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/slideLayout2.xml",
            "ppt/slideLayouts/slideLayout3.xml",
            "ppt/theme/theme1.xml",
            "ppt/presProps.xml",
            "ppt/viewProps.xml",
            "ppt/tableStyles.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part: {name}");
        }
    }

    #[test]
    fn test_presentation_rels_cover_slides_and_props() {
        let builder = DeckBuilder::new();
        let slides = [
            SlideSpec {
                title: "A",
                body: "a",
                layout: SlideLayout::Title,
            },
            SlideSpec {
                title: "B",
                body: "b",
                layout: SlideLayout::TitleAndBody,
            },
        ];
        let bytes = package_bytes(&builder, &slides).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut rels = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name("ppt/_rels/presentation.xml.rels").unwrap(),
            &mut rels,
        )
        .unwrap();

        assert!(rels.contains(r#"Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster""#));
        assert!(rels.contains(r#"Target="slides/slide2.xml""#));
        // Property parts follow the slides: rId4..rId7.
        assert!(rels.contains(r#"Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps""#));
        assert!(rels.contains(r#"Id="rId6" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme""#));
    }
}
