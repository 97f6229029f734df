/// Slide XML generation.
use crate::deck::{SlideLayout, SlideSpec};
use crate::error::{DeckError, Result};
use crate::pptx::xml::escape_xml;
use crate::units::pt_to_emu;
use std::fmt::Write as FmtWrite;

// Text box geometry for TitleOnly slides, in points. These are the
// coordinates the original deck used for its screenshot-instructions box.
const TEXT_BOX_X_PT: f64 = 50.0;
const TEXT_BOX_Y_PT: f64 = 100.0;
const TEXT_BOX_W_PT: f64 = 800.0;
const TEXT_BOX_H_PT: f64 = 100.0;

/// Generate the `p:sld` XML for one slide.
pub(crate) fn slide_xml(spec: &SlideSpec) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

    xml.push_str(
        r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
    );
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");

    // Write group shape properties (required)
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    write_title_shape(&mut xml, spec)?;

    match spec.layout {
        SlideLayout::Title => {
            write_body_placeholder(
                &mut xml,
                spec.body,
                r#"<p:ph type="subTitle" idx="1"/>"#,
                "Subtitle 2",
            )?;
        },
        SlideLayout::TitleAndBody => {
            write_body_placeholder(
                &mut xml,
                spec.body,
                r#"<p:ph idx="1"/>"#,
                "Content Placeholder 2",
            )?;
        },
        SlideLayout::TitleOnly => {
            write_text_box(&mut xml, spec.body)?;
        },
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");

    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);

    xml.push_str("</p:sld>");

    Ok(xml)
}

/// Write the title placeholder shape.
fn write_title_shape(xml: &mut String, spec: &SlideSpec) -> Result<()> {
    let ph_type = match spec.layout {
        SlideLayout::Title => "ctrTitle",
        _ => "title",
    };

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    // Note: ID must be unique within slide. Group shape uses id=1, so title uses id=2.
    xml.push_str(r#"<p:cNvPr id="2" name="Title 1"/>"#);
    xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
    write!(xml, r#"<p:nvPr><p:ph type="{}"/></p:nvPr>"#, ph_type)
        .map_err(|e| DeckError::Xml(e.to_string()))?;
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr/>");

    xml.push_str("<p:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    xml.push_str("<a:p>");
    xml.push_str("<a:r>");
    xml.push_str("<a:rPr lang=\"pt-BR\" dirty=\"0\"/>");
    write!(xml, "<a:t>{}</a:t>", escape_xml(spec.title))
        .map_err(|e| DeckError::Xml(e.to_string()))?;
    xml.push_str("</a:r>");
    xml.push_str("</a:p>");
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");

    Ok(())
}

/// Write the body text into a layout placeholder (subtitle or content).
fn write_body_placeholder(xml: &mut String, body: &str, ph: &str, name: &str) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="3" name="{}"/>"#, escape_xml(name))
        .map_err(|e| DeckError::Xml(e.to_string()))?;
    xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
    write!(xml, "<p:nvPr>{}</p:nvPr>", ph).map_err(|e| DeckError::Xml(e.to_string()))?;
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr/>");

    xml.push_str("<p:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    write_paragraphs(xml, body)?;
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");

    Ok(())
}

/// Write the body text into a free-form text box at a fixed position.
fn write_text_box(xml: &mut String, body: &str) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="3" name="Text Box 3"/>"#);
    xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    write!(
        xml,
        r#"<a:off x="{}" y="{}"/>"#,
        pt_to_emu(TEXT_BOX_X_PT),
        pt_to_emu(TEXT_BOX_Y_PT)
    )
    .map_err(|e| DeckError::Xml(e.to_string()))?;
    write!(
        xml,
        r#"<a:ext cx="{}" cy="{}"/>"#,
        pt_to_emu(TEXT_BOX_W_PT),
        pt_to_emu(TEXT_BOX_H_PT)
    )
    .map_err(|e| DeckError::Xml(e.to_string()))?;
    xml.push_str("</a:xfrm>");
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
    xml.push_str("<a:lstStyle/>");
    write_paragraphs(xml, body)?;
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");

    Ok(())
}

/// Write one `a:p` per body line; an empty line becomes an empty paragraph.
fn write_paragraphs(xml: &mut String, text: &str) -> Result<()> {
    for line in text.split('\n') {
        if line.is_empty() {
            xml.push_str("<a:p/>");
            continue;
        }
        xml.push_str("<a:p>");
        xml.push_str("<a:r>");
        xml.push_str("<a:rPr lang=\"pt-BR\" dirty=\"0\"/>");
        write!(xml, "<a:t>{}</a:t>", escape_xml(line))
            .map_err(|e| DeckError::Xml(e.to_string()))?;
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");
    }
    Ok(())
}
